use crate::domain::input_source::path_error::PathError;
use crate::domain::padder::PadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー: {0}")]
    Path(#[from] PathError),

    #[error("画像処理エラー: {0}")]
    Pad(#[from] PadError),

    #[error("単一ファイルを処理するにはピクセル数 (-p / --pixels) の指定が必要です。")]
    MissingPixels,
}
