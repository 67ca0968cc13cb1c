// 画像ファイルの読み込みと書き出しを担当するモジュール。
// image クレートのエラーを PadError に変換し、どのファイルで失敗したかを保持する。

use super::padder::PadError;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// 画像ファイルを読み込んでデコードします。
///
/// ファイルが存在しない・読めない・画像として解釈できない場合は `PadError::Decode` を返します。
/// デコード後のファイルハンドルはこの関数内で閉じられます。
pub fn load_image(path: &Path) -> Result<DynamicImage, PadError> {
    image::open(path).map_err(|source| PadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// RGBA 画像を保存します。フォーマットは拡張子から判定されます。
///
/// 書き込みに失敗した場合（権限不足、存在しないディレクトリ、未対応の拡張子など）は
/// `PadError::Encode` を返します。
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<(), PadError> {
    image.save(path).map_err(|source| PadError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
