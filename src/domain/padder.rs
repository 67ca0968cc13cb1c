//! 画像を正方形のキャンバスに中央配置し、透明な余白を追加するモジュール。
//!
//! 変換は 2 段階で行います。
//! 1. 縦横の長い方に合わせた正方形キャンバスへ中央配置する（正方形化）。
//! 2. 正方形化した画像を `一辺 + increase` の大きなキャンバスへ再び中央配置する。
//!
//! 元のピクセルは拡大縮小せずにそのままコピーされ、追加された領域はすべて完全透明になります。

use image::{imageops, DynamicImage, Rgba, RgbaImage};
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

/// キャンバスの初期色（完全透明）。
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// 画像1枚の処理中に発生するエラー。
///
/// いずれもファイル単位で報告され、フォルダ処理全体は中断しません。
#[derive(Debug, Error)]
pub enum PadError {
    /// 入力ファイルを画像として読み込めなかった場合。
    #[error("画像 '{}' を読み込めませんでした: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 出力先に画像を書き込めなかった場合（権限、無効なパス、未対応の拡張子など）。
    #[error("画像 '{}' を保存できませんでした: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 出力キャンバスの一辺が u32 を超える、またはピクセルバッファが確保できない大きさの場合。
    #[error("出力サイズが大きすぎます: {side} + {increase} ピクセル")]
    CanvasTooLarge { side: u32, increase: u32 },
}

/// 1枚の画像に対する余白追加リクエスト。
#[derive(Debug, Clone)]
pub struct PadRequest {
    source: RgbaImage,
    increase: Option<u32>,
}

impl PadRequest {
    /// デコード済みの画像からリクエストを作成します。
    ///
    /// アルファチャンネルを持たない画像は、完全不透明のアルファを補って RGBA に変換されます。
    pub fn new(source: DynamicImage, increase: Option<u32>) -> Self {
        Self {
            source: source.to_rgba8(),
            increase,
        }
    }

    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    /// 実際に適用される増加量。未指定の場合は縦横差がデフォルトになります。
    pub fn increase(&self) -> u32 {
        let (width, height) = self.source.dimensions();
        self.increase
            .unwrap_or_else(|| default_increase(width, height))
    }

    /// 出力画像の一辺。キャンバスを確保できない大きさの場合は `None`。
    pub fn output_side(&self) -> Option<u32> {
        let (width, height) = self.source.dimensions();
        canvas_side(square_side(width, height), self.increase())
    }

    /// リクエストを実行し、余白を追加した正方形画像を返します。
    pub fn execute(self) -> Result<RgbaImage, PadError> {
        pad(self.source, self.increase)
    }
}

/// 縦横の長い方の辺を返します。
pub fn square_side(width: u32, height: u32) -> u32 {
    width.max(height)
}

/// `--pixels` 未指定時の増加量（縦横の差）。
pub fn default_increase(width: u32, height: u32) -> u32 {
    width.max(height) - width.min(height)
}

/// `side + increase` を一辺とするキャンバスが確保可能ならその一辺を返します。
///
/// 一辺が u32 に収まり、かつ RGBA バッファ長 (`一辺 * 一辺 * 4`) が usize に収まる必要があります。
pub fn canvas_side(side: u32, increase: u32) -> Option<u32> {
    let new_size = side.checked_add(increase)?;
    let len = u64::from(new_size)
        .checked_mul(u64::from(new_size))?
        .checked_mul(4)?;
    usize::try_from(len).ok().map(|_| new_size)
}

/// `canvas_side` の正方形に `width` x `height` を中央配置するときの左上オフセット。
///
/// 端数は切り捨てるため、奇数の余りは右・下側に 1 ピクセル多く付きます。
pub fn centered_offset(canvas_side: u32, width: u32, height: u32) -> (u32, u32) {
    (
        canvas_side.saturating_sub(width) / 2,
        canvas_side.saturating_sub(height) / 2,
    )
}

/// 画像を正方形化し、さらに `increase` ピクセル分の透明な余白を追加します。
///
/// # 引数
/// * `source`: 元画像（RGBA）。
/// * `increase`: 正方形化後の一辺に加えるピクセル数。`None` の場合は縦横差。
///
/// # 戻り値
/// * `Ok(RgbaImage)`: 一辺が `max(width, height) + increase` の正方形画像。
/// * `Err(PadError::CanvasTooLarge)`: 出力キャンバスを確保できない大きさの場合。
pub fn pad(source: RgbaImage, increase: Option<u32>) -> Result<RgbaImage, PadError> {
    let (width, height) = source.dimensions();
    let side = square_side(width, height);
    let increase = increase.unwrap_or_else(|| default_increase(width, height));
    // 正方形化キャンバスは出力より小さいため、出力側だけ検査すれば足りる
    let new_size =
        canvas_side(side, increase).ok_or(PadError::CanvasTooLarge { side, increase })?;

    // 既に正方形なら 1 段階目はスキップ
    let squared = if width != height {
        center_on_canvas(&source, side)
    } else {
        source
    };

    debug!(
        "{}x{} -> 正方形 {}x{} -> 出力 {}x{} (increase = {})",
        width, height, side, side, new_size, new_size, increase
    );

    Ok(center_on_canvas(&squared, new_size))
}

/// 透明な正方形キャンバスを確保し、画像を中央に貼り付けます。
///
/// アルファ合成ではなく置き換えでコピーするため、元のピクセル値はそのまま残ります。
fn center_on_canvas(image: &RgbaImage, side: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(side, side, TRANSPARENT);
    let (x, y) = centered_offset(side, image.width(), image.height());
    imageops::replace(&mut canvas, image, i64::from(x), i64::from(y));
    canvas
}
