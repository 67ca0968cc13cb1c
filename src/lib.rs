//! PNG画像を正方形のキャンバスに中央配置し、透明な余白を追加するライブラリ。

pub mod domain;
pub mod error;
