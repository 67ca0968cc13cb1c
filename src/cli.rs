use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
PNG Background Increaser
------------------------
PNG画像の透明な背景領域を広げるコマンドラインツールです。
画像をまず正方形のキャンバスに中央配置し、その後指定したピクセル数だけ透明な余白を追加します。
元の画像は拡大縮小されません。

使用例:
  1. 単一のPNGファイルを処理する:
     png_background_increaser input.png -p 50

  2. フォルダ内のすべてのPNGファイルを処理する:
     png_background_increaser input_folder -f -p 50

備考:
  - 単一ファイルの結果は入力と同じフォルダに processed_<ファイル名> として保存されます。
  - フォルダモードの結果は入力フォルダ内の output フォルダに保存されます。
  - フォルダモードで -p を省略すると、画像ごとに縦横の差が増加量として使われます。";

/// PNG画像の透明な背景領域を広げるツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Args {
    /// PNGファイル、または (--folder 指定時) PNGファイルを含むフォルダのパス
    pub input: PathBuf,

    /// 入力をPNGファイルを含むフォルダとして扱う
    #[arg(short, long)]
    pub folder: bool,

    /// 背景領域に追加するピクセル数 (単一ファイルでは必須)
    #[arg(short, long)]
    pub pixels: Option<u32>,
}
