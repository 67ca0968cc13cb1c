//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 単一ファイルモードとフォルダモードの処理フローを実装します。

use crate::cli::Args;
use crate::report;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use png_background_increaser::domain::image_file::{load_image, save_image};
use png_background_increaser::domain::input_source::directory_path::DirectoryPath;
use png_background_increaser::domain::input_source::input_source::InputSource;
use png_background_increaser::domain::output_path;
use png_background_increaser::domain::PadRequest;
use png_background_increaser::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

const PROGRESS_TEMPLATE: &str = "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})";

/// 1回の実行で処理したファイル数の集計。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 戻り値
/// * `Ok(RunSummary)`: 処理が最後まで進んだ場合。個々のファイルの失敗はここに数えられます。
/// * `Err(AppError)`: 単一ファイルモードで `--pixels` が無い場合や、出力フォルダを作れない場合。
pub fn run(args: Args) -> Result<RunSummary, AppError> {
    // 単一ファイルモードでは増加量の指定が必須
    if !args.folder && args.pixels.is_none() {
        return Err(AppError::MissingPixels);
    }

    let source = match InputSource::new(&args.input, args.folder) {
        Ok(source) => source,
        Err(e) => {
            // フォルダが無い場合はメッセージを出して正常終了する
            report::error(&e.to_string());
            return Ok(RunSummary::default());
        }
    };

    match source {
        InputSource::Directory(dir) => process_folder(&dir, args.pixels),
        InputSource::File(path) => Ok(process_single_file(&path, args.pixels)),
    }
}

// --- private なヘルパー関数 ---

fn process_single_file(input: &Path, increase: Option<u32>) -> RunSummary {
    let result = output_path::single_file_output(input)
        .map_err(AppError::from)
        .and_then(|output| pad_file(input, &output, increase));

    match result {
        Ok(output) => {
            report::success(&format!(
                "処理した画像を {} に保存しました。",
                output.display()
            ));
            RunSummary {
                processed: 1,
                failed: 0,
            }
        }
        Err(e) => {
            report::error(&format!("{} の処理に失敗しました: {}", input.display(), e));
            RunSummary {
                processed: 0,
                failed: 1,
            }
        }
    }
}

/// フォルダ直下のPNGファイルをすべて処理し、`output/` に保存します。
///
/// 1つのファイルの失敗では止めず、エラーを表示して次のファイルへ進みます。
fn process_folder(dir: &DirectoryPath, increase: Option<u32>) -> Result<RunSummary, AppError> {
    let png_files = dir.png_files()?;
    if png_files.is_empty() {
        report::warning(&format!("{} にPNGファイルが見つかりませんでした。", dir));
        return Ok(RunSummary::default());
    }

    let output_dir = output_path::folder_output_dir(dir.as_path());
    fs::create_dir_all(&output_dir)?;
    debug!("出力フォルダ: {}", output_dir.display());

    report::info("画像処理を開始します...");

    let progress = ProgressBar::new(png_files.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        progress.set_style(style.progress_chars("#>-"));
    }
    progress.set_message("画像を処理中");

    let mut summary = RunSummary::default();
    for input in &png_files {
        let result = output_path::folder_file_output(&output_dir, input)
            .map_err(AppError::from)
            .and_then(|output| pad_file(input, &output, increase));

        // 状態表示はプログレスバーを一時的に退避して出力する
        match result {
            Ok(output) => {
                summary.processed += 1;
                progress.suspend(|| {
                    report::success(&format!(
                        "処理した画像を {} に保存しました。",
                        output.display()
                    ))
                });
            }
            Err(e) => {
                summary.failed += 1;
                progress.suspend(|| {
                    report::error(&format!("{} の処理に失敗しました: {}", input.display(), e))
                });
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(
        "{} 件成功、{} 件失敗 ({})",
        summary.processed, summary.failed, dir
    );
    report::success(&format!(
        "画像処理が完了しました。(成功: {} 件, 失敗: {} 件)",
        summary.processed, summary.failed
    ));
    Ok(summary)
}

/// 1ファイル分の読み込み・変換・保存を行い、出力先のパスを返します。
fn pad_file(input: &Path, output: &Path, increase: Option<u32>) -> Result<PathBuf, AppError> {
    let request = PadRequest::new(load_image(input)?, increase);
    debug!(
        "{}: {}x{}, increase = {}, 出力の一辺 = {:?}",
        input.display(),
        request.source().width(),
        request.source().height(),
        request.increase(),
        request.output_side()
    );
    let padded = request.execute()?;
    save_image(&padded, output)?;
    Ok(output.to_path_buf())
}
