use super::input_source::path_error::PathError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// フォルダモードで結果を書き出すサブディレクトリ名。
pub const OUTPUT_DIR_NAME: &str = "output";

/// 出力ファイル名の接頭辞。
pub const OUTPUT_PREFIX: &str = "processed_";

/// `processed_<元のファイル名>` を返します。
///
/// UTF-8 でないファイル名もバイト列のまま引き継ぎます。
pub fn processed_file_name(input: &Path) -> Result<OsString, PathError> {
    let name = input.file_name().ok_or_else(|| {
        PathError::InvalidPath(format!(
            "パス '{}' にはファイル名がありません。",
            input.display()
        ))
    })?;
    let mut processed = OsString::from(OUTPUT_PREFIX);
    processed.push(name);
    Ok(processed)
}

/// 単一ファイルモードの出力先（入力ファイルと同じディレクトリ）。
pub fn single_file_output(input: &Path) -> Result<PathBuf, PathError> {
    let name = processed_file_name(input)?;
    Ok(match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    })
}

/// フォルダモードの出力ディレクトリ (`<input>/output`)。
pub fn folder_output_dir(input_dir: &Path) -> PathBuf {
    input_dir.join(OUTPUT_DIR_NAME)
}

/// フォルダモードで1ファイル分の出力先を返します。
pub fn folder_file_output(output_dir: &Path, input: &Path) -> Result<PathBuf, PathError> {
    Ok(output_dir.join(processed_file_name(input)?))
}
