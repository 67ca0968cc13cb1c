use super::directory_path::DirectoryPath;
use super::path_error::PathError;
use std::path::{Path, PathBuf};

/// 入力ソースを表現する列挙型。
/// `--folder` 指定時は検証済みのディレクトリ、それ以外は単一の画像ファイルパスを保持する。
#[derive(Debug)]
pub enum InputSource {
    Directory(DirectoryPath),
    File(PathBuf),
}

impl InputSource {
    /// 入力パスとフォルダフラグから入力ソースを決定する。
    ///
    /// フォルダモードではディレクトリの存在を検証する。単一ファイルの読み込み失敗は
    /// 後段のデコードエラーとしてファイル単位で報告されるため、ここでは検証しない。
    pub fn new<P: AsRef<Path>>(path: P, is_folder: bool) -> Result<Self, PathError> {
        let path = path.as_ref();
        if is_folder {
            Ok(InputSource::Directory(DirectoryPath::new(path)?))
        } else {
            Ok(InputSource::File(path.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn folder_flag_validates_directory() {
        let dir = tempdir().expect("Failed to create temp directory");
        let source = InputSource::new(dir.path(), true).unwrap();
        assert!(matches!(source, InputSource::Directory(_)));

        let missing = dir.path().join("missing");
        assert!(matches!(
            InputSource::new(&missing, true),
            Err(PathError::InvalidPath(_))
        ));
    }

    #[test]
    fn file_mode_keeps_path_as_is() {
        let source = InputSource::new("not/checked.png", false).unwrap();
        match source {
            InputSource::File(p) => assert_eq!(p, PathBuf::from("not/checked.png")),
            other => panic!("予期せぬ入力ソースです: {:?}", other),
        }
    }
}
