use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 処理対象とするファイルの拡張子（大文字小文字は区別しない）。
const PNG_SUFFIX: &str = ".png";

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "フォルダ '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ直下の PNG ファイルをパス順に返す。
    ///
    /// サブディレクトリ（`output/` を含む）は再帰しない。PNG 以外のファイルは無視する。
    pub fn png_files(&self) -> Result<Vec<PathBuf>, PathError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            let entry = entry?;
            if entry.file_type().is_file() && is_png_file_name(entry.path()) {
                files.push(entry.into_path());
            }
        }
        // ファイル名の順序を安定させるため、パスをソートする。
        files.sort();
        Ok(files)
    }
}

/// ファイル名が `.png` で終わるか（大文字小文字を区別しない）。
pub fn is_png_file_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(PNG_SUFFIX))
        .unwrap_or(false)
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    // 外部クレートや親モジュールをuse
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// 正常なディレクトリパスでDirectoryPathが作成できるかテスト
    #[test]
    fn test_valid_directory_path() {
        // 一時的なディレクトリを作成
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        let result = DirectoryPath::new(path);

        // 結果がOKであることを確認
        assert!(result.is_ok());

        // 内部のパスが一致するか検証
        let dir_path_instance = result.unwrap();
        assert_eq!(dir_path_instance.as_path(), path);
        assert_eq!(dir_path_instance.to_string(), path.display().to_string());
    }

    /// 存在しないパスでエラーが返されるかテスト
    #[test]
    fn test_non_existent_path_returns_error() {
        let path = PathBuf::from("this_directory_should_not_exist");
        let result = DirectoryPath::new(&path);

        // エラーの種類がPathError::InvalidPathであることを検証
        let err = result.unwrap_err();
        if let PathError::InvalidPath(msg) = err {
            assert!(msg.contains("存在しません"));
        } else {
            panic!("予期せぬエラーが返されました: {:?}", err);
        }
    }

    /// ファイルパスでエラーが返されるかテスト
    #[test]
    fn test_file_path_returns_error() {
        let file_path = PathBuf::from("Cargo.toml"); // 常に存在するファイル
        let result = DirectoryPath::new(&file_path);

        let err = result.unwrap_err();
        if let PathError::InvalidPath(msg) = err {
            assert!(msg.contains("ディレクトリではありません"));
        } else {
            panic!("予期せぬエラーが返されました: {:?}", err);
        }
    }

    /// png_files()がPNGだけを大文字小文字を問わず拾うかテスト
    #[test]
    fn test_png_files_filters_and_sorts() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path();

        fs::write(path.join("b.png"), "x").expect("Failed to create b.png");
        fs::write(path.join("A.PNG"), "x").expect("Failed to create A.PNG");
        fs::write(path.join("c.Png"), "x").expect("Failed to create c.Png");
        fs::write(path.join("notes.txt"), "x").expect("Failed to create notes.txt");
        fs::write(path.join("photo.jpg"), "x").expect("Failed to create photo.jpg");
        // ディレクトリは名前が .png で終わっても対象外
        fs::create_dir(path.join("dir.png")).expect("Failed to create dir.png");
        fs::create_dir(path.join("output")).expect("Failed to create output");
        fs::write(path.join("output").join("nested.png"), "x").expect("Failed to create nested");

        let dir_path = DirectoryPath::new(path).unwrap();
        let names: Vec<String> = dir_path
            .png_files()
            .expect("png_files should not fail")
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["A.PNG", "b.png", "c.Png"]);
    }

    /// 空のディレクトリでは空のリストが返るかテスト
    #[test]
    fn test_png_files_empty_directory() {
        let dir = tempdir().expect("Failed to create empty directory");
        let dir_path = DirectoryPath::new(dir.path()).unwrap();
        assert!(dir_path.png_files().unwrap().is_empty());
    }

    /// png_files()がI/Oエラーを正しく返すかテスト
    #[test]
    fn test_png_files_returns_io_error() {
        // new()のバリデーションをスキップして、存在しないパスを持つインスタンスを強制的に作成
        let dir_path = DirectoryPath {
            path: PathBuf::from("this_path_definitely_does_not_exist"),
        };

        let err = dir_path.png_files().unwrap_err();
        assert!(matches!(err, PathError::IoError(_)));
    }

    #[test]
    fn test_is_png_file_name() {
        assert!(is_png_file_name(Path::new("x/a.png")));
        assert!(is_png_file_name(Path::new("B.PNG")));
        assert!(!is_png_file_name(Path::new("a.png.txt")));
        assert!(!is_png_file_name(Path::new("apng")));
    }
}
