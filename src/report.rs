//! コンソールへの状態表示。
//!
//! 各行は `[SUCCESS]` / `[ERROR]` / `[INFO]` / `[WARNING]` のタグで始まり、タグだけが色付けされる。

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// 表示用の1行を組み立てる。
pub fn format_line(level: Level, message: &str) -> String {
    let tag = match level {
        Level::Success => "[SUCCESS]".green(),
        Level::Info => "[INFO]".green(),
        Level::Warning => "[INFO]".yellow(),
        Level::Error => "[ERROR]".red(),
    };
    format!("{} {}", tag, message)
}

pub fn print(level: Level, message: &str) {
    match level {
        Level::Error => eprintln!("{}", format_line(level, message)),
        _ => println!("{}", format_line(level, message)),
    }
}

pub fn success(message: &str) {
    print(Level::Success, message);
}

pub fn info(message: &str) {
    print(Level::Info, message);
}

pub fn warning(message: &str) {
    print(Level::Warning, message);
}

pub fn error(message: &str) {
    print(Level::Error, message);
}
