mod cli;
mod report;
mod workflow;

use clap::Parser;
use cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    // RUST_LOG 未指定時は警告以上のみ出力する
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // コマンドライン引数を解析します
    let args = Args::parse();

    match workflow::run(args) {
        Ok(summary) => {
            log::debug!("実行結果: {:?}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
