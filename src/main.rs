use clap::Parser;
use favicon_generator::cli::Args;
use favicon_generator::workflow;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // RUST_LOG=debug などで診断ログを有効にできる
    env_logger::init();

    let args = Args::parse();

    match workflow::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            // 原因のチェーンをたどって表示する
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  原因: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
