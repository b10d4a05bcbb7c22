use clap::Parser;
use std::path::PathBuf;

/// SVGからファビコン一式（PNG各サイズとICO）を生成するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 変換元のSVGファイルのパス
    #[arg(short, long, default_value = "public/favicon.svg")]
    pub source: PathBuf,

    /// PNG/ICOの出力先フォルダのパス (存在しない場合は作成する)
    #[arg(short, long, default_value = "public")]
    pub output_dir: PathBuf,
}
