use std::path::PathBuf;
use thiserror::Error;

// 変換元SVGの読み込み時のエラー型を定義
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("SVGファイルが見つかりません: {}", .0.display())]
    Missing(PathBuf),

    #[error("SVGファイルではありません: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("SVGファイルの読み込みに失敗しました: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
