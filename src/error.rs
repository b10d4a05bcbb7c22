use crate::domain::raster::rasterizer::RasterError;
use crate::domain::size_list::SizeListError;
use crate::domain::source::source_error::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("変換元SVGを読み込めませんでした")]
    Source(#[from] SourceError),

    #[error("ラスタライズエラー")]
    Raster(#[from] RasterError),

    #[error("サイズ設定エラー")]
    SizeList(#[from] SizeListError),
}
