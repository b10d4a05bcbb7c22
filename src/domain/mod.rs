pub mod icon_file;
pub mod raster;
pub mod size_list;
pub mod source;

// --- public re-exports ---
pub use icon_file::IconFile;
pub use raster::raster_image::RasterImage;
pub use raster::rasterizer::{Rasterize, SvgRasterizer};
pub use size_list::SizeList;
pub use source::source_svg::SourceSvg;
