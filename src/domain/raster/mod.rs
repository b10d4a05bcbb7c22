pub mod raster_image;
pub mod rasterizer;
