pub mod source_error;
pub mod source_svg;
