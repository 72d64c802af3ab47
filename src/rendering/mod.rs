pub mod raster;
pub mod svg;

pub use raster::SvgRasterizer;
pub use svg::render_chart;
