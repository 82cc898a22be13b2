//! Exporters that turn a finished [`Grid`](crate::maze::Grid) into text or images.

pub mod ascii;
pub mod png;
pub mod svg;

pub use ascii::{print_styled, to_ascii};
pub use png::{PngStyle, to_image, to_png};
pub use svg::{SvgStyle, to_svg};
