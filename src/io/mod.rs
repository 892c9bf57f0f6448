//! I/O layer: loading the source logo and writing derived assets.
//! Provides the `source` loader and `writers` for PNG and ICO outputs.
pub mod source;
pub use source::load_source_logo;

pub mod writers;
pub use writers::{write_asset, write_ico, write_png};
