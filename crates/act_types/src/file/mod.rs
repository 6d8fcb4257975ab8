//! File type support for the `act-rs` project.

mod error;

pub mod act;

// Re-export error types
pub use error::{ActError, ErrorKind};

// Re-export main file types
pub use act::{
	Color, File as ActFile, Frame, FrameRowIterator, FrameSet, Palette, PixelFormat, Raster,
};
