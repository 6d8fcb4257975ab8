//! Prelude module for `act_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use act_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let image = ActFile::open("STARS.ACT")?;
//! println!("{} frames", image.frame_count());
//! # Ok::<(), ActError>(())
//! ```

#[doc(inline)]
pub use crate::file::{
	// Error types
	ActError,
	// ACT types
	ActFile,
	Color,
	ErrorKind,
	Frame,
	FrameRowIterator,
	FrameSet,
	Palette,
	PixelFormat,
	Raster,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
