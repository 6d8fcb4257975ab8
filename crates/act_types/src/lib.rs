//! This crate provides core data types and file format support for the `act-rs` project.
//!
//! # File Formats
//!
//! - **ACT**: multi-frame paletted raster images used as backdrop and explosion
//!   artwork, each frame carrying its own palette and its own offset relative to
//!   a shared anchor point
//! - **XACT**: the same byte layout embedded as a payload inside an LFD resource
//!   archive; [`ActFile::from_bytes`] accepts such a payload directly
//!
//! # Examples
//!
//! ```no_run
//! use act_types::file::ActFile;
//!
//! # fn main() -> Result<(), act_types::file::ActError> {
//! // Load a file shipped with the game and nudge its first frame
//! let mut backdrop = ActFile::open("PLANET2.ACT")?;
//! backdrop.move_frame(0, -20, -8)?;
//! backdrop.save()?;
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use act_types::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export commonly used file types at crate root for convenience
pub use file::{ActError, ActFile, Color, ErrorKind, Frame, FrameSet, Palette, PixelFormat, Raster};
