//! Error types for ACT file parsing and manipulation.
//!
//! This module provides a unified error handling system using [`ActError`]
//! for every operation in the crate.
//!
//! # Examples
//!
//! ```no_run
//! use act_types::file::{ActError, ActFile, ErrorKind};
//!
//! fn load(path: &str) -> Result<ActFile, ActError> {
//! 	ActFile::open(path)
//! }
//!
//! fn handle_error(err: ActError) {
//! 	match err.kind() {
//! 		ErrorKind::Validation => println!("malformed file: {}", err),
//! 		ErrorKind::Io => println!("file system problem: {}", err),
//! 		_ => println!("ACT error: {}", err),
//! 	}
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use super::act::PixelFormat;

/// Unified error type for all ACT file operations
#[derive(Debug, Error)]
pub enum ActError {
	/// Not enough data to parse
	#[error("ACT error: Insufficient data (expected {expected} bytes, got {actual} bytes)")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Frame-offset table jump differs from the canonical 0x34
	#[error("ACT error: Invalid frame table jump (expected 0x34, got {actual:#04X})")]
	InvalidFrameTableJump {
		/// Jump value found at file offset 0x10
		actual: u32,
	},

	/// Frame palette jump differs from the canonical 0x2C
	#[error("ACT error: Invalid palette jump (expected 0x2C, got {actual:#04X})")]
	InvalidPaletteJump {
		/// Jump value found at frame offset 0x04
		actual: u32,
	},

	/// Palette-present flag is neither 0x00 nor 0x18
	#[error("ACT error: Invalid palette flag {actual:#04X} (expected 0x00 or 0x18)")]
	InvalidColorFlag {
		/// Flag value found in the header
		actual: u32,
	},

	/// A row ended without its EndRow terminator
	#[error("ACT error: Row {row} is not closed by an EndRow opcode")]
	UnterminatedRow {
		/// Zero-based row index within the frame, in stream order
		row: usize,
	},

	/// A frame ended without its EndFrame terminator
	#[error("ACT error: Frame data is not closed by an EndFrame opcode")]
	UnterminatedFrame,

	/// An opcode would write past the end of the current row
	#[error("ACT error: Opcode overruns row {row} ({width} pixels wide)")]
	RowOverrun {
		/// Zero-based row index within the frame, in stream order
		row: usize,
		/// Row width in pixels
		width: usize,
	},

	/// Neither the frame nor the parent image provides a palette
	#[error("ACT error: Frame has no palette and the image carries no global palette")]
	NoColorSource,

	/// A pixel references a palette slot that does not exist
	#[error("ACT error: Palette index {index} out of range (palette has {palette_len} colors)")]
	IndexOutOfRange {
		/// Offending palette index
		index: usize,
		/// Number of colors available
		palette_len: usize,
	},

	/// The reserved second operand of a Shift opcode is non-zero
	#[error("ACT error: Reserved Shift operand is {value:#04X} (must be zero)")]
	ReservedShiftByte {
		/// Value of the reserved operand
		value: u8,
	},

	/// Frame dimensions exceed the 256-pixel limit (or are zero)
	#[error("ACT error: Frame dimensions {width}x{height} outside 1..=256")]
	FrameTooLarge {
		/// Frame width in pixels
		width: u32,
		/// Frame height in pixels
		height: u32,
	},

	/// Image dimensions fall outside 1..=65536
	#[error("ACT error: Image dimensions {width}x{height} outside 1..=65536")]
	ImageSizeOutOfRange {
		/// Image width in pixels
		width: u64,
		/// Image height in pixels
		height: u64,
	},

	/// A raster is larger than the image it is assigned into
	#[error(
		"ACT error: Raster {raster_width}x{raster_height} larger than image {width}x{height}"
	)]
	RasterTooLarge {
		/// Raster width in pixels
		raster_width: u32,
		/// Raster height in pixels
		raster_height: u32,
		/// Image width in pixels
		width: u32,
		/// Image height in pixels
		height: u32,
	},

	/// A frame offset would place the frame outside the legal window
	#[error("ACT error: Frame position ({x}, {y}) out of range")]
	PositionOutOfRange {
		/// Requested X offset relative to the image center
		x: i32,
		/// Requested Y offset relative to the image center
		y: i32,
	},

	/// Center point outside the image bounds
	#[error("ACT error: Center ({x}, {y}) outside image {width}x{height}")]
	CenterOutOfRange {
		/// Requested center X
		x: u32,
		/// Requested center Y
		y: u32,
		/// Image width in pixels
		width: u32,
		/// Image height in pixels
		height: u32,
	},

	/// Adding a frame would exceed the frame limit
	#[error("ACT error: Too many frames (maximum {max})")]
	TooManyFrames {
		/// Maximum number of frames per image
		max: usize,
	},

	/// Frame index outside the collection
	#[error("ACT error: Frame index {index} out of range ({len} frames)")]
	FrameIndexOutOfRange {
		/// Requested frame index
		index: usize,
		/// Number of frames in the collection
		len: usize,
	},

	/// Frame count outside 1..=20
	#[error("ACT error: Frame count {count} outside 1..=20")]
	FrameCountOutOfRange {
		/// Offending frame count
		count: usize,
	},

	/// Palette length outside 1..=256
	#[error("ACT error: Palette size {len} outside 1..=256")]
	PaletteSizeOutOfRange {
		/// Offending palette length
		len: usize,
	},

	/// A raster format other than 8-bit indexed where indexed is required
	#[error("ACT error: Raster format {format} where 8-bit indexed is required")]
	UnsupportedRasterFormat {
		/// Format of the rejected raster
		format: PixelFormat,
	},

	/// `length_bit_count` outside 3..=5
	#[error("ACT error: Length bit count {value} outside 3..=5")]
	InvalidLengthBitCount {
		/// Offending value
		value: u32,
	},

	/// Raster buffer length does not match its declared geometry
	#[error("ACT error: Raster data length mismatch (expected {expected} bytes, got {actual})")]
	RasterSizeMismatch {
		/// Expected buffer length for the declared format and dimensions
		expected: usize,
		/// Actual buffer length
		actual: usize,
	},

	/// Saving an image that was loaded from a bare payload and never given a path
	#[error("ACT error: No file path set; use save_to with an explicit path")]
	MissingFilePath,

	/// Path does not carry the required `.ACT` extension
	#[error("ACT error: {path:?} does not have an .ACT extension")]
	MissingActExtension {
		/// Offending path
		path: PathBuf,
	},

	/// Attempting to remove the only remaining frame
	#[error("ACT error: Cannot remove the last remaining frame")]
	LastFrame,

	/// `set_frame_count` would drop frames without permission
	#[error("ACT error: Reducing frame count from {have} to {want} requires allow_truncate")]
	TruncationNotAllowed {
		/// Current frame count
		have: usize,
		/// Requested frame count
		want: usize,
	},

	/// Setting a palette color on a frame that relies on the global palette
	#[error("ACT error: Frame has no palette of its own")]
	NoFramePalette,

	/// IO error while reading a file
	#[error("ACT error: Load failed: {0}")]
	Load(#[source] std::io::Error),

	/// IO error while writing a file
	#[error("ACT error: Save failed: {0}")]
	Save(#[source] std::io::Error),
}

impl ActError {
	/// Returns the failure category of this error
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::InsufficientData { .. }
			| Self::InvalidFrameTableJump { .. }
			| Self::InvalidPaletteJump { .. }
			| Self::InvalidColorFlag { .. }
			| Self::UnterminatedRow { .. }
			| Self::UnterminatedFrame
			| Self::RowOverrun { .. }
			| Self::NoColorSource
			| Self::IndexOutOfRange { .. }
			| Self::ReservedShiftByte { .. } => ErrorKind::Validation,
			Self::FrameTooLarge { .. }
			| Self::ImageSizeOutOfRange { .. }
			| Self::RasterTooLarge { .. }
			| Self::PositionOutOfRange { .. }
			| Self::CenterOutOfRange { .. }
			| Self::TooManyFrames { .. }
			| Self::FrameIndexOutOfRange { .. }
			| Self::FrameCountOutOfRange { .. }
			| Self::PaletteSizeOutOfRange { .. } => ErrorKind::Boundary,
			Self::UnsupportedRasterFormat { .. }
			| Self::InvalidLengthBitCount { .. }
			| Self::RasterSizeMismatch { .. } => ErrorKind::Format,
			Self::MissingFilePath
			| Self::MissingActExtension { .. }
			| Self::LastFrame
			| Self::TruncationNotAllowed { .. }
			| Self::NoFramePalette => ErrorKind::State,
			Self::Load(_) | Self::Save(_) => ErrorKind::Io,
		}
	}

	/// Returns true if this is an I/O error
	pub fn is_io_error(&self) -> bool {
		matches!(self, Self::Load(_) | Self::Save(_))
	}

	/// Returns true if this is an insufficient data error
	pub fn is_insufficient_data(&self) -> bool {
		matches!(self, Self::InsufficientData { .. })
	}

	/// Returns true if this error marks malformed input bytes
	pub fn is_validation(&self) -> bool {
		self.kind() == ErrorKind::Validation
	}

	/// Create an insufficient data error
	pub fn insufficient_data(expected: usize, actual: usize) -> Self {
		Self::InsufficientData {
			expected,
			actual,
		}
	}

	/// Create a palette index error
	pub fn index_out_of_range(index: usize, palette_len: usize) -> Self {
		Self::IndexOutOfRange {
			index,
			palette_len,
		}
	}
}

/// Failure category of an [`ActError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Malformed bytes: non-canonical jumps, missing terminators, bad indices
	Validation,
	/// Geometry outside the model's limits
	Boundary,
	/// Wrong raster format or codec parameter at an API boundary
	Format,
	/// Operation not legal in the current model state
	State,
	/// File system failure during load or save
	Io,
}

impl std::fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorKind::Validation => write!(f, "validation"),
			ErrorKind::Boundary => write!(f, "boundary"),
			ErrorKind::Format => write!(f, "format"),
			ErrorKind::State => write!(f, "state"),
			ErrorKind::Io => write!(f, "io"),
		}
	}
}
