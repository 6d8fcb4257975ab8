//! ACT file decoding.
//!
//! Decoding walks the fixed 0x34-byte file header, the frame-offset jump
//! table, and each length-prefixed frame body; frame bodies end in the
//! row-opcode stream described in the module docs. Validation is strict:
//! any malformed structure fails the whole decode and no partial image is
//! ever produced.

use log::{debug, trace};

use crate::file::ActError;

use super::constants;
use super::frame::Frame;
use super::opcodes;
use super::palette::{Color, Palette};

/// Decoded top-level fields, handed to `File` for assembly.
pub(crate) struct FileParts {
	pub width: u32,
	pub height: u32,
	pub center: (u32, u32),
	pub global_palette: Option<Palette>,
	pub frames: Vec<Frame>,
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, ActError> {
	let bytes = data
		.get(offset..offset + 4)
		.ok_or_else(|| ActError::insufficient_data(offset + 4, data.len()))?;
	Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_i32(data: &[u8], offset: usize) -> Result<i32, ActError> {
	Ok(read_u32(data, offset)? as i32)
}

/// Reads `count` palette entries of 4 bytes (`R, G, B, reserved`) each.
fn read_palette(data: &[u8], offset: usize, count: usize) -> Result<Palette, ActError> {
	if count == 0 || count > Palette::MAX_COLORS {
		return Err(ActError::PaletteSizeOutOfRange {
			len: count,
		});
	}
	let end = offset + count * constants::PALETTE_ENTRY_SIZE;
	let bytes = data
		.get(offset..end)
		.ok_or_else(|| ActError::insufficient_data(end, data.len()))?;

	let colors = bytes
		.chunks_exact(constants::PALETTE_ENTRY_SIZE)
		.map(|entry| Color::new(entry[0], entry[1], entry[2]))
		.collect();
	Palette::from_colors(colors)
}

/// Decodes a complete ACT byte buffer (or a bare XACT payload, which uses
/// the identical layout).
pub(crate) fn file(data: &[u8]) -> Result<FileParts, ActError> {
	if data.len() < constants::FILE_HEADER_SIZE {
		return Err(ActError::insufficient_data(constants::FILE_HEADER_SIZE, data.len()));
	}

	let frame_table_jump = read_u32(data, 0x10)?;
	if frame_table_jump as usize != constants::FILE_HEADER_SIZE {
		return Err(ActError::InvalidFrameTableJump {
			actual: frame_table_jump,
		});
	}

	let frame_count = read_u32(data, 0x18)? as usize;
	if frame_count == 0 || frame_count > constants::MAX_FRAMES {
		return Err(ActError::FrameCountOutOfRange {
			count: frame_count,
		});
	}

	// Size is stored one-less per axis
	let width = u64::from(read_u32(data, 0x1C)?) + 1;
	let height = u64::from(read_u32(data, 0x20)?) + 1;
	if width > u64::from(constants::MAX_IMAGE_DIMENSION)
		|| height > u64::from(constants::MAX_IMAGE_DIMENSION)
	{
		return Err(ActError::ImageSizeOutOfRange {
			width,
			height,
		});
	}
	let (width, height) = (width as u32, height as u32);

	let center_x = read_u32(data, 0x24)?;
	let center_y = read_u32(data, 0x28)?;
	if center_x >= width || center_y >= height {
		return Err(ActError::CenterOutOfRange {
			x: center_x,
			y: center_y,
			width,
			height,
		});
	}

	let global_flag = read_u32(data, 0x2C)?;
	let global_palette = match global_flag {
		0 => None,
		constants::COLORS_PRESENT => {
			let count = read_u32(data, 0x30)? as usize;
			let jump = read_u32(data, 0x0C)? as usize;
			Some(read_palette(data, jump, count)?)
		},
		other => {
			return Err(ActError::InvalidColorFlag {
				actual: other,
			});
		},
	};

	let mut frames = Vec::with_capacity(frame_count);
	for i in 0..frame_count {
		let offset = read_u32(data, constants::FILE_HEADER_SIZE + i * 4)? as usize;
		let length = read_u32(data, offset)? as usize;
		let body = data
			.get(offset..offset + length)
			.ok_or_else(|| ActError::insufficient_data(offset + length, data.len()))?;
		trace!("frame {}: offset {:#X}, {} bytes", i, offset, length);
		frames.push(frame(body, global_palette.as_ref())?);
	}

	debug!(
		"decoded ACT image: {}x{}, center ({}, {}), {} frames",
		width,
		height,
		center_x,
		center_y,
		frames.len()
	);

	Ok(FileParts {
		width,
		height,
		center: (center_x, center_y),
		global_palette,
		frames,
	})
}

/// Decodes one length-bounded frame body.
pub(crate) fn frame(body: &[u8], global: Option<&Palette>) -> Result<Frame, ActError> {
	if body.len() < constants::FRAME_HEADER_SIZE {
		return Err(ActError::insufficient_data(constants::FRAME_HEADER_SIZE, body.len()));
	}

	let palette_jump = read_u32(body, 0x04)?;
	if palette_jump as usize != constants::FRAME_HEADER_SIZE {
		return Err(ActError::InvalidPaletteJump {
			actual: palette_jump,
		});
	}
	let data_jump = read_u32(body, 0x08)? as usize;

	let width = read_u32(body, 0x10)?;
	let height = read_u32(body, 0x14)?;
	if width == 0
		|| height == 0
		|| width > constants::MAX_FRAME_DIMENSION
		|| height > constants::MAX_FRAME_DIMENSION
	{
		return Err(ActError::FrameTooLarge {
			width,
			height,
		});
	}

	let length_bit_count = read_u32(body, 0x20)?;
	if !(3..=5).contains(&length_bit_count) {
		return Err(ActError::InvalidLengthBitCount {
			value: length_bit_count,
		});
	}

	let color_flag = read_u32(body, 0x24)?;
	let palette = match color_flag {
		0 => None,
		constants::COLORS_PRESENT => {
			let count = read_u32(body, 0x28)? as usize;
			Some(read_palette(body, palette_jump as usize, count)?)
		},
		other => {
			return Err(ActError::InvalidColorFlag {
				actual: other,
			});
		},
	};

	// Every frame needs a palette source: its own or the image's
	let color_count = match (&palette, global) {
		(Some(own), _) => own.len(),
		(None, Some(shared)) => shared.len(),
		(None, None) => return Err(ActError::NoColorSource),
	};

	// Frame extents precede the row stream: left, top, right, top again.
	// Only left/top carry information; they are the frame's offset.
	let left = read_i32(body, data_jump)?;
	let top = read_i32(body, data_jump + 4)?;
	let stream_start = data_jump + constants::FRAME_EXTENTS_SIZE;
	let stream = body
		.get(stream_start..)
		.ok_or_else(|| ActError::insufficient_data(stream_start, body.len()))?;

	let pixels = rows(stream, width, height, length_bit_count as u8, color_count)?;

	Ok(Frame::from_parts(
		width,
		height,
		Some((left, top)),
		palette,
		length_bit_count as u8,
		pixels,
	))
}

/// Decodes a row-opcode stream into display-order pixels.
///
/// The stream stores pixels right-to-left, bottom-to-top; the decoded
/// buffer is flipped on both axes before it is returned. A row may close
/// early (the remainder stays at the transparent slot 0), but writing past
/// the row, a missing `EndRow`, or a missing `EndFrame` is an error. The
/// `indexShift` set by a Shift opcode persists across rows until replaced;
/// its reserved second operand must be zero.
pub(crate) fn rows(
	stream: &[u8],
	width: u32,
	height: u32,
	length_bit_count: u8,
	color_count: usize,
) -> Result<Vec<u8>, ActError> {
	if !(3..=5).contains(&length_bit_count) {
		return Err(ActError::InvalidLengthBitCount {
			value: u32::from(length_bit_count),
		});
	}

	let w = width as usize;
	let h = height as usize;
	let run_mask = (1u16 << length_bit_count) - 1;

	let mut flipped = vec![0u8; w * h];
	let mut pos = 0usize;
	let mut index_shift = 0u16;

	let next = |pos: &mut usize| -> Result<u8, ActError> {
		let byte = *stream.get(*pos).ok_or_else(|| ActError::insufficient_data(*pos + 1, stream.len()))?;
		*pos += 1;
		Ok(byte)
	};

	for row in 0..h {
		let row_base = row * w;
		let mut x = 0usize;
		loop {
			let byte = next(&mut pos)?;
			let (index, run) = match byte {
				opcodes::END_ROW => break,
				opcodes::END_FRAME => {
					return Err(ActError::UnterminatedRow {
						row,
					});
				},
				opcodes::REPEAT => {
					let run = usize::from(next(&mut pos)?) + 1;
					let index = u16::from(next(&mut pos)?);
					(index, run)
				},
				opcodes::BLANK => {
					let run = usize::from(next(&mut pos)?) + 1;
					(0, run)
				},
				opcodes::SHIFT => {
					index_shift = u16::from(next(&mut pos)?);
					let reserved = next(&mut pos)?;
					if reserved != 0 {
						return Err(ActError::ReservedShiftByte {
							value: reserved,
						});
					}
					continue;
				},
				short => {
					let run = usize::from(u16::from(short) & run_mask) + 1;
					let index = u16::from(short >> length_bit_count) + index_shift;
					(index, run)
				},
			};

			if x + run > w {
				return Err(ActError::RowOverrun {
					row,
					width: w,
				});
			}
			if usize::from(index) >= color_count {
				return Err(ActError::index_out_of_range(usize::from(index), color_count));
			}
			flipped[row_base + x..row_base + x + run].fill(index as u8);
			x += run;
		}
	}

	match stream.get(pos) {
		Some(&opcodes::END_FRAME) => {},
		_ => return Err(ActError::UnterminatedFrame),
	}

	// Storage order is flipped on both axes relative to display order
	let mut pixels = vec![0u8; w * h];
	for row in 0..h {
		for col in 0..w {
			pixels[(h - 1 - row) * w + (w - 1 - col)] = flipped[row * w + col];
		}
	}
	Ok(pixels)
}
