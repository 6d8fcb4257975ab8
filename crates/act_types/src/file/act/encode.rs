//! ACT file encoding.
//!
//! Encoding is fully deterministic: every header, jump and offset is
//! rebuilt from the in-memory model, reserved fields are written as zero
//! (except the frame-header 0x0C slot, which conventionally repeats the
//! body length), and the row streams are regenerated with the canonical
//! greedy encoder. Re-encoding a file that was itself produced by this
//! encoder reproduces it byte for byte.

use log::debug;

use super::constants;
use super::frame::Frame;
use super::opcodes;
use super::palette::Palette;
use super::File;

fn push_u32(out: &mut Vec<u8>, value: u32) {
	out.extend_from_slice(&value.to_le_bytes());
}

fn push_i32(out: &mut Vec<u8>, value: i32) {
	out.extend_from_slice(&value.to_le_bytes());
}

fn push_palette(out: &mut Vec<u8>, palette: &Palette) {
	for color in palette.iter() {
		out.push(color.r);
		out.push(color.g);
		out.push(color.b);
		out.push(0); // reserved
	}
}

/// Encodes a complete ACT file from the model.
pub(crate) fn file(image: &File) -> Vec<u8> {
	let bodies: Vec<Vec<u8>> = image.frames().iter().map(frame).collect();
	let bodies_len: usize = bodies.iter().map(Vec::len).sum();
	let frame_count = bodies.len();

	let offset_table_len = frame_count * 4;
	let global_section_len = image
		.global_palette()
		.map_or(0, |p| p.len() * constants::PALETTE_ENTRY_SIZE);
	let total_len = constants::FILE_HEADER_SIZE + offset_table_len + bodies_len + global_section_len;
	let total_colors: usize = image.frames().iter().map(Frame::color_count).sum();

	let global_jump = if image.use_global_colors() {
		constants::FILE_HEADER_SIZE + offset_table_len + bodies_len
	} else {
		0
	};

	let (center_x, center_y) = image.center();
	let mut out = Vec::with_capacity(total_len);
	push_u32(&mut out, total_len as u32);
	push_u32(&mut out, total_colors as u32);
	push_u32(&mut out, 0); // reserved
	push_u32(&mut out, global_jump as u32);
	push_u32(&mut out, constants::FILE_HEADER_SIZE as u32); // frame-offsets jump
	push_u32(&mut out, 0); // reserved, overwritten in-game
	push_u32(&mut out, frame_count as u32);
	push_u32(&mut out, image.width() - 1);
	push_u32(&mut out, image.height() - 1);
	push_u32(&mut out, center_x);
	push_u32(&mut out, center_y);
	match image.global_palette() {
		Some(palette) => {
			push_u32(&mut out, constants::COLORS_PRESENT);
			push_u32(&mut out, palette.len() as u32);
		},
		None => {
			push_u32(&mut out, 0);
			push_u32(&mut out, 0);
		},
	}

	let mut offset = constants::FILE_HEADER_SIZE + offset_table_len;
	for body in &bodies {
		push_u32(&mut out, offset as u32);
		offset += body.len();
	}
	for body in &bodies {
		out.extend_from_slice(body);
	}
	if let Some(palette) = image.global_palette() {
		push_palette(&mut out, palette);
	}

	debug!("encoded ACT image: {} frames, {} bytes", frame_count, out.len());
	out
}

/// Encodes one frame body: header, palette, extents, row stream.
pub(crate) fn frame(frame: &Frame) -> Vec<u8> {
	let stream = rows(frame.pixels(), frame.width(), frame.height(), frame.length_bit_count());

	let color_count = frame.color_count();
	let data_jump = constants::FRAME_HEADER_SIZE + color_count * constants::PALETTE_ENTRY_SIZE;
	let body_len = data_jump + constants::FRAME_EXTENTS_SIZE + stream.len();

	let mut out = Vec::with_capacity(body_len);
	push_u32(&mut out, body_len as u32);
	push_u32(&mut out, constants::FRAME_HEADER_SIZE as u32); // palette jump
	push_u32(&mut out, data_jump as u32);
	push_u32(&mut out, body_len as u32); // reserved; convention repeats the length
	push_u32(&mut out, frame.width());
	push_u32(&mut out, frame.height());
	push_u32(&mut out, 0); // reserved
	push_u32(&mut out, 0); // reserved
	push_u32(&mut out, u32::from(frame.length_bit_count()));
	match frame.palette() {
		Some(palette) => {
			push_u32(&mut out, constants::COLORS_PRESENT);
			push_u32(&mut out, palette.len() as u32);
			push_palette(&mut out, palette);
		},
		None => {
			push_u32(&mut out, 0);
			push_u32(&mut out, 0);
		},
	}

	// Frame extents: left, top, right, top again
	let (x, y) = (frame.x(), frame.y());
	push_i32(&mut out, x);
	push_i32(&mut out, y);
	push_i32(&mut out, x + frame.width() as i32 - 1);
	push_i32(&mut out, y);

	out.extend_from_slice(&stream);
	out
}

/// Encodes display-order pixels into a canonical row-opcode stream.
///
/// Rows are emitted bottom-to-top with each row reversed (the storage
/// order of the format). For every run the smallest opcode wins: Short
/// where the index and run fit its bit budget, Blank for transparent
/// runs, Repeat otherwise. Shift never pays for itself and is never
/// emitted.
pub(crate) fn rows(pixels: &[u8], width: u32, height: u32, length_bit_count: u8) -> Vec<u8> {
	let w = width as usize;
	let h = height as usize;

	// Flip both axes into storage order
	let mut flipped = vec![0u8; w * h];
	for row in 0..h {
		for col in 0..w {
			flipped[row * w + col] = pixels[(h - 1 - row) * w + (w - 1 - col)];
		}
	}

	let short_index_limit = usize::from(0xFFu8 >> length_bit_count);
	let short_run_limit = 1usize << length_bit_count;
	// A Short whose index is the limit itself collides with the opcode
	// range at high run lengths
	let boundary_run_limit = if length_bit_count == 3 {
		3
	} else {
		10
	};

	let mut out = Vec::new();
	for row in flipped.chunks_exact(w) {
		let mut x = 0usize;
		while x < w {
			let index = row[x];
			let mut run = 1usize;
			while x + run < w && row[x + run] == index {
				run += 1;
			}

			let i = usize::from(index);
			if (i < short_index_limit && run <= short_run_limit)
				|| (i == short_index_limit && run <= boundary_run_limit)
			{
				out.push((index << length_bit_count) | (run - 1) as u8);
			} else if index == 0 {
				out.push(opcodes::BLANK);
				out.push((run - 1) as u8);
			} else {
				out.push(opcodes::REPEAT);
				out.push((run - 1) as u8);
				out.push(index);
			}
			x += run;
		}
		out.push(opcodes::END_ROW);
	}
	out.push(opcodes::END_FRAME);
	out
}

#[cfg(test)]
mod tests {
	use super::super::decode;
	use super::*;

	#[test]
	fn test_rows_single_short_per_row() {
		// 16 identical pixels of index 1 at L = 5: one Short per row
		let stream = rows(&[1u8; 16], 16, 1, 5);
		assert_eq!(stream, vec![(1 << 5) | 15, opcodes::END_ROW, opcodes::END_FRAME]);
	}

	#[test]
	fn test_rows_blank_for_long_transparent_run() {
		let stream = rows(&[0u8; 256], 256, 1, 3);
		assert_eq!(stream, vec![opcodes::BLANK, 0xFF, opcodes::END_ROW, opcodes::END_FRAME]);
	}

	#[test]
	fn test_rows_repeat_for_long_opaque_run() {
		// Index 2 run of 40 exceeds the Short budget at L = 5
		let stream = rows(&[2u8; 40], 40, 1, 5);
		assert_eq!(
			stream,
			vec![opcodes::REPEAT, 39, 2, opcodes::END_ROW, opcodes::END_FRAME]
		);
	}

	#[test]
	fn test_rows_high_index_uses_repeat() {
		// Index 200 cannot appear in a Short at any L
		let stream = rows(&[200u8; 2], 2, 1, 3);
		assert_eq!(stream, vec![opcodes::REPEAT, 1, 200, opcodes::END_ROW, opcodes::END_FRAME]);
	}

	#[test]
	fn test_rows_boundary_index_caps() {
		// Index 31 == limit at L = 3: runs up to 3 stay Short
		let stream = rows(&[31u8; 3], 3, 1, 3);
		assert_eq!(stream, vec![(31 << 3) | 2, opcodes::END_ROW, opcodes::END_FRAME]);
		// A run of 4 would collide with the Shift opcode byte
		let stream = rows(&[31u8; 4], 4, 1, 3);
		assert_eq!(stream, vec![opcodes::REPEAT, 3, 31, opcodes::END_ROW, opcodes::END_FRAME]);
	}

	#[test]
	fn test_rows_never_collide_with_opcode_bytes() {
		// Exhaustive check: no emitted run byte lands in the opcode range
		for lbc in 3u8..=5 {
			let limit = 0xFFu8 >> lbc;
			for index in 0..=limit {
				for run in 1..=(1usize << lbc) {
					let pixels = vec![index; run];
					let stream = rows(&pixels, run as u32, 1, lbc);
					let first = stream[0];
					if first < opcodes::SHIFT {
						assert_eq!(first >> lbc, index);
					}
				}
			}
		}
	}

	#[test]
	fn test_rows_roundtrip_mixed_pattern() {
		for lbc in 3u8..=5 {
			let width = 31u32;
			let height = 7u32;
			let colors = usize::from(0xFFu8 >> lbc) + 1;
			let pixels: Vec<u8> = (0..width * height)
				.map(|i| ((i / 3) as usize % colors) as u8)
				.collect();
			let stream = rows(&pixels, width, height, lbc);
			let decoded = decode::rows(&stream, width, height, lbc, colors).unwrap();
			assert_eq!(decoded, pixels, "length_bit_count {}", lbc);
		}
	}

	#[test]
	fn test_rows_roundtrip_full_palette() {
		// Every index 0..=255 appears; only Blank/Repeat can express most
		let pixels: Vec<u8> = (0..=255u16).map(|i| i as u8).collect();
		let stream = rows(&pixels, 16, 16, 3);
		let decoded = decode::rows(&stream, 16, 16, 3, 256).unwrap();
		assert_eq!(decoded, pixels);
	}
}
