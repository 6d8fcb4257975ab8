//! Benchmark helper utilities for act-rs
//!
//! This module generates synthetic ACT files for the benchmark suite. The
//! generator builds images through the public model API and serializes
//! them with the canonical encoder, so benchmark inputs always match what
//! the decoder sees in the wild: per-frame palettes, centered offsets and
//! greedy-encoded row streams.

use act_types::file::{ActFile, Color, Frame, Palette, Raster};

/// Generates a complete ACT file with the given geometry.
///
/// Frames alternate between a flat backdrop, a gradient and a dithered
/// checker so the row streams exercise Short, Blank and Repeat opcodes.
pub fn generate_test_act_data(width: u32, height: u32, frame_count: usize) -> Vec<u8> {
	let palette = Palette::grayscale();

	let raster = pattern_raster(width, height, 0);
	let mut image = ActFile::from_raster(&raster, &palette).expect("generator raster is valid");

	for i in 1..frame_count {
		let raster = pattern_raster(width, height, i);
		let frame = Frame::from_raster(&raster, &palette).expect("generator raster is valid");
		image.add_frame(frame).expect("generator stays under the frame limit");
	}

	image.to_bytes()
}

/// Builds one of the rotating test patterns as an 8-bit indexed raster.
fn pattern_raster(width: u32, height: u32, seed: usize) -> Raster {
	let pixels: Vec<u8> = (0..width as usize * height as usize)
		.map(|i| match seed % 3 {
			0 => 0,
			1 => (i / width as usize) as u8,
			_ => ((i % 7) * 36) as u8,
		})
		.collect();
	Raster::indexed8(width, height, pixels).expect("pattern matches its dimensions")
}

/// A palette with a deterministic spread of colors, handy for nearest-
/// neighbour benchmarks.
pub fn spread_palette(colors: usize) -> Palette {
	let colors = (0..colors)
		.map(|i| {
			let i = i as u8;
			Color::new(i, i.wrapping_mul(2), i.wrapping_mul(3))
		})
		.collect();
	Palette::from_colors(colors).expect("color count is within 1..=256")
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny frame: 32x32
	pub const TINY: (u32, u32) = (32, 32);
	/// Small frame: 64x64
	pub const SMALL: (u32, u32) = (64, 64);
	/// Typical backdrop frame: 128x128
	pub const MEDIUM: (u32, u32) = (128, 128);
	/// Largest legal frame: 256x256
	pub const LARGE: (u32, u32) = (256, 256);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_files_decode() {
		for &(width, height) in &[sizes::TINY, sizes::SMALL, sizes::MEDIUM] {
			let data = generate_test_act_data(width, height, 3);
			let image = ActFile::from_bytes(&data).unwrap();
			assert_eq!(image.frame_count(), 3);
			assert_eq!(image.frame(0).unwrap().width(), width);
		}
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::TINY, (32, 32));
		assert_eq!(sizes::LARGE, (256, 256));
	}
}
