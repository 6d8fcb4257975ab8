//! Benchmark suite for ACT file decoding and encoding
//!
//! Measures the decoder and the canonical encoder across synthetic images
//! of increasing size, plus the raster adapter's nearest-neighbour path.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use act_benches::{generate_test_act_data, sizes, spread_palette};
use act_types::file::{ActFile, PixelFormat, Raster};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark full-file decoding across frame sizes
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("act_decode");

	for (name, (width, height)) in [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("medium", sizes::MEDIUM),
		("large", sizes::LARGE),
	] {
		let data = generate_test_act_data(width, height, 3);
		let pixels = u64::from(width) * u64::from(height) * 3;

		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("from_bytes", name), &data, |b, data| {
			b.iter(|| {
				let result = ActFile::from_bytes(black_box(data));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark re-encoding a decoded image
fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("act_encode");

	let data = generate_test_act_data(sizes::MEDIUM.0, sizes::MEDIUM.1, 3);
	let image = ActFile::from_bytes(&data).expect("generated file decodes");

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("to_bytes", |b| {
		b.iter(|| black_box(&image).to_bytes());
	});

	group.finish();
}

/// Benchmark BGRA nearest-neighbour conversion
fn bench_raster_adapter(c: &mut Criterion) {
	let mut group = c.benchmark_group("act_raster");

	let (width, height) = sizes::MEDIUM;
	let bgra: Vec<u8> = (0..width as usize * height as usize)
		.flat_map(|i| [(i % 251) as u8, (i % 241) as u8, (i % 239) as u8, 0xFF])
		.collect();
	let raster = Raster::new(width, height, PixelFormat::Bgra32, bgra).expect("raster is valid");

	for colors in [16usize, 256] {
		let palette = spread_palette(colors);
		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
		group.bench_with_input(
			BenchmarkId::new("to_indexed8", colors),
			&palette,
			|b, palette| {
				b.iter(|| black_box(&raster).to_indexed8(black_box(palette)));
			},
		);
	}

	group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_raster_adapter);
criterion_main!(benches);
