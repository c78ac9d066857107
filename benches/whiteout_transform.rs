use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use rand::Rng;
use whiteout::prelude::*;

const SIZES: [u32; 4] = [64, 300, 1024, 2048];

/// Roughly a scanned logo: mostly paper white with some ink.
fn gen_scan(size: u32) -> Texture<u8> {
    let mut rng = rand::rng();
    let image = RgbaImage::from_fn(size, size, |_, _| {
        if rng.random_bool(0.8) {
            Rgba([
                rng.random_range(238..=255),
                rng.random_range(238..=255),
                rng.random_range(238..=255),
                255,
            ])
        } else {
            Rgba([rng.random(), rng.random(), rng.random(), 255])
        }
    });
    Texture::from_rgba_image(image)
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("whiteout_transform");

    for size in SIZES {
        let input = gen_scan(size);
        let mut output = Texture::<u8>::with_shape(input.shape());

        for strategy in [WhiteoutStrategy::Seq, WhiteoutStrategy::Par] {
            let mut transform = strategy.build(WHITE_THRESHOLD);
            transform.prepare(input.shape(), output.shape());
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        transform.apply(
                            black_box(input.as_texture_slice()),
                            output.as_texture_mut_slice(),
                        );
                        black_box(transform.cleared())
                    })
                },
            );
        }

        let auto = WhiteoutStrategy::auto((size as usize, size as usize));
        println!("auto strategy for {size}x{size}: {auto:?}");
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
