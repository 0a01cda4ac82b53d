//! Criterion benchmarks for a full render pass.
//!
//! Run with: `cargo bench --bench render_pipeline`

use std::num::NonZeroU32;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::adapters::pixel_format::copy_frame_to_rgba;
use mandelbrot_explorer::{
    Complex, GreyscaleEscapeSpeed, MandelbrotAlgorithm, PassParams, Viewport, render_pass,
};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;
const MAX_ITERATIONS: u32 = 400;

fn params(sample_size: u32) -> PassParams {
    PassParams {
        width: WIDTH,
        height: HEIGHT,
        sample_size: NonZeroU32::new(sample_size).unwrap(),
        viewport: Viewport::new(Complex::new(-0.5, 0.0), 3.0, 0.2, 1.2),
    }
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    let algorithm = MandelbrotAlgorithm::new(MAX_ITERATIONS, 2.0).unwrap();
    let colour_map = GreyscaleEscapeSpeed::new(MAX_ITERATIONS);

    group.throughput(Throughput::Elements(u64::from(WIDTH * HEIGHT)));

    // Coarsest and finest of the default sample-size bounds.
    for sample_size in [20, 1] {
        let params = params(sample_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(sample_size),
            &params,
            |b, params| {
                b.iter(|| render_pass(black_box(params), &algorithm, &colour_map));
            },
        );
    }

    group.finish();
}

fn bench_rgba_copy(c: &mut Criterion) {
    let algorithm = MandelbrotAlgorithm::new(MAX_ITERATIONS, 2.0).unwrap();
    let colour_map = GreyscaleEscapeSpeed::new(MAX_ITERATIONS);
    let frame = render_pass(&params(4), &algorithm, &colour_map);
    let mut dst = vec![0u8; (WIDTH * HEIGHT * 4) as usize];

    c.bench_function("copy_frame_to_rgba", |b| {
        b.iter(|| copy_frame_to_rgba(black_box(&frame), &mut dst));
    });
}

criterion_group!(benches, bench_render_pass, bench_rgba_copy);
criterion_main!(benches);
