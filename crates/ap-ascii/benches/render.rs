//! Conversion benchmarks: plain vs colored rendering of a 100-column frame.
//! Run: cargo bench -p ap-ascii

use ap_ascii::{render_ansi, render_grid, render_plain};
use ap_core::palette::Palette;
use ap_core::raster::Raster;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn gradient(width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let idx = ((y * width + x) * 4) as usize;
            raster.data[idx] = (x % 256) as u8;
            raster.data[idx + 1] = (y % 256) as u8;
            raster.data[idx + 2] = ((x + y) % 256) as u8;
            raster.data[idx + 3] = 255;
        }
    }
    raster
}

fn bench_render(c: &mut Criterion) {
    let raster = gradient(100, 50);

    let mut group = c.benchmark_group("render");
    group.bench_function("plain_100x50", |b| {
        b.iter(|| black_box(render_plain(&raster, Palette::Normal)));
    });
    group.bench_function("grid_100x50", |b| {
        b.iter(|| black_box(render_grid(&raster, Palette::Normal)));
    });
    group.bench_function("ansi_100x50", |b| {
        b.iter(|| black_box(render_ansi(&raster, Palette::Normal)));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
