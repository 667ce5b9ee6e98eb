//! Benchmarks for the per-sample drag path.
//!
//! Run with: cargo bench -p duoslider-engine

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use duoslider_core::event::PointerSample;
use duoslider_core::geometry::Rect;
use duoslider_engine::{RangeSlider, SliderConfig, SliderEvent, Thumb, resolver};
use std::hint::black_box;

fn mounted_slider() -> RangeSlider {
    let mut slider = SliderConfig::default()
        .build()
        .expect("default config is valid");
    slider.set_view_bounds(Rect::from_size(335.0, 70.0));
    slider.subscribe(|event: &SliderEvent| {
        black_box(event);
    });
    slider
}

fn bench_resolve(c: &mut Criterion) {
    let state = SliderConfig::default()
        .into_state()
        .expect("default config is valid");

    c.bench_function("resolver/propose_left", |b| {
        b.iter(|| black_box(resolver::propose(&state, Thumb::Left, black_box(3.5))))
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/gesture");

    for samples in [10usize, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("moves", samples),
            &samples,
            |b, &samples| {
                b.iter_batched(
                    mounted_slider,
                    |mut slider| {
                        slider.handle_pointer(PointerSample::down(17.5, 35.0));
                        for i in 0..samples {
                            // zig-zag so both the clamp and the free path run
                            let x = 17.5 + ((i % 40) as f64) * 5.0;
                            slider.handle_pointer(PointerSample::moved(x, 35.0));
                        }
                        slider.handle_pointer(PointerSample::up(17.5, 35.0));
                        black_box(slider.left())
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_drag_gesture);
criterion_main!(benches);
