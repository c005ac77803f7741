use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_raycaster::{build_base_layer, cast_ray, render_frame, FrameSequencer, MemorySink, RenderConfig};

fn bench_render_frame(c: &mut Criterion) {
    let cfg = RenderConfig::default();
    let base = build_base_layer(&cfg);
    let pose = cfg.start.nudged(0.08, 0.08);

    c.bench_function("render_frame_1024x512", |b| {
        b.iter(|| render_frame(black_box(&base), black_box(&pose), &cfg))
    });
}

fn bench_cast_ray(c: &mut Criterion) {
    let cfg = RenderConfig::default();
    let pose = cfg.start.nudged(0.08, 0.08);

    c.bench_function("cast_ray_no_overlay", |b| {
        b.iter(|| cast_ray(&cfg, black_box(&pose), black_box(pose.a), None))
    });
}

fn bench_fine_step(c: &mut Criterion) {
    let cfg = RenderConfig::default().with_step_size(0.01);
    let base = build_base_layer(&cfg);
    let pose = cfg.start.nudged(0.08, 0.08);

    c.bench_function("render_frame_step_0.01", |b| {
        b.iter(|| render_frame(black_box(&base), black_box(&pose), &cfg))
    });
}

fn bench_sequence(c: &mut Criterion) {
    let seq = FrameSequencer::new(RenderConfig::default()).unwrap();

    c.bench_function("sequence_10_frames_in_memory", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            seq.run(&mut sink).unwrap();
            black_box(sink.frames.len())
        })
    });
}

criterion_group!(
    benches,
    bench_render_frame,
    bench_cast_ray,
    bench_fine_step,
    bench_sequence
);
criterion_main!(benches);
