use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::{Complex, SequenceTick, ViewTransform, ZoomSequencer};

fn full_rendered_zoom(c: &mut Criterion) {
    let target = Complex::new(-0.743643887037151, 0.131825904205330);

    c.bench_function("rendered zoom to scale limit", |b| {
        b.iter(|| {
            let mut view = ViewTransform::default();
            let mut sequencer = ZoomSequencer::new();
            sequencer.start(black_box(target), &mut view);

            loop {
                if let SequenceTick::Finished { frames, .. } = sequencer.tick(&mut view) {
                    break frames;
                }
            }
        });
    });
}

criterion_group!(benches, full_rendered_zoom);
criterion_main!(benches);
