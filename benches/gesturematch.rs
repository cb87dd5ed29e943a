use criterion::{criterion_group, criterion_main, Criterion};
use gesturematch::lowlevel::cloud_distance;
use gesturematch::{CloudParams, Point, PointCloud, Recognizer, RecognizerConfig};
use std::f64::consts::TAU;
use std::hint::black_box;

fn polygon(sides: usize, radius: f64, phase: f64) -> Vec<Point> {
    (0..=sides)
        .map(|i| {
            let t = phase + TAU * i as f64 / sides as f64;
            Point::single(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

fn make_stroke(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64 * TAU;
            let r = 90.0 * (1.0 + 0.15 * (3.0 * t).sin());
            Point::single(320.0 + r * t.cos(), 240.0 + r * t.sin())
        })
        .collect()
}

fn build_recognizer(parallel: bool) -> Recognizer {
    let mut rec = Recognizer::with_config(RecognizerConfig {
        parallel,
        ..RecognizerConfig::default()
    })
    .unwrap();
    for sides in 3..19 {
        for phase in [0.0, 0.4] {
            let name = format!("poly{sides}_{phase}");
            rec.add_template(&name, &polygon(sides, 50.0, phase)).unwrap();
        }
    }
    rec
}

fn bench_recognizer(c: &mut Criterion) {
    let stroke = make_stroke(180);
    let sequential = build_recognizer(false);

    c.bench_function("recognize_32_templates", |b| {
        b.iter(|| black_box(sequential.recognize(black_box(&stroke)).unwrap()));
    });

    #[cfg(feature = "rayon")]
    {
        let parallel = build_recognizer(true);
        c.bench_function("recognize_32_templates_parallel", |b| {
            b.iter(|| black_box(parallel.recognize(black_box(&stroke)).unwrap()));
        });
    }
}

fn bench_building_blocks(c: &mut Criterion) {
    let params = CloudParams::default();
    let stroke = make_stroke(180);

    c.bench_function("point_cloud_build", |b| {
        b.iter(|| black_box(PointCloud::new("stroke", black_box(&stroke), &params).unwrap()));
    });

    let a = PointCloud::new("a", &stroke, &params).unwrap();
    let t = PointCloud::new("t", &polygon(7, 50.0, 0.2), &params).unwrap();
    c.bench_function("cloud_distance_exact", |b| {
        b.iter(|| black_box(cloud_distance(a.points(), t.points(), 0, f64::INFINITY)));
    });
}

criterion_group!(benches, bench_recognizer, bench_building_blocks);
criterion_main!(benches);
