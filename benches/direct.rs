use criterion::{criterion_group, criterion_main, Criterion};
use geod_array::Geod;
use ndarray::Array1;

fn create_data() -> Array1<f64> {
    Array1::linspace(-60.0, 60.0, 1000)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let g = Geod::wgs84();
    let lat1 = create_data();

    c.bench_function("direct 1000 points", |b| {
        b.iter(|| {
            let _ = g.direct(lat1.clone(), 0.0, 45.0, 10_000.0);
        })
    });

    c.bench_function("distance 1000 points", |b| {
        b.iter(|| {
            let _ = g.distance(lat1.clone(), 0.0, 0.0, 1.0);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
