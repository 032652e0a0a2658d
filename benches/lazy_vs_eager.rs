//! Compares a fused lazy expression chain against per-operation
//! materialization on long dynamic vectors.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linex::DVector;
use rand::Rng;

const LEN: usize = 10_000;

fn random_vector(rng: &mut impl Rng) -> DVector<f64> {
    DVector::from_fn(LEN, |_| rng.r#gen())
}

fn bench_chained_addition(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let a = random_vector(&mut rng);
    let b = random_vector(&mut rng);
    let x = random_vector(&mut rng);
    let y = random_vector(&mut rng);

    let mut group = c.benchmark_group("chained_addition");

    group.bench_function("lazy_fused", |bench| {
        bench.iter(|| {
            let sum = (black_box(&a) + black_box(&b) + black_box(&x) + black_box(&y)).eval();
            black_box(sum)
        })
    });

    group.bench_function("eager_per_op", |bench| {
        bench.iter(|| {
            let t1 = (black_box(&a) + black_box(&b)).eval();
            let t2 = (&t1 + black_box(&x)).eval();
            let sum = (&t2 + black_box(&y)).eval();
            black_box(sum)
        })
    });

    group.finish();
}

fn bench_matvec(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let n = 200;
    let m = linex::DMatrix::<f64>::from_fn(n, n, |_, _| rng.r#gen());
    let v = DVector::from_fn(n, |_| rng.r#gen::<f64>());

    c.bench_function("matvec_200", |bench| {
        bench.iter(|| black_box((black_box(&m) * black_box(&v)).eval()))
    });
}

criterion_group!(benches, bench_chained_addition, bench_matvec);
criterion_main!(benches);
