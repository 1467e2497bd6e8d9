use criterion::{criterion_group, criterion_main, Criterion};
use lyra_algebra::{
    bls12_377::{BLS377Scalar, BLS377G1},
    prelude::*,
};

fn bench_msm(c: &mut Criterion) {
    let mut prng = test_rng();

    let mut group = c.benchmark_group("bls12_377_g1_msm");
    group.sample_size(10);
    for log_count in [10usize, 14] {
        let count = 1usize << log_count;
        let points: Vec<BLS377G1> = (0..count).map(|_| BLS377G1::random(&mut prng)).collect();
        let scalars: Vec<BLS377Scalar> = (0..count)
            .map(|_| BLS377Scalar::random(&mut prng))
            .collect();

        let points_ptr = points.iter().collect::<Vec<&BLS377G1>>();
        let scalars_ptr = scalars.iter().collect::<Vec<&BLS377Scalar>>();

        group.bench_function(format!("2^{}", log_count), |b| {
            b.iter(|| BLS377G1::multi_exp(&scalars_ptr, &points_ptr))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_msm);
criterion_main!(benches);
