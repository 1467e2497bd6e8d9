use criterion::{criterion_group, criterion_main, Criterion};
use lyra_algebra::{bls12_377::BLS377Scalar, prelude::*};
use lyra_plonk::{
    plonk::{
        constraint_system::SparseCS,
        domain::EvaluationDomain,
        setup::{init_domain, setup},
    },
    poly_commit::kzg_poly_com::KZGCommitmentSchemeBLS377,
};
use rand_chacha::ChaChaRng;

/// A chain of `size` gates alternating additions and multiplications.
fn chain_circuit(size: usize) -> SparseCS<BLS377Scalar> {
    let mut cs = SparseCS::new(2, 1);
    let mut acc = cs.public_var(0);
    let x = cs.secret_var(0);
    for i in 0..size {
        let out = cs.new_internal_variable();
        if i % 2 == 0 {
            cs.insert_add_gate(acc, x, out);
        } else {
            cs.insert_mul_gate(acc, x, out);
        }
        acc = out;
    }
    let p1 = cs.public_var(1);
    let bind = cs.insert_equal_gate(acc, p1);
    cs.add_commitment_group(vec![0, 1], bind);
    cs
}

fn bench_setup(c: &mut Criterion) {
    let mut prng = ChaChaRng::from_seed([0u8; 32]);

    let mut group = c.benchmark_group("plonk_setup");
    group.sample_size(10);
    for log_size in [10usize, 12] {
        let cs = chain_circuit((1 << log_size) - 3);
        let n = init_domain(&cs).unwrap().cardinality();

        let srs = KZGCommitmentSchemeBLS377::new(n + 2, &mut prng);
        let domain = EvaluationDomain::<BLS377Scalar>::new(n).unwrap();
        let srs_lagrange = srs.to_lagrange(&domain).unwrap();

        group.bench_function(format!("2^{}", log_size), |b| {
            b.iter(|| setup(&cs, &srs, &srs_lagrange).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_setup);
criterion_main!(benches);
