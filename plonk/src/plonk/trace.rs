use crate::plonk::{
    constraint_system::{ConstraintSystem, VarIndex},
    domain::EvaluationDomain,
};
use ark_std::fmt;
use lyra_algebra::prelude::*;

/// A column of the trace, named in the order the columns are committed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraceColumn {
    /// The selector of the `i`-th commitment group.
    Qcp(usize),
    Ql,
    Qr,
    Qm,
    Qo,
    Qk,
    S1,
    S2,
    S3,
}

impl fmt::Display for TraceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceColumn::Qcp(i) => write!(f, "qcp[{}]", i),
            TraceColumn::Ql => f.write_str("ql"),
            TraceColumn::Qr => f.write_str("qr"),
            TraceColumn::Qm => f.write_str("qm"),
            TraceColumn::Qo => f.write_str("qo"),
            TraceColumn::Qk => f.write_str("qk"),
            TraceColumn::S1 => f.write_str("s1"),
            TraceColumn::S2 => f.write_str("s2"),
            TraceColumn::S3 => f.write_str("s3"),
        }
    }
}

/// The fixed columns of a circuit, in Lagrange form over the domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<F> {
    /// left selector.
    pub ql: Vec<F>,
    /// right selector.
    pub qr: Vec<F>,
    /// multiplication selector.
    pub qm: Vec<F>,
    /// output selector.
    pub qo: Vec<F>,
    /// constant selector; the public-input rows are left at zero for the prover.
    pub qk: Vec<F>,
    /// one selector per commitment group.
    pub qcp: Vec<Vec<F>>,
    /// `support[s[i]]` for the left block of the permutation.
    pub s1: Vec<F>,
    /// `support[s[n + i]]` for the right block.
    pub s2: Vec<F>,
    /// `support[s[2n + i]]` for the output block.
    pub s3: Vec<F>,
    /// The copy permutation over the `3n` wire positions.
    pub s: Vec<usize>,
}

impl<F: Domain> Trace<F> {
    /// Build the trace of `cs` over `domain`.
    ///
    /// The first `nb_public_variables` rows are public-input placeholders
    /// (`ql = -1`, every other selector `0`); the constraints follow in order.
    /// Panics if the rows do not fit in the domain or a wire or committed row is
    /// out of range.
    pub fn new<CS: ConstraintSystem<Field = F>>(cs: &CS, domain: &EvaluationDomain<F>) -> Self {
        let size = domain.cardinality();
        let offset = cs.nb_public_variables();
        assert!(
            offset + cs.nb_constraints() <= size,
            "the domain is too small for the circuit"
        );

        let zero = F::zero();
        let mut ql = vec![zero; size];
        let mut qr = vec![zero; size];
        let mut qm = vec![zero; size];
        let mut qo = vec![zero; size];
        let mut qk = vec![zero; size];
        let mut qcp = vec![vec![zero; size]; cs.commitment_groups().len()];

        let minus_one = F::one().neg();
        for row in ql.iter_mut().take(offset) {
            *row = minus_one;
        }

        for (j, gate) in cs.iter_constraints().enumerate() {
            let row = offset + j;
            ql[row] = *gate.ql;
            qr[row] = *gate.qr;
            qm[row] = *gate.qm;
            qo[row] = *gate.qo;
            qk[row] = *gate.qk;
        }

        for (column, group) in qcp.iter_mut().zip(cs.commitment_groups()) {
            for committed in group.committed.iter() {
                column[offset + committed] = F::one();
            }
        }

        let s = build_permutation(cs, size);
        let [s1, s2, s3] = compute_permutation_polynomials(&s, domain);

        Trace {
            ql,
            qr,
            qm,
            qo,
            qk,
            qcp,
            s1,
            s2,
            s3,
            s,
        }
    }

    /// Return the commitment selectors with their names, in group order.
    pub fn commitment_selectors(&self) -> Vec<(TraceColumn, &[F])> {
        self.qcp
            .iter()
            .enumerate()
            .map(|(i, q)| (TraceColumn::Qcp(i), q.as_slice()))
            .collect()
    }
}

/// Map every wire position to its variable: `lro[i]`, `lro[n + i]` and `lro[2n + i]`
/// are the left, right and output variables of row `i`.
///
/// A public-input row `i` has left variable `i`, and its right and output positions
/// stay at variable `0`, as do all positions of the padding rows. Those positions
/// therefore share the cycle of variable `0`.
pub fn compute_lro<CS: ConstraintSystem>(cs: &CS, size: usize) -> Vec<VarIndex> {
    let offset = cs.nb_public_variables();
    let mut lro = vec![0; 3 * size];
    for (i, slot) in lro.iter_mut().enumerate().take(offset) {
        *slot = i;
    }
    for (j, gate) in cs.gates().iter().enumerate() {
        let row = offset + j;
        lro[row] = gate.xa;
        lro[size + row] = gate.xb;
        lro[2 * size + row] = gate.xc;
    }
    lro
}

/// Build the copy permutation of `cs` over `3 * size` wire positions.
///
/// Each position points at the previous occurrence of the same variable, and the
/// first occurrence points at the last one, so that every variable forms exactly one
/// cycle through the positions where it is used.
pub fn build_permutation<CS: ConstraintSystem>(cs: &CS, size: usize) -> Vec<usize> {
    let lro = compute_lro(cs, size);

    let mut last_seen: Vec<Option<usize>> = vec![None; cs.nb_variables()];
    let mut permutation: Vec<Option<usize>> = vec![None; lro.len()];
    for (i, var) in lro.iter().enumerate() {
        if let Some(prev) = last_seen[*var] {
            permutation[i] = Some(prev);
        }
        last_seen[*var] = Some(i);
    }

    // close each chain: the first occurrence of a variable points at its last one.
    permutation
        .into_iter()
        .zip(lro.iter())
        .enumerate()
        .map(|(i, (prev, var))| prev.or(last_seen[*var]).unwrap_or(i))
        .collect()
}

/// Return `<g> || u<g> || u²<g>`, where `g` generates the domain and `u` is the coset shift.
pub fn get_support_permutation<F: Domain>(domain: &EvaluationDomain<F>) -> Vec<F> {
    let elements = domain.elements();
    let shift = domain.coset_shift();
    let shift_square = shift.square();

    let mut support = Vec::with_capacity(3 * elements.len());
    support.extend_from_slice(&elements);
    support.extend(elements.iter().map(|x| x.mul(&shift)));
    support.extend(elements.iter().map(|x| x.mul(&shift_square)));
    support
}

/// Return `[s1, s2, s3]`, where `s_{b+1}[i] = support[s[b·n + i]]`.
pub fn compute_permutation_polynomials<F: Domain>(
    s: &[usize],
    domain: &EvaluationDomain<F>,
) -> [Vec<F>; 3] {
    let n = domain.cardinality();
    let support = get_support_permutation(domain);
    let block = |b: usize| -> Vec<F> { s[b * n..(b + 1) * n].iter().map(|i| support[*i]).collect() };
    [block(0), block(1), block(2)]
}

#[cfg(test)]
mod test {
    use crate::plonk::{
        constraint_system::{ConstraintSystem, SparseCS},
        domain::EvaluationDomain,
        trace::{
            build_permutation, compute_lro, compute_permutation_polynomials,
            get_support_permutation, Trace, TraceColumn,
        },
    };
    use lyra_algebra::{bls12_377::BLS377Scalar, prelude::*};

    type F = BLS377Scalar;

    /// Return the cycle of `s` through `start`.
    fn cycle_of(s: &[usize], start: usize) -> Vec<usize> {
        let mut cycle = vec![start];
        let mut cur = s[start];
        while cur != start {
            cycle.push(cur);
            cur = s[cur];
        }
        cycle.sort_unstable();
        cycle
    }

    fn assert_is_permutation(s: &[usize]) {
        let mut seen = vec![false; s.len()];
        for v in s.iter() {
            assert!(*v < s.len());
            assert!(!seen[*v], "{} appears twice", v);
            seen[*v] = true;
        }
    }

    fn assert_cycles_match_variables(s: &[usize], lro: &[usize]) {
        for i in 0..s.len() {
            let expected: Vec<usize> = (0..lro.len()).filter(|j| lro[*j] == lro[i]).collect();
            assert_eq!(cycle_of(s, i), expected);
        }
    }

    /// 1 public input, 2 constraints: `v0 + a = b`, `b * v0 = c`.
    fn sample_cs() -> SparseCS<F> {
        let mut cs = SparseCS::<F>::new(1, 1);
        let v0 = cs.public_var(0);
        let a = cs.secret_var(0);
        let b = cs.new_internal_variable();
        let c = cs.new_internal_variable();
        cs.insert_add_gate(v0, a, b);
        cs.insert_mul_gate(b, v0, c);
        cs
    }

    fn random_cs<R: Rng>(prng: &mut R) -> SparseCS<F> {
        let nb_public = prng.gen_range(0..4);
        let nb_secret = prng.gen_range(1..4);
        let mut cs = SparseCS::<F>::new(nb_public, nb_secret);
        for _ in 0..prng.gen_range(0..4) {
            cs.new_internal_variable();
        }
        let nb_variables = cs.nb_variables();
        for _ in 0..prng.gen_range(1..12) {
            let xa = prng.gen_range(0..nb_variables);
            let xb = prng.gen_range(0..nb_variables);
            let xc = prng.gen_range(0..nb_variables);
            match prng.gen_range(0..3) {
                0 => cs.insert_add_gate(xa, xb, xc),
                1 => cs.insert_mul_gate(xa, xb, xc),
                _ => cs.insert_equal_gate(xa, xb),
            };
        }
        cs
    }

    #[test]
    fn test_lro() {
        let cs = sample_cs();
        let lro = compute_lro(&cs, 4);
        // rows: placeholder, add, mul, padding
        assert_eq!(lro, vec![0, 0, 2, 0, 0, 1, 0, 0, 0, 2, 3, 0]);
    }

    #[test]
    fn test_permutation_matches_reference_walk() {
        let cs = sample_cs();
        let s = build_permutation(&cs, 4);
        // variable 0 sits at 0, 1, 3, 4, 6, 7, 8, 11: each position points at the
        // previous one and 0 points at 11. Variable 2 sits at 2 and 9.
        assert_eq!(s, vec![11, 0, 9, 1, 3, 5, 4, 6, 7, 2, 10, 8]);
    }

    #[test]
    fn test_permutation_is_bijection() {
        let mut prng = test_rng();
        for _ in 0..50 {
            let cs = random_cs(&mut prng);
            let rows = cs.nb_public_variables() + cs.nb_constraints();
            let size = rows.next_power_of_two().max(2);
            let s = build_permutation(&cs, size);
            assert_eq!(s.len(), 3 * size);
            assert_is_permutation(&s);
            assert_cycles_match_variables(&s, &compute_lro(&cs, size));
        }
    }

    #[test]
    fn test_public_input_cycle() {
        // v0 is the left operand of constraint 0 and the right operand of constraint 1.
        let cs = sample_cs();
        let domain = EvaluationDomain::<F>::new(3).unwrap();
        let size = domain.cardinality();
        assert_eq!(size, 4);
        let trace = Trace::new(&cs, &domain);

        let placeholder_left = 0;
        let constraint_0_left = 1;
        let constraint_1_right = size + 2;
        let cycle = cycle_of(&trace.s, placeholder_left);
        assert!(cycle.contains(&constraint_0_left));
        assert!(cycle.contains(&constraint_1_right));
        assert_eq!(cycle_of(&trace.s, constraint_1_right), cycle);
    }

    #[test]
    fn test_placeholder_rows_alias_variable_zero() {
        // The unused right/output slots of public-input rows and all slots of padding
        // rows are wired to variable 0, so they share the cycle of the first public
        // input. Kept on purpose: the prover relies on this layout.
        let mut cs = SparseCS::<F>::new(2, 1);
        let p1 = cs.public_var(1);
        let a = cs.secret_var(0);
        let out = cs.new_internal_variable();
        cs.insert_add_gate(p1, a, out);
        let size = 4;
        let s = build_permutation(&cs, size);

        let cycle = cycle_of(&s, 0);
        // right and output slots of both placeholder rows
        for pos in [size, size + 1, 2 * size, 2 * size + 1] {
            assert!(cycle.contains(&pos));
        }
        // padding row 3, every block
        for pos in [3, size + 3, 2 * size + 3] {
            assert!(cycle.contains(&pos));
        }
        // the second public input keeps its own cycle: placeholder left + gate left
        assert_eq!(cycle_of(&s, 1), vec![1, 2]);
    }

    #[test]
    fn test_placeholder_row_shape() {
        let mut cs = SparseCS::<F>::new(3, 1);
        let a = cs.secret_var(0);
        let b = cs.new_internal_variable();
        cs.insert_constant_gate(a, F::from(4u32));
        cs.insert_mul_gate(a, a, b);
        let domain = EvaluationDomain::<F>::new(5).unwrap();
        let trace = Trace::new(&cs, &domain);

        let minus_one = F::one().neg();
        for i in 0..3 {
            assert_eq!(trace.ql[i], minus_one);
            assert_eq!(trace.qr[i], F::zero());
            assert_eq!(trace.qm[i], F::zero());
            assert_eq!(trace.qo[i], F::zero());
            assert_eq!(trace.qk[i], F::zero());
        }
        // constraint rows follow the placeholders
        assert_eq!(trace.ql[3], F::one());
        assert_eq!(trace.qk[3], F::from(4u32).neg());
        assert_eq!(trace.qm[4], F::one());
        assert_eq!(trace.qo[4], minus_one);
        // padding rows
        for i in 5..8 {
            assert_eq!(trace.ql[i], F::zero());
            assert_eq!(trace.qm[i], F::zero());
        }
    }

    #[test]
    fn test_commitment_selectors() {
        let mut cs = SparseCS::<F>::new(1, 2);
        let a = cs.secret_var(0);
        let b = cs.secret_var(1);
        let c = cs.new_internal_variable();
        cs.insert_add_gate(a, b, c);
        cs.insert_mul_gate(a, b, c);
        cs.insert_equal_gate(a, c);
        cs.add_commitment_group(vec![0, 2], 1);
        let domain = EvaluationDomain::<F>::new(4).unwrap();
        let trace = Trace::new(&cs, &domain);

        assert_eq!(trace.qcp.len(), 1);
        let expected = vec![F::zero(), F::one(), F::zero(), F::one()];
        assert_eq!(trace.qcp[0], expected);

        let selectors = trace.commitment_selectors();
        assert_eq!(selectors.len(), 1);
        assert_eq!(selectors[0].0, TraceColumn::Qcp(0));
        assert_eq!(selectors[0].1, expected.as_slice());
        assert_eq!(selectors[0].0.to_string(), "qcp[0]");
    }

    #[test]
    fn test_support_and_permutation_polynomials() {
        let domain = EvaluationDomain::<F>::new_without_precompute(4).unwrap();
        let support = get_support_permutation(&domain);
        assert_eq!(support.len(), 12);

        let g = domain.generator();
        let u = domain.coset_shift();
        assert_eq!(support[1], g);
        assert_eq!(support[4], u);
        assert_eq!(support[5], u.mul(&g));
        assert_eq!(support[8], u.mul(&u));
        assert_eq!(support[11], u.mul(&u).mul(&g.pow(&[3])));

        // the three cosets are disjoint
        for i in 0..12 {
            for j in i + 1..12 {
                assert_ne!(support[i], support[j]);
            }
        }

        let identity: Vec<usize> = (0..12).collect();
        let [s1, s2, s3] = compute_permutation_polynomials(&identity, &domain);
        assert_eq!(s1, support[0..4].to_vec());
        assert_eq!(s2, support[4..8].to_vec());
        assert_eq!(s3, support[8..12].to_vec());

        let cs = sample_cs();
        let s = build_permutation(&cs, 4);
        let [s1, _, s3] = compute_permutation_polynomials(&s, &domain);
        assert_eq!(s1[0], support[11]);
        assert_eq!(s3[1], support[2]);
    }

    #[test]
    #[should_panic]
    fn test_trace_larger_than_domain() {
        let cs = sample_cs();
        let domain = EvaluationDomain::<F>::new(2).unwrap();
        Trace::new(&cs, &domain);
    }
}
