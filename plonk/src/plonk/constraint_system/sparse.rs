use crate::plonk::constraint_system::{
    CoeffIndex, CommitmentGroup, ConstraintSystem, CsIndex, SparseGate, VarIndex,
};
use ark_std::collections::BTreeMap;
use lyra_algebra::prelude::*;

/// Index of the coefficient `0` in every coefficient table.
pub const COEFF_ID_ZERO: CoeffIndex = 0;
/// Index of the coefficient `1` in every coefficient table.
pub const COEFF_ID_ONE: CoeffIndex = 1;
/// Index of the coefficient `-1` in every coefficient table.
pub const COEFF_ID_MINUS_ONE: CoeffIndex = 2;

/// A sparse constraint system.
///
/// The numbers of public and secret variables are fixed at construction, so that ids
/// handed out for internal variables never shift.
#[derive(Clone, Debug)]
pub struct SparseCS<F> {
    nb_public: usize,
    nb_secret: usize,
    nb_internal: usize,
    gates: Vec<SparseGate>,
    coefficients: Vec<F>,
    coefficient_ids: BTreeMap<Vec<u8>, CoeffIndex>,
    commitment_groups: Vec<CommitmentGroup>,
}

impl<F: Scalar> SparseCS<F> {
    /// Create a constraint system with `nb_public` public and `nb_secret` secret variables.
    pub fn new(nb_public: usize, nb_secret: usize) -> Self {
        let mut cs = SparseCS {
            nb_public,
            nb_secret,
            nb_internal: 0,
            gates: vec![],
            coefficients: vec![],
            coefficient_ids: BTreeMap::new(),
            commitment_groups: vec![],
        };
        cs.add_coefficient(F::zero());
        cs.add_coefficient(F::one());
        cs.add_coefficient(F::one().neg());
        cs
    }

    /// Return the id of the `i`-th public variable.
    pub fn public_var(&self, i: usize) -> VarIndex {
        assert!(i < self.nb_public, "public variable index out of bound");
        i
    }

    /// Return the id of the `i`-th secret variable.
    pub fn secret_var(&self, i: usize) -> VarIndex {
        assert!(i < self.nb_secret, "secret variable index out of bound");
        self.nb_public + i
    }

    /// Allocate a new internal variable.
    pub fn new_internal_variable(&mut self) -> VarIndex {
        self.nb_internal += 1;
        self.nb_public + self.nb_secret + self.nb_internal - 1
    }

    /// Intern `coeff` into the coefficient table and return its index.
    pub fn add_coefficient(&mut self, coeff: F) -> CoeffIndex {
        let key = coeff.to_bytes();
        if let Some(id) = self.coefficient_ids.get(&key) {
            return *id;
        }
        let id = self.coefficients.len();
        self.coefficients.push(coeff);
        self.coefficient_ids.insert(key, id);
        id
    }

    /// Return the number of distinct coefficients.
    pub fn nb_coefficients(&self) -> usize {
        self.coefficients.len()
    }

    /// Add the gate `ql·xa + qr·xb + qm·xa·xb + qo·xc + qk = 0`, with
    /// `wires = [xa, xb, xc]` and `selectors = [ql, qr, qm, qo, qk]`.
    pub fn insert_gate(&mut self, wires: [VarIndex; 3], selectors: [F; 5]) -> CsIndex {
        let nb_variables = self.nb_variables();
        for w in wires.iter() {
            assert!(*w < nb_variables, "wire index out of bound");
        }
        let [ql, qr, qm, qo, qk] = selectors;
        let gate = SparseGate {
            xa: wires[0],
            xb: wires[1],
            xc: wires[2],
            ql: self.add_coefficient(ql),
            qr: self.add_coefficient(qr),
            qm: self.add_coefficient(qm),
            qo: self.add_coefficient(qo),
            qk: self.add_coefficient(qk),
        };
        self.push_gate(gate)
    }

    fn push_gate(&mut self, gate: SparseGate) -> CsIndex {
        self.gates.push(gate);
        self.gates.len() - 1
    }

    fn check_var(&self, var: VarIndex) {
        assert!(var < self.nb_variables(), "variable index out of bound");
    }

    /// Add an Add gate: `left + right = out`.
    pub fn insert_add_gate(&mut self, left: VarIndex, right: VarIndex, out: VarIndex) -> CsIndex {
        self.check_var(left);
        self.check_var(right);
        self.check_var(out);
        self.push_gate(SparseGate {
            xa: left,
            xb: right,
            xc: out,
            ql: COEFF_ID_ONE,
            qr: COEFF_ID_ONE,
            qm: COEFF_ID_ZERO,
            qo: COEFF_ID_MINUS_ONE,
            qk: COEFF_ID_ZERO,
        })
    }

    /// Add a Mul gate: `left * right = out`.
    pub fn insert_mul_gate(&mut self, left: VarIndex, right: VarIndex, out: VarIndex) -> CsIndex {
        self.check_var(left);
        self.check_var(right);
        self.check_var(out);
        self.push_gate(SparseGate {
            xa: left,
            xb: right,
            xc: out,
            ql: COEFF_ID_ZERO,
            qr: COEFF_ID_ZERO,
            qm: COEFF_ID_ONE,
            qo: COEFF_ID_MINUS_ONE,
            qk: COEFF_ID_ZERO,
        })
    }

    /// Add an equality gate: `left - right = 0`. The output wire is unused and is
    /// wired to `left`.
    pub fn insert_equal_gate(&mut self, left: VarIndex, right: VarIndex) -> CsIndex {
        self.check_var(left);
        self.check_var(right);
        self.push_gate(SparseGate {
            xa: left,
            xb: right,
            xc: left,
            ql: COEFF_ID_ONE,
            qr: COEFF_ID_MINUS_ONE,
            qm: COEFF_ID_ZERO,
            qo: COEFF_ID_ZERO,
            qk: COEFF_ID_ZERO,
        })
    }

    /// Add a constant gate: `var - constant = 0`. The right and output wires are
    /// unused and are wired to `var`.
    pub fn insert_constant_gate(&mut self, var: VarIndex, constant: F) -> CsIndex {
        self.check_var(var);
        let qk = self.add_coefficient(constant.neg());
        self.push_gate(SparseGate {
            xa: var,
            xb: var,
            xc: var,
            ql: COEFF_ID_ONE,
            qr: COEFF_ID_ZERO,
            qm: COEFF_ID_ZERO,
            qo: COEFF_ID_ZERO,
            qk,
        })
    }

    /// Register a group of committed constraint rows and return its index.
    pub fn add_commitment_group(
        &mut self,
        committed: Vec<CsIndex>,
        commitment_constraint_index: CsIndex,
    ) -> usize {
        self.commitment_groups.push(CommitmentGroup {
            committed,
            commitment_constraint_index,
        });
        self.commitment_groups.len() - 1
    }
}

impl<F: Scalar> ConstraintSystem for SparseCS<F> {
    type Field = F;

    fn nb_public_variables(&self) -> usize {
        self.nb_public
    }

    fn nb_secret_variables(&self) -> usize {
        self.nb_secret
    }

    fn nb_internal_variables(&self) -> usize {
        self.nb_internal
    }

    fn gates(&self) -> &[SparseGate] {
        &self.gates
    }

    fn coefficient(&self, index: CoeffIndex) -> &F {
        &self.coefficients[index]
    }

    fn commitment_groups(&self) -> &[CommitmentGroup] {
        &self.commitment_groups
    }
}
