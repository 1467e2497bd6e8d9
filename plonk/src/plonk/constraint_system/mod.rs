use lyra_algebra::traits::Scalar;

pub mod sparse;

/// Default used constraint system.
pub use sparse::SparseCS;

/// Variable index
pub type VarIndex = usize;
/// Constraint index
pub type CsIndex = usize;
/// Index into the coefficient table of a constraint system
pub type CoeffIndex = usize;

/// A sparse arithmetic gate
/// `ql·xa + qr·xb + qm·xa·xb + qo·xc + qk = 0`,
/// where the wires point at variables and the selectors at interned coefficients.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseGate {
    /// left wire.
    pub xa: VarIndex,
    /// right wire.
    pub xb: VarIndex,
    /// output wire.
    pub xc: VarIndex,
    /// left coefficient.
    pub ql: CoeffIndex,
    /// right coefficient.
    pub qr: CoeffIndex,
    /// multiplication coefficient.
    pub qm: CoeffIndex,
    /// output coefficient.
    pub qo: CoeffIndex,
    /// constant coefficient.
    pub qk: CoeffIndex,
}

/// A gate with its coefficients resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GateView<'a, F> {
    pub ql: &'a F,
    pub qr: &'a F,
    pub qm: &'a F,
    pub qo: &'a F,
    pub qk: &'a F,
    pub xa: VarIndex,
    pub xb: VarIndex,
    pub xc: VarIndex,
}

/// A group of wires committed to outside the circuit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentGroup {
    /// Indices of the constraints whose wires are committed, counted without the
    /// public-input rows.
    pub committed: Vec<CsIndex>,
    /// Index of the constraint that binds the commitment value.
    pub commitment_constraint_index: CsIndex,
}

/// Trait for PLONK constraint systems.
///
/// Variable ids are laid out as public variables first, then secret variables, then
/// internal variables.
pub trait ConstraintSystem {
    type Field: Scalar;

    /// Return the number of public variables.
    fn nb_public_variables(&self) -> usize;

    /// Return the number of secret variables.
    fn nb_secret_variables(&self) -> usize;

    /// Return the number of internal variables.
    fn nb_internal_variables(&self) -> usize;

    /// Return the number of variables of all kinds.
    fn nb_variables(&self) -> usize {
        self.nb_public_variables() + self.nb_secret_variables() + self.nb_internal_variables()
    }

    /// Return the gates, in circuit-definition order.
    fn gates(&self) -> &[SparseGate];

    /// Return the number of constraints in the system, public-input rows excluded.
    fn nb_constraints(&self) -> usize {
        self.gates().len()
    }

    /// Return the coefficient at `index` of the coefficient table.
    fn coefficient(&self, index: CoeffIndex) -> &Self::Field;

    /// Return the commitment groups.
    fn commitment_groups(&self) -> &[CommitmentGroup];

    /// Iterate over the constraints in circuit-definition order.
    fn iter_constraints(&self) -> ConstraintIter<'_, Self>
    where
        Self: Sized,
    {
        ConstraintIter {
            cs: self,
            gates: self.gates().iter(),
        }
    }
}

/// Iterator over the constraints of a constraint system.
pub struct ConstraintIter<'a, CS> {
    cs: &'a CS,
    gates: core::slice::Iter<'a, SparseGate>,
}

impl<'a, CS: ConstraintSystem> Iterator for ConstraintIter<'a, CS> {
    type Item = GateView<'a, CS::Field>;

    fn next(&mut self) -> Option<Self::Item> {
        let gate = self.gates.next()?;
        Some(GateView {
            ql: self.cs.coefficient(gate.ql),
            qr: self.cs.coefficient(gate.qr),
            qm: self.cs.coefficient(gate.qm),
            qo: self.cs.coefficient(gate.qo),
            qk: self.cs.coefficient(gate.qk),
            xa: gate.xa,
            xb: gate.xb,
            xc: gate.xc,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.gates.size_hint()
    }
}

impl<'a, CS: ConstraintSystem> ExactSizeIterator for ConstraintIter<'a, CS> {}
