//! The PLONK setup: evaluation domain, constraint system, trace and key assembly.

/// Module for the constraint system.
pub mod constraint_system;

/// Module for the evaluation domain.
pub mod domain;

/// Module for setup.
pub mod setup;

/// Module for the trace and the copy permutation.
pub mod trace;
