#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for the crate-level error type.
pub mod errors;

/// Module for the PLONK setup: domain, constraint system, trace and key assembly.
pub mod plonk;

/// Module for polynomial commitment schemes.
pub mod poly_commit;
