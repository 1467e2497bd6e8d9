#![allow(clippy::upper_case_acronyms)]

/// Module for the BLS12-377 curve
pub mod bls12_377;

/// Module for error handling
pub mod errors;

/// Module for the prelude
pub mod prelude;

/// Module for test rng
pub mod rand_helper;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for traits
pub mod traits;

/// Module for utils
pub mod utils;

pub use ark_std::{borrow, fmt, iter, marker, ops, rand, One, UniformRand, Zero};
