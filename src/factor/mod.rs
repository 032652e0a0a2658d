//! Matrix factorization algorithms.

pub mod lu;

pub use lu::{Doolittle, LuDecomposer, LuFactorizer, lu_decompose};
