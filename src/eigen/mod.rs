//! Eigendecomposition algorithms.

pub mod jacobi;

pub use jacobi::{Eigenpair, JacobiMethod, JacobiOptions, jacobi_eigen};
