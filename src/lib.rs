//! linex: lazily evaluated linear algebra over typed dimensions
//!
//! This crate provides fixed-size and runtime-sized vectors and matrices
//! whose arithmetic operators build lazy expression objects instead of
//! materializing temporaries, plus two decompositions layered on top: a
//! cyclic Jacobi eigensolver for symmetric matrices and Doolittle LU
//! factorization.

pub mod core;
pub mod error;
pub mod expr;
pub mod factor;
pub mod functions;
pub mod matrix;
pub mod vector;

pub mod eigen;

// Re-exports for convenience
pub use crate::core::dims::{Const, Dim, DimMerge, Dyn};
pub use eigen::{Eigenpair, JacobiMethod, JacobiOptions, jacobi_eigen};
pub use error::LinexError;
pub use expr::{MExpr, MatrixExpr, VExpr, VectorExpr, transpose};
pub use factor::{Doolittle, LuDecomposer, LuFactorizer, lu_decompose};
pub use functions::*;
pub use matrix::{DMatrix, Matrix, SMatrix};
pub use vector::{DVector, SVector, Vector, Vector3, vec3};
