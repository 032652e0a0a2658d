//! Core dimension machinery shared by vectors, matrices and expressions.

pub mod dims;

pub use dims::{Const, Dim, DimMerge, Dyn};
