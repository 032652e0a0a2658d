//! LU decomposition by Doolittle's algorithm, without pivoting.
//!
//! Factors a square matrix into a unit-lower-triangular `L` and an
//! upper-triangular `U` with `L * U` reconstructing the input. No row
//! exchanges are performed: a zero leading pivot at any elimination step
//! divides by zero and propagates `inf`/`NaN` through the factors. The
//! algorithm is therefore only defined for matrices whose leading
//! principal minors are all nonzero (e.g. strictly diagonally dominant
//! ones).
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.2

use std::marker::PhantomData;

use num_traits::Float;

use crate::core::dims::Dim;
use crate::error::LinexError;
use crate::matrix::Matrix;

/// Strategy seam for LU factorization variants.
pub trait LuFactorizer<T: Float, D: Dim> {
    /// Factor `matrix` into `(L, U)`.
    fn factor(matrix: &Matrix<T, D, D>)
    -> Result<(Matrix<T, D, D>, Matrix<T, D, D>), LinexError>;
}

/// Doolittle convention: unit diagonal on `L`, pivots on `U`.
pub struct Doolittle;

impl<T: Float, D: Dim> LuFactorizer<T, D> for Doolittle {
    fn factor(
        matrix: &Matrix<T, D, D>,
    ) -> Result<(Matrix<T, D, D>, Matrix<T, D, D>), LinexError> {
        let n = matrix.nrows();
        if n != matrix.ncols() {
            return Err(LinexError::NonSquare {
                rows: n,
                cols: matrix.ncols(),
            });
        }

        // In-place elimination over a working copy; column `step` below
        // the pivot becomes L entries, the rest the Schur complement.
        let mut lu = matrix.clone();
        for step in 0..n.saturating_sub(1) {
            let inv = T::one() / lu[(step, step)]; // unguarded: no pivoting
            for i in step + 1..n {
                lu[(i, step)] = lu[(i, step)] * inv;
            }
            for i in step + 1..n {
                for j in step + 1..n {
                    lu[(i, j)] = lu[(i, j)] - lu[(step, j)] * lu[(i, step)];
                }
            }
        }

        let dim = matrix.rows;
        let lower = Matrix::from_fn_generic(dim, dim, |i, j| {
            if i == j {
                T::one()
            } else if j < i {
                lu[(i, j)]
            } else {
                T::zero()
            }
        });
        let upper = Matrix::from_fn_generic(dim, dim, |i, j| {
            if j >= i { lu[(i, j)] } else { T::zero() }
        });
        Ok((lower, upper))
    }
}

/// Front end holding the input matrix and the chosen strategy.
pub struct LuDecomposer<T, D: Dim, S = Doolittle> {
    matrix: Matrix<T, D, D>,
    _solver: PhantomData<S>,
}

impl<T, D, S> LuDecomposer<T, D, S>
where
    T: Float,
    D: Dim,
    S: LuFactorizer<T, D>,
{
    pub fn new(matrix: Matrix<T, D, D>) -> Self {
        LuDecomposer {
            matrix,
            _solver: PhantomData,
        }
    }

    pub fn matrix(&self) -> &Matrix<T, D, D> {
        &self.matrix
    }

    /// Factor the held matrix into `(L, U)`.
    ///
    /// Fails with [`LinexError::NonSquare`] for a dynamically-sized
    /// non-square input; a static non-square input does not compile.
    pub fn solve(&self) -> Result<(Matrix<T, D, D>, Matrix<T, D, D>), LinexError> {
        S::factor(&self.matrix)
    }
}

/// Factor `matrix` into `(L, U)` with the Doolittle strategy.
pub fn lu_decompose<T: Float, D: Dim>(
    matrix: &Matrix<T, D, D>,
) -> Result<(Matrix<T, D, D>, Matrix<T, D, D>), LinexError> {
    Doolittle::factor(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{DMatrix, SMatrix};

    #[test]
    fn factors_a_known_3x3_exactly() {
        let m = SMatrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
        let (l, u) = lu_decompose(&m).unwrap();
        assert_eq!(l, SMatrix::from_rows([[1.0, 0.0, 0.0], [2.0, 1.0, 0.0], [4.0, 3.0, 1.0]]));
        assert_eq!(u, SMatrix::from_rows([[2.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 2.0]]));
    }

    #[test]
    fn dynamic_non_square_is_rejected() {
        let m = DMatrix::<f64>::zeros(2, 3);
        assert_eq!(
            lu_decompose(&m).err(),
            Some(LinexError::NonSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn decomposer_front_end_matches_free_function() {
        let m = SMatrix::from_rows([[4.0, 2.0], [6.0, 5.0]]);
        let (l, u) = LuDecomposer::<_, _, Doolittle>::new(m.clone()).solve().unwrap();
        assert_eq!(l, SMatrix::from_rows([[1.0, 0.0], [1.5, 1.0]]));
        assert_eq!(u, SMatrix::from_rows([[4.0, 2.0], [0.0, 2.0]]));
    }
}
