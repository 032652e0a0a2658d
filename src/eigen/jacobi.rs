//! Cyclic Jacobi eigensolver for real symmetric matrices.
//!
//! Each sweep finds the off-diagonal entry of largest magnitude, builds a
//! Givens-like rotation that annihilates it, and conjugates the working
//! copy by that rotation, accumulating the rotations so their columns end
//! up as the eigenvectors. Terminates when the off-diagonal mass or the
//! diagonal drift falls under tolerance, or at the sweep cap (reported,
//! not fatal).
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §8.5

use num_traits::Float;

use crate::core::dims::{Dim, DimMerge};
use crate::error::LinexError;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Tolerances and the sweep cap.
#[derive(Debug, Clone, Copy)]
pub struct JacobiOptions<T> {
    /// Off-diagonal magnitude under which the matrix counts as diagonal;
    /// also the symmetry tolerance.
    pub abs_tol: T,
    /// Largest per-sweep diagonal drift under which iteration stops.
    pub rel_tol: T,
    /// Hard iteration cap; exceeding it warns and returns anyway.
    pub max_sweeps: usize,
}

impl<T: Float> Default for JacobiOptions<T> {
    fn default() -> Self {
        JacobiOptions {
            abs_tol: T::from(1e-10).unwrap(),
            rel_tol: T::from(1e-12).unwrap(),
            max_sweeps: 10_000,
        }
    }
}

/// One eigenvalue with its eigenvector. Pairs come back in diagonal
/// order, not sorted by magnitude.
#[derive(Debug, Clone)]
pub struct Eigenpair<T, D: Dim> {
    pub value: T,
    pub vector: Vector<T, D>,
}

/// Cyclic Jacobi solver over a square matrix.
pub struct JacobiMethod<T, D: Dim> {
    matrix: Matrix<T, D, D>,
    options: JacobiOptions<T>,
}

impl<T, D> JacobiMethod<T, D>
where
    T: Float,
    D: Dim + DimMerge<D, Output = D>,
{
    pub fn new(matrix: Matrix<T, D, D>) -> Self {
        Self::with_options(matrix, JacobiOptions::default())
    }

    pub fn with_options(matrix: Matrix<T, D, D>, options: JacobiOptions<T>) -> Self {
        JacobiMethod { matrix, options }
    }

    pub fn matrix(&self) -> &Matrix<T, D, D> {
        &self.matrix
    }

    /// Run the iteration and return all eigenpairs.
    ///
    /// Fails with [`LinexError::NotSymmetric`] if the input (or, as a
    /// consistency assertion, any intermediate) is not symmetric within
    /// `abs_tol`, and [`LinexError::NonSquare`] for a dynamically-sized
    /// non-square input.
    pub fn solve(&self) -> Result<Vec<Eigenpair<T, D>>, LinexError> {
        let n = self.matrix.nrows();
        if n != self.matrix.ncols() {
            return Err(LinexError::NonSquare {
                rows: n,
                cols: self.matrix.ncols(),
            });
        }
        if !self.is_symmetric(&self.matrix) {
            return Err(LinexError::NotSymmetric);
        }

        let dim = self.matrix.rows;
        let mut target = self.matrix.clone();
        let mut ps = Matrix::identity_generic(dim);

        if n >= 2 {
            let half = T::from(0.5).unwrap();
            let mut sweeps = 0;
            while sweeps < self.options.max_sweeps {
                if !self.is_symmetric(&target) {
                    return Err(LinexError::NotSymmetric);
                }

                let (p, q) = Self::max_offdiag(&target);
                if target[(p, q)].abs() < self.options.abs_tol {
                    break;
                }

                let alpha = (target[(p, p)] - target[(q, q)]) * half;
                let beta = -target[(p, q)];
                let gamma = alpha.abs() / (alpha * alpha + beta * beta).sqrt();

                let cos_ = ((T::one() + gamma) * half).sqrt();
                let sin_mag = ((T::one() - gamma) * half).sqrt();
                let sin_ = if alpha * beta < T::zero() {
                    -sin_mag
                } else {
                    sin_mag
                };

                let mut rotation = Matrix::identity_generic(dim);
                rotation[(p, p)] = cos_;
                rotation[(p, q)] = sin_;
                rotation[(q, p)] = -sin_;
                rotation[(q, q)] = cos_;

                let mut rotated = (rotation.transpose() * &target * &rotation).eval();
                // analytically zero; clear the floating-point residue
                rotated[(p, q)] = T::zero();
                rotated[(q, p)] = T::zero();

                if Self::max_diagonal_drift(&target, &rotated) < self.options.rel_tol {
                    break;
                }

                target = rotated;
                ps = (&ps * &rotation).eval();
                sweeps += 1;
            }

            if sweeps == self.options.max_sweeps {
                eprintln!(
                    "jacobi: tolerance not reached after {sweeps} sweeps; result may be inaccurate"
                );
            }
        }

        Ok((0..n)
            .map(|i| Eigenpair {
                value: target[(i, i)],
                vector: ps.col(i),
            })
            .collect())
    }

    fn is_symmetric(&self, matrix: &Matrix<T, D, D>) -> bool {
        let n = matrix.nrows();
        for i in 0..n {
            for j in i + 1..n {
                if (matrix[(i, j)] - matrix[(j, i)]).abs() > self.options.abs_tol {
                    return false;
                }
            }
        }
        true
    }

    /// Pivot selection: the strict-upper-triangle entry of largest
    /// magnitude.
    fn max_offdiag(matrix: &Matrix<T, D, D>) -> (usize, usize) {
        let n = matrix.nrows();
        let mut max = matrix[(0, 1)].abs();
        let mut index = (0, 1);
        for i in 0..n - 1 {
            for j in i + 1..n {
                if matrix[(i, j)].abs() > max {
                    max = matrix[(i, j)].abs();
                    index = (i, j);
                }
            }
        }
        index
    }

    fn max_diagonal_drift(before: &Matrix<T, D, D>, after: &Matrix<T, D, D>) -> T {
        let mut drift = T::zero();
        for i in 0..before.nrows() {
            let delta = (before[(i, i)] - after[(i, i)]).abs();
            if delta > drift {
                drift = delta;
            }
        }
        drift
    }
}

/// Solve for the eigenpairs of `matrix` with default tolerances.
pub fn jacobi_eigen<T, D>(matrix: &Matrix<T, D, D>) -> Result<Vec<Eigenpair<T, D>>, LinexError>
where
    T: Float,
    D: Dim + DimMerge<D, Output = D>,
{
    JacobiMethod::new(matrix.clone()).solve()
}
