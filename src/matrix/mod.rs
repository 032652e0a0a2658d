//! Owned 2-D numeric containers, row-major.
//!
//! Both extents are independently static or dynamic, so mixed forms such
//! as "static row count, runtime column count" are ordinary instances of
//! the same type. The invariant that every row has the same column count
//! is enforced by every constructor and mutating operation.

use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use num_traits::Float;

use crate::core::dims::{Const, Dim, DimMerge, Dyn};
use crate::error::LinexError;
use crate::expr::{MExpr, MatrixExpr, Transpose};
use crate::vector::Vector;

/// Owned row-major matrix with extents `R x C`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T, R: Dim, C: Dim> {
    pub(crate) rows: R,
    pub(crate) cols: C,
    pub(crate) data: Vec<T>,
}

/// Fixed-size matrix.
pub type SMatrix<T, const R: usize, const C: usize> = Matrix<T, Const<R>, Const<C>>;
/// Runtime-sized matrix.
pub type DMatrix<T> = Matrix<T, Dyn, Dyn>;

impl<T, R: Dim, C: Dim> Matrix<T, R, C> {
    pub(crate) fn from_parts(rows: R, cols: C, data: Vec<T>) -> Self {
        debug_assert_eq!(rows.value() * cols.value(), data.len());
        Matrix { rows, cols, data }
    }

    pub fn nrows(&self) -> usize {
        self.rows.value()
    }

    pub fn ncols(&self) -> usize {
        self.cols.value()
    }

    /// Bounds-checked element access.
    pub fn at(&self, i: usize, j: usize) -> Result<&T, LinexError> {
        if i >= self.nrows() {
            return Err(LinexError::OutOfBounds {
                index: i,
                len: self.nrows(),
            });
        }
        if j >= self.ncols() {
            return Err(LinexError::OutOfBounds {
                index: j,
                len: self.ncols(),
            });
        }
        Ok(&self.data[i * self.ncols() + j])
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut T, LinexError> {
        if i >= self.nrows() {
            return Err(LinexError::OutOfBounds {
                index: i,
                len: self.nrows(),
            });
        }
        if j >= self.ncols() {
            return Err(LinexError::OutOfBounds {
                index: j,
                len: self.ncols(),
            });
        }
        let idx = i * self.ncols() + j;
        Ok(&mut self.data[idx])
    }
}

impl<T: Float, R: Dim, C: Dim> Matrix<T, R, C> {
    /// Zero-filled matrix with explicit dimension tags (covers the mixed
    /// static/dynamic forms).
    pub fn zeros_generic(rows: R, cols: C) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows.value() * cols.value()],
        }
    }

    pub fn from_fn_generic(rows: R, cols: C, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows.value() * cols.value());
        for i in 0..rows.value() {
            for j in 0..cols.value() {
                data.push(f(i, j));
            }
        }
        Matrix { rows, cols, data }
    }

    /// Row `i` as an owned vector.
    pub fn row(&self, i: usize) -> Vector<T, C> {
        let ncols = self.ncols();
        Vector::from_parts(self.cols, self.data[i * ncols..(i + 1) * ncols].to_vec())
    }

    /// Column `j` as an owned vector.
    pub fn col(&self, j: usize) -> Vector<T, R> {
        let data = (0..self.nrows()).map(|i| self[(i, j)]).collect();
        Vector::from_parts(self.rows, data)
    }

    /// Lazy transpose view of this matrix.
    pub fn transpose(&self) -> MExpr<Transpose<&Self>> {
        MExpr(Transpose::new(self))
    }
}

impl<T: Float, D: Dim> Matrix<T, D, D> {
    /// Diagonal matrix with `value` on the diagonal, zero elsewhere.
    pub fn diagonal_generic(dim: D, value: T) -> Self {
        Self::from_fn_generic(dim, dim, |i, j| if i == j { value } else { T::zero() })
    }

    pub fn identity_generic(dim: D) -> Self {
        Self::diagonal_generic(dim, T::one())
    }
}

impl<T: Float, const R: usize, const C: usize> SMatrix<T, R, C> {
    pub fn zeros() -> Self {
        Self::zeros_generic(Const, Const)
    }

    pub fn filled(value: T) -> Self {
        Matrix {
            rows: Const,
            cols: Const,
            data: vec![value; R * C],
        }
    }

    /// Matrix from a row-major literal.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);
        for row in &rows {
            data.extend_from_slice(row);
        }
        Matrix {
            rows: Const,
            cols: Const,
            data,
        }
    }

    pub fn from_fn(f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_fn_generic(Const, Const, f)
    }
}

impl<T: Float, const N: usize> SMatrix<T, N, N> {
    /// Diagonal matrix with `value` on the diagonal, zero elsewhere.
    /// `diagonal(T::one())` is the identity.
    pub fn diagonal(value: T) -> Self {
        Self::diagonal_generic(Const, value)
    }

    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }
}

impl<T: Float> DMatrix<T> {
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::zeros_generic(Dyn(nrows), Dyn(ncols))
    }

    pub fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        Matrix {
            rows: Dyn(nrows),
            cols: Dyn(ncols),
            data: vec![value; nrows * ncols],
        }
    }

    /// Matrix from runtime rows. Every row must have the same length.
    pub fn from_row_vecs(rows: Vec<Vec<T>>) -> Result<Self, LinexError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in &rows {
            if row.len() != ncols {
                return Err(LinexError::ShapeMismatch {
                    left: ncols,
                    right: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: Dyn(nrows),
            cols: Dyn(ncols),
            data,
        })
    }

    pub fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_fn_generic(Dyn(nrows), Dyn(ncols), f)
    }

    pub fn diagonal(n: usize, value: T) -> Self {
        Self::diagonal_generic(Dyn(n), value)
    }

    pub fn identity(n: usize) -> Self {
        Self::identity_generic(Dyn(n))
    }
}

impl<T: Float, R: Dim, C: Dim> MatrixExpr for Matrix<T, R, C> {
    type Elem = T;
    type Rows = R;
    type Cols = C;

    fn rows_dim(&self) -> R {
        self.rows
    }

    fn cols_dim(&self) -> C {
        self.cols
    }

    fn eval(&self, i: usize, j: usize) -> T {
        self.data[i * self.cols.value() + j]
    }
}

impl<T, R: Dim, C: Dim> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(j < self.cols.value());
        &self.data[i * self.cols.value() + j]
    }
}

impl<T, R: Dim, C: Dim> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(j < self.cols.value());
        let idx = i * self.cols.value() + j;
        &mut self.data[idx]
    }
}

// ~~~~~~~~~~~~~~~~~~ compound assignment ~~~~~~~~~~~~~~~~~~

impl<T, R, C, E> AddAssign<E> for Matrix<T, R, C>
where
    T: Float,
    R: Dim + DimMerge<E::Rows>,
    C: Dim + DimMerge<E::Cols>,
    E: MatrixExpr<Elem = T>,
{
    /// # Panics
    /// Panics on a runtime shape mismatch when any extent is dynamic.
    fn add_assign(&mut self, rhs: E) {
        self.rows.merge(rhs.rows_dim());
        self.cols.merge(rhs.cols_dim());
        let ncols = self.ncols();
        for i in 0..self.nrows() {
            for j in 0..ncols {
                self.data[i * ncols + j] = self.data[i * ncols + j] + rhs.eval(i, j);
            }
        }
    }
}

impl<T, R, C, E> SubAssign<E> for Matrix<T, R, C>
where
    T: Float,
    R: Dim + DimMerge<E::Rows>,
    C: Dim + DimMerge<E::Cols>,
    E: MatrixExpr<Elem = T>,
{
    /// # Panics
    /// Panics on a runtime shape mismatch when any extent is dynamic.
    fn sub_assign(&mut self, rhs: E) {
        self.rows.merge(rhs.rows_dim());
        self.cols.merge(rhs.cols_dim());
        let ncols = self.ncols();
        for i in 0..self.nrows() {
            for j in 0..ncols {
                self.data[i * ncols + j] = self.data[i * ncols + j] - rhs.eval(i, j);
            }
        }
    }
}

// In-place matrix product. Only legal when the product keeps self's
// shape, which the `DimMerge` bounds pin down for static extents.
impl<'b, T, R, C, R2, C2> MulAssign<&'b Matrix<T, R2, C2>> for Matrix<T, R, C>
where
    T: Float,
    R: Dim,
    C: Dim + DimMerge<R2> + DimMerge<C2>,
    R2: Dim,
    C2: Dim,
{
    /// # Panics
    /// Panics on a runtime shape mismatch when any extent is dynamic.
    fn mul_assign(&mut self, rhs: &'b Matrix<T, R2, C2>) {
        self.cols.merge(rhs.cols_dim());
        let product = (&*self * rhs).eval();
        self.data = product.data;
    }
}

impl<T, R, C, E> MulAssign<MExpr<E>> for Matrix<T, R, C>
where
    T: Float,
    R: Dim,
    C: Dim + DimMerge<E::Rows> + DimMerge<E::Cols>,
    E: MatrixExpr<Elem = T>,
{
    /// # Panics
    /// Panics on a runtime shape mismatch when any extent is dynamic.
    fn mul_assign(&mut self, rhs: MExpr<E>) {
        self.cols.merge(rhs.cols_dim());
        let product = (&*self * rhs).eval();
        self.data = product.data;
    }
}

macro_rules! matrix_scalar_assign_impls {
    ($($t:ty),*) => {$(
        impl<R: Dim, C: Dim> MulAssign<$t> for Matrix<$t, R, C> {
            fn mul_assign(&mut self, rhs: $t) {
                for value in &mut self.data {
                    *value *= rhs;
                }
            }
        }

        impl<R: Dim, C: Dim> DivAssign<$t> for Matrix<$t, R, C> {
            fn div_assign(&mut self, rhs: $t) {
                for value in &mut self.data {
                    *value /= rhs;
                }
            }
        }
    )*};
}

matrix_scalar_assign_impls!(f32, f64);

// ~~~~~~~~~~~~~~~~~~ conversions ~~~~~~~~~~~~~~~~~~

impl<T: Float, const R: usize, const C: usize> From<[[T; C]; R]> for SMatrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Float, const R: usize, const C: usize> From<SMatrix<T, R, C>> for DMatrix<T> {
    fn from(matrix: SMatrix<T, R, C>) -> Self {
        Matrix {
            rows: Dyn(R),
            cols: Dyn(C),
            data: matrix.data,
        }
    }
}

impl<T: Float, const R: usize, const C: usize> TryFrom<DMatrix<T>> for SMatrix<T, R, C> {
    type Error = LinexError;

    fn try_from(matrix: DMatrix<T>) -> Result<Self, LinexError> {
        if matrix.nrows() != R {
            return Err(LinexError::ShapeMismatch {
                left: R,
                right: matrix.nrows(),
            });
        }
        if matrix.ncols() != C {
            return Err(LinexError::ShapeMismatch {
                left: C,
                right: matrix.ncols(),
            });
        }
        Ok(Matrix {
            rows: Const,
            cols: Const,
            data: matrix.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_fills_only_the_diagonal() {
        let m = SMatrix::<f64, 3, 3>::diagonal(2.0);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
        assert_eq!(SMatrix::<f64, 2, 2>::identity()[(1, 1)], 1.0);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = DMatrix::from_row_vecs(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, LinexError::ShapeMismatch { left: 2, right: 1 });
    }

    #[test]
    fn row_and_col_extraction() {
        let m = SMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.row(1).as_slice(), &[3.0, 4.0]);
        assert_eq!(m.col(0).as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn checked_access_reports_bounds() {
        let m = DMatrix::<f64>::zeros(2, 3);
        assert!(m.at(1, 2).is_ok());
        assert_eq!(
            m.at(2, 0),
            Err(LinexError::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            m.at(0, 3),
            Err(LinexError::OutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn in_place_product_keeps_shape() {
        let mut m = SMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let id = SMatrix::<f64, 2, 2>::identity();
        m *= &id;
        assert_eq!(m, SMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    }
}
