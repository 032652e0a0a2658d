//! Query free functions over vector and matrix expressions, plus the
//! closed-form 2x2/3x3 determinant and inverse.

use num_traits::{Float, Zero};

use crate::core::dims::{Const, Dim, DimMerge};
use crate::error::LinexError;
use crate::expr::vector::{CrossProd, VScalar};
use crate::expr::{DivOp, MatrixExpr, VExpr, VectorExpr};
use crate::matrix::SMatrix;

/// Squared Euclidean length.
pub fn len_square<V: VectorExpr>(vector: &V) -> V::Elem {
    let mut sum = V::Elem::zero();
    for i in 0..vector.len() {
        let value = vector.eval(i);
        sum = sum + value * value;
    }
    sum
}

/// Euclidean length.
pub fn length<V: VectorExpr>(vector: &V) -> V::Elem {
    len_square(vector).sqrt()
}

/// Inner product. Mixed static/dynamic operands are reconciled the usual
/// way; a static/static length mismatch does not compile.
///
/// # Panics
/// Panics on a runtime length mismatch when either side is dynamic.
pub fn dot_prod<L, R>(left: &L, right: &R) -> L::Elem
where
    L: VectorExpr,
    R: VectorExpr<Elem = L::Elem>,
    L::Dim: DimMerge<R::Dim>,
{
    let dim = left.dim().merge(right.dim());
    let mut sum = L::Elem::zero();
    for i in 0..dim.value() {
        sum = sum + left.eval(i) * right.eval(i);
    }
    sum
}

/// Lazy 3-D cross product.
pub fn cross_prod<L, R>(left: L, right: R) -> VExpr<CrossProd<L, R>>
where
    L: VectorExpr<Dim = Const<3>>,
    R: VectorExpr<Elem = L::Elem, Dim = Const<3>>,
{
    VExpr(CrossProd::new(left, right))
}

/// Unit-length rescaling, as a lazy division by the current length.
///
/// Fails with [`LinexError::ZeroLength`] when the length is zero or NaN.
pub fn normalize<V: VectorExpr>(vector: V) -> Result<VExpr<VScalar<V, DivOp>>, LinexError> {
    let len = length(&vector);
    if len == V::Elem::zero() || len.is_nan() {
        return Err(LinexError::ZeroLength);
    }
    Ok(VExpr(VScalar::new(vector, len)))
}

/// Sum of the diagonal. A static non-square argument does not compile.
///
/// # Panics
/// Panics when a dynamically-sized argument is non-square.
pub fn trace<M>(matrix: &M) -> M::Elem
where
    M: MatrixExpr,
    M::Rows: DimMerge<M::Cols>,
{
    let dim = matrix.rows_dim().merge(matrix.cols_dim());
    let mut sum = M::Elem::zero();
    for i in 0..dim.value() {
        sum = sum + matrix.eval(i, i);
    }
    sum
}

/// The `N x N` identity.
pub fn identity_matrix<T: Float, const N: usize>() -> SMatrix<T, N, N> {
    SMatrix::identity()
}

/// The `R x C` zero matrix.
pub fn zero_matrix<T: Float, const R: usize, const C: usize>() -> SMatrix<T, R, C> {
    SMatrix::zeros()
}

impl<T: Float> SMatrix<T, 2, 2> {
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(1, 0)] * self[(0, 1)]
    }

    /// Closed-form inverse. Singular input divides by a zero determinant
    /// and propagates non-finite values rather than erroring.
    pub fn inverse(&self) -> Self {
        let det_inv = T::one() / self.determinant();
        let mut inv = Self::zeros();
        inv[(0, 0)] = det_inv * self[(1, 1)];
        inv[(1, 1)] = det_inv * self[(0, 0)];
        inv[(0, 1)] = -det_inv * self[(0, 1)];
        inv[(1, 0)] = -det_inv * self[(1, 0)];
        inv
    }
}

impl<T: Float> SMatrix<T, 3, 3> {
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] * self[(2, 2)]
            + self[(1, 0)] * self[(2, 1)] * self[(0, 2)]
            + self[(2, 0)] * self[(0, 1)] * self[(1, 2)]
            - self[(0, 0)] * self[(2, 1)] * self[(1, 2)]
            - self[(2, 0)] * self[(1, 1)] * self[(0, 2)]
            - self[(1, 0)] * self[(0, 1)] * self[(2, 2)]
    }

    /// Closed-form inverse via the adjugate. Singular input divides by a
    /// zero determinant and propagates non-finite values.
    pub fn inverse(&self) -> Self {
        let det_inv = T::one() / self.determinant();
        let mut inv = Self::zeros();
        inv[(0, 0)] = det_inv * (self[(1, 1)] * self[(2, 2)] - self[(1, 2)] * self[(2, 1)]);
        inv[(1, 1)] = det_inv * (self[(0, 0)] * self[(2, 2)] - self[(0, 2)] * self[(2, 0)]);
        inv[(2, 2)] = det_inv * (self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]);

        inv[(0, 1)] = det_inv * (self[(0, 2)] * self[(2, 1)] - self[(0, 1)] * self[(2, 2)]);
        inv[(0, 2)] = det_inv * (self[(0, 1)] * self[(1, 2)] - self[(0, 2)] * self[(1, 1)]);
        inv[(1, 2)] = det_inv * (self[(0, 2)] * self[(1, 0)] - self[(0, 0)] * self[(1, 2)]);

        inv[(1, 0)] = det_inv * (self[(1, 2)] * self[(2, 0)] - self[(1, 0)] * self[(2, 2)]);
        inv[(2, 0)] = det_inv * (self[(1, 0)] * self[(2, 1)] - self[(2, 0)] * self[(1, 1)]);
        inv[(2, 1)] = det_inv * (self[(2, 0)] * self[(0, 1)] - self[(0, 0)] * self[(2, 1)]);
        inv
    }
}
