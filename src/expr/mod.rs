//! Lazy expression engine.
//!
//! Arithmetic operators on vectors and matrices do not compute anything;
//! they return small combinator nodes that borrow their operands and know
//! how to produce one element on demand. A chained expression such as
//! `&a + &b + &c` therefore evaluates in a single pass per element, with
//! no intermediate containers, when it is finally materialized with
//! [`VExpr::eval`] / [`MExpr::eval`] or read element by element.
//!
//! Nodes borrow their operands, so the borrow checker enforces the
//! lifetime contract: an expression cannot outlive (or observe mutation
//! of) anything it references.

use num_traits::Float;

use crate::core::dims::Dim;
use crate::matrix::Matrix;
use crate::vector::Vector;

pub mod matrix;
pub mod scalar;
pub mod vector;

pub use matrix::{MBinary, MScalar, MatMul, MatVecMul, Transpose, VecMatMul, transpose};
pub use vector::{CrossProd, VBinary, VScalar};

/// Anything that can produce vector elements on demand.
pub trait VectorExpr {
    type Elem: Float;
    type Dim: Dim;

    /// The typed extent of this expression (authoritative for `Dyn`).
    fn dim(&self) -> Self::Dim;

    /// Element count.
    fn len(&self) -> usize {
        self.dim().value()
    }

    /// Compute element `i`. This is the only place work happens.
    fn eval(&self, i: usize) -> Self::Elem;
}

/// Anything that can produce matrix elements on demand.
pub trait MatrixExpr {
    type Elem: Float;
    type Rows: Dim;
    type Cols: Dim;

    fn rows_dim(&self) -> Self::Rows;
    fn cols_dim(&self) -> Self::Cols;

    fn nrows(&self) -> usize {
        self.rows_dim().value()
    }

    fn ncols(&self) -> usize {
        self.cols_dim().value()
    }

    /// Compute element `(i, j)`.
    fn eval(&self, i: usize, j: usize) -> Self::Elem;
}

impl<'a, E: VectorExpr> VectorExpr for &'a E {
    type Elem = E::Elem;
    type Dim = E::Dim;

    fn dim(&self) -> Self::Dim {
        (**self).dim()
    }

    fn eval(&self, i: usize) -> Self::Elem {
        (**self).eval(i)
    }
}

impl<'a, E: MatrixExpr> MatrixExpr for &'a E {
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    fn rows_dim(&self) -> Self::Rows {
        (**self).rows_dim()
    }

    fn cols_dim(&self) -> Self::Cols {
        (**self).cols_dim()
    }

    fn eval(&self, i: usize, j: usize) -> Self::Elem {
        (**self).eval(i, j)
    }
}

/// Pointwise binary rule applied by an expression node.
pub trait PointwiseOp {
    fn apply<T: Float>(left: T, right: T) -> T;
}

pub struct AddOp;
pub struct SubOp;
pub struct MulOp;
pub struct DivOp;

impl PointwiseOp for AddOp {
    #[inline]
    fn apply<T: Float>(left: T, right: T) -> T {
        left + right
    }
}

impl PointwiseOp for SubOp {
    #[inline]
    fn apply<T: Float>(left: T, right: T) -> T {
        left - right
    }
}

impl PointwiseOp for MulOp {
    #[inline]
    fn apply<T: Float>(left: T, right: T) -> T {
        left * right
    }
}

impl PointwiseOp for DivOp {
    #[inline]
    fn apply<T: Float>(left: T, right: T) -> T {
        left / right
    }
}

/// Wrapper every vector-valued operator returns. Distinguishes vector
/// expressions from matrix expressions at the type level so the operator
/// impls stay coherent, and is where materialization lives.
pub struct VExpr<E>(pub(crate) E);

/// Matrix-valued counterpart of [`VExpr`].
pub struct MExpr<E>(pub(crate) E);

impl<E: VectorExpr> VExpr<E> {
    /// Materialize into a concrete vector of the expression's natural
    /// dimension kind (static wins over dynamic for mixed operands).
    pub fn eval(&self) -> Vector<E::Elem, E::Dim> {
        let dim = self.0.dim();
        let data = (0..dim.value()).map(|i| self.0.eval(i)).collect();
        Vector::from_parts(dim, data)
    }
}

impl<E: VectorExpr> VectorExpr for VExpr<E> {
    type Elem = E::Elem;
    type Dim = E::Dim;

    fn dim(&self) -> Self::Dim {
        self.0.dim()
    }

    fn eval(&self, i: usize) -> Self::Elem {
        self.0.eval(i)
    }
}

impl<E: MatrixExpr> MExpr<E> {
    /// Materialize into a concrete matrix, one evaluation per element.
    pub fn eval(&self) -> Matrix<E::Elem, E::Rows, E::Cols> {
        let rows = self.0.rows_dim();
        let cols = self.0.cols_dim();
        let mut data = Vec::with_capacity(rows.value() * cols.value());
        for i in 0..rows.value() {
            for j in 0..cols.value() {
                data.push(self.0.eval(i, j));
            }
        }
        Matrix::from_parts(rows, cols, data)
    }

    /// Lazy transpose of this expression.
    pub fn transpose(self) -> MExpr<Transpose<E>> {
        MExpr(Transpose::new(self.0))
    }
}

impl<E: MatrixExpr> MatrixExpr for MExpr<E> {
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    fn rows_dim(&self) -> Self::Rows {
        self.0.rows_dim()
    }

    fn cols_dim(&self) -> Self::Cols {
        self.0.cols_dim()
    }

    fn eval(&self, i: usize, j: usize) -> Self::Elem {
        self.0.eval(i, j)
    }
}

impl<E: VectorExpr> From<VExpr<E>> for Vector<E::Elem, E::Dim> {
    fn from(expr: VExpr<E>) -> Self {
        expr.eval()
    }
}

impl<E: MatrixExpr> From<MExpr<E>> for Matrix<E::Elem, E::Rows, E::Cols> {
    fn from(expr: MExpr<E>) -> Self {
        expr.eval()
    }
}
