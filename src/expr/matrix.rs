//! Lazy matrix expression nodes and the matrix operator surface,
//! including the matrix-vector contractions.

use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

use num_traits::{Float, Zero};

use crate::core::dims::{Dim, DimMerge};
use crate::expr::{AddOp, MExpr, MatrixExpr, PointwiseOp, SubOp, VExpr, VectorExpr};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Pointwise combination of two matrix expressions.
pub struct MBinary<L, R, Op>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Rows: DimMerge<R::Rows>,
    L::Cols: DimMerge<R::Cols>,
{
    left: L,
    right: R,
    rows: <L::Rows as DimMerge<R::Rows>>::Output,
    cols: <L::Cols as DimMerge<R::Cols>>::Output,
    _op: PhantomData<Op>,
}

impl<L, R, Op> MBinary<L, R, Op>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Rows: DimMerge<R::Rows>,
    L::Cols: DimMerge<R::Cols>,
{
    pub(crate) fn new(left: L, right: R) -> Self {
        let rows = left.rows_dim().merge(right.rows_dim());
        let cols = left.cols_dim().merge(right.cols_dim());
        MBinary {
            left,
            right,
            rows,
            cols,
            _op: PhantomData,
        }
    }
}

impl<L, R, Op> MatrixExpr for MBinary<L, R, Op>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Rows: DimMerge<R::Rows>,
    L::Cols: DimMerge<R::Cols>,
    Op: PointwiseOp,
{
    type Elem = L::Elem;
    type Rows = <L::Rows as DimMerge<R::Rows>>::Output;
    type Cols = <L::Cols as DimMerge<R::Cols>>::Output;

    fn rows_dim(&self) -> Self::Rows {
        self.rows
    }

    fn cols_dim(&self) -> Self::Cols {
        self.cols
    }

    fn eval(&self, i: usize, j: usize) -> Self::Elem {
        Op::apply(self.left.eval(i, j), self.right.eval(i, j))
    }
}

/// A scalar applied pointwise to a matrix expression.
pub struct MScalar<E: MatrixExpr, Op> {
    expr: E,
    scalar: E::Elem,
    _op: PhantomData<Op>,
}

impl<E: MatrixExpr, Op> MScalar<E, Op> {
    pub(crate) fn new(expr: E, scalar: E::Elem) -> Self {
        MScalar {
            expr,
            scalar,
            _op: PhantomData,
        }
    }
}

impl<E: MatrixExpr, Op: PointwiseOp> MatrixExpr for MScalar<E, Op> {
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    fn rows_dim(&self) -> Self::Rows {
        self.expr.rows_dim()
    }

    fn cols_dim(&self) -> Self::Cols {
        self.expr.cols_dim()
    }

    fn eval(&self, i: usize, j: usize) -> Self::Elem {
        Op::apply(self.expr.eval(i, j), self.scalar)
    }
}

/// Matrix product; each element is a fresh contraction over the shared
/// inner extent, evaluated only when asked for.
pub struct MatMul<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Cols: DimMerge<R::Rows>,
{
    left: L,
    right: R,
    inner: <L::Cols as DimMerge<R::Rows>>::Output,
}

impl<L, R> MatMul<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Cols: DimMerge<R::Rows>,
{
    pub(crate) fn new(left: L, right: R) -> Self {
        let inner = left.cols_dim().merge(right.rows_dim());
        MatMul { left, right, inner }
    }
}

impl<L, R> MatrixExpr for MatMul<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Cols: DimMerge<R::Rows>,
{
    type Elem = L::Elem;
    type Rows = L::Rows;
    type Cols = R::Cols;

    fn rows_dim(&self) -> Self::Rows {
        self.left.rows_dim()
    }

    fn cols_dim(&self) -> Self::Cols {
        self.right.cols_dim()
    }

    fn eval(&self, i: usize, j: usize) -> Self::Elem {
        let mut sum = Self::Elem::zero();
        for k in 0..self.inner.value() {
            sum = sum + self.left.eval(i, k) * self.right.eval(k, j);
        }
        sum
    }
}

/// Zero-copy index swap `(i, j) -> (j, i)`.
pub struct Transpose<E: MatrixExpr> {
    inner: E,
}

impl<E: MatrixExpr> Transpose<E> {
    pub(crate) fn new(inner: E) -> Self {
        Transpose { inner }
    }
}

impl<E: MatrixExpr> MatrixExpr for Transpose<E> {
    type Elem = E::Elem;
    type Rows = E::Cols;
    type Cols = E::Rows;

    fn rows_dim(&self) -> Self::Rows {
        self.inner.cols_dim()
    }

    fn cols_dim(&self) -> Self::Cols {
        self.inner.rows_dim()
    }

    fn eval(&self, i: usize, j: usize) -> Self::Elem {
        self.inner.eval(j, i)
    }
}

/// Lazy transpose of any matrix expression.
pub fn transpose<E: MatrixExpr>(expr: E) -> MExpr<Transpose<E>> {
    MExpr(Transpose::new(expr))
}

/// `M * v` contraction; the result length is the matrix row count.
pub struct MatVecMul<M, V>
where
    M: MatrixExpr,
    V: VectorExpr<Elem = M::Elem>,
    M::Cols: DimMerge<V::Dim>,
{
    matrix: M,
    vector: V,
    inner: <M::Cols as DimMerge<V::Dim>>::Output,
}

impl<M, V> MatVecMul<M, V>
where
    M: MatrixExpr,
    V: VectorExpr<Elem = M::Elem>,
    M::Cols: DimMerge<V::Dim>,
{
    pub(crate) fn new(matrix: M, vector: V) -> Self {
        let inner = matrix.cols_dim().merge(vector.dim());
        MatVecMul {
            matrix,
            vector,
            inner,
        }
    }
}

impl<M, V> VectorExpr for MatVecMul<M, V>
where
    M: MatrixExpr,
    V: VectorExpr<Elem = M::Elem>,
    M::Cols: DimMerge<V::Dim>,
{
    type Elem = M::Elem;
    type Dim = M::Rows;

    fn dim(&self) -> Self::Dim {
        self.matrix.rows_dim()
    }

    fn eval(&self, i: usize) -> Self::Elem {
        let mut sum = Self::Elem::zero();
        for j in 0..self.inner.value() {
            sum = sum + self.matrix.eval(i, j) * self.vector.eval(j);
        }
        sum
    }
}

/// `v^T * M` contraction; the result length is the matrix column count.
pub struct VecMatMul<V, M>
where
    V: VectorExpr,
    M: MatrixExpr<Elem = V::Elem>,
    V::Dim: DimMerge<M::Rows>,
{
    vector: V,
    matrix: M,
    inner: <V::Dim as DimMerge<M::Rows>>::Output,
}

impl<V, M> VecMatMul<V, M>
where
    V: VectorExpr,
    M: MatrixExpr<Elem = V::Elem>,
    V::Dim: DimMerge<M::Rows>,
{
    pub(crate) fn new(vector: V, matrix: M) -> Self {
        let inner = vector.dim().merge(matrix.rows_dim());
        VecMatMul {
            vector,
            matrix,
            inner,
        }
    }
}

impl<V, M> VectorExpr for VecMatMul<V, M>
where
    V: VectorExpr,
    M: MatrixExpr<Elem = V::Elem>,
    V::Dim: DimMerge<M::Rows>,
{
    type Elem = V::Elem;
    type Dim = M::Cols;

    fn dim(&self) -> Self::Dim {
        self.matrix.cols_dim()
    }

    fn eval(&self, i: usize) -> Self::Elem {
        let mut sum = Self::Elem::zero();
        for j in 0..self.inner.value() {
            sum = sum + self.vector.eval(j) * self.matrix.eval(j, i);
        }
        sum
    }
}

// ~~~~~~~~~~~~~~~~~~ operators: &Matrix on the left ~~~~~~~~~~~~~~~~~~

impl<'a, T, R, C, Rhs> Add<Rhs> for &'a Matrix<T, R, C>
where
    T: Float,
    R: Dim + DimMerge<Rhs::Rows>,
    C: Dim + DimMerge<Rhs::Cols>,
    Rhs: MatrixExpr<Elem = T>,
{
    type Output = MExpr<MBinary<&'a Matrix<T, R, C>, Rhs, AddOp>>;

    fn add(self, rhs: Rhs) -> Self::Output {
        MExpr(MBinary::new(self, rhs))
    }
}

impl<'a, T, R, C, Rhs> Sub<Rhs> for &'a Matrix<T, R, C>
where
    T: Float,
    R: Dim + DimMerge<Rhs::Rows>,
    C: Dim + DimMerge<Rhs::Cols>,
    Rhs: MatrixExpr<Elem = T>,
{
    type Output = MExpr<MBinary<&'a Matrix<T, R, C>, Rhs, SubOp>>;

    fn sub(self, rhs: Rhs) -> Self::Output {
        MExpr(MBinary::new(self, rhs))
    }
}

impl<'a, 'b, T, R, C, R2, C2> Mul<&'b Matrix<T, R2, C2>> for &'a Matrix<T, R, C>
where
    T: Float,
    R: Dim,
    C: Dim + DimMerge<R2>,
    R2: Dim,
    C2: Dim,
{
    type Output = MExpr<MatMul<&'a Matrix<T, R, C>, &'b Matrix<T, R2, C2>>>;

    fn mul(self, rhs: &'b Matrix<T, R2, C2>) -> Self::Output {
        MExpr(MatMul::new(self, rhs))
    }
}

impl<'a, T, R, C, E> Mul<MExpr<E>> for &'a Matrix<T, R, C>
where
    T: Float,
    R: Dim,
    C: Dim + DimMerge<E::Rows>,
    E: MatrixExpr<Elem = T>,
{
    type Output = MExpr<MatMul<&'a Matrix<T, R, C>, E>>;

    fn mul(self, rhs: MExpr<E>) -> Self::Output {
        MExpr(MatMul::new(self, rhs.0))
    }
}

impl<'a, 'b, T, R, C, D> Mul<&'b Vector<T, D>> for &'a Matrix<T, R, C>
where
    T: Float,
    R: Dim,
    C: Dim + DimMerge<D>,
    D: Dim,
{
    type Output = VExpr<MatVecMul<&'a Matrix<T, R, C>, &'b Vector<T, D>>>;

    fn mul(self, rhs: &'b Vector<T, D>) -> Self::Output {
        VExpr(MatVecMul::new(self, rhs))
    }
}

impl<'a, T, R, C, E> Mul<VExpr<E>> for &'a Matrix<T, R, C>
where
    T: Float,
    R: Dim,
    C: Dim + DimMerge<E::Dim>,
    E: VectorExpr<Elem = T>,
{
    type Output = VExpr<MatVecMul<&'a Matrix<T, R, C>, E>>;

    fn mul(self, rhs: VExpr<E>) -> Self::Output {
        VExpr(MatVecMul::new(self, rhs.0))
    }
}

// ~~~~~~~~~~~~~~~~~~ operators: MExpr on the left ~~~~~~~~~~~~~~~~~~

impl<E, Rhs> Add<Rhs> for MExpr<E>
where
    E: MatrixExpr,
    Rhs: MatrixExpr<Elem = E::Elem>,
    E::Rows: DimMerge<Rhs::Rows>,
    E::Cols: DimMerge<Rhs::Cols>,
{
    type Output = MExpr<MBinary<E, Rhs, AddOp>>;

    fn add(self, rhs: Rhs) -> Self::Output {
        MExpr(MBinary::new(self.0, rhs))
    }
}

impl<E, Rhs> Sub<Rhs> for MExpr<E>
where
    E: MatrixExpr,
    Rhs: MatrixExpr<Elem = E::Elem>,
    E::Rows: DimMerge<Rhs::Rows>,
    E::Cols: DimMerge<Rhs::Cols>,
{
    type Output = MExpr<MBinary<E, Rhs, SubOp>>;

    fn sub(self, rhs: Rhs) -> Self::Output {
        MExpr(MBinary::new(self.0, rhs))
    }
}

impl<'b, E, T, R2, C2> Mul<&'b Matrix<T, R2, C2>> for MExpr<E>
where
    T: Float,
    E: MatrixExpr<Elem = T>,
    E::Cols: DimMerge<R2>,
    R2: Dim,
    C2: Dim,
{
    type Output = MExpr<MatMul<E, &'b Matrix<T, R2, C2>>>;

    fn mul(self, rhs: &'b Matrix<T, R2, C2>) -> Self::Output {
        MExpr(MatMul::new(self.0, rhs))
    }
}

impl<E, E2> Mul<MExpr<E2>> for MExpr<E>
where
    E: MatrixExpr,
    E2: MatrixExpr<Elem = E::Elem>,
    E::Cols: DimMerge<E2::Rows>,
{
    type Output = MExpr<MatMul<E, E2>>;

    fn mul(self, rhs: MExpr<E2>) -> Self::Output {
        MExpr(MatMul::new(self.0, rhs.0))
    }
}

impl<'b, E, T, D> Mul<&'b Vector<T, D>> for MExpr<E>
where
    T: Float,
    E: MatrixExpr<Elem = T>,
    E::Cols: DimMerge<D>,
    D: Dim,
{
    type Output = VExpr<MatVecMul<E, &'b Vector<T, D>>>;

    fn mul(self, rhs: &'b Vector<T, D>) -> Self::Output {
        VExpr(MatVecMul::new(self.0, rhs))
    }
}

impl<E, E2> Mul<VExpr<E2>> for MExpr<E>
where
    E: MatrixExpr,
    E2: VectorExpr<Elem = E::Elem>,
    E::Cols: DimMerge<E2::Dim>,
{
    type Output = VExpr<MatVecMul<E, E2>>;

    fn mul(self, rhs: VExpr<E2>) -> Self::Output {
        VExpr(MatVecMul::new(self.0, rhs.0))
    }
}

// ~~~~~~~~~~ operators: vector on the left of a matrix ~~~~~~~~~~

impl<'a, 'b, T, D, R2, C2> Mul<&'b Matrix<T, R2, C2>> for &'a Vector<T, D>
where
    T: Float,
    D: Dim + DimMerge<R2>,
    R2: Dim,
    C2: Dim,
{
    type Output = VExpr<VecMatMul<&'a Vector<T, D>, &'b Matrix<T, R2, C2>>>;

    fn mul(self, rhs: &'b Matrix<T, R2, C2>) -> Self::Output {
        VExpr(VecMatMul::new(self, rhs))
    }
}

impl<'a, T, D, E> Mul<MExpr<E>> for &'a Vector<T, D>
where
    T: Float,
    D: Dim + DimMerge<E::Rows>,
    E: MatrixExpr<Elem = T>,
{
    type Output = VExpr<VecMatMul<&'a Vector<T, D>, E>>;

    fn mul(self, rhs: MExpr<E>) -> Self::Output {
        VExpr(VecMatMul::new(self, rhs.0))
    }
}

impl<'b, E, T, R2, C2> Mul<&'b Matrix<T, R2, C2>> for VExpr<E>
where
    T: Float,
    E: VectorExpr<Elem = T>,
    E::Dim: DimMerge<R2>,
    R2: Dim,
    C2: Dim,
{
    type Output = VExpr<VecMatMul<E, &'b Matrix<T, R2, C2>>>;

    fn mul(self, rhs: &'b Matrix<T, R2, C2>) -> Self::Output {
        VExpr(VecMatMul::new(self.0, rhs))
    }
}

impl<E, E2> Mul<MExpr<E2>> for VExpr<E>
where
    E: VectorExpr,
    E2: MatrixExpr<Elem = E::Elem>,
    E::Dim: DimMerge<E2::Rows>,
{
    type Output = VExpr<VecMatMul<E, E2>>;

    fn mul(self, rhs: MExpr<E2>) -> Self::Output {
        VExpr(VecMatMul::new(self.0, rhs.0))
    }
}
