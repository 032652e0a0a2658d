//! Lazy vector expression nodes and the vector operator surface.

use std::marker::PhantomData;
use std::ops::{Add, Sub};

use num_traits::Float;

use crate::core::dims::{Const, Dim, DimMerge};
use crate::expr::{AddOp, PointwiseOp, SubOp, VExpr, VectorExpr};
use crate::vector::Vector;

/// Pointwise combination of two vector expressions.
///
/// The result extent is the `DimMerge` of the operand extents; mixed
/// static/dynamic operands adopt the static side, and a dynamic length
/// mismatch panics at construction.
pub struct VBinary<L, R, Op>
where
    L: VectorExpr,
    R: VectorExpr<Elem = L::Elem>,
    L::Dim: DimMerge<R::Dim>,
{
    left: L,
    right: R,
    dim: <L::Dim as DimMerge<R::Dim>>::Output,
    _op: PhantomData<Op>,
}

impl<L, R, Op> VBinary<L, R, Op>
where
    L: VectorExpr,
    R: VectorExpr<Elem = L::Elem>,
    L::Dim: DimMerge<R::Dim>,
{
    pub(crate) fn new(left: L, right: R) -> Self {
        let dim = left.dim().merge(right.dim());
        VBinary {
            left,
            right,
            dim,
            _op: PhantomData,
        }
    }
}

impl<L, R, Op> VectorExpr for VBinary<L, R, Op>
where
    L: VectorExpr,
    R: VectorExpr<Elem = L::Elem>,
    L::Dim: DimMerge<R::Dim>,
    Op: PointwiseOp,
{
    type Elem = L::Elem;
    type Dim = <L::Dim as DimMerge<R::Dim>>::Output;

    fn dim(&self) -> Self::Dim {
        self.dim
    }

    fn eval(&self, i: usize) -> Self::Elem {
        Op::apply(self.left.eval(i), self.right.eval(i))
    }
}

/// A scalar applied pointwise to a vector expression.
pub struct VScalar<E: VectorExpr, Op> {
    expr: E,
    scalar: E::Elem,
    _op: PhantomData<Op>,
}

impl<E: VectorExpr, Op> VScalar<E, Op> {
    pub(crate) fn new(expr: E, scalar: E::Elem) -> Self {
        VScalar {
            expr,
            scalar,
            _op: PhantomData,
        }
    }
}

impl<E: VectorExpr, Op: PointwiseOp> VectorExpr for VScalar<E, Op> {
    type Elem = E::Elem;
    type Dim = E::Dim;

    fn dim(&self) -> Self::Dim {
        self.expr.dim()
    }

    fn eval(&self, i: usize) -> Self::Elem {
        Op::apply(self.expr.eval(i), self.scalar)
    }
}

// 3-element circular stepping for the cross-product formula.
#[inline]
fn advance(i: usize) -> usize {
    (i + 1) % 3
}

#[inline]
fn retrace(i: usize) -> usize {
    (i + 2) % 3
}

/// Lazy 3-D cross product.
pub struct CrossProd<L, R> {
    left: L,
    right: R,
}

impl<L, R> CrossProd<L, R>
where
    L: VectorExpr<Dim = Const<3>>,
    R: VectorExpr<Elem = L::Elem, Dim = Const<3>>,
{
    pub(crate) fn new(left: L, right: R) -> Self {
        CrossProd { left, right }
    }
}

impl<L, R> VectorExpr for CrossProd<L, R>
where
    L: VectorExpr<Dim = Const<3>>,
    R: VectorExpr<Elem = L::Elem, Dim = Const<3>>,
{
    type Elem = L::Elem;
    type Dim = Const<3>;

    fn dim(&self) -> Const<3> {
        Const
    }

    fn eval(&self, i: usize) -> Self::Elem {
        self.left.eval(advance(i)) * self.right.eval(retrace(i))
            - self.left.eval(retrace(i)) * self.right.eval(advance(i))
    }
}

// ~~~~~~~~~~~~~~~~~~ operators ~~~~~~~~~~~~~~~~~~

impl<'a, T, D, R> Add<R> for &'a Vector<T, D>
where
    T: Float,
    D: Dim + DimMerge<R::Dim>,
    R: VectorExpr<Elem = T>,
{
    type Output = VExpr<VBinary<&'a Vector<T, D>, R, AddOp>>;

    fn add(self, rhs: R) -> Self::Output {
        VExpr(VBinary::new(self, rhs))
    }
}

impl<'a, T, D, R> Sub<R> for &'a Vector<T, D>
where
    T: Float,
    D: Dim + DimMerge<R::Dim>,
    R: VectorExpr<Elem = T>,
{
    type Output = VExpr<VBinary<&'a Vector<T, D>, R, SubOp>>;

    fn sub(self, rhs: R) -> Self::Output {
        VExpr(VBinary::new(self, rhs))
    }
}

impl<E, R> Add<R> for VExpr<E>
where
    E: VectorExpr,
    R: VectorExpr<Elem = E::Elem>,
    E::Dim: DimMerge<R::Dim>,
{
    type Output = VExpr<VBinary<E, R, AddOp>>;

    fn add(self, rhs: R) -> Self::Output {
        VExpr(VBinary::new(self.0, rhs))
    }
}

impl<E, R> Sub<R> for VExpr<E>
where
    E: VectorExpr,
    R: VectorExpr<Elem = E::Elem>,
    E::Dim: DimMerge<R::Dim>,
{
    type Output = VExpr<VBinary<E, R, SubOp>>;

    fn sub(self, rhs: R) -> Self::Output {
        VExpr(VBinary::new(self.0, rhs))
    }
}
