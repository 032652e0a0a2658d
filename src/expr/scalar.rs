//! Scalar multiply/divide operator sugar.
//!
//! Implemented per concrete float type: a scalar operand generic in `T`
//! would be incoherent next to the generic expression operands, and the
//! element types in practice are exactly `f32`/`f64`. Generic code can
//! build [`VScalar`]/[`MScalar`] nodes directly.
//!
//! A scalar on the left must have a concrete type (`2.0_f64 * &v`); an
//! unsuffixed literal is ambiguous between the `f32` and `f64` impls.

use std::ops::{Div, Mul};

use crate::core::dims::Dim;
use crate::expr::{DivOp, MExpr, MScalar, MatrixExpr, MulOp, VExpr, VScalar, VectorExpr};
use crate::matrix::Matrix;
use crate::vector::Vector;

macro_rules! scalar_ops_impls {
    ($($t:ty),*) => {$(
        impl<'a, D: Dim> Mul<$t> for &'a Vector<$t, D> {
            type Output = VExpr<VScalar<&'a Vector<$t, D>, MulOp>>;

            fn mul(self, rhs: $t) -> Self::Output {
                VExpr(VScalar::new(self, rhs))
            }
        }

        impl<'a, D: Dim> Div<$t> for &'a Vector<$t, D> {
            type Output = VExpr<VScalar<&'a Vector<$t, D>, DivOp>>;

            fn div(self, rhs: $t) -> Self::Output {
                VExpr(VScalar::new(self, rhs))
            }
        }

        impl<E: VectorExpr<Elem = $t>> Mul<$t> for VExpr<E> {
            type Output = VExpr<VScalar<E, MulOp>>;

            fn mul(self, rhs: $t) -> Self::Output {
                VExpr(VScalar::new(self.0, rhs))
            }
        }

        impl<E: VectorExpr<Elem = $t>> Div<$t> for VExpr<E> {
            type Output = VExpr<VScalar<E, DivOp>>;

            fn div(self, rhs: $t) -> Self::Output {
                VExpr(VScalar::new(self.0, rhs))
            }
        }

        impl<'a, R: Dim, C: Dim> Mul<$t> for &'a Matrix<$t, R, C> {
            type Output = MExpr<MScalar<&'a Matrix<$t, R, C>, MulOp>>;

            fn mul(self, rhs: $t) -> Self::Output {
                MExpr(MScalar::new(self, rhs))
            }
        }

        impl<'a, R: Dim, C: Dim> Div<$t> for &'a Matrix<$t, R, C> {
            type Output = MExpr<MScalar<&'a Matrix<$t, R, C>, DivOp>>;

            fn div(self, rhs: $t) -> Self::Output {
                MExpr(MScalar::new(self, rhs))
            }
        }

        impl<E: MatrixExpr<Elem = $t>> Mul<$t> for MExpr<E> {
            type Output = MExpr<MScalar<E, MulOp>>;

            fn mul(self, rhs: $t) -> Self::Output {
                MExpr(MScalar::new(self.0, rhs))
            }
        }

        impl<E: MatrixExpr<Elem = $t>> Div<$t> for MExpr<E> {
            type Output = MExpr<MScalar<E, DivOp>>;

            fn div(self, rhs: $t) -> Self::Output {
                MExpr(MScalar::new(self.0, rhs))
            }
        }

        // scalar on the left commutes onto the expression

        impl<'a, D: Dim> Mul<&'a Vector<$t, D>> for $t {
            type Output = VExpr<VScalar<&'a Vector<$t, D>, MulOp>>;

            fn mul(self, rhs: &'a Vector<$t, D>) -> Self::Output {
                VExpr(VScalar::new(rhs, self))
            }
        }

        impl<E: VectorExpr<Elem = $t>> Mul<VExpr<E>> for $t {
            type Output = VExpr<VScalar<E, MulOp>>;

            fn mul(self, rhs: VExpr<E>) -> Self::Output {
                VExpr(VScalar::new(rhs.0, self))
            }
        }

        impl<'a, R: Dim, C: Dim> Mul<&'a Matrix<$t, R, C>> for $t {
            type Output = MExpr<MScalar<&'a Matrix<$t, R, C>, MulOp>>;

            fn mul(self, rhs: &'a Matrix<$t, R, C>) -> Self::Output {
                MExpr(MScalar::new(rhs, self))
            }
        }

        impl<E: MatrixExpr<Elem = $t>> Mul<MExpr<E>> for $t {
            type Output = MExpr<MScalar<E, MulOp>>;

            fn mul(self, rhs: MExpr<E>) -> Self::Output {
                MExpr(MScalar::new(rhs.0, self))
            }
        }
    )*};
}

scalar_ops_impls!(f32, f64);
