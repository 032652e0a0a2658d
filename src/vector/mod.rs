//! Owned 1-D numeric containers, fixed-size or runtime-sized.
//!
//! `Vector<T, D>` owns its storage; the extent lives in the type for
//! `SVector` and in a runtime field for `DVector`. Arithmetic on vectors
//! goes through the lazy expression engine in [`crate::expr`].

use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use num_traits::Float;

use crate::core::dims::{Const, Dim, DimMerge, Dyn};
use crate::error::LinexError;
use crate::expr::VectorExpr;

/// Owned vector with extent `D`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T, D: Dim> {
    pub(crate) dim: D,
    pub(crate) data: Vec<T>,
}

/// Fixed-size vector.
pub type SVector<T, const N: usize> = Vector<T, Const<N>>;
/// Runtime-sized vector.
pub type DVector<T> = Vector<T, Dyn>;
/// 3-D convenience handle.
pub type Vector3<T> = SVector<T, 3>;

/// Build a [`Vector3`] from its components.
pub fn vec3<T: Float>(x: T, y: T, z: T) -> Vector3<T> {
    SVector::from_array([x, y, z])
}

impl<T, D: Dim> Vector<T, D> {
    pub(crate) fn from_parts(dim: D, data: Vec<T>) -> Self {
        debug_assert_eq!(dim.value(), data.len());
        Vector { dim, data }
    }

    pub fn len(&self) -> usize {
        self.dim.value()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked element access.
    pub fn at(&self, i: usize) -> Result<&T, LinexError> {
        let len = self.len();
        self.data
            .get(i)
            .ok_or(LinexError::OutOfBounds { index: i, len })
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, LinexError> {
        let len = self.len();
        self.data
            .get_mut(i)
            .ok_or(LinexError::OutOfBounds { index: i, len })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Float, const N: usize> SVector<T, N> {
    /// Zero-filled vector.
    pub fn zeros() -> Self {
        Self::filled(T::zero())
    }

    /// Vector with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Vector {
            dim: Const,
            data: vec![value; N],
        }
    }

    /// Vector from exactly `N` elements.
    pub fn from_array(values: [T; N]) -> Self {
        Vector {
            dim: Const,
            data: values.to_vec(),
        }
    }

    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Vector {
            dim: Const,
            data: (0..N).map(f).collect(),
        }
    }
}

impl<T: Float> DVector<T> {
    /// Zero-filled vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, T::zero())
    }

    pub fn filled(len: usize, value: T) -> Self {
        Vector {
            dim: Dyn(len),
            data: vec![value; len],
        }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Vector {
            dim: Dyn(values.len()),
            data: values,
        }
    }

    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Vector {
            dim: Dyn(len),
            data: (0..len).map(f).collect(),
        }
    }

    /// Grow by one element.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.dim.0 += 1;
    }

    /// Resize, zero-filling any growth.
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, T::zero());
        self.dim.0 = len;
    }
}

impl<T: Float, D: Dim> VectorExpr for Vector<T, D> {
    type Elem = T;
    type Dim = D;

    fn dim(&self) -> D {
        self.dim
    }

    fn eval(&self, i: usize) -> T {
        self.data[i]
    }
}

impl<T, D: Dim> Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, D: Dim> IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ~~~~~~~~~~~~~~~~~~ compound assignment ~~~~~~~~~~~~~~~~~~

impl<T, D, R> AddAssign<R> for Vector<T, D>
where
    T: Float,
    D: Dim + DimMerge<R::Dim>,
    R: VectorExpr<Elem = T>,
{
    /// # Panics
    /// Panics on a runtime length mismatch when either side is dynamic.
    fn add_assign(&mut self, rhs: R) {
        self.dim.merge(rhs.dim());
        for i in 0..self.data.len() {
            self.data[i] = self.data[i] + rhs.eval(i);
        }
    }
}

impl<T, D, R> SubAssign<R> for Vector<T, D>
where
    T: Float,
    D: Dim + DimMerge<R::Dim>,
    R: VectorExpr<Elem = T>,
{
    /// # Panics
    /// Panics on a runtime length mismatch when either side is dynamic.
    fn sub_assign(&mut self, rhs: R) {
        self.dim.merge(rhs.dim());
        for i in 0..self.data.len() {
            self.data[i] = self.data[i] - rhs.eval(i);
        }
    }
}

impl<T: Float, D: Dim> MulAssign<T> for Vector<T, D> {
    fn mul_assign(&mut self, rhs: T) {
        for value in &mut self.data {
            *value = *value * rhs;
        }
    }
}

impl<T: Float, D: Dim> DivAssign<T> for Vector<T, D> {
    fn div_assign(&mut self, rhs: T) {
        for value in &mut self.data {
            *value = *value / rhs;
        }
    }
}

// ~~~~~~~~~~~~~~~~~~ conversions ~~~~~~~~~~~~~~~~~~

impl<T: Float, const N: usize> From<[T; N]> for SVector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: Float> From<Vec<T>> for DVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Float, const N: usize> From<SVector<T, N>> for DVector<T> {
    fn from(vector: SVector<T, N>) -> Self {
        Vector {
            dim: Dyn(N),
            data: vector.data,
        }
    }
}

impl<T: Float, const N: usize> TryFrom<DVector<T>> for SVector<T, N> {
    type Error = LinexError;

    fn try_from(vector: DVector<T>) -> Result<Self, LinexError> {
        if vector.data.len() != N {
            return Err(LinexError::ShapeMismatch {
                left: N,
                right: vector.data.len(),
            });
        }
        Ok(Vector {
            dim: Const,
            data: vector.data,
        })
    }
}

impl<T: Float, const N: usize> TryFrom<Vec<T>> for SVector<T, N> {
    type Error = LinexError;

    fn try_from(values: Vec<T>) -> Result<Self, LinexError> {
        if values.len() != N {
            return Err(LinexError::ShapeMismatch {
                left: N,
                right: values.len(),
            });
        }
        Ok(Vector {
            dim: Const,
            data: values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_resize_track_length() {
        let mut v = DVector::<f64>::zeros(2);
        v.push(5.0);
        assert_eq!(v.len(), 3);
        assert_eq!(v[2], 5.0);
        v.resize(5);
        assert_eq!(v.len(), 5);
        assert_eq!(v[4], 0.0);
        v.resize(1);
        assert_eq!(v.as_slice(), &[0.0]);
    }

    #[test]
    fn checked_access_reports_bounds() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(*v.at(2).unwrap(), 3.0);
        assert_eq!(
            v.at(3),
            Err(LinexError::OutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn static_from_dynamic_checks_length() {
        let d = DVector::from_vec(vec![1.0, 2.0]);
        let s: SVector<f64, 2> = d.try_into().unwrap();
        assert_eq!(s[1], 2.0);

        let d = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let s: Result<SVector<f64, 2>, _> = d.try_into();
        assert_eq!(s, Err(LinexError::ShapeMismatch { left: 2, right: 3 }));
    }

    #[test]
    fn scalar_compound_ops() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v *= 2.0;
        assert_eq!(v, vec3(2.0, 4.0, 6.0));
        v /= 4.0;
        assert_eq!(v, vec3(0.5, 1.0, 1.5));
    }
}
