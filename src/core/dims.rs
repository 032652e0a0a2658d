//! Static/dynamic dimension tags.
//!
//! An extent is either `Const<N>` (known at compile time, zero-sized) or
//! `Dyn` (stored at runtime). `DimMerge` reconciles the extents of two
//! operands: a static extent wins over a dynamic one, two static extents
//! must be the same type (so a static/static mismatch never compiles),
//! and any pairing that involves a `Dyn` is checked at runtime.

use std::fmt;

/// A vector or matrix extent.
pub trait Dim: Copy + PartialEq + fmt::Debug {
    /// The extent as a plain count.
    fn value(&self) -> usize;

    /// The tag for a given count.
    ///
    /// # Panics
    /// Panics if `len` disagrees with a compile-time extent.
    fn from_len(len: usize) -> Self;
}

/// Compile-time extent. Carries no data; the size is a type-level fact.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Const<const N: usize>;

/// Runtime extent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dyn(pub usize);

impl<const N: usize> Dim for Const<N> {
    #[inline]
    fn value(&self) -> usize {
        N
    }

    #[inline]
    fn from_len(len: usize) -> Self {
        assert!(len == N, "dimension mismatch: {} vs {}", len, N);
        Const
    }
}

impl Dim for Dyn {
    #[inline]
    fn value(&self) -> usize {
        self.0
    }

    #[inline]
    fn from_len(len: usize) -> Self {
        Dyn(len)
    }
}

/// Result extent of a binary operation over two (possibly mixed) extents.
///
/// `merge` also performs the runtime equality check whenever a `Dyn` is
/// involved; the check runs at expression construction, not at first
/// evaluation.
///
/// # Panics
/// Panics with a dimension-mismatch message if the runtime sizes disagree.
pub trait DimMerge<D: Dim>: Dim {
    type Output: Dim;
    fn merge(self, other: D) -> Self::Output;
}

impl<const N: usize> DimMerge<Const<N>> for Const<N> {
    type Output = Const<N>;
    #[inline]
    fn merge(self, _other: Const<N>) -> Const<N> {
        Const
    }
}

impl<const N: usize> DimMerge<Dyn> for Const<N> {
    type Output = Const<N>;
    #[inline]
    fn merge(self, other: Dyn) -> Const<N> {
        assert!(other.0 == N, "dimension mismatch: {} vs {}", N, other.0);
        Const
    }
}

impl<const N: usize> DimMerge<Const<N>> for Dyn {
    type Output = Const<N>;
    #[inline]
    fn merge(self, _other: Const<N>) -> Const<N> {
        assert!(self.0 == N, "dimension mismatch: {} vs {}", self.0, N);
        Const
    }
}

impl DimMerge<Dyn> for Dyn {
    type Output = Dyn;
    #[inline]
    fn merge(self, other: Dyn) -> Dyn {
        assert!(
            self.0 == other.0,
            "dimension mismatch: {} vs {}",
            self.0,
            other.0
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_wins_over_dynamic() {
        let merged = Const::<4>.merge(Dyn(4));
        assert_eq!(merged.value(), 4);
        let merged = Dyn(4).merge(Const::<4>);
        assert_eq!(merged.value(), 4);
    }

    #[test]
    fn dynamic_pair_keeps_runtime_size() {
        assert_eq!(Dyn(7).merge(Dyn(7)).value(), 7);
    }

    #[test]
    fn from_len_round_trips() {
        assert_eq!(Const::<5>::from_len(5).value(), 5);
        assert_eq!(Dyn::from_len(9).value(), 9);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch: 4 vs 5")]
    fn from_len_rejects_a_wrong_static_count() {
        let _ = Const::<5>::from_len(4);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch: 3 vs 4")]
    fn dynamic_mismatch_panics() {
        let _ = Dyn(3).merge(Dyn(4));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn static_dynamic_mismatch_panics() {
        let _ = Const::<3>.merge(Dyn(4));
    }
}
