//! Numeric edge weights for shortest-path search.

use std::cmp::Ordering;
use std::fmt;

/// An edge label that can be accumulated along a path and totally ordered.
///
/// Path search assumes every weight is `>= zero()`; negative weights give
/// unspecified results.
pub trait Weight: Copy + fmt::Debug {
    /// The additive identity: the cost of a path with no edges.
    fn zero() -> Self;

    /// Sum of two weights. Integer sums saturate at the type's maximum.
    fn add_weight(self, other: Self) -> Self;

    /// Total order over weights.
    fn cmp_weight(&self, other: &Self) -> Ordering;
}

impl Weight for f64 {
    fn zero() -> Self {
        0.0
    }

    fn add_weight(self, other: Self) -> Self {
        self + other
    }

    fn cmp_weight(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Weight for f32 {
    fn zero() -> Self {
        0.0
    }

    fn add_weight(self, other: Self) -> Self {
        self + other
    }

    fn cmp_weight(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn add_weight(self, other: Self) -> Self {
                    self.saturating_add(other)
                }

                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
