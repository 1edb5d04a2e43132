//! Numeric weights of edges and path distances.
//!
//! Shortest path search needs an additive identity, a representation for
//! "unreachable" and a total order usable as a priority key. Integer types
//! are totally ordered already; floating point types are paired with an
//! [`OrderedFloat`] wrapper that orders them by [`f64::total_cmp`].

use std::ops::Add;

mod ordered_float;

pub use ordered_float::OrderedFloat;

pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn inf() -> Self;

    /// Adds two weights. A sum that cannot be represented becomes
    /// [`inf`](Weight::inf).
    fn saturating_add(self, other: Self) -> Self;

    /// Returns `true` if the value represents an unreachable distance.
    fn is_inf(&self) -> bool {
        *self == Self::inf()
    }
}

macro_rules! impl_int_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn saturating_add(self, other: Self) -> Self {
                <$ty>::saturating_add(self, other)
            }
        }
    };
}

impl_int_weight!(i8);
impl_int_weight!(i16);
impl_int_weight!(i32);
impl_int_weight!(i64);
impl_int_weight!(u8);
impl_int_weight!(u16);
impl_int_weight!(u32);
impl_int_weight!(u64);
impl_int_weight!(isize);
impl_int_weight!(usize);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn saturating_add(self, other: Self) -> Self {
                self + other
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
