//! The [`Scalar`] abstraction over floating-point sample precision.
//!
//! The solver is generic over the sample type so callers can pick 32- or
//! 64-bit precision without duplicated stencil logic.

use std::fmt;

use num_traits::Float;

/// Floating-point scalar used for temperature samples and physical
/// parameters.
///
/// Implemented for [`f32`] and [`f64`]. The stencil needs the constants
/// `2` and `1/2`, which the provided methods build from `Float::one()`
/// so no fallible numeric cast appears in the update loop.
///
/// # Examples
///
/// ```
/// use smolder_core::Scalar;
///
/// assert_eq!(<f32 as Scalar>::two(), 2.0);
/// assert_eq!(<f64 as Scalar>::half(), 0.5);
/// ```
pub trait Scalar: Float + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The constant `2` in this precision.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The constant `1/2` in this precision.
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Scalar for f32 {}

impl Scalar for f64 {}
