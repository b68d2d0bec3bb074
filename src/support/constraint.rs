//! Type-level numeric constraints with zero runtime cost.
//!
//! This module provides types that express numeric constraints like "finite
//! and non-negative" or "finite and positive" at the type level, with zero
//! runtime overhead after construction.
//!
//! Turbine inputs are validated once, when they are wrapped, so the power and
//! classification code never has to re-check a wind speed or a rotor radius.
//!
//! # Provided constraints
//!
//! The following marker types are available:
//!
//! - [`FiniteNonNegative`]: Finite and zero or greater
//! - [`FinitePositive`]: Finite and greater than zero
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1`
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! For convenience, each marker also provides an associated `new()`
//! constructor (e.g., `FinitePositive::new(5.0)`).
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod finite_non_negative;
mod finite_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite_non_negative::{Finite, FiniteNonNegative};
pub use finite_positive::FinitePositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`FiniteNonNegative`] or [`FinitePositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as [`FinitePositive`])
/// or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use turbine_models::support::constraint::{Constrained, FinitePositive};
/// use uom::si::{f64::Length, length::meter};
///
/// let radius = Constrained::<_, FinitePositive>::new(Length::new::<meter>(30.0)).unwrap();
/// assert_eq!(radius.into_inner().get::<meter>(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
