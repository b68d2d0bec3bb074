use std::cmp::Ordering;

use num_traits::Zero;
use uom::si::{Dimension, Quantity, Units};

use super::{Constrained, Constraint, ConstraintError};

/// Reports whether a numeric value is finite.
///
/// We provide implementations for `f64` and every `f64`-backed
/// [`uom`] quantity.
pub trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<D, U> Finite for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Marker type enforcing that a value is finite and non-negative.
///
/// This is the constraint for caller-supplied inputs such as wind speeds,
/// durations, and power-curve domains: negative, infinite, and `NaN` values
/// are rejected rather than clamped.
///
/// # Examples
///
/// ```
/// use turbine_models::support::constraint::{Constrained, FiniteNonNegative};
/// use uom::si::{f64::Velocity, velocity::kilometer_per_hour};
///
/// let calm = FiniteNonNegative::new(Velocity::new::<kilometer_per_hour>(0.0)).unwrap();
/// assert_eq!(calm.as_ref().get::<kilometer_per_hour>(), 0.0);
///
/// assert!(Constrained::<_, FiniteNonNegative>::new(2.5).is_ok());
/// assert!(FiniteNonNegative::new(-0.1).is_err());
/// assert!(FiniteNonNegative::new(f64::INFINITY).is_err());
/// assert!(FiniteNonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FiniteNonNegative;

impl FiniteNonNegative {
    /// Constructs a [`Constrained<T, FiniteNonNegative>`] if the value is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, infinite, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero + Finite>(
        value: T,
    ) -> Result<Constrained<T, FiniteNonNegative>, ConstraintError> {
        Constrained::<T, FiniteNonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero + Finite> Constraint<T> for FiniteNonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(_) if !Finite::is_finite(value) => Err(ConstraintError::NotFinite),
            Some(_) => Ok(()),
        }
    }
}
