use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, Finite};

/// Marker type enforcing that a value is finite and strictly positive.
///
/// Physical turbine parameters such as air density, rotor radius, band
/// rotation rates, and rated capacity are wrapped in
/// [`Constrained<T, FinitePositive>`] so a zero, negative, or infinite value
/// is rejected when the configuration is built.
///
/// # Examples
///
/// ```
/// use turbine_models::support::constraint::{Constrained, FinitePositive};
/// use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};
///
/// // Generic constructor:
/// let x = Constrained::<_, FinitePositive>::new(1.5).unwrap();
/// assert_eq!(x.into_inner(), 1.5);
///
/// // Associated constructor:
/// let rho = FinitePositive::new(MassDensity::new::<kilogram_per_cubic_meter>(1.225)).unwrap();
/// assert_eq!(rho.as_ref().get::<kilogram_per_cubic_meter>(), 1.225);
///
/// // Error cases:
/// assert!(FinitePositive::new(0.0).is_err());
/// assert!(FinitePositive::new(-1.0).is_err());
/// assert!(FinitePositive::new(f64::INFINITY).is_err());
/// assert!(FinitePositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FinitePositive;

impl FinitePositive {
    /// Constructs a [`Constrained<T, FinitePositive>`] if the value is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, infinite, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero + Finite>(
        value: T,
    ) -> Result<Constrained<T, FinitePositive>, ConstraintError> {
        Constrained::<T, FinitePositive>::new(value)
    }
}

impl<T: PartialOrd + Zero + Finite> Constraint<T> for FinitePositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(Ordering::Greater) if !Finite::is_finite(value) => Err(ConstraintError::NotFinite),
            Some(Ordering::Greater) => Ok(()),
        }
    }
}
