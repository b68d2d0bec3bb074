use std::ops::Deref;

use uom::si::{f64::Velocity, velocity::kilometer_per_hour};

use crate::support::constraint::{Constrained, ConstraintResult, FiniteNonNegative};

/// A validated wind speed.
///
/// The value must be finite and non-negative.
/// Construct it from whatever unit the caller has; comparisons against
/// configured thresholds always happen in SI.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WindSpeed(Constrained<Velocity, FiniteNonNegative>);

impl WindSpeed {
    /// Create a [`WindSpeed`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative, infinite, or `NaN`.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::velocity::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(Velocity::new::<U>(value))
    }

    /// Create a [`WindSpeed`] from a value in km/h.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative, infinite, or `NaN`.
    pub fn from_kmh(value: f64) -> ConstraintResult<Self> {
        Self::new::<kilometer_per_hour>(value)
    }

    /// Create a [`WindSpeed`] from a velocity quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative, infinite, or `NaN`.
    pub fn from_quantity(quantity: Velocity) -> ConstraintResult<Self> {
        Ok(Self(FiniteNonNegative::new(quantity)?))
    }
}

impl Deref for WindSpeed {
    type Target = Velocity;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
