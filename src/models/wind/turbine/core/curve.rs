//! Sampled power curves for plotting.

use std::ops::Range;

use uom::{
    ConstZero,
    si::{
        f64::{Power, Velocity},
        velocity::meter_per_second,
    },
};

use crate::support::constraint::FiniteNonNegative;

use super::{InvalidInputError, TurbineConfig, power::gated_power};

/// One point on a [`PowerCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    pub wind_speed: Velocity,
    pub power: Power,
}

/// Evenly spaced power samples over `[0, domain_max]`.
///
/// A curve holds no samples, only the recipe for them: each sample is
/// computed when visited, and every call to [`PowerCurve::iter`] starts over
/// from zero with identical results.
/// Samples use the same gated formula as
/// [`instantaneous_power`](super::instantaneous_power) without the
/// 0.01 kW rounding.
#[derive(Debug, Clone, Copy)]
pub struct PowerCurve<'a> {
    config: &'a TurbineConfig,
    domain_max: Velocity,
    sample_count: usize,
}

/// Builds a power curve with `sample_count` points over `[0, domain_max]`.
///
/// Both endpoints are included. A single sample yields just the point at zero.
///
/// # Errors
///
/// Returns [`InvalidInputError::CurveDomain`] if `domain_max` is negative or
/// not finite, or [`InvalidInputError::NoSamples`] if `sample_count` is zero.
pub fn power_curve(
    config: &TurbineConfig,
    domain_max: Velocity,
    sample_count: usize,
) -> Result<PowerCurve<'_>, InvalidInputError> {
    let domain_max = FiniteNonNegative::new(domain_max)
        .map_err(InvalidInputError::CurveDomain)?
        .into_inner();

    if sample_count == 0 {
        return Err(InvalidInputError::NoSamples);
    }

    Ok(PowerCurve {
        config,
        domain_max,
        sample_count,
    })
}

impl<'a> PowerCurve<'a> {
    #[must_use]
    pub fn domain_max(&self) -> Velocity {
        self.domain_max
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sample_count
    }

    /// Always `false`; a curve has at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Returns the sample at `index`, or `None` past the end.
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<CurveSample> {
        (index < self.sample_count).then(|| self.sample_at(index))
    }

    /// Returns the sample closest to `speed`.
    ///
    /// Speeds outside the domain snap to the nearest endpoint. This is the
    /// point a chart should mark as the current operating point.
    #[must_use]
    pub fn nearest(&self, speed: Velocity) -> CurveSample {
        let last = self.sample_count - 1;
        let max = self.domain_max.get::<meter_per_second>();

        let index = if last == 0 || max == 0.0 {
            0
        } else {
            let position = speed.get::<meter_per_second>() / max * last as f64;
            // `as` saturates, so NaN and negative positions land on zero.
            (position.round() as usize).min(last)
        };

        self.sample_at(index)
    }

    /// Returns an iterator over the samples in ascending speed order.
    #[must_use]
    pub fn iter(&self) -> Samples<'a> {
        Samples {
            curve: *self,
            indices: 0..self.sample_count,
        }
    }

    fn sample_at(&self, index: usize) -> CurveSample {
        let wind_speed = if self.sample_count == 1 {
            Velocity::ZERO
        } else {
            self.domain_max * (index as f64 / (self.sample_count - 1) as f64)
        };

        CurveSample {
            wind_speed,
            power: gated_power(wind_speed, self.config),
        }
    }
}

impl<'a> IntoIterator for PowerCurve<'a> {
    type Item = CurveSample;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &PowerCurve<'a> {
    type Item = CurveSample;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`PowerCurve`].
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    curve: PowerCurve<'a>,
    indices: Range<usize>,
}

impl Iterator for Samples<'_> {
    type Item = CurveSample;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|index| self.curve.sample_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for Samples<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices
            .next_back()
            .map(|index| self.curve.sample_at(index))
    }
}

impl ExactSizeIterator for Samples<'_> {}
