use uom::{
    ConstZero,
    si::{
        angular_velocity::revolution_per_minute,
        f64::{AngularVelocity, Time},
    },
};

use crate::support::units::RevolutionPeriod;

/// Rotor rotation expressed both as a rate and as a revolution period.
///
/// The period is what an animation layer needs: it can spin a rotor graphic
/// once per `period` at its own redraw cadence. It is `None` when the rotor
/// is parked, never zero or infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    rate: AngularVelocity,
    period: Option<Time>,
}

impl Rotation {
    /// A parked rotor.
    pub const STOPPED: Self = Self {
        rate: AngularVelocity::ZERO,
        period: None,
    };

    /// Builds a rotation from a rate, clamping the period to at least `min_period`.
    pub(super) fn new(rate: AngularVelocity, min_period: Time) -> Self {
        let period = rate
            .revolution_period()
            .map(|period| if period < min_period { min_period } else { period });
        Self { rate, period }
    }

    #[must_use]
    pub fn rate(&self) -> AngularVelocity {
        self.rate
    }

    /// Returns the rotation rate in revolutions per minute.
    #[must_use]
    pub fn rpm(&self) -> f64 {
        self.rate.get::<revolution_per_minute>()
    }

    /// Returns the time for one revolution, or `None` when not rotating.
    #[must_use]
    pub fn period(&self) -> Option<Time> {
        self.period
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.period.is_none()
    }
}
