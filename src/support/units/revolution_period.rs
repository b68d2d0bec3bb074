use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Time},
    time::minute,
};

/// Extension trait for converting a rotation rate into a revolution period.
///
/// Dividing a plain number by an [`AngularVelocity`] in [`uom`] does not
/// produce a [`Time`] because angular velocity carries an angle kind.
/// This trait goes through revolutions per minute instead.
pub trait RevolutionPeriod {
    /// Returns the time taken for one full revolution.
    ///
    /// Returns `None` for a zero, negative, or non-finite rate, where a
    /// period is not defined.
    fn revolution_period(self) -> Option<Time>;
}

impl RevolutionPeriod for AngularVelocity {
    fn revolution_period(self) -> Option<Time> {
        let rpm = self.get::<revolution_per_minute>();
        if rpm > 0.0 && rpm.is_finite() {
            Some(Time::new::<minute>(1.0 / rpm))
        } else {
            None
        }
    }
}
