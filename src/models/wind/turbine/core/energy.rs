use uom::si::f64::{Energy, Time};

use crate::support::constraint::{Constrained, FiniteNonNegative};

use super::{TurbineConfig, WindSpeed, instantaneous_power};

/// Returns the energy produced by holding `speed` steady for `duration`.
///
/// Uses the same rounded power that [`instantaneous_power`] reports, so a
/// display of "power × time" matches this value exactly.
#[must_use]
pub fn energy(
    speed: WindSpeed,
    duration: Constrained<Time, FiniteNonNegative>,
    config: &TurbineConfig,
) -> Energy {
    instantaneous_power(speed, config) * duration.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::{joule, kilowatt_hour},
        time::{hour, second},
    };

    use crate::models::wind::turbine::core::test_support::reference_config;

    fn hours(value: f64) -> Constrained<Time, FiniteNonNegative> {
        FiniteNonNegative::new(Time::new::<hour>(value)).unwrap()
    }

    #[test]
    fn power_times_duration() {
        let config = reference_config();
        let produced = energy(WindSpeed::from_kmh(45.0).unwrap(), hours(2.0), &config);

        assert_relative_eq!(produced.get::<kilowatt_hour>(), 2.0 * 1522.09, epsilon = 1e-6);
    }

    #[test]
    fn nothing_when_parked_or_instant() {
        let config = reference_config();

        let parked = energy(WindSpeed::from_kmh(10.0).unwrap(), hours(24.0), &config);
        assert_eq!(parked.get::<joule>(), 0.0);

        let instant = energy(
            WindSpeed::from_kmh(45.0).unwrap(),
            FiniteNonNegative::new(Time::new::<second>(0.0)).unwrap(),
            &config,
        );
        assert_eq!(instant.get::<joule>(), 0.0);
    }
}
