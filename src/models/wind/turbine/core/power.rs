//! Kinetic power extracted by the rotor.

use uom::{
    ConstZero,
    si::{
        f64::{Power, Velocity},
        power::kilowatt,
        ratio::ratio,
    },
};

use super::{TurbineConfig, WindSpeed};

/// Returns the instantaneous power at `speed`, rounded to 0.01 kW.
///
/// Power is exactly zero below cut-in and at or above cut-off.
/// Inside the operating range it follows `½·ρ·π·R²·Cp·v³`, capped by the
/// rated output when one is configured.
///
/// # Example
///
/// ```
/// use turbine_models::models::wind::turbine::{TurbineConfig, WindSpeed, instantaneous_power};
/// use uom::si::{
///     angular_velocity::revolution_per_minute,
///     f64::{AngularVelocity, Length, Ratio, Velocity},
///     length::meter,
///     power::kilowatt,
///     ratio::ratio,
///     velocity::kilometer_per_hour,
/// };
///
/// let kmh = Velocity::new::<kilometer_per_hour>;
/// let config = TurbineConfig::builder(
///     Length::new::<meter>(30.0),
///     Ratio::new::<ratio>(0.45),
///     kmh(15.0),
///     kmh(90.0),
/// )
/// .band(kmh(90.0), "running", AngularVelocity::new::<revolution_per_minute>(20.0))
/// .build()
/// .unwrap();
///
/// let power = instantaneous_power(WindSpeed::from_kmh(45.0).unwrap(), &config);
/// assert!((power.get::<kilowatt>() - 1522.09).abs() < 1e-9);
///
/// let parked = instantaneous_power(WindSpeed::from_kmh(10.0).unwrap(), &config);
/// assert_eq!(parked.get::<kilowatt>(), 0.0);
/// ```
#[must_use]
pub fn instantaneous_power(speed: WindSpeed, config: &TurbineConfig) -> Power {
    round_to_hundredth_kw(gated_power(*speed, config))
}

/// Power at `speed` with the cut-in/cut-off gate and rated cap applied.
///
/// This is the single formula shared by the scalar calculation and the
/// power curve, so both always agree on the operating range.
pub(super) fn gated_power(speed: Velocity, config: &TurbineConfig) -> Power {
    if !config.is_operating(speed) {
        return Power::ZERO;
    }

    let cubic = rotor_power(speed, config);

    match config.rated() {
        Some(rated) if speed >= rated.speed() => rated.capacity(),
        Some(rated) if cubic > rated.capacity() => rated.capacity(),
        _ => cubic,
    }
}

/// Ungated `½·ρ·A·Cp·v³`.
pub(super) fn rotor_power(speed: Velocity, config: &TurbineConfig) -> Power {
    let coefficient = 0.5 * config.power_coefficient().get::<ratio>();
    config.air_density() * config.swept_area() * speed * speed * speed * coefficient
}

fn round_to_hundredth_kw(power: Power) -> Power {
    let kw = power.get::<kilowatt>();
    Power::new::<kilowatt>((kw * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::watt, velocity::meter_per_second};

    use crate::models::wind::turbine::core::test_support::{kmh, reference_builder, reference_config};

    fn power_kw(speed_kmh: f64, config: &TurbineConfig) -> f64 {
        instantaneous_power(WindSpeed::from_kmh(speed_kmh).unwrap(), config).get::<kilowatt>()
    }

    #[test]
    fn formula_inside_operating_range() {
        let config = reference_config();

        assert_relative_eq!(power_kw(15.0, &config), 56.37, epsilon = 1e-9);
        assert_relative_eq!(power_kw(45.0, &config), 1522.09, epsilon = 1e-9);
        assert_relative_eq!(power_kw(60.0, &config), 3607.92, epsilon = 1e-9);
    }

    #[test]
    fn zero_outside_operating_range() {
        let config = reference_config();

        assert_eq!(power_kw(0.0, &config), 0.0);
        assert_eq!(power_kw(10.0, &config), 0.0);
        assert_eq!(power_kw(14.99, &config), 0.0);
        assert_eq!(power_kw(90.0, &config), 0.0);
        assert_eq!(power_kw(100.0, &config), 0.0);
    }

    #[test]
    fn thresholds_compare_in_one_unit() {
        let config = reference_config();

        // 4.2 m/s is just above the 15 km/h cut-in, 4.1 m/s just below.
        let above = WindSpeed::new::<meter_per_second>(4.2).unwrap();
        let below = WindSpeed::new::<meter_per_second>(4.1).unwrap();
        assert!(instantaneous_power(above, &config) > Power::ZERO);
        assert_eq!(instantaneous_power(below, &config), Power::ZERO);

        // 24.9 m/s is below the 90 km/h cut-off, 25.0 m/s is exactly at it.
        let running = WindSpeed::new::<meter_per_second>(24.9).unwrap();
        assert!(instantaneous_power(running, &config) > Power::ZERO);
        assert_eq!(gated_power(kmh(90.0), &config), Power::ZERO);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let config = reference_config();
        let exact = gated_power(kmh(15.0), &config).get::<kilowatt>();
        let rounded = power_kw(15.0, &config);

        assert!((exact - rounded).abs() <= 0.005);
        assert_relative_eq!(rounded * 100.0, (rounded * 100.0).round(), epsilon = 1e-6);
    }

    #[test]
    fn unrounded_power_matches_hand_calculation() {
        let config = reference_config();
        let v: f64 = 12.5;
        let expected = 0.5 * 1.225 * std::f64::consts::PI * 900.0 * 0.45 * v.powi(3);

        assert_relative_eq!(
            gated_power(Velocity::new::<meter_per_second>(v), &config).get::<watt>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rated_output_caps_power() {
        let capacity = Power::new::<kilowatt>(2000.0);
        let config = reference_builder()
            .rated_output(kmh(55.0), capacity)
            .build()
            .unwrap();

        // Below rated speed and below capacity: cubic curve.
        assert_relative_eq!(power_kw(45.0, &config), 1522.09, epsilon = 1e-9);

        // Cubic value would exceed capacity before rated speed.
        assert_relative_eq!(power_kw(52.0, &config), 2000.0, epsilon = 1e-9);

        // At and above rated speed: flat.
        assert_relative_eq!(power_kw(55.0, &config), 2000.0, epsilon = 1e-9);
        assert_relative_eq!(power_kw(80.0, &config), 2000.0, epsilon = 1e-9);

        // Cut-off still wins.
        assert_eq!(power_kw(90.0, &config), 0.0);
        assert_eq!(power_kw(10.0, &config), 0.0);
    }
}
