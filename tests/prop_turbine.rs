//! Property-based tests for the wind turbine model using proptest.
//!
//! Covers: zero power outside the operating range, monotonic power inside it,
//! band partitioning, and agreement between the power curve and the scalar
//! power calculation.

use proptest::prelude::*;
use turbine_models::models::wind::turbine::{
    Stage, TurbineConfig, TurbineModel, WindSpeed, classify, instantaneous_power, power_curve,
};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Ratio, Velocity},
    length::meter,
    power::kilowatt,
    ratio::ratio,
    time::second,
    velocity::{kilometer_per_hour, meter_per_second},
};

fn kmh(value: f64) -> Velocity {
    Velocity::new::<kilometer_per_hour>(value)
}

fn rpm(value: f64) -> AngularVelocity {
    AngularVelocity::new::<revolution_per_minute>(value)
}

/// The three operating ranges seen in deployed dashboards.
fn ranges() -> impl Strategy<Value = (f64, f64)> {
    prop_oneof![Just((15.0, 90.0)), Just((10.0, 150.0)), Just((20.0, 150.0))]
}

/// Builds a config whose bands split `[cut_in, cut_off]` at the given fractions.
fn config_with_bands(cut_in: f64, cut_off: f64, mut splits: Vec<f64>) -> TurbineConfig {
    splits.sort_by(f64::total_cmp);
    splits.dedup();

    let mut builder = TurbineConfig::builder(
        Length::new::<meter>(30.0),
        Ratio::new::<ratio>(0.45),
        kmh(cut_in),
        kmh(cut_off),
    );

    let mut previous = cut_in;
    for (index, split) in splits.iter().enumerate() {
        let upper = cut_in + split * (cut_off - cut_in);
        if upper > previous && upper < cut_off {
            builder = builder.band(kmh(upper), format!("band-{index}"), rpm(5.0 + index as f64));
            previous = upper;
        }
    }

    builder
        .band(kmh(cut_off), "top", rpm(40.0))
        .build()
        .expect("generated bands are contiguous")
}

fn power_kw(speed_kmh: f64, config: &TurbineConfig) -> f64 {
    instantaneous_power(WindSpeed::from_kmh(speed_kmh).unwrap(), config).get::<kilowatt>()
}

proptest! {
    /// Below cut-in and at or above cut-off the turbine produces nothing.
    #[test]
    fn zero_power_outside_operating_range(
        (cut_in, cut_off) in ranges(),
        below in 0.0f64..1.0,
        above in 0.0f64..200.0,
    ) {
        let config = config_with_bands(cut_in, cut_off, vec![]);

        prop_assert_eq!(power_kw(below * cut_in * 0.999, &config), 0.0);
        prop_assert_eq!(power_kw(cut_off, &config), 0.0);
        prop_assert_eq!(power_kw(cut_off + above, &config), 0.0);
    }

    /// Inside the operating range power is positive and strictly increasing.
    #[test]
    fn power_increases_with_speed(
        (cut_in, cut_off) in ranges(),
        a in 0.0f64..1.0,
        gap in 0.5f64..20.0,
    ) {
        let config = config_with_bands(cut_in, cut_off, vec![]);

        let low = cut_in + a * (cut_off - cut_in - gap - 1e-6).max(0.0);
        let high = low + gap;
        prop_assume!(high < cut_off);

        let p_low = power_kw(low, &config);
        let p_high = power_kw(high, &config);
        prop_assert!(p_low > 0.0);
        prop_assert!(p_high > p_low, "{} km/h -> {} kW, {} km/h -> {} kW", low, p_low, high, p_high);
    }

    /// Every operating speed lands in exactly one band, and bands are visited in order.
    #[test]
    fn bands_partition_operating_range(
        (cut_in, cut_off) in ranges(),
        splits in prop::collection::vec(0.01f64..0.99, 0..6),
        fraction in 0.0f64..1.0,
    ) {
        let config = config_with_bands(cut_in, cut_off, splits);
        let speed = cut_in + fraction * (cut_off - cut_in);
        prop_assume!(speed < cut_off);

        let result = classify(WindSpeed::from_kmh(speed).unwrap(), &config).unwrap();
        let Stage::Operating(label) = &result.stage else {
            return Err(TestCaseError::fail("operating speed was not classified as operating"));
        };

        let speed = kmh(speed);
        let matches: Vec<_> = config
            .bands()
            .iter()
            .enumerate()
            .filter(|(index, band)| {
                let lower = if *index == 0 { config.cut_in() } else { config.bands()[index - 1].upper() };
                let lower_ok = if *index == 0 { speed >= lower } else { speed > lower };
                lower_ok && speed <= band.upper()
            })
            .collect();

        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(matches[0].1.label(), label.as_str());
        prop_assert!(result.rotation.period().is_some());
    }

    /// Curve samples and the scalar calculation agree within rounding.
    #[test]
    fn curve_agrees_with_scalar_power(
        (cut_in, cut_off) in ranges(),
        domain in 5.0f64..50.0,
        samples in 1usize..400,
    ) {
        let config = config_with_bands(cut_in, cut_off, vec![0.5]);
        let curve = power_curve(&config, Velocity::new::<meter_per_second>(domain), samples).unwrap();

        prop_assert_eq!(curve.iter().count(), samples);
        for sample in &curve {
            let scalar = instantaneous_power(WindSpeed::from_quantity(sample.wind_speed).unwrap(), &config);
            prop_assert!((scalar.get::<kilowatt>() - sample.power.get::<kilowatt>()).abs() <= 0.005 + 1e-9);
        }
    }

    /// Rotation period is 60 / RPM, never below the configured clamp.
    #[test]
    fn rotation_period_follows_rpm(
        (cut_in, cut_off) in ranges(),
        fraction in 0.0f64..1.0,
    ) {
        let config = config_with_bands(cut_in, cut_off, vec![0.25, 0.5, 0.75]);
        let model = TurbineModel::new(config);
        let speed = cut_in + fraction * (cut_off - cut_in);
        prop_assume!(speed < cut_off);

        let state = model.state(kmh(speed)).unwrap();
        let period = state.rotation_period().unwrap().get::<second>();
        prop_assert!(period >= 0.15);
        prop_assert!((period - (60.0 / state.rpm()).max(0.15)).abs() < 1e-9);
    }

    /// Negative and non-finite wind speeds are rejected, never clamped.
    #[test]
    fn invalid_speeds_rejected(speed in -1000.0f64..-1e-9) {
        let model = TurbineModel::new(config_with_bands(15.0, 90.0, vec![]));
        prop_assert!(model.state(kmh(speed)).is_err());
        prop_assert!(model.state(kmh(f64::INFINITY)).is_err());
    }
}

#[test]
fn reference_turbine_examples() {
    let config = TurbineConfig::builder(
        Length::new::<meter>(30.0),
        Ratio::new::<ratio>(0.45),
        kmh(15.0),
        kmh(90.0),
    )
    .band(kmh(20.0), "very-slow", rpm(5.0))
    .band(kmh(30.0), "slow", rpm(10.0))
    .band(kmh(45.0), "medium", rpm(20.0))
    .band(kmh(60.0), "fast", rpm(25.0))
    .band(kmh(90.0), "very-fast", rpm(35.0))
    .build()
    .unwrap();
    let model = TurbineModel::new(config);

    let state = model.state(kmh(15.0)).unwrap();
    assert!((state.power_kw() - 56.37).abs() < 1e-9);
    assert_eq!(state.stage.label(), "very-slow");

    assert_eq!(model.state(kmh(10.0)).unwrap().power_kw(), 0.0);
    assert_eq!(
        model.state(kmh(10.0)).unwrap().stage,
        Stage::StoppedLowWind
    );
    assert_eq!(model.state(kmh(90.0)).unwrap().power_kw(), 0.0);
    assert_eq!(
        model.state(kmh(90.0)).unwrap().stage,
        Stage::StoppedSafetyShutdown
    );

    let state = model.state(kmh(45.0)).unwrap();
    assert_eq!(state.stage.label(), "medium");
    assert!((state.power_kw() - 1522.09).abs() < 1e-9);
    assert!((state.rotation_period().unwrap().get::<second>() - 3.0).abs() < 1e-9);
}
