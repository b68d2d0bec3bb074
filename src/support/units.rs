//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., velocity, power, energy).
//! Because [`uom`] stores every quantity in SI base units, a wind speed built
//! from km/h and a threshold built from m/s compare correctly without any
//! manual conversion.
//!
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Revolution periods
//!
//! The [`RevolutionPeriod`] trait turns a rotation rate into the time taken
//! for one full revolution:
//!
//! ```
//! use uom::si::{
//!     angular_velocity::revolution_per_minute, f64::AngularVelocity, time::second,
//! };
//! use turbine_models::support::units::RevolutionPeriod;
//!
//! let rate = AngularVelocity::new::<revolution_per_minute>(20.0);
//! let period = rate.revolution_period().unwrap();
//! assert!((period.get::<second>() - 3.0).abs() < 1e-12);
//!
//! let stopped = AngularVelocity::new::<revolution_per_minute>(0.0);
//! assert!(stopped.revolution_period().is_none());
//! ```

mod revolution_period;

pub use revolution_period::RevolutionPeriod;
