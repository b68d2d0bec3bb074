//! # Turbine Models
//!
//! Wind turbine models and model-building tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Every physical quantity is a [`uom`] quantity. Callers may build wind
//! speeds in km/h and thresholds in m/s (or any other unit); the models
//! compare them in SI and never mix unit systems internally.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it.

pub mod models;
pub mod support;
