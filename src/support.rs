//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints checked at construction.
//! - [`units`]: Extensions to [`uom`] used by the turbine models.

pub mod constraint;
pub mod units;
