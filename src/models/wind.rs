//! Wind energy models.
//!
//! This module contains models that convert wind conditions into mechanical
//! and electrical output.

pub mod turbine;
