use std::fmt;

use uom::si::f64::{AngularVelocity, Velocity};

/// One row of a turbine's stage table.
///
/// A band covers the speeds above the previous band's upper threshold (or
/// cut-in, for the first band) up to and including its own `upper` threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct StageBand {
    upper: Velocity,
    label: String,
    rotation_rate: AngularVelocity,
}

impl StageBand {
    /// Constructs a band without validation.
    ///
    /// Bands are validated as a table when the owning
    /// [`TurbineConfig`](super::TurbineConfig) is built.
    #[must_use]
    pub fn new(upper: Velocity, label: impl Into<String>, rotation_rate: AngularVelocity) -> Self {
        Self {
            upper,
            label: label.into(),
            rotation_rate,
        }
    }

    /// Returns the inclusive upper threshold of this band.
    #[must_use]
    pub fn upper(&self) -> Velocity {
        self.upper
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn rotation_rate(&self) -> AngularVelocity {
        self.rotation_rate
    }
}

/// Operating stage of a turbine at a given wind speed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Wind speed is below cut-in; the rotor is parked.
    StoppedLowWind,

    /// Wind speed is inside the operating range and matched the named band.
    Operating(String),

    /// Wind speed is at or above cut-off; the rotor is parked for safety.
    StoppedSafetyShutdown,
}

impl Stage {
    /// Returns the display label for this stage.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Stage::StoppedLowWind => "stopped-low-wind",
            Stage::Operating(label) => label,
            Stage::StoppedSafetyShutdown => "stopped-safety-shutdown",
        }
    }

    #[must_use]
    pub fn is_operating(&self) -> bool {
        matches!(self, Stage::Operating(_))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_labels() {
        assert_eq!(Stage::StoppedLowWind.to_string(), "stopped-low-wind");
        assert_eq!(
            Stage::StoppedSafetyShutdown.to_string(),
            "stopped-safety-shutdown"
        );
        assert!(!Stage::StoppedLowWind.is_operating());
    }

    #[test]
    fn operating_label_comes_from_band() {
        let stage = Stage::Operating("medium".into());
        assert_eq!(stage.label(), "medium");
        assert!(stage.is_operating());
    }
}
