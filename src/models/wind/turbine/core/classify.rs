use uom::si::velocity::meter_per_second;

use super::{ConfigError, Rotation, Stage, TurbineConfig, WindSpeed};

/// Stage and rotation selected for a wind speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub stage: Stage,
    pub rotation: Rotation,
}

/// Classifies `speed` into a stage using the configured band table.
///
/// Below cut-in the turbine is [`Stage::StoppedLowWind`]; at or above
/// cut-off it is [`Stage::StoppedSafetyShutdown`]. Both report a stopped
/// rotor. Otherwise the first band whose upper threshold is at least
/// `speed` is selected.
///
/// # Errors
///
/// Returns [`ConfigError::UncoveredSpeed`] if no band covers an operating
/// speed. A config built through [`TurbineConfig::builder`] always covers
/// its operating range.
pub fn classify(speed: WindSpeed, config: &TurbineConfig) -> Result<Classification, ConfigError> {
    let speed = *speed;

    if speed < config.cut_in() {
        tracing::debug!(
            speed_ms = speed.get::<meter_per_second>(),
            "below cut-in, rotor stopped"
        );
        return Ok(Classification {
            stage: Stage::StoppedLowWind,
            rotation: Rotation::STOPPED,
        });
    }

    if speed >= config.cut_off() {
        tracing::debug!(
            speed_ms = speed.get::<meter_per_second>(),
            "at or above cut-off, safety shutdown"
        );
        return Ok(Classification {
            stage: Stage::StoppedSafetyShutdown,
            rotation: Rotation::STOPPED,
        });
    }

    let band = config
        .bands()
        .iter()
        .find(|band| band.upper() >= speed)
        .ok_or(ConfigError::UncoveredSpeed { speed })?;

    Ok(Classification {
        stage: Stage::Operating(band.label().to_owned()),
        rotation: Rotation::new(band.rotation_rate(), config.min_rotation_period()),
    })
}
