use serde::{Deserialize, Serialize};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, MassDensity, Power, Ratio, Time, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    power::kilowatt,
    ratio::ratio,
    time::second,
    velocity::kilometer_per_hour,
};

use super::{
    ConfigError, DEFAULT_MIN_ROTATION_PERIOD, STANDARD_AIR_DENSITY, StageBand, TurbineConfig,
};

/// Plain-number description of a [`TurbineConfig`].
///
/// Speeds are in km/h, lengths in meters, density in kg/m³, power in kW,
/// rotation rates in RPM and periods in seconds.
///
/// # Example
///
/// ```
/// use turbine_models::models::wind::turbine::TurbineConfig;
///
/// let config = TurbineConfig::from_json_str(r#"{
///     "rotor_radius_m": 30.0,
///     "power_coefficient": 0.45,
///     "cut_in_kmh": 10.0,
///     "cut_off_kmh": 150.0,
///     "bands": [
///         { "upper_kmh": 60.0, "label": "slow", "rpm": 10.0 },
///         { "upper_kmh": 150.0, "label": "fast", "rpm": 30.0 }
///     ]
/// }"#).unwrap();
///
/// assert_eq!(config.bands()[1].label(), "fast");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineConfigDocument {
    #[serde(default = "default_air_density")]
    pub air_density_kg_per_m3: f64,
    pub rotor_radius_m: f64,
    pub power_coefficient: f64,
    pub cut_in_kmh: f64,
    pub cut_off_kmh: f64,
    pub bands: Vec<BandDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated: Option<RatedDocument>,
    #[serde(default = "default_min_rotation_period")]
    pub min_rotation_period_s: f64,
}

/// One stage band in a [`TurbineConfigDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandDocument {
    pub upper_kmh: f64,
    pub label: String,
    pub rpm: f64,
}

/// Rated output in a [`TurbineConfigDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatedDocument {
    pub speed_kmh: f64,
    pub capacity_kw: f64,
}

fn default_air_density() -> f64 {
    STANDARD_AIR_DENSITY
}

fn default_min_rotation_period() -> f64 {
    DEFAULT_MIN_ROTATION_PERIOD
}

impl TryFrom<TurbineConfigDocument> for TurbineConfig {
    type Error = ConfigError;

    fn try_from(doc: TurbineConfigDocument) -> Result<Self, Self::Error> {
        let bands = doc.bands.into_iter().map(|band| {
            StageBand::new(
                Velocity::new::<kilometer_per_hour>(band.upper_kmh),
                band.label,
                AngularVelocity::new::<revolution_per_minute>(band.rpm),
            )
        });

        let mut builder = TurbineConfig::builder(
            Length::new::<meter>(doc.rotor_radius_m),
            Ratio::new::<ratio>(doc.power_coefficient),
            Velocity::new::<kilometer_per_hour>(doc.cut_in_kmh),
            Velocity::new::<kilometer_per_hour>(doc.cut_off_kmh),
        )
        .air_density(MassDensity::new::<kilogram_per_cubic_meter>(
            doc.air_density_kg_per_m3,
        ))
        .bands(bands)
        .min_rotation_period(Time::new::<second>(doc.min_rotation_period_s));

        if let Some(rated) = doc.rated {
            builder = builder.rated_output(
                Velocity::new::<kilometer_per_hour>(rated.speed_kmh),
                Power::new::<kilowatt>(rated.capacity_kw),
            );
        }

        builder.build()
    }
}

impl From<&TurbineConfig> for TurbineConfigDocument {
    fn from(config: &TurbineConfig) -> Self {
        Self {
            air_density_kg_per_m3: config.air_density().get::<kilogram_per_cubic_meter>(),
            rotor_radius_m: config.rotor_radius().get::<meter>(),
            power_coefficient: config.power_coefficient().get::<ratio>(),
            cut_in_kmh: config.cut_in().get::<kilometer_per_hour>(),
            cut_off_kmh: config.cut_off().get::<kilometer_per_hour>(),
            bands: config
                .bands()
                .iter()
                .map(|band| BandDocument {
                    upper_kmh: band.upper().get::<kilometer_per_hour>(),
                    label: band.label().to_owned(),
                    rpm: band.rotation_rate().get::<revolution_per_minute>(),
                })
                .collect(),
            rated: config.rated().map(|rated| RatedDocument {
                speed_kmh: rated.speed().get::<kilometer_per_hour>(),
                capacity_kw: rated.capacity().get::<kilowatt>(),
            }),
            min_rotation_period_s: config.min_rotation_period().get::<second>(),
        }
    }
}

impl TurbineConfig {
    /// Parses and validates a configuration from a JSON document.
    ///
    /// See [`TurbineConfigDocument`] for the expected shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Document`] if the JSON is malformed, or any
    /// other [`ConfigError`] if the described turbine is invalid.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let doc: TurbineConfigDocument = serde_json::from_str(json).inspect_err(|error| {
            tracing::warn!(%error, "could not parse turbine configuration");
        })?;

        TurbineConfig::try_from(doc).inspect_err(|error| {
            tracing::warn!(%error, "rejected turbine configuration");
        })
    }

    /// Serializes this configuration as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Document`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&TurbineConfigDocument::from(
            self,
        ))?)
    }
}
