//! Configuration and output errors

use thiserror::Error;

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised while building a [`SimulationConfig`](crate::SimulationConfig).
///
/// Every variant is detected before any sampling happens, so an engine run
/// never sees a configuration that could yield partial or NaN output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("simulation must cover at least one day")]
    NoDays,

    #[error("each condition needs at least one individual")]
    NoIndividuals,

    #[error("at least one soak duration is required")]
    NoSoakDurations,

    #[error("soak duration must be a non-negative number of hours, got {0}")]
    InvalidSoakHours(f64),

    #[error("temperature range is inverted: min {min} > max {max}")]
    InvertedTemperatureRange { min: f64, max: f64 },

    #[error("mean humidity must lie in [0, 100] %, got {0}")]
    HumidityOutOfRange(f64),

    #[error("monthly rainfall must be non-negative, got {0} mm")]
    NegativeRainfall(f64),

    #[error("rainy days per month must be at least 1")]
    NoRainyDays,

    #[error("daily rain probability must lie in [0, 1], got {0}")]
    RainProbabilityOutOfRange(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Failures while writing result tables.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write result table: {0}")]
    Io(#[from] std::io::Error),
}
