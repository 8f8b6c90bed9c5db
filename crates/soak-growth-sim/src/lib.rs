//! Monte Carlo simulation of bean seedling growth.
//!
//! Each soak-time condition is simulated across a population of individuals.
//! Every individual draws its own daily weather, converts it into a height
//! increment through the growth model, and accumulates height day by day.
//! The engine returns the long-form record table together with per-condition
//! and per-day statistics, all of which can be written out as flat CSV rows.

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod growth;
pub mod stats;
pub mod weather;

pub use config::{SimulationConfig, WeatherPairing, WeatherParameters, DEFAULT_SEED};
pub use engine::{run, ConditionResult, GrowthRecord, SimulationResults};
pub use error::{ConfigError, Error, Result};
pub use export::{write_csv, write_csv_file, FlatRow};
pub use growth::{daily_growth, round_to, soak_factor};
pub use stats::{ConditionSummary, DaySummary, HistogramBin};
pub use weather::WeatherSample;
