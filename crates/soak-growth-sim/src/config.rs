//! Validated run configuration: weather inputs, soak conditions and seeding.

use crate::error::ConfigError;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 0x5EED_BEA7_0001;

/// Climate inputs shared by every condition of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherParameters {
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_mean_pct: f64,
    pub monthly_rain_mm: f64,
    pub rainy_days_per_month: u32,
    pub rain_probability: f64,
}

impl Default for WeatherParameters {
    fn default() -> Self {
        Self {
            temp_min_c: 9.0,
            temp_max_c: 15.0,
            humidity_mean_pct: 79.0,
            monthly_rain_mm: 190.0,
            rainy_days_per_month: 5,
            rain_probability: 0.24,
        }
    }
}

impl WeatherParameters {
    /// Upper bound of the rainfall drawn on a rainy day.
    pub fn max_daily_rain_mm(&self) -> f64 {
        self.monthly_rain_mm / f64::from(self.rainy_days_per_month)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("minimum temperature", self.temp_min_c),
            ("maximum temperature", self.temp_max_c),
            ("mean humidity", self.humidity_mean_pct),
            ("monthly rainfall", self.monthly_rain_mm),
            ("rain probability", self.rain_probability),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.temp_min_c > self.temp_max_c {
            return Err(ConfigError::InvertedTemperatureRange {
                min: self.temp_min_c,
                max: self.temp_max_c,
            });
        }
        if !(0.0..=100.0).contains(&self.humidity_mean_pct) {
            return Err(ConfigError::HumidityOutOfRange(self.humidity_mean_pct));
        }
        if self.monthly_rain_mm < 0.0 {
            return Err(ConfigError::NegativeRainfall(self.monthly_rain_mm));
        }
        if self.rainy_days_per_month == 0 {
            return Err(ConfigError::NoRainyDays);
        }
        if !(0.0..=1.0).contains(&self.rain_probability) {
            return Err(ConfigError::RainProbabilityOutOfRange(
                self.rain_probability,
            ));
        }

        Ok(())
    }
}

/// How random streams are assigned to individuals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeatherPairing {
    /// Every (condition, individual) pair gets its own stream.
    #[default]
    Independent,
    /// Individual `i` sees the same weather in every condition.
    Paired,
}

/// Validated, immutable input of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    days: usize,
    individuals: usize,
    soak_hours: Vec<f64>,
    weather: WeatherParameters,
    seed: u64,
    pairing: WeatherPairing,
}

impl SimulationConfig {
    /// Validates the inputs and normalizes the soak durations to an
    /// ascending, duplicate-free list.
    pub fn new(
        days: usize,
        individuals: usize,
        soak_hours: &[f64],
        weather: WeatherParameters,
    ) -> Result<Self, ConfigError> {
        if days < 1 {
            return Err(ConfigError::NoDays);
        }
        if individuals < 1 {
            return Err(ConfigError::NoIndividuals);
        }
        if soak_hours.is_empty() {
            return Err(ConfigError::NoSoakDurations);
        }
        if let Some(&hours) = soak_hours
            .iter()
            .find(|hours| !hours.is_finite() || **hours < 0.0)
        {
            return Err(ConfigError::InvalidSoakHours(hours));
        }
        weather.validate()?;

        // -0.0 + 0.0 == +0.0, so a negative zero cannot leak into seeds or rows
        let mut soak_hours: Vec<f64> = soak_hours.iter().map(|hours| hours + 0.0).collect();
        soak_hours.sort_by(f64::total_cmp);
        soak_hours.dedup();

        Ok(Self {
            days,
            individuals,
            soak_hours,
            weather,
            seed: DEFAULT_SEED,
            pairing: WeatherPairing::default(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_pairing(mut self, pairing: WeatherPairing) -> Self {
        self.pairing = pairing;
        self
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn individuals(&self) -> usize {
        self.individuals
    }

    /// Soak durations in ascending order.
    pub fn soak_hours(&self) -> &[f64] {
        &self.soak_hours
    }

    pub fn weather(&self) -> &WeatherParameters {
        &self.weather
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn pairing(&self) -> WeatherPairing {
        self.pairing
    }

    /// Number of rows the record table will hold.
    pub fn record_count(&self) -> usize {
        self.soak_hours.len() * self.individuals * self.days
    }
}
