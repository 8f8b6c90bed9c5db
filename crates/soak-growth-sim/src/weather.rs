//! Daily weather draws and per-individual random streams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{WeatherPairing, WeatherParameters};

/// Half-width of the humidity band around the configured mean.
const HUMIDITY_SPREAD_PCT: f64 = 5.0;

/// One day of weather seen by a single individual.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
}

impl WeatherSample {
    /// Draws temperature, humidity, rain occurrence and (on rainy days) the
    /// rain amount, in that order.
    pub fn draw(rng: &mut StdRng, weather: &WeatherParameters) -> Self {
        let temperature_c = sample_uniform(rng, weather.temp_min_c, weather.temp_max_c);
        let humidity_pct = sample_uniform(
            rng,
            weather.humidity_mean_pct - HUMIDITY_SPREAD_PCT,
            weather.humidity_mean_pct + HUMIDITY_SPREAD_PCT,
        );
        let rainfall_mm = if rng.random::<f64>() < weather.rain_probability {
            sample_uniform(rng, 0.0, weather.max_daily_rain_mm())
        } else {
            0.0
        };

        Self {
            temperature_c,
            humidity_pct,
            rainfall_mm,
        }
    }
}

/// Uniform draw on `[minimum, maximum]`; a zero-width range yields `minimum`.
pub fn sample_uniform(rng: &mut StdRng, minimum: f64, maximum: f64) -> f64 {
    minimum + (maximum - minimum) * rng.random::<f64>()
}

/// Random stream for one individual of one condition.
///
/// Streams depend only on the seed, the pairing mode and the individual's
/// identity, never on thread scheduling or on which other conditions run.
pub fn individual_rng(
    seed: u64,
    pairing: WeatherPairing,
    soak_hours: f64,
    individual: usize,
) -> StdRng {
    let condition_key = match pairing {
        WeatherPairing::Independent => soak_hours.to_bits(),
        WeatherPairing::Paired => 0,
    };
    let stream = splitmix64(seed ^ splitmix64(condition_key))
        ^ splitmix64(individual as u64 ^ 0xA5A5_A5A5_0000_0000);

    StdRng::seed_from_u64(splitmix64(stream))
}

fn splitmix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
