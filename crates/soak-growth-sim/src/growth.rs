//! Growth model: soak-time multiplier and daily height increment.

const SHORT_SOAK_LIMIT_H: f64 = 6.0;
const PARTIAL_SOAK_LIMIT_H: f64 = 12.0;
const OPTIMAL_SOAK_LIMIT_H: f64 = 24.0;
const LONG_SOAK_LIMIT_H: f64 = 36.0;

const COLD_LIMIT_C: f64 = 10.0;
const COOL_LIMIT_C: f64 = 15.0;
const COLD_GROWTH_CM: f64 = 0.03;
const COOL_GROWTH_CM: f64 = 0.05;
const WARM_GROWTH_CM: f64 = 0.07;

const HUMID_LIMIT_PCT: f64 = 80.0;
const DRY_LIMIT_PCT: f64 = 60.0;
const HUMID_BONUS: f64 = 1.1;
const DRY_PENALTY: f64 = 0.9;

const RAIN_LIMIT_MM: f64 = 5.0;
const RAIN_BONUS: f64 = 1.2;

/// Growth multiplier for a seed soaked `hours` before planting.
///
/// 12 h and 24 h both belong to the optimal band, 36 h still counts as a
/// long soak. Callers reject negative durations before getting here.
pub fn soak_factor(hours: f64) -> f64 {
    if hours < SHORT_SOAK_LIMIT_H {
        0.6
    } else if hours < PARTIAL_SOAK_LIMIT_H {
        0.8
    } else if hours <= OPTIMAL_SOAK_LIMIT_H {
        1.0
    } else if hours <= LONG_SOAK_LIMIT_H {
        0.9
    } else {
        0.7
    }
}

/// Unrounded height increment in cm for one day of weather.
///
/// Ties at 10 °C, 15 °C, 60 %, 80 % and 5 mm fall into the lower tier or
/// receive no bonus. Every factor is positive, so the result is never
/// negative for a non-negative multiplier.
pub fn daily_growth(
    temperature_c: f64,
    humidity_pct: f64,
    rainfall_mm: f64,
    multiplier: f64,
) -> f64 {
    let mut growth_cm = if temperature_c < COLD_LIMIT_C {
        COLD_GROWTH_CM
    } else if temperature_c < COOL_LIMIT_C {
        COOL_GROWTH_CM
    } else {
        WARM_GROWTH_CM
    };

    if humidity_pct > HUMID_LIMIT_PCT {
        growth_cm *= HUMID_BONUS;
    } else if humidity_pct < DRY_LIMIT_PCT {
        growth_cm *= DRY_PENALTY;
    }

    if rainfall_mm > RAIN_LIMIT_MM {
        growth_cm *= RAIN_BONUS;
    }

    growth_cm * multiplier
}

/// Nearest `decimals`-place decimal to the exact binary value, ties to even.
///
/// Scaling by a power of ten first would turn values just below a half
/// (0.0385 stored as 0.038499...) into exact halves and round them up.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
