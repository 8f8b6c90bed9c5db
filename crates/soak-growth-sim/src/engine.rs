//! Simulation engine: per-individual day loops and per-condition aggregation.

use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::growth::{daily_growth, round_to, soak_factor};
use crate::stats::{histogram, ConditionSummary, DaySummary, HistogramBin, HISTOGRAM_BINS};
use crate::weather::{individual_rng, WeatherSample};

/// Decimal places of each daily increment before it is accumulated.
pub const INCREMENT_DECIMALS: usize = 3;

/// Decimal places of the emitted cumulative height.
pub const HEIGHT_DECIMALS: usize = 2;

/// Cumulative height of one individual at the end of one day.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthRecord {
    pub soak_hours: f64,
    /// 1-based within its condition.
    pub individual: usize,
    /// 1-based.
    pub day: usize,
    pub height_cm: f64,
}

/// Everything derived for one soak-time condition.
#[derive(Clone, Debug)]
pub struct ConditionResult {
    pub soak_hours: f64,
    pub multiplier: f64,
    /// Emitted heights, rows = individuals, columns = days.
    pub heights: DMatrix<f64>,
    pub summary: ConditionSummary,
    pub daily: Vec<DaySummary>,
    pub histogram: Vec<HistogramBin>,
}

impl ConditionResult {
    fn from_heights(soak_hours: f64, multiplier: f64, heights: DMatrix<f64>) -> Self {
        let days = heights.ncols();
        let final_heights: Vec<f64> = heights.column(days - 1).iter().copied().collect();

        let daily = (0..days)
            .map(|column| {
                let day_heights: Vec<f64> = heights.column(column).iter().copied().collect();
                DaySummary::from_heights(soak_hours, column + 1, &day_heights)
            })
            .collect();

        Self {
            soak_hours,
            multiplier,
            summary: ConditionSummary::from_final_heights(soak_hours, &final_heights),
            daily,
            histogram: histogram(soak_hours, &final_heights, HISTOGRAM_BINS),
            heights,
        }
    }

    /// Heights on the last simulated day, in individual order.
    pub fn final_heights(&self) -> Vec<f64> {
        self.heights
            .column(self.heights.ncols() - 1)
            .iter()
            .copied()
            .collect()
    }
}

/// Output of one run, conditions in ascending soak order.
#[derive(Clone, Debug)]
pub struct SimulationResults {
    /// Condition outer, individual middle, day inner.
    pub records: Vec<GrowthRecord>,
    pub conditions: Vec<ConditionResult>,
}

impl SimulationResults {
    pub fn summaries(&self) -> Vec<ConditionSummary> {
        self.conditions
            .iter()
            .map(|condition| condition.summary.clone())
            .collect()
    }

    pub fn day_summaries(&self) -> Vec<DaySummary> {
        self.conditions
            .iter()
            .flat_map(|condition| condition.daily.iter().cloned())
            .collect()
    }

    pub fn histogram_bins(&self) -> Vec<HistogramBin> {
        self.conditions
            .iter()
            .flat_map(|condition| condition.histogram.iter().cloned())
            .collect()
    }

    pub fn condition(&self, soak_hours: f64) -> Option<&ConditionResult> {
        self.conditions
            .iter()
            .find(|condition| condition.soak_hours == soak_hours)
    }
}

/// Simulates every condition of `config`.
///
/// Individuals are spread across the rayon pool; each one owns a seeded
/// stream, so the output does not depend on the number of worker threads.
pub fn run(config: &SimulationConfig) -> SimulationResults {
    info!(
        conditions = config.soak_hours().len(),
        individuals = config.individuals(),
        days = config.days(),
        seed = config.seed(),
        pairing = ?config.pairing(),
        "starting growth simulation"
    );

    let mut records = Vec::with_capacity(config.record_count());
    let mut conditions = Vec::with_capacity(config.soak_hours().len());

    for &soak_hours in config.soak_hours() {
        let multiplier = soak_factor(soak_hours);
        let trajectories: Vec<Vec<GrowthRecord>> = (1..=config.individuals())
            .into_par_iter()
            .map(|individual| simulate_individual(config, soak_hours, multiplier, individual))
            .collect();

        let heights = DMatrix::from_fn(config.individuals(), config.days(), |row, column| {
            trajectories[row][column].height_cm
        });
        let condition = ConditionResult::from_heights(soak_hours, multiplier, heights);
        debug!(
            soak_hours,
            multiplier,
            mean_cm = condition.summary.mean_cm,
            median_cm = condition.summary.median_cm,
            std_dev_cm = condition.summary.std_dev_cm,
            "condition simulated"
        );

        records.extend(trajectories.into_iter().flatten());
        conditions.push(condition);
    }

    info!(records = records.len(), "growth simulation finished");

    SimulationResults {
        records,
        conditions,
    }
}

/// Day loop of a single individual.
///
/// Increments are rounded before they are added; the running sum itself is
/// kept unrounded and only the emitted height is rounded.
fn simulate_individual(
    config: &SimulationConfig,
    soak_hours: f64,
    multiplier: f64,
    individual: usize,
) -> Vec<GrowthRecord> {
    let mut rng = individual_rng(config.seed(), config.pairing(), soak_hours, individual);
    let mut height_cm = 0.0;

    (1..=config.days())
        .map(|day| {
            let sample = WeatherSample::draw(&mut rng, config.weather());
            height_cm += round_to(
                daily_growth(
                    sample.temperature_c,
                    sample.humidity_pct,
                    sample.rainfall_mm,
                    multiplier,
                ),
                INCREMENT_DECIMALS,
            );

            GrowthRecord {
                soak_hours,
                individual,
                day,
                height_cm: round_to(height_cm, HEIGHT_DECIMALS),
            }
        })
        .collect()
}
