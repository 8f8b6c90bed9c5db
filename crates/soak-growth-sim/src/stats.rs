//! Summary statistics over simulated heights.

use std::collections::HashMap;

use statrs::statistics::{Data, Median, Statistics};

use crate::growth::round_to;

/// Decimal places kept in every reported statistic.
pub const SUMMARY_DECIMALS: usize = 2;

/// Number of bins in the final-height distribution.
pub const HISTOGRAM_BINS: usize = 10;

/// Statistics of the final-day heights of one condition.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionSummary {
    pub soak_hours: f64,
    pub individuals: usize,
    pub mean_cm: f64,
    pub median_cm: f64,
    /// `None` when no height occurs more than once.
    pub mode_cm: Option<f64>,
    /// Population standard deviation.
    pub std_dev_cm: f64,
}

impl ConditionSummary {
    pub fn from_final_heights(soak_hours: f64, heights: &[f64]) -> Self {
        Self {
            soak_hours,
            individuals: heights.len(),
            mean_cm: round_to(mean(heights), SUMMARY_DECIMALS),
            median_cm: round_to(median(heights), SUMMARY_DECIMALS),
            mode_cm: mode(heights).map(|value| round_to(value, SUMMARY_DECIMALS)),
            std_dev_cm: round_to(population_std_dev(heights), SUMMARY_DECIMALS),
        }
    }
}

/// Cross-individual statistics of one condition on one day.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySummary {
    pub soak_hours: f64,
    pub day: usize,
    pub mean_cm: f64,
    pub median_cm: f64,
    pub mode_cm: Option<f64>,
    /// Sample (n - 1) standard deviation, 0 for a single individual.
    pub std_dev_cm: f64,
}

impl DaySummary {
    pub fn from_heights(soak_hours: f64, day: usize, heights: &[f64]) -> Self {
        Self {
            soak_hours,
            day,
            mean_cm: round_to(mean(heights), SUMMARY_DECIMALS),
            median_cm: round_to(median(heights), SUMMARY_DECIMALS),
            mode_cm: mode(heights).map(|value| round_to(value, SUMMARY_DECIMALS)),
            std_dev_cm: round_to(std_dev(heights), SUMMARY_DECIMALS),
        }
    }
}

/// One bin of a condition's final-height distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramBin {
    pub soak_hours: f64,
    pub bin: usize,
    pub lower_cm: f64,
    pub upper_cm: f64,
    pub count: usize,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.to_vec().mean()
    }
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        Data::new(values.to_vec()).median()
    }
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        0.0
    } else {
        values.to_vec().std_dev()
    }
}

pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.to_vec().population_std_dev()
    }
}

/// Most frequent value, or `None` when every value is distinct.
///
/// Equally frequent candidates resolve to the one seen first.
pub fn mode(values: &[f64]) -> Option<f64> {
    // bits -> (first position, occurrences)
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (position, value) in values.iter().enumerate() {
        counts.entry(value.to_bits()).or_insert((position, 0)).1 += 1;
    }

    counts
        .values()
        .filter(|(_, occurrences)| *occurrences > 1)
        .max_by(|(first_a, count_a), (first_b, count_b)| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(first, _)| values[*first])
}

/// Equal-width histogram over `[min, max]`, last bin closed on the right.
/// A zero-width range is widened by half a unit on each side.
pub fn histogram(soak_hours: f64, values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lower = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut upper = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lower == upper {
        lower -= 0.5;
        upper += 0.5;
    }
    let width = (upper - lower) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in values {
        let index = (((value - lower) / width).floor() as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(bin, count)| HistogramBin {
            soak_hours,
            bin: bin + 1,
            lower_cm: lower + width * bin as f64,
            upper_cm: if bin + 1 == bins {
                upper
            } else {
                lower + width * (bin + 1) as f64
            },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_tendency_of_small_sample() {
        let heights = [0.5, 0.7, 0.7, 0.9, 1.2];
        assert!((mean(&heights) - 0.8).abs() < 1e-12);
        assert_eq!(median(&heights), 0.7);
        assert_eq!(mode(&heights), Some(0.7));
    }

    #[test]
    fn median_of_even_sample_averages_middle_pair() {
        assert!((median(&[1.0, 4.0, 2.0, 3.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn mode_is_absent_when_all_values_distinct() {
        assert_eq!(mode(&[0.41, 0.42, 0.43]), None);
        assert_eq!(mode(&[0.41]), None);
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn mode_ties_resolve_to_first_seen() {
        assert_eq!(mode(&[2.0, 1.0, 1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mode(&[3.0, 1.0, 1.0, 2.0, 2.0]), Some(1.0));
        assert_eq!(mode(&[1.0, 2.0, 2.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn population_and_sample_deviation_differ() {
        let heights = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std_dev(&heights) - 2.0).abs() < 1e-12);
        assert!((std_dev(&heights) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(std_dev(&[3.0]), 0.0);
        assert_eq!(population_std_dev(&[3.0]), 0.0);
    }

    #[test]
    fn condition_summary_rounds_to_two_places() {
        let summary = ConditionSummary::from_final_heights(24.0, &[1.0, 1.0, 1.005, 2.111]);
        assert_eq!(summary.individuals, 4);
        assert_eq!(summary.mean_cm, 1.28);
        assert_eq!(summary.median_cm, 1.0);
        assert_eq!(summary.mode_cm, Some(1.0));
    }

    #[test]
    fn day_summary_uses_sample_deviation() {
        let summary = DaySummary::from_heights(0.0, 3, &[0.1, 0.2, 0.3]);
        assert_eq!(summary.day, 3);
        assert_eq!(summary.mean_cm, 0.2);
        assert_eq!(summary.std_dev_cm, 0.1);
        assert_eq!(summary.mode_cm, None);
    }

    #[test]
    fn histogram_counts_every_value() {
        let heights = [0.0, 0.1, 0.25, 0.5, 0.99, 1.0];
        let bins = histogram(12.0, &heights, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), heights.len());
        assert_eq!(bins[0].lower_cm, 0.0);
        assert_eq!(bins[9].upper_cm, 1.0);
        assert_eq!(bins[9].count, 2);
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn histogram_widens_degenerate_range() {
        let bins = histogram(0.0, &[0.5, 0.5, 0.5], 10);
        assert_eq!(bins[0].lower_cm, 0.0);
        assert_eq!(bins[9].upper_cm, 1.0);
        assert_eq!(bins[5].count, 3);
        assert!(histogram(0.0, &[], 10).is_empty());
    }
}
