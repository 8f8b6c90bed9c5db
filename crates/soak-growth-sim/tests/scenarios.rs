use soak_growth_sim::{
    run, write_csv, ConfigError, SimulationConfig, WeatherPairing, WeatherParameters,
};

fn reference_weather() -> WeatherParameters {
    WeatherParameters {
        temp_min_c: 9.0,
        temp_max_c: 15.0,
        humidity_mean_pct: 79.0,
        monthly_rain_mm: 190.0,
        rainy_days_per_month: 5,
        rain_probability: 0.24,
    }
}

fn render_records(config: &SimulationConfig) -> Vec<u8> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, &run(config).records).unwrap();
    buffer
}

#[test]
fn small_reference_run_shape() {
    let config = SimulationConfig::new(5, 3, &[0.0, 24.0], reference_weather())
        .unwrap()
        .with_seed(11);
    let results = run(&config);

    assert_eq!(results.records.len(), 30);
    let summaries = results.summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].soak_hours, 0.0);
    assert_eq!(summaries[1].soak_hours, 24.0);
    for summary in &summaries {
        assert!(summary.mean_cm > 0.0);
        assert_eq!(summary.individuals, 3);
    }
    assert_eq!(results.day_summaries().len(), 2 * 5);
}

#[test]
fn fixed_seed_reproduces_identical_tables() {
    let config = SimulationConfig::new(15, 20, &[0.0, 12.0, 24.0, 36.0], reference_weather())
        .unwrap()
        .with_seed(0xBEEF);

    assert_eq!(render_records(&config), render_records(&config));
}

#[test]
fn different_seeds_change_the_draws() {
    let base = SimulationConfig::new(15, 20, &[24.0], reference_weather()).unwrap();
    let first = render_records(&base.clone().with_seed(1));
    let second = render_records(&base.with_seed(2));

    assert_ne!(first, second);
}

#[test]
fn condition_results_do_not_depend_on_other_conditions() {
    let alone = SimulationConfig::new(10, 6, &[24.0], reference_weather())
        .unwrap()
        .with_seed(5);
    let together = SimulationConfig::new(10, 6, &[0.0, 24.0, 48.0], reference_weather())
        .unwrap()
        .with_seed(5);

    let alone = run(&alone);
    let together = run(&together);
    assert_eq!(
        alone.conditions[0].heights,
        together.condition(24.0).unwrap().heights
    );
}

#[test]
fn summary_mean_matches_final_day_records() {
    let config = SimulationConfig::new(12, 25, &[0.0, 6.0, 18.0, 30.0, 48.0], reference_weather())
        .unwrap()
        .with_seed(77);
    let results = run(&config);

    for summary in results.summaries() {
        let finals: Vec<f64> = results
            .records
            .iter()
            .filter(|record| record.soak_hours == summary.soak_hours && record.day == 12)
            .map(|record| record.height_cm)
            .collect();
        assert_eq!(finals.len(), 25);
        let mean = finals.iter().sum::<f64>() / finals.len() as f64;
        assert!((summary.mean_cm - mean).abs() <= 0.01);
    }
}

#[test]
fn long_soak_grows_less_than_optimal_soak_under_shared_weather() {
    let config = SimulationConfig::new(15, 20, &[18.0, 50.0], reference_weather())
        .unwrap()
        .with_seed(31)
        .with_pairing(WeatherPairing::Paired);
    let results = run(&config);

    let optimal = results.condition(18.0).unwrap();
    let long = results.condition(50.0).unwrap();
    assert_eq!(optimal.multiplier, 1.0);
    assert_eq!(long.multiplier, 0.7);
    assert!(long.summary.mean_cm < optimal.summary.mean_cm);
    for (long_height, optimal_height) in long.final_heights().iter().zip(optimal.final_heights()) {
        assert!(*long_height < optimal_height);
    }
}

#[test]
fn boundary_soak_durations_map_to_expected_multipliers() {
    let config = SimulationConfig::new(1, 1, &[12.0, 24.0, 36.0], reference_weather()).unwrap();
    let results = run(&config);

    assert_eq!(results.condition(12.0).unwrap().multiplier, 1.0);
    assert_eq!(results.condition(24.0).unwrap().multiplier, 1.0);
    assert_eq!(results.condition(36.0).unwrap().multiplier, 0.9);
}

#[test]
fn degenerate_weather_ranges_do_not_fail() {
    let weather = WeatherParameters {
        temp_min_c: 15.0,
        temp_max_c: 15.0,
        monthly_rain_mm: 0.0,
        rain_probability: 1.0,
        ..reference_weather()
    };
    let config = SimulationConfig::new(8, 4, &[24.0], weather).unwrap();
    let results = run(&config);

    assert!(results
        .records
        .iter()
        .all(|record| record.height_cm.is_finite() && record.height_cm > 0.0));
}

#[test]
fn invalid_configs_are_rejected_before_simulation() {
    let invalid_probability = WeatherParameters {
        rain_probability: -0.1,
        ..reference_weather()
    };
    assert_eq!(
        SimulationConfig::new(5, 3, &[0.0], invalid_probability),
        Err(ConfigError::RainProbabilityOutOfRange(-0.1))
    );

    let no_rainy_days = WeatherParameters {
        rainy_days_per_month: 0,
        ..reference_weather()
    };
    assert_eq!(
        SimulationConfig::new(5, 3, &[0.0], no_rainy_days),
        Err(ConfigError::NoRainyDays)
    );
}

#[test]
fn negative_zero_soak_behaves_like_zero() {
    let negative = SimulationConfig::new(3, 2, &[-0.0], reference_weather())
        .unwrap()
        .with_seed(8);
    let positive = SimulationConfig::new(3, 2, &[0.0], reference_weather())
        .unwrap()
        .with_seed(8);

    let rendered = render_records(&negative);
    assert_eq!(rendered, render_records(&positive));
    let text = String::from_utf8(rendered).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("0,1,1,"));
}
