use chrono::Local;
use clap::Parser;
use soak_growth_sim::{
    run, write_csv_file, SimulationConfig, WeatherPairing, WeatherParameters, DEFAULT_SEED,
};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Monte Carlo bean seedling growth under different pre-germination soak times."
)]
struct Cli {
    /// Simulated days per individual.
    #[arg(long, default_value_t = 15)]
    days: usize,

    /// Individuals per soak condition.
    #[arg(long, default_value_t = 50)]
    individuals: usize,

    /// Soak durations to compare, in hours.
    #[arg(long, value_delimiter = ',', default_values_t = [0.0, 12.0, 24.0, 36.0])]
    soak_hours: Vec<f64>,

    #[arg(long, default_value_t = 9.0, allow_negative_numbers = true)]
    temp_min: f64,

    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    temp_max: f64,

    /// Mean relative humidity in percent.
    #[arg(long, default_value_t = 79.0)]
    humidity: f64,

    /// Monthly rainfall in mm.
    #[arg(long, default_value_t = 190.0)]
    monthly_rain: f64,

    #[arg(long, default_value_t = 5)]
    rainy_days: u32,

    /// Probability that a given day is rainy.
    #[arg(long, default_value_t = 0.24)]
    rain_probability: f64,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Reuse each individual's weather across all soak conditions.
    #[arg(long)]
    paired_weather: bool,

    /// Root under which a timestamped results directory is created.
    #[arg(long, default_value = "output-soak-growth-sim")]
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("soak_growth_sim=info")),
        )
        .init();

    let cli = Cli::parse();

    let weather = WeatherParameters {
        temp_min_c: cli.temp_min,
        temp_max_c: cli.temp_max,
        humidity_mean_pct: cli.humidity,
        monthly_rain_mm: cli.monthly_rain,
        rainy_days_per_month: cli.rainy_days,
        rain_probability: cli.rain_probability,
    };
    let pairing = if cli.paired_weather {
        WeatherPairing::Paired
    } else {
        WeatherPairing::Independent
    };
    let config = SimulationConfig::new(cli.days, cli.individuals, &cli.soak_hours, weather)?
        .with_seed(cli.seed)
        .with_pairing(pairing);

    let results = run(&config);

    let output_dir = create_dated_output_dir(&cli.output_dir)?;
    write_csv_file(&output_dir.join("growth_records.csv"), &results.records)?;
    write_csv_file(&output_dir.join("condition_summary.csv"), &results.summaries())?;
    write_csv_file(&output_dir.join("daily_summary.csv"), &results.day_summaries())?;
    write_csv_file(&output_dir.join("final_histogram.csv"), &results.histogram_bins())?;
    info!(path = %output_dir.display(), "result tables written");

    println!("Results written to {}", output_dir.display());
    for summary in results.summaries() {
        let mode = match summary.mode_cm {
            Some(mode_cm) => format!("{mode_cm:.2} cm"),
            None => "no unique mode".to_string(),
        };
        println!(
            "{} h soak: mean final height {:.2} cm, median {:.2} cm, mode {}, std dev {:.2} cm",
            summary.soak_hours, summary.mean_cm, summary.median_cm, mode, summary.std_dev_cm
        );
    }

    Ok(())
}

fn create_dated_output_dir(output_root: &Path) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(output_root)?;

    loop {
        let folder_name = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        let dated_output_dir = output_root.join(folder_name);

        if !dated_output_dir.exists() {
            fs::create_dir_all(&dated_output_dir)?;
            return Ok(dated_output_dir);
        }

        thread::sleep(Duration::from_secs(1));
    }
}
