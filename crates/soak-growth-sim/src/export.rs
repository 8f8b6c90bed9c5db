//! Flat CSV rendering of the result tables.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::engine::GrowthRecord;
use crate::error::Result;
use crate::stats::{ConditionSummary, DaySummary, HistogramBin};

/// A table row that renders as one CSV line.
pub trait FlatRow {
    /// Comma-separated column names.
    const HEADER: &'static str;

    fn write_row<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

/// Writes a header line followed by one line per row, UTF-8 encoded.
pub fn write_csv<W: Write, R: FlatRow>(writer: W, rows: &[R]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{}", R::HEADER)?;

    for row in rows {
        row.write_row(&mut writer)?;
    }

    writer.flush()
}

pub fn write_csv_file<R: FlatRow>(path: &Path, rows: &[R]) -> Result<()> {
    write_csv(File::create(path)?, rows)?;
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(number) => format!("{number:.2}"),
        None => String::new(),
    }
}

impl FlatRow for GrowthRecord {
    const HEADER: &'static str = "soak_hours,individual,day,height_cm";

    fn write_row<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{},{:.2}",
            self.soak_hours, self.individual, self.day, self.height_cm,
        )
    }
}

impl FlatRow for ConditionSummary {
    const HEADER: &'static str =
        "soak_hours,individuals,mean_final_height_cm,median_cm,mode_cm,std_dev_cm";

    fn write_row<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{:.2},{:.2},{},{:.2}",
            self.soak_hours,
            self.individuals,
            self.mean_cm,
            self.median_cm,
            fmt_opt(self.mode_cm),
            self.std_dev_cm,
        )
    }
}

impl FlatRow for DaySummary {
    const HEADER: &'static str = "soak_hours,day,mean_cm,median_cm,mode_cm,std_dev_cm";

    fn write_row<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{:.2},{:.2},{},{:.2}",
            self.soak_hours,
            self.day,
            self.mean_cm,
            self.median_cm,
            fmt_opt(self.mode_cm),
            self.std_dev_cm,
        )
    }
}

impl FlatRow for HistogramBin {
    const HEADER: &'static str = "soak_hours,bin,lower_cm,upper_cm,count";

    fn write_row<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{:.3},{:.3},{}",
            self.soak_hours, self.bin, self.lower_cm, self.upper_cm, self.count,
        )
    }
}
