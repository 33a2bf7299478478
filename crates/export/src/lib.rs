//! Export helpers for JSON reports and CSV position tables.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors raised while writing artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod json {
    use serde::Serialize;
    use std::io::Write;

    use super::ExportError;

    /// Write any serialisable report as pretty JSON followed by a newline.
    pub fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

pub mod positions {
    use serde::Serialize;
    use std::io::Write;

    use super::ExportError;

    /// CSV row emitted by the positions exporter.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub body: &'a str,
        pub angle_rad: f64,
        pub angle_deg: f64,
        pub x_au: f64,
        pub y_au: f64,
        pub radius_au: f64,
        pub period_years: f64,
    }

    /// Write the header and one row per record.
    pub fn write_records<'a, I>(writer: &mut dyn Write, records: I) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = Record<'a>>,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
