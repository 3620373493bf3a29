//! CSV export for scraped appraiser records
//!
//! The export is the run's only artifact: a header row plus one row
//! per record, in the order the scrape accumulated them.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::types::Taxateur;

/// Timestamp layout used in export filenames (millisecond precision)
const FILENAME_TIMESTAMP: &str = "%Y%m%d%H%M%S%3f";

/// Builds the export filename stem for a category, stamped with the
/// current local time
///
/// Millisecond precision keeps filenames unique across runs and
/// categories. The `.csv` extension is appended by [`write_csv`].
pub fn export_filename(expertise_name: &str) -> String {
    export_filename_at(expertise_name, Local::now())
}

/// Builds the export filename stem for an explicit timestamp
///
/// # Example
/// ```
/// use chrono::{Local, TimeZone};
/// use taxateur_core::export::export_filename_at;
///
/// let stamp = Local.with_ymd_and_hms(2024, 3, 7, 14, 5, 9).unwrap();
/// let name = export_filename_at("Wonen", stamp);
/// assert_eq!(name, "Wonen_20240307140509000");
/// ```
pub fn export_filename_at(expertise_name: &str, stamp: DateTime<Local>) -> String {
    format!("{}_{}", expertise_name, stamp.format(FILENAME_TIMESTAMP))
}

/// Writes records to `<dir>/<filename>.csv`
///
/// The header row is written even for an empty record set; data rows
/// follow in input order. The writer is flushed before returning and
/// the file handle is released on every path, success or failure.
///
/// # Errors
/// - `CsvError` if serialization fails
/// - `IoError`/`CsvError` if the file cannot be created or written
pub fn write_csv(dir: &Path, filename: &str, records: &[Taxateur]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.csv", filename));

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;

    writer.write_record(Taxateur::CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(path)
}
