//! NRVT Taxateur Directory Scraper Core Library
//!
//! Provides an async API for scraping the "vind een taxateur"
//! directory on nrvt.nl: list the professional-expertise categories,
//! walk the paginated search results for one category, and export the
//! appraiser records (initials, last name, company) as CSV.
//!
//! # Overview
//!
//! - Paced HTTP client with a fixed inter-request interval
//! - HTML parsers for the category selector, the pagination control
//!   and the result rows
//! - High-level session API producing a timestamped CSV file
//!
//! # Example
//!
//! ```no_run
//! use taxateur_core::{DirectoryScraper, Result, ScrapeProgress};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = DirectoryScraper::new()?;
//!
//!     let expertises = scraper.expertises().await?;
//!     let chosen = &expertises[0];
//!
//!     let outcome = scraper
//!         .run(chosen, std::path::Path::new("."), |progress| {
//!             if let ScrapeProgress::RetrievingPage { page, total } = progress {
//!                 println!("Retrieving page {}/{}", page, total);
//!             }
//!         })
//!         .await?;
//!
//!     println!("{} records in {}", outcome.record_count, outcome.csv_path.display());
//!     Ok(())
//! }
//! ```
//!
//! There is no retry or resume: a single network or parse failure
//! aborts the run and no CSV file is produced.

mod client;
mod error;
pub mod export;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, DirectoryClient, RequestPacer};

// Re-export error types
pub use error::{Result, TaxateurError};

// Re-export parser functions
pub use parser::{parse_expertises, parse_page_count, parse_result_rows};

// Re-export the session API
pub use scraper::{DirectoryScraper, ScrapeOutcome, ScrapeProgress, select_expertise};

// Re-export data types
pub use types::{Expertise, Taxateur};

// Re-export export helpers for convenience
pub use export::{export_filename, export_filename_at, write_csv};
