//! Scrape orchestrator for the taxateur directory
//!
//! Drives one session: list categories, compute the page count for
//! the chosen category, walk the result pages in order, and export
//! the accumulated records as CSV. Any error anywhere aborts the run;
//! pages fetched before the failure are discarded and no file is
//! written.

use std::path::{Path, PathBuf};

use crate::client::{ClientConfig, DirectoryClient};
use crate::error::{Result, TaxateurError};
use crate::export::{export_filename, write_csv};
use crate::parser::{parse_expertises, parse_page_count, parse_result_rows};
use crate::types::{Expertise, Taxateur};
use crate::url::{build_landing_url, build_page_url};

/// Progress events emitted during a scrape run
///
/// `RetrievingPage` is emitted before each page fetch; `Exporting`
/// before the CSV write. The CLI maps these onto its output lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeProgress {
    ComputingPageCount,
    RetrievingPage { page: usize, total: usize },
    Exporting { filename: String },
}

/// Result of a completed scrape run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOutcome {
    /// Path of the written CSV file
    pub csv_path: PathBuf,
    /// Number of data rows in the file
    pub record_count: usize,
}

/// Resolves the user's 1-based category selection
///
/// # Errors
/// `SelectionError` if the input is not a number or falls outside
/// `1..=expertises.len()`. Nothing is scraped for invalid input.
pub fn select_expertise<'a>(expertises: &'a [Expertise], input: &str) -> Result<&'a Expertise> {
    let input = input.trim();
    let index: usize = input.parse().map_err(|_| {
        TaxateurError::SelectionError(format!("expected a number, got '{}'", input))
    })?;

    if index == 0 || index > expertises.len() {
        return Err(TaxateurError::SelectionError(format!(
            "{} is out of range (1-{})",
            index,
            expertises.len()
        )));
    }

    Ok(&expertises[index - 1])
}

/// High-level scraper API for the taxateur directory
///
/// Combines the paced HTTP client with the page parsers. Fetches are
/// strictly sequential; the only suspension points are the awaited
/// responses and the client's inter-request pacing.
pub struct DirectoryScraper {
    client: DirectoryClient,
}

impl DirectoryScraper {
    /// Create a scraper with default configuration
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: DirectoryClient::new()?,
        })
    }

    /// Create a scraper with custom client configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: DirectoryClient::with_config(config)?,
        })
    }

    /// Fetch the selectable expertise categories from the landing page
    pub async fn expertises(&self) -> Result<Vec<Expertise>> {
        let html = self.client.fetch_landing().await?;
        parse_expertises(&html)
    }

    /// Compute the total page count for a category
    ///
    /// Posts the category filter to the landing page and reads the
    /// pager from the returned markup.
    pub async fn page_count(&self, expertise: &Expertise) -> Result<usize> {
        let config = self.client.config();
        let url = build_landing_url(&config.base_url, &config.base_path);
        let html = self.client.fetch_results_page(&url, &expertise.value).await?;
        parse_page_count(&html)
    }

    /// Scrape all result pages for a category, in page order
    ///
    /// Computes the page count and walks the pages, returning the
    /// accumulated records without writing an export file.
    pub async fn scrape(&self, expertise: &Expertise) -> Result<Vec<Taxateur>> {
        let page_count = self.page_count(expertise).await?;
        self.scrape_pages(expertise, page_count, &mut |_| {}).await
    }

    /// Run a full scrape session: page count, page loop, CSV export
    ///
    /// Progress is reported through `on_progress`. The CSV is written
    /// only after every page has been fetched and parsed; a failure
    /// mid-pagination returns the error and produces no file.
    pub async fn run<F>(
        &self,
        expertise: &Expertise,
        output_dir: &Path,
        mut on_progress: F,
    ) -> Result<ScrapeOutcome>
    where
        F: FnMut(ScrapeProgress),
    {
        on_progress(ScrapeProgress::ComputingPageCount);
        let page_count = self.page_count(expertise).await?;

        let records = self
            .scrape_pages(expertise, page_count, &mut on_progress)
            .await?;

        let filename = export_filename(&expertise.name);
        on_progress(ScrapeProgress::Exporting {
            filename: filename.clone(),
        });

        let csv_path = write_csv(output_dir, &filename, &records)?;

        Ok(ScrapeOutcome {
            csv_path,
            record_count: records.len(),
        })
    }

    /// Fetch and parse pages `1..=page_count`, accumulating rows in
    /// page-then-row order
    async fn scrape_pages<F>(
        &self,
        expertise: &Expertise,
        page_count: usize,
        on_progress: &mut F,
    ) -> Result<Vec<Taxateur>>
    where
        F: FnMut(ScrapeProgress),
    {
        let config = self.client.config();
        let mut records = Vec::new();

        for page in 1..=page_count {
            on_progress(ScrapeProgress::RetrievingPage {
                page,
                total: page_count,
            });

            let url = build_page_url(&config.base_url, &config.base_path, page);
            let html = self.client.fetch_results_page(&url, &expertise.value).await?;
            records.extend(parse_result_rows(&html)?);
        }

        Ok(records)
    }
}
