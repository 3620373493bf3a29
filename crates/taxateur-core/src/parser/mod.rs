//! HTML parsers for the taxateur directory
//!
//! One module per page structure the scrape depends on.

pub mod expertises;
pub mod pager;
pub mod results;

pub use expertises::parse_expertises;
pub use pager::parse_page_count;
pub use results::parse_result_rows;

use crate::error::{Result, TaxateurError};

/// Parse a CSS selector, mapping failures onto `ParseError`
///
/// Selectors in this crate are static strings, so a failure here means
/// a programming error rather than bad input, but the parsers keep an
/// explicit failure mode instead of panicking.
pub(crate) fn selector(css: &str) -> Result<scraper::Selector> {
    scraper::Selector::parse(css)
        .map_err(|e| TaxateurError::ParseError(format!("Invalid selector '{}': {:?}", css, e)))
}
