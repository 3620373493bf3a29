//! Pagination control parser
//!
//! Derives the total page count for a category-filtered search from
//! the pager rendered on the first results page.

use scraper::Html;

use super::selector;
use crate::error::{Result, TaxateurError};

/// Parses the total page count from results page markup
///
/// The pager (any element whose class contains `pagination`) lists one
/// `<a>` per page plus a trailing "next page" control. The last link
/// is dropped and the number inside the `<p>` of the new last link is
/// the total page count.
///
/// A page without any pager at all means the result set fits on a
/// single page, so that case returns 1 rather than an error. A pager
/// that is present but malformed (no numeric entry, non-numeric text)
/// is still a hard failure.
///
/// # Errors
/// - `ElementNotFound` if a pager exists but the expected `<p>` entry
///   is missing
/// - `ParseError` if the pager has no page links left after dropping
///   the "next" control, or the entry text is not a number
pub fn parse_page_count(html: &str) -> Result<usize> {
    let document = Html::parse_document(html);

    let pager_sel = selector(r#"div[class*="pagination"]"#)?;
    let Some(pager) = document.select(&pager_sel).next() else {
        // No pager rendered: single page of results
        return Ok(1);
    };

    let link_sel = selector("a")?;
    let links: Vec<_> = pager.select(&link_sel).collect();

    // The trailing link is the "next" control, not a page number
    if links.len() < 2 {
        return Err(TaxateurError::ParseError(
            "pagination control has no numeric page links".to_string(),
        ));
    }

    let last_page_link = links[links.len() - 2];

    let number_sel = selector("p")?;
    let number = last_page_link
        .select(&number_sel)
        .next()
        .ok_or_else(|| TaxateurError::ElementNotFound("pagination page number".to_string()))?;

    let text = number.text().collect::<String>();
    let text = text.trim();
    text.parse::<usize>().map_err(|_| {
        TaxateurError::ParseError(format!("pagination entry '{}' is not a number", text))
    })
}
