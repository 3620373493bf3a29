//! Results page parser
//!
//! Extracts appraiser rows from a category-filtered results page.

use scraper::{ElementRef, Html};

use super::selector;
use crate::error::{Result, TaxateurError};
use crate::types::Taxateur;

/// Parses the appraiser rows from results page markup
///
/// Locates the `search-results` container and reads each row (any
/// element whose class contains `result-row`): the `first`, `second`
/// and `third` classed sub-elements hold initials, last name and
/// company. Field text is trimmed of surrounding whitespace.
///
/// A row missing one of its sub-elements fails the whole page; a
/// half-parsed page would silently corrupt the export.
///
/// # Errors
/// `ElementNotFound` if the results container or a row field is absent
pub fn parse_result_rows(html: &str) -> Result<Vec<Taxateur>> {
    let document = Html::parse_document(html);

    let container_sel = selector("#search-results")?;
    let container = document
        .select(&container_sel)
        .next()
        .ok_or_else(|| TaxateurError::ElementNotFound("search-results".to_string()))?;

    let row_sel = selector(r#"div[class*="result-row"]"#)?;
    let mut rows = Vec::new();

    for row in container.select(&row_sel) {
        rows.push(Taxateur {
            initials: field_text(&row, "first")?,
            last_name: field_text(&row, "second")?,
            company: field_text(&row, "third")?,
        });
    }

    Ok(rows)
}

/// Reads the trimmed text of one positionally-classed row field
fn field_text(row: &ElementRef, class: &str) -> Result<String> {
    let field_sel = selector(&format!(r#"div[class*="{}"]"#, class))?;
    let field = row.select(&field_sel).next().ok_or_else(|| {
        TaxateurError::ElementNotFound(format!("result row field '{}'", class))
    })?;

    Ok(field.text().collect::<String>().trim().to_string())
}
