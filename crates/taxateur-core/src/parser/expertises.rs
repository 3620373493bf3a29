//! Category selector parser
//!
//! Extracts the professional-expertise categories from the landing
//! page's search form.

use scraper::Html;

use super::selector;
use crate::error::{Result, TaxateurError};
use crate::types::Expertise;

/// Parses the expertise categories from landing page markup
///
/// Locates the category selector container (any element whose class
/// contains `search-expertise`) and collects its `<option>` entries.
/// Options with an empty or missing `value` attribute are placeholder
/// entries ("choose one") and are skipped.
///
/// # Errors
/// `ElementNotFound` if the selector container is absent, which means
/// the page structure changed or the fetch returned something else.
pub fn parse_expertises(html: &str) -> Result<Vec<Expertise>> {
    let document = Html::parse_document(html);

    let container_sel = selector(r#"div[class*="search-expertise"]"#)?;
    let container = document
        .select(&container_sel)
        .next()
        .ok_or_else(|| TaxateurError::ElementNotFound("search-expertise".to_string()))?;

    let option_sel = selector("option")?;
    let mut expertises = Vec::new();

    for option in container.select(&option_sel) {
        let value = option.value().attr("value").unwrap_or("");
        if value.is_empty() {
            continue;
        }

        let name = option.text().collect::<String>().trim().to_string();
        expertises.push(Expertise {
            value: value.to_string(),
            name,
        });
    }

    Ok(expertises)
}
