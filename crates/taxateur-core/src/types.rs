//! Core data types for the taxateur directory scraper

use serde::{Deserialize, Serialize};

/// A professional-expertise category from the directory's search form
///
/// Read once per run from the landing page's category selector and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expertise {
    /// Site-internal category code, posted back as the search filter
    pub value: String,

    /// Human-readable label shown in the selector
    pub name: String,
}

/// One appraiser entry scraped from a results page
///
/// Fields are trimmed of surrounding whitespace; a field the site
/// leaves blank stays an empty string. Serializes to the CSV columns
/// `Initials,LastName,Company`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Taxateur {
    pub initials: String,
    pub last_name: String,
    pub company: String,
}

impl Taxateur {
    /// CSV header matching the serialized field order
    pub const CSV_HEADER: [&'static str; 3] = ["Initials", "LastName", "Company"];
}
