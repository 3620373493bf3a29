//! URL helpers for the taxateur directory
//!
//! The directory lives at a fixed path on the site; result pages are
//! addressed with a `page` query parameter while the category filter
//! travels in the POST body.

/// Builds the landing page URL from base URL and directory path
///
/// # Example
/// ```
/// use taxateur_core::url::build_landing_url;
/// let url = build_landing_url("https://www.nrvt.nl", "/vind-een-taxateur");
/// assert_eq!(url, "https://www.nrvt.nl/vind-een-taxateur");
/// ```
pub fn build_landing_url(base_url: &str, base_path: &str) -> String {
    format!("{}{}", base_url, base_path)
}

/// Builds the URL for one result page
///
/// # Example
/// ```
/// use taxateur_core::url::build_page_url;
/// let url = build_page_url("https://www.nrvt.nl", "/vind-een-taxateur", 3);
/// assert_eq!(url, "https://www.nrvt.nl/vind-een-taxateur?page=3");
/// ```
pub fn build_page_url(base_url: &str, base_path: &str, page: usize) -> String {
    format!("{}{}?page={}", base_url, base_path, page)
}
