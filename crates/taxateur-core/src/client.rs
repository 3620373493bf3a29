//! HTTP client for the taxateur directory
//!
//! Wraps a configured `reqwest` client and paces requests with a
//! fixed inter-request interval so the directory is never hammered.
//! There is deliberately no retry logic: any transport failure or
//! non-success status aborts the whole run.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{Result, TaxateurError};
use crate::url::build_landing_url;

const DEFAULT_BASE_URL: &str = "https://www.nrvt.nl";
const DEFAULT_BASE_PATH: &str = "/vind-een-taxateur";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Form field selecting individual professionals rather than companies
const CHOOSE_FIELD: (&str, &str) = ("choose", "persoon");

/// Configuration for the directory client
///
/// Constructed once per run and handed to [`DirectoryClient`]; there
/// is no process-wide client or base-URL state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the directory site
    pub base_url: String,
    /// Path of the "vind een taxateur" page on that host
    pub base_path: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Minimum interval between requests in milliseconds (default: 500)
    pub page_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout_secs: 30,
            page_delay_ms: 500,
        }
    }
}

/// Paces requests at a fixed minimum interval
///
/// The inter-page delay is a scheduling policy of the client, not an
/// inline sleep in the scrape loop; awaiting [`RequestPacer::acquire`]
/// before a request guarantees the spacing.
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Arc<Mutex<Instant>>,
}

impl RequestPacer {
    /// Create a pacer with the given minimum interval between requests
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(Instant::now() - min_interval)),
        }
    }

    /// Wait until the minimum interval since the previous request has passed
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// HTTP client for the directory site
///
/// Issues the two kinds of request the scrape needs:
/// - a plain GET of the landing page (category listing)
/// - a form POST carrying the category filter (page count, result pages)
pub struct DirectoryClient {
    client: reqwest::Client,
    pacer: RequestPacer,
    config: ClientConfig,
}

impl DirectoryClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(TaxateurError::HttpError)?;

        Ok(Self {
            client,
            pacer: RequestPacer::new(Duration::from_millis(config.page_delay_ms)),
            config,
        })
    }

    /// Fetch the landing page markup (category listing)
    ///
    /// # Errors
    /// - `HttpError` on transport failure
    /// - `StatusError` with the reason phrase on a non-success status
    pub async fn fetch_landing(&self) -> Result<String> {
        self.pacer.acquire().await;

        let url = build_landing_url(&self.config.base_url, &self.config.base_path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TaxateurError::HttpError)?;

        Self::read_success_body(response).await
    }

    /// Fetch one result page by posting the category filter to `url`
    ///
    /// The form carries two fields: the fixed `choose=persoon`
    /// discriminator and the chosen expertise code.
    ///
    /// # Errors
    /// - `HttpError` on transport failure
    /// - `StatusError` with the reason phrase on a non-success status
    pub async fn fetch_results_page(&self, url: &str, expertise_code: &str) -> Result<String> {
        self.pacer.acquire().await;

        let form = [CHOOSE_FIELD, ("expertise", expertise_code)];
        let response = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(TaxateurError::HttpError)?;

        Self::read_success_body(response).await
    }

    async fn read_success_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(TaxateurError::StatusError(reason));
        }

        response.text().await.map_err(TaxateurError::HttpError)
    }

    /// The client's configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The request pacer (exposed for tests)
    pub fn pacer(&self) -> &RequestPacer {
        &self.pacer
    }
}
