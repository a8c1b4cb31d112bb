// ABOUTME: HTTP client for the widget backend
// One endpoint serves both operations: GET ?org= for config, POST for leads

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api::error::ApiError;
use crate::api::types::{LeadSubmission, OrgConfig, SubmitResponse};

/// Default backend endpoint; override with --endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.mowquote.app/widget";

/// Per-request timeout. A hung request must not leave the widget loading
/// forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Attempts for the startup config fetch. Startup failure is terminal for
/// the run, so the fetch gets a bounded retry; submission does not (the user
/// can resubmit).
const CONFIG_FETCH_ATTEMPTS: u32 = 3;
const CONFIG_RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct QuoteApiClient {
    client: Client,
    endpoint: String,
}

impl QuoteApiClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("mowquote/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch organization configuration, retrying with exponential backoff.
    /// Returns the last error once attempts are exhausted; the caller treats
    /// that as a blocking failure with no further automatic retries.
    pub async fn fetch_config(&self, org_id: &str) -> Result<OrgConfig, ApiError> {
        let client = self.clone();
        let org = org_id.to_string();

        let config = retry_with_backoff(CONFIG_FETCH_ATTEMPTS, CONFIG_RETRY_BASE_DELAY, move || {
            let client = client.clone();
            let org = org.clone();
            async move { client.try_fetch_config(&org).await }
        })
        .await?;

        info!(org_id, "organization config loaded");
        Ok(config)
    }

    async fn try_fetch_config(&self, org_id: &str) -> Result<OrgConfig, ApiError> {
        debug!(org_id, endpoint = %self.endpoint, "fetching organization config");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("org", org_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        response
            .json::<OrgConfig>()
            .await
            .map_err(|err| ApiError::Shape(err.to_string()))
    }

    /// Submit a completed lead. A 2xx response whose body carries an `error`
    /// field is still a failure, surfaced with the API's own message.
    pub async fn submit_lead(&self, lead: &LeadSubmission) -> Result<(), ApiError> {
        debug!(service = %lead.service_name, "submitting lead");

        let response = self.client.post(&self.endpoint).json(lead).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        let body = response
            .json::<SubmitResponse>()
            .await
            .map_err(|err| ApiError::Shape(err.to_string()))?;

        if let Some(message) = body.error {
            return Err(ApiError::Api(message));
        }

        info!(email = %lead.email, "lead submitted");
        Ok(())
    }
}

/// Run an operation up to `attempts` times, doubling the delay between
/// tries. The last error is surfaced once attempts are exhausted.
async fn retry_with_backoff<T, F, Fut>(
    attempts: u32,
    base_delay: Duration,
    mut op: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    let mut delay = base_delay;
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts => {
                warn!(attempt, error = %err, "attempt failed, retrying");
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(err) => {
                warn!(attempt, error = %err, "attempt failed, giving up");
                return Err(err);
            }
        }
    }
}
