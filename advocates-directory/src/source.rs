//! Record source: one retrieval of the advocate list
//!
//! [`RecordSource::activate`] runs the request on a spawned task and hands back
//! a [`PendingFetch`]. Cancelling (or dropping) the handle abandons the
//! request; a response that arrives afterwards is discarded.

use std::time::Duration;

use advocates_common::{Advocate, AdvocatesEnvelope};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("advocates-directory/", env!("CARGO_PKG_VERSION"));

/// Retrieval failures (cancellation is not one of them)
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {0}: {1}")]
    Status(u16, String),

    #[error("Malformed response: {0}")]
    Envelope(String),
}

/// HTTP client for the records endpoint
#[derive(Clone)]
pub struct RecordSource {
    http_client: reqwest::Client,
    endpoint: String,
}

impl RecordSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and validate the full advocate list.
    ///
    /// The body must be `{"data": [...]}` with every element a well-formed
    /// advocate; anything else is [`SourceError::Envelope`].
    pub async fn fetch(&self) -> Result<Vec<Advocate>, SourceError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching advocates");

        let response = self
            .http_client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SourceError::Status(status.as_u16(), error_text));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let envelope: AdvocatesEnvelope =
            serde_json::from_slice(&body).map_err(|e| SourceError::Envelope(e.to_string()))?;

        tracing::debug!(count = envelope.data.len(), "Fetched advocates");
        Ok(envelope.data)
    }

    /// Start the retrieval in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&self) -> PendingFetch {
        let token = CancellationToken::new();
        let (tx, rx) = oneshot::channel();

        let source = self.clone();
        let task_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    tracing::debug!("Advocate fetch cancelled");
                }
                result = source.fetch() => {
                    if task_token.is_cancelled() {
                        tracing::debug!("Discarding advocate response after cancellation");
                        return;
                    }
                    // Receiver gone means the consumer was torn down
                    let _ = tx.send(result);
                }
            }
        });

        PendingFetch { token, rx }
    }
}

/// Outstanding retrieval; cancelled when dropped
pub struct PendingFetch {
    token: CancellationToken,
    rx: oneshot::Receiver<Result<Vec<Advocate>, SourceError>>,
}

impl PendingFetch {
    /// Abandon the request
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token observing this retrieval's cancellation
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Wait for the result. `None` means the retrieval was cancelled and there
    /// is nothing to apply. A fetch task that ends without sending (it
    /// panicked) is a failed retrieval, not a cancellation.
    pub async fn outcome(mut self) -> Option<Result<Vec<Advocate>, SourceError>> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            result = &mut self.rx => match result {
                Ok(result) => Some(result),
                Err(_) if self.token.is_cancelled() => None,
                Err(_) => {
                    tracing::warn!("Advocate fetch task ended without a result");
                    Some(Err(SourceError::Network(
                        "fetch task ended without a result".to_string(),
                    )))
                }
            },
        }
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
