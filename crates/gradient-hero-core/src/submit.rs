//! Waitlist submission backends.
//!
//! The form state machine only knows that a submission eventually succeeds
//! or fails. [`SimulatedSubmitter`] stands in for a backend with a fixed
//! latency; [`HttpSubmitter`] posts the address to a real waitlist service.

use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, warn};

use crate::config::WaitlistConfig;
use crate::error::{HeroError, HeroResult};

/// Request timeout for the waitlist service.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can put an email address on the waitlist.
pub trait Submitter: Send + Sync + 'static {
    fn submit(&self, email: String) -> BoxFuture<'static, HeroResult<()>>;
}

/// Accepts every address after a fixed delay.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, _email: String) -> BoxFuture<'static, HeroResult<()>> {
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            Ok(())
        }
        .boxed()
    }
}

/// Posts `{"email": "..."}` to a waitlist endpoint.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> HeroResult<Self> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, email: String) -> BoxFuture<'static, HeroResult<()>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        async move {
            debug!("Posting waitlist signup to {}", endpoint);

            let response = client
                .post(&endpoint)
                .json(&serde_json::json!({ "email": email }))
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                warn!(%status, body = %body, "Waitlist service rejected signup");
                return Err(HeroError::Submission(status.to_string()));
            }
            Ok(())
        }
        .boxed()
    }
}

/// Pick the backend named by the config: HTTP when an endpoint is set,
/// otherwise the simulated one.
pub fn submitter_from_config(config: &WaitlistConfig) -> HeroResult<Arc<dyn Submitter>> {
    match &config.endpoint {
        Some(endpoint) => Ok(Arc::new(HttpSubmitter::new(endpoint.clone())?)),
        None => Ok(Arc::new(SimulatedSubmitter::new(config.submit_latency()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulated_submitter_waits_latency() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        submitter.submit("a@b.com".to_string()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn config_without_endpoint_is_simulated() {
        let config = WaitlistConfig::default();
        assert!(submitter_from_config(&config).is_ok());
    }

    #[test]
    fn http_submitter_keeps_endpoint() {
        let submitter = HttpSubmitter::new("https://example.com/waitlist").unwrap();
        assert_eq!(submitter.endpoint(), "https://example.com/waitlist");
    }
}
