//! Word-sequence probability seam.
//!
//! The resolver asks how likely a placeholder word is between a fixed left
//! and right context. Failures are explicit values; the resolver degrades
//! on any of them.

use std::time::Duration;

use log::debug;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::ProbabilityServiceConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbabilityError {
    #[error("no word-sequence probability service configured")]
    NotConfigured,

    /// Connection failure or timeout.
    #[error("probability service unavailable: {0}")]
    Unavailable(String),

    #[error("probability service returned HTTP {0}")]
    Status(u16),

    #[error("malformed probability service response: {0}")]
    Malformed(String),
}

pub type ProbabilityResult<T> = Result<T, ProbabilityError>;

pub trait WordSeqProbability: Send + Sync {
    /// Likelihood of `word` between `left` and `right`.
    fn score(&self, word: &str, left: &str, right: &str) -> ProbabilityResult<f64>;
}

/// Client for an HTTP scoring endpoint.
///
/// Posts `{"word", "left", "right"}` and expects `{"score": <number>}`.
#[derive(Debug, Clone)]
pub struct HttpWordSeqClient {
    endpoint: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct ScoreResponse {
    score: f64,
}

impl HttpWordSeqClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ProbabilityServiceConfig) -> Self {
        Self::new(&config.endpoint, Duration::from_millis(config.timeout_ms))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl WordSeqProbability for HttpWordSeqClient {
    fn score(&self, word: &str, left: &str, right: &str) -> ProbabilityResult<f64> {
        debug!("scoring '{}' against {}", word, self.endpoint);
        let response = ureq::post(&self.endpoint)
            .timeout(self.timeout)
            .send_json(json!({
                "word": word,
                "left": left,
                "right": right,
            }))
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => ProbabilityError::Status(code),
                other => ProbabilityError::Unavailable(other.to_string()),
            })?;
        let body: ScoreResponse = response
            .into_json()
            .map_err(|e| ProbabilityError::Malformed(e.to_string()))?;
        Ok(body.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_endpoint_is_unavailable() {
        // nothing listens on the discard port
        let client = HttpWordSeqClient::new("http://127.0.0.1:9/score", Duration::from_millis(200));
        let err = client.score("people", "the", "were").unwrap_err();
        assert!(matches!(err, ProbabilityError::Unavailable(_)));
    }

    #[test]
    fn built_from_config() {
        let client = HttpWordSeqClient::from_config(&ProbabilityServiceConfig {
            endpoint: "http://localhost:8765/score".into(),
            timeout_ms: 50,
        });
        assert_eq!(client.endpoint(), "http://localhost:8765/score");
        assert_eq!(client.timeout, Duration::from_millis(50));
    }
}
