//! Resolver configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid anaphora configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the anaphora resolver.
///
/// ```
/// use awe_anaphora::AnaphoraConfig;
///
/// let config = AnaphoraConfig::from_toml_str(
///     r#"
///     window = 6
///
///     [probability_service]
///     endpoint = "http://localhost:8765/score"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.window, 6);
/// assert_eq!(config.animacy_attr, "animate");
/// assert_eq!(config.probability_service.unwrap().timeout_ms, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnaphoraConfig {
    /// Tokens of context on each side of a pronoun sent to the probability
    /// service.
    pub window: usize,
    /// Boolean derived attribute marking animate tokens.
    pub animacy_attr: String,
    /// Index-list derived attribute naming a pronoun's speaker.
    pub speaker_attr: String,
    /// Index-list derived attribute naming a pronoun's addressee.
    pub addressee_attr: String,
    pub probability_service: Option<ProbabilityServiceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityServiceConfig {
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    2000
}

impl AnaphoraConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_animacy_attr(mut self, name: &str) -> Self {
        self.animacy_attr = name.to_string();
        self
    }

    pub fn with_probability_service(mut self, endpoint: &str, timeout_ms: u64) -> Self {
        self.probability_service = Some(ProbabilityServiceConfig {
            endpoint: endpoint.to_string(),
            timeout_ms,
        });
        self
    }
}

impl Default for AnaphoraConfig {
    fn default() -> Self {
        Self {
            window: 4,
            animacy_attr: "animate".into(),
            speaker_attr: "vwp_speaker".into(),
            addressee_attr: "vwp_addressee".into(),
            probability_service: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = AnaphoraConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnaphoraConfig::default());
    }

    #[test]
    fn overrides_attribute_names() {
        let config = AnaphoraConfig::from_toml_str(
            r#"
            animacy_attr = "is_animate"
            speaker_attr = "speaker"
            "#,
        )
        .unwrap();
        assert_eq!(config.animacy_attr, "is_animate");
        assert_eq!(config.speaker_attr, "speaker");
        assert_eq!(config.addressee_attr, "vwp_addressee");
        assert_eq!(config.window, 4);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AnaphoraConfig::from_toml_str("window = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AnaphoraConfig::load(Path::new("/nonexistent/anaphora.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
window = 3

[probability_service]
endpoint = "http://localhost:8765/score"
"#
        )
        .unwrap();

        let config = AnaphoraConfig::load(file.path()).unwrap();
        assert_eq!(config.window, 3);
        let service = config.probability_service.unwrap();
        assert_eq!(service.endpoint, "http://localhost:8765/score");
        assert_eq!(service.timeout_ms, 2000);
    }
}
