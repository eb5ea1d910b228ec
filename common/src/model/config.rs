use serde::{Deserialize, Serialize};

/// The two script URLs the portal talks to.
///
/// Served by the backend at `GET /api/config` and read by the frontend at
/// startup. Either URL may be absent; the feature behind it then degrades to
/// an empty result or a skipped submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    #[serde(default)]
    pub candidate_script_url: Option<String>,
    #[serde(default)]
    pub policy_script_url: Option<String>,
}

impl EndpointConfig {
    pub fn new(candidate_script_url: Option<String>, policy_script_url: Option<String>) -> Self {
        Self {
            candidate_script_url: non_blank(candidate_script_url),
            policy_script_url: non_blank(policy_script_url),
        }
    }

    pub fn candidate_url(&self) -> Option<&str> {
        self.candidate_script_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn policy_url(&self) -> Option<&str> {
        self.policy_script_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Fills the URLs this config lacks from `fallback`.
    pub fn or(self, fallback: EndpointConfig) -> Self {
        Self::new(
            non_blank(self.candidate_script_url).or(fallback.candidate_script_url),
            non_blank(self.policy_script_url).or(fallback.policy_script_url),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_urls_are_absent() {
        let config = EndpointConfig::new(Some("  ".to_string()), None);
        assert_eq!(config.candidate_url(), None);
        assert_eq!(config.policy_url(), None);
    }

    #[test]
    fn test_or_prefers_own_values() {
        let runtime = EndpointConfig::new(Some("https://a".to_string()), None);
        let baked = EndpointConfig::new(Some("https://b".to_string()), Some("https://c".to_string()));
        let merged = runtime.or(baked);
        assert_eq!(merged.candidate_url(), Some("https://a"));
        assert_eq!(merged.policy_url(), Some("https://c"));
    }

    #[test]
    fn test_deserializes_partial_json() {
        let config: EndpointConfig =
            serde_json::from_str(r#"{"candidateScriptUrl":"https://x"}"#).unwrap();
        assert_eq!(config.candidate_url(), Some("https://x"));
        assert_eq!(config.policy_url(), None);
    }
}
