//! Client configuration.

use crate::operations::DEFAULT_LANGUAGE;

/// Region the Support API is served from unless configured otherwise.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Settings shared by every call a [`crate::SupportClient`] makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// AWS region used to derive the endpoint.
    pub region: String,
    /// Full endpoint URL overriding the region-derived one.
    pub endpoint: Option<String>,
    /// Language substituted when an operation's `language` argument is omitted.
    pub default_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `AWS_REGION` (falling back to `AWS_DEFAULT_REGION`) and
    /// `SUPPORT_ENDPOINT` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            region: var("AWS_REGION")
                .or_else(|| var("AWS_DEFAULT_REGION"))
                .unwrap_or(defaults.region),
            endpoint: var("SUPPORT_ENDPOINT"),
            default_language: defaults.default_language,
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Endpoint URL requests are addressed to.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://support.{}.amazonaws.com", self.region))
    }
}
