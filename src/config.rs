//! Run configuration
//!
//! Every run receives an explicit immutable configuration record; nothing
//! reads ambient global state after startup.

use std::env;

use crate::types::Destination;

/// Region used when none is given on the command line
pub const DEFAULT_REGION: &str = "us-west-2";

/// Sentence-generator endpoint used when none is configured
pub const DEFAULT_CONTENT_ENDPOINT: &str =
    "https://baconipsum.com/api/?type=all-meat&sentences=1&start-with-lorem=1";

/// Endpoint selection for the backend services
///
/// Endpoints derive from the region unless overridden; overrides exist for
/// deployments that front the services with a local gateway.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub region: String,
    pub logs_endpoint: Option<String>,
    pub params_endpoint: Option<String>,
    pub identity_endpoint: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            logs_endpoint: None,
            params_endpoint: None,
            identity_endpoint: None,
        }
    }
}

impl ClientConfig {
    /// Create a config for the given region with derived endpoints
    pub fn for_region(region: String) -> Self {
        Self {
            region,
            ..Default::default()
        }
    }

    /// URL of the log-destination service
    pub fn logs_url(&self) -> String {
        match &self.logs_endpoint {
            Some(url) => url.clone(),
            None => format!("https://logs.{}.amazonaws.com/", self.region),
        }
    }

    /// URL of the parameter-store service
    pub fn params_url(&self) -> String {
        match &self.params_endpoint {
            Some(url) => url.clone(),
            None => format!("https://ssm.{}.amazonaws.com/", self.region),
        }
    }

    /// URL of the identity-check service
    pub fn identity_url(&self) -> String {
        match &self.identity_endpoint {
            Some(url) => url.clone(),
            None => format!("https://sts.{}.amazonaws.com/", self.region),
        }
    }
}

/// Credential material resolved from the environment
///
/// Resolution is best-effort: missing values are attached as nothing and
/// surface later as an identity-check failure. Request signing itself is
/// performed outside this crate.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl Credentials {
    /// Resolve credentials from the conventional environment variables
    pub fn from_env() -> Self {
        Self {
            access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
            secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
            session_token: env::var("AWS_SESSION_TOKEN").ok(),
        }
    }

    /// Whether nothing at all was resolved
    pub fn is_anonymous(&self) -> bool {
        self.access_key_id.is_none() && self.session_token.is_none()
    }
}

/// Configuration for one log-seeding run
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub destination: Destination,
    /// Number of events to generate
    pub count: usize,
    /// Create the group and stream if absent
    pub create_destination: bool,
}

impl SeedConfig {
    /// Create a seeding config that creates the destination if needed
    pub fn new(destination: Destination, count: usize) -> Self {
        Self {
            destination,
            count,
            create_destination: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_derive_from_region() {
        let config = ClientConfig::for_region("eu-central-1".to_string());
        assert_eq!(config.logs_url(), "https://logs.eu-central-1.amazonaws.com/");
        assert_eq!(config.params_url(), "https://ssm.eu-central-1.amazonaws.com/");
        assert_eq!(config.identity_url(), "https://sts.eu-central-1.amazonaws.com/");
    }

    #[test]
    fn test_endpoint_override_wins() {
        let config = ClientConfig {
            logs_endpoint: Some("http://localhost:4566/".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(config.logs_url(), "http://localhost:4566/");
    }

    #[test]
    fn test_seed_config_creates_by_default() {
        let config = SeedConfig::new(
            Destination::new("g".to_string(), "s".to_string()),
            5,
        );
        assert!(config.create_destination);
        assert_eq!(config.count, 5);
    }
}
