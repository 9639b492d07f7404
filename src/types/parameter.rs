//! Configuration parameter types

use serde::{Deserialize, Serialize};

/// Storage kind of a configuration parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    String,
    StringList,
    SecureString,
}

impl ParameterKind {
    /// Whether values of this kind are stored encrypted
    pub fn is_secure(&self) -> bool {
        matches!(self, ParameterKind::SecureString)
    }
}

/// Name and kind of one parameter, as returned by the listing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSummary {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: ParameterKind,
}

/// Name filter applied to the parameter listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Match parameters whose name begins with the given string
    BeginsWith(String),
    /// Match parameters whose name contains the given string
    Contains(String),
}

impl NameFilter {
    /// The wire value of the filter option field
    pub fn option_key(&self) -> &'static str {
        match self {
            NameFilter::BeginsWith(_) => "BeginsWith",
            NameFilter::Contains(_) => "Contains",
        }
    }

    /// The filter value forwarded to the backend
    pub fn value(&self) -> &str {
        match self {
            NameFilter::BeginsWith(value) | NameFilter::Contains(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_wire_names() {
        let json = serde_json::to_string(&ParameterKind::SecureString).unwrap();
        assert_eq!(json, "\"SecureString\"");
        let kind: ParameterKind = serde_json::from_str("\"StringList\"").unwrap();
        assert_eq!(kind, ParameterKind::StringList);
    }

    #[test]
    fn test_summary_deserializes_wire_fields() {
        let summary: ParameterSummary =
            serde_json::from_str(r#"{"Name": "/app/db/host", "Type": "String"}"#).unwrap();
        assert_eq!(summary.name, "/app/db/host");
        assert_eq!(summary.kind, ParameterKind::String);
    }

    #[test]
    fn test_filter_option_keys() {
        let begins = NameFilter::BeginsWith("/app".to_string());
        assert_eq!(begins.option_key(), "BeginsWith");
        assert_eq!(begins.value(), "/app");
        let contains = NameFilter::Contains("db".to_string());
        assert_eq!(contains.option_key(), "Contains");
        assert_eq!(contains.value(), "db");
    }
}
