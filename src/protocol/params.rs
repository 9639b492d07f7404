//! Request and response bodies for the parameter-store service

use serde::{Deserialize, Serialize};

use crate::types::{NameFilter, ParameterKind, ParameterSummary};

/// Page size requested on every listing call
pub const PAGE_SIZE: u32 = 50;

/// One name filter attached to a listing request
#[derive(Debug, Clone, Serialize)]
pub struct ParameterFilter {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Option")]
    pub option: String,
    #[serde(rename = "Values")]
    pub values: Vec<String>,
}

impl From<&NameFilter> for ParameterFilter {
    fn from(filter: &NameFilter) -> Self {
        Self {
            key: "Name".to_string(),
            option: filter.option_key().to_string(),
            values: vec![filter.value().to_string()],
        }
    }
}

/// Fetch one page of matching parameters
#[derive(Debug, Clone, Serialize)]
pub struct DescribePageRequest {
    #[serde(rename = "ParameterFilters")]
    pub filters: Vec<ParameterFilter>,
    #[serde(rename = "MaxResults")]
    pub max_results: u32,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribePageRequest {
    /// Create a page request, continuing from `next_token` when present
    pub fn new(filter: &NameFilter, next_token: Option<String>) -> Self {
        Self {
            filters: vec![ParameterFilter::from(filter)],
            max_results: PAGE_SIZE,
            next_token,
        }
    }
}

/// One page of listing results
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterPage {
    #[serde(rename = "Parameters", default)]
    pub parameters: Vec<ParameterSummary>,
    /// Present when more results remain
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Fetch one parameter's value; secure values are never decrypted here
#[derive(Debug, Clone, Serialize)]
pub struct GetParameterRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "WithDecryption")]
    pub with_decryption: bool,
}

impl GetParameterRequest {
    /// Create a value lookup without decryption
    pub fn new(name: String) -> Self {
        Self {
            name,
            with_decryption: false,
        }
    }
}

/// Envelope around a single fetched parameter
#[derive(Debug, Clone, Deserialize)]
pub struct GetParameterResponse {
    #[serde(rename = "Parameter")]
    pub parameter: ParameterDetail,
}

/// Full record of one parameter, including its value
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDetail {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: ParameterKind,
    #[serde(rename = "Value")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_serializes_wire_fields() {
        let filter = NameFilter::BeginsWith("/app".to_string());
        let request = DescribePageRequest::new(&filter, None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["MaxResults"], 50);
        assert!(json.get("NextToken").is_none());
        assert_eq!(json["ParameterFilters"][0]["Key"], "Name");
        assert_eq!(json["ParameterFilters"][0]["Option"], "BeginsWith");
        assert_eq!(json["ParameterFilters"][0]["Values"][0], "/app");
    }

    #[test]
    fn test_page_request_carries_continuation_token() {
        let filter = NameFilter::Contains("db".to_string());
        let request = DescribePageRequest::new(&filter, Some("tok-2".to_string()));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["NextToken"], "tok-2");
    }

    #[test]
    fn test_page_deserializes_with_and_without_token() {
        let page: ParameterPage = serde_json::from_str(
            r#"{"Parameters": [{"Name": "/app/a", "Type": "String"}], "NextToken": "t"}"#,
        )
        .unwrap();
        assert_eq!(page.parameters.len(), 1);
        assert_eq!(page.next_token.as_deref(), Some("t"));

        let last: ParameterPage = serde_json::from_str(r#"{"Parameters": []}"#).unwrap();
        assert!(last.parameters.is_empty());
        assert!(last.next_token.is_none());
    }

    #[test]
    fn test_value_lookup_never_requests_decryption() {
        let request = GetParameterRequest::new("/app/db/password".to_string());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["WithDecryption"], false);
    }
}
