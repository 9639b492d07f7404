//! Parameter listing
//!
//! Filtered, paginated listing of configuration parameters with optional
//! value lookup. Secure parameters are never fetched; their value renders
//! as a fixed mask.

use crate::client::ParameterApi;
use crate::error::{Error, Result};
use crate::protocol::{DescribePageRequest, ParameterPage};
use crate::types::{NameFilter, ParameterSummary};

/// Rendered in place of a secure parameter's value
pub const SECURE_VALUE_MASK: &str = "<SecureString>";

/// One row of the rendered listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    /// Resolved value, present only when value lookup was requested
    pub value: Option<String>,
}

/// Lists parameters matching a name filter
pub struct ParameterLister<P> {
    api: P,
}

impl<P> ParameterLister<P>
where
    P: ParameterApi,
{
    /// Create a lister over the given backend client
    pub fn new(api: P) -> Self {
        Self { api }
    }

    /// Fetch one page, continuing from `next_token` when present
    pub async fn describe_page(
        &self,
        filter: &NameFilter,
        next_token: Option<String>,
    ) -> Result<ParameterPage> {
        let request = DescribePageRequest::new(filter, next_token);
        self.api
            .describe_parameters(&request)
            .await
            .map_err(Error::backend)
    }

    /// Fetch every matching parameter, following continuation tokens
    /// until the backend stops returning one
    pub async fn list_all(&self, filter: &NameFilter) -> Result<Vec<ParameterSummary>> {
        let mut parameters = Vec::new();
        let mut next_token = None;
        loop {
            let page = self.describe_page(filter, next_token).await?;
            parameters.extend(page.parameters);
            next_token = page.next_token;
            if next_token.is_none() {
                return Ok(parameters);
            }
        }
    }

    /// Resolve one parameter's value; secure parameters are masked
    /// without a lookup
    pub async fn resolve_value(&self, parameter: &ParameterSummary) -> Result<String> {
        if parameter.kind.is_secure() {
            return Ok(SECURE_VALUE_MASK.to_string());
        }
        let detail = self
            .api
            .get_parameter(&parameter.name)
            .await
            .map_err(Error::backend)?;
        Ok(detail.value)
    }
}

/// Render the listing with names padded to one column width
pub fn render_listing(entries: &[ListingEntry]) -> String {
    if entries.is_empty() {
        return "Did not find any entries matching your condition.".to_string();
    }
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut out = format!(
        "Found {} entries matching your condition. They are:",
        entries.len()
    );
    for entry in entries {
        out.push_str(&format!("\n - {:<width$}", entry.name));
        if let Some(value) = &entry.value {
            out.push_str(&format!(" (value: {value})"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::client::{ApiFailure, ApiResult};
    use crate::protocol::{ApiError, ParameterDetail};
    use crate::types::ParameterKind;

    /// Scripted parameter backend; records forwarded filters and tokens
    #[derive(Clone)]
    struct ScriptedParams {
        pages: Arc<Mutex<Vec<ApiResult<ParameterPage>>>>,
        requests: Arc<Mutex<Vec<DescribePageRequest>>>,
        lookups: Arc<Mutex<Vec<String>>>,
        values: Arc<Mutex<Vec<ApiResult<ParameterDetail>>>>,
    }

    impl ScriptedParams {
        fn new() -> Self {
            Self {
                pages: Arc::new(Mutex::new(Vec::new())),
                requests: Arc::new(Mutex::new(Vec::new())),
                lookups: Arc::new(Mutex::new(Vec::new())),
                values: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn push_page(&self, page: ApiResult<ParameterPage>) {
            self.pages.lock().unwrap().push(page);
        }

        fn push_value(&self, value: ApiResult<ParameterDetail>) {
            self.values.lock().unwrap().push(value);
        }
    }

    #[async_trait]
    impl ParameterApi for ScriptedParams {
        async fn describe_parameters(
            &self,
            request: &DescribePageRequest,
        ) -> ApiResult<ParameterPage> {
            self.requests.lock().unwrap().push(request.clone());
            self.pages.lock().unwrap().remove(0)
        }

        async fn get_parameter(&self, name: &str) -> ApiResult<ParameterDetail> {
            self.lookups.lock().unwrap().push(name.to_string());
            self.values.lock().unwrap().remove(0)
        }
    }

    fn summary(name: &str, kind: ParameterKind) -> ParameterSummary {
        ParameterSummary {
            name: name.to_string(),
            kind,
        }
    }

    fn page(names: &[&str], next_token: Option<&str>) -> ParameterPage {
        ParameterPage {
            parameters: names
                .iter()
                .map(|n| summary(n, ParameterKind::String))
                .collect(),
            next_token: next_token.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_list_all_concatenates_pages_in_order() {
        let api = ScriptedParams::new();
        api.push_page(Ok(page(&["/app/a"], Some("t1"))));
        api.push_page(Ok(page(&["/app/b", "/app/c"], Some("t2"))));
        api.push_page(Ok(page(&[], None)));
        let lister = ParameterLister::new(api.clone());
        let filter = NameFilter::BeginsWith("/app".to_string());

        let all = lister.list_all(&filter).await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["/app/a", "/app/b", "/app/c"]);

        // the filter and the continuation token are forwarded on every page
        let requests = api.requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        for request in requests.iter() {
            assert_eq!(request.filters[0].option, "BeginsWith");
            assert_eq!(request.filters[0].values, vec!["/app".to_string()]);
        }
        assert_eq!(requests[0].next_token, None);
        assert_eq!(requests[1].next_token, Some("t1".to_string()));
        assert_eq!(requests[2].next_token, Some("t2".to_string()));
    }

    #[tokio::test]
    async fn test_listing_failure_surfaces_backend_code() {
        let api = ScriptedParams::new();
        api.push_page(Err(ApiFailure::Rejected(ApiError::new(
            "ValidationException".to_string(),
            "bad filter".to_string(),
        ))));
        let lister = ParameterLister::new(api);
        let filter = NameFilter::Contains("db".to_string());
        match lister.list_all(&filter).await {
            Err(Error::Backend(e)) => assert_eq!(e.code, "ValidationException"),
            other => panic!("expected backend rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_secure_values_are_masked_without_lookup() {
        let api = ScriptedParams::new();
        let lister = ParameterLister::new(api.clone());
        let secure = summary("/app/db/password", ParameterKind::SecureString);
        let value = lister.resolve_value(&secure).await.unwrap();
        assert_eq!(value, SECURE_VALUE_MASK);
        assert!(api.lookups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_plain_values_resolve_via_lookup() {
        let api = ScriptedParams::new();
        api.push_value(Ok(ParameterDetail {
            name: "/app/db/host".to_string(),
            kind: ParameterKind::String,
            value: "db.internal".to_string(),
        }));
        let lister = ParameterLister::new(api.clone());
        let plain = summary("/app/db/host", ParameterKind::String);
        let value = lister.resolve_value(&plain).await.unwrap();
        assert_eq!(value, "db.internal");
        assert_eq!(*api.lookups.lock().unwrap(), vec!["/app/db/host".to_string()]);
    }

    #[test]
    fn test_render_pads_names_to_longest() {
        let entries = vec![
            ListingEntry {
                name: "/app/a".to_string(),
                value: Some("1".to_string()),
            },
            ListingEntry {
                name: "/app/longer".to_string(),
                value: Some("2".to_string()),
            },
        ];
        let rendered = render_listing(&entries);
        assert!(rendered.starts_with("Found 2 entries matching your condition. They are:"));
        assert!(rendered.contains(" - /app/a      (value: 1)"));
        assert!(rendered.contains(" - /app/longer (value: 2)"));
    }

    #[test]
    fn test_render_without_values() {
        let entries = vec![ListingEntry {
            name: "/app/a".to_string(),
            value: None,
        }];
        let rendered = render_listing(&entries);
        assert!(rendered.contains(" - /app/a"));
        assert!(!rendered.contains("value:"));
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(
            render_listing(&[]),
            "Did not find any entries matching your condition."
        );
    }
}
