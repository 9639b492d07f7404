//! Identity-check response body

use serde::Deserialize;

/// Identity of the caller, as reported by the identity-check endpoint
///
/// Only used as proof that the configured credentials work; none of the
/// fields feed into later calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallerIdentity {
    #[serde(rename = "Account", default)]
    pub account: String,
    #[serde(rename = "Arn", default)]
    pub arn: String,
    #[serde(rename = "UserId", default)]
    pub user_id: String,
}
