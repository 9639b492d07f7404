//! HTTP implementation of the backend client traits
//!
//! Every operation is a POST of a JSON body with an `X-Amz-Target` header
//! naming the operation. A non-success status is parsed as the error
//! envelope; anything that fails before a response arrives is a transport
//! failure.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiFailure, ApiResult, IdentityApi, LogsApi, ParameterApi};
use crate::config::{ClientConfig, Credentials};
use crate::protocol::{
    ApiError, CallerIdentity, CreateGroupRequest, CreateStreamRequest, DescribePageRequest,
    GetParameterRequest, GetParameterResponse, ParameterDetail, ParameterPage, PutEventsAck,
    PutEventsRequest,
};

const WIRE_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

const LOGS_TARGET_PREFIX: &str = "Logs_20140328";
const PARAMS_TARGET_PREFIX: &str = "AmazonSSM";
const IDENTITY_TARGET_PREFIX: &str = "AWSSecurityTokenServiceV20110615";

/// Production client speaking the JSON-over-POST wire protocol
pub struct HttpApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    credentials: Credentials,
}

impl HttpApiClient {
    /// Create a client for the given endpoints and credentials
    pub fn new(config: ClientConfig, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            credentials,
        }
    }

    /// POST one operation and return the raw success body
    async fn dispatch<B: Serialize>(
        &self,
        url: String,
        target: &str,
        body: &B,
    ) -> ApiResult<Vec<u8>> {
        let payload =
            serde_json::to_vec(body).map_err(|e| ApiFailure::Transport(e.to_string()))?;

        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(WIRE_CONTENT_TYPE))
            .header("X-Amz-Target", target)
            .body(payload);
        if let Some(token) = &self.credentials.session_token {
            request = request.header("X-Amz-Security-Token", token.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        // Rejections carry the error envelope; synthesize one from the
        // status line when the body is not parseable.
        let error = serde_json::from_slice::<ApiError>(&bytes).unwrap_or_else(|_| {
            ApiError::new(
                status.to_string(),
                String::from_utf8_lossy(&bytes).into_owned(),
            )
        });
        Err(ApiFailure::Rejected(error))
    }

    /// POST one operation and parse the success body
    async fn call<B: Serialize, R: DeserializeOwned>(
        &self,
        url: String,
        target: &str,
        body: &B,
    ) -> ApiResult<R> {
        let bytes = self.dispatch(url, target, body).await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiFailure::Transport(e.to_string()))
    }

    /// POST one operation whose success body is empty or irrelevant
    async fn call_unit<B: Serialize>(&self, url: String, target: &str, body: &B) -> ApiResult<()> {
        self.dispatch(url, target, body).await.map(|_| ())
    }
}

#[async_trait]
impl IdentityApi for HttpApiClient {
    async fn caller_identity(&self) -> ApiResult<CallerIdentity> {
        self.call(
            self.config.identity_url(),
            &format!("{IDENTITY_TARGET_PREFIX}.GetCallerIdentity"),
            &serde_json::json!({}),
        )
        .await
    }
}

#[async_trait]
impl LogsApi for HttpApiClient {
    async fn create_group(&self, group: &str) -> ApiResult<()> {
        let request = CreateGroupRequest {
            group: group.to_string(),
        };
        self.call_unit(
            self.config.logs_url(),
            &format!("{LOGS_TARGET_PREFIX}.CreateLogGroup"),
            &request,
        )
        .await
    }

    async fn create_stream(&self, group: &str, stream: &str) -> ApiResult<()> {
        let request = CreateStreamRequest {
            group: group.to_string(),
            stream: stream.to_string(),
        };
        self.call_unit(
            self.config.logs_url(),
            &format!("{LOGS_TARGET_PREFIX}.CreateLogStream"),
            &request,
        )
        .await
    }

    async fn put_events(&self, request: &PutEventsRequest) -> ApiResult<PutEventsAck> {
        self.call(
            self.config.logs_url(),
            &format!("{LOGS_TARGET_PREFIX}.PutLogEvents"),
            request,
        )
        .await
    }
}

#[async_trait]
impl ParameterApi for HttpApiClient {
    async fn describe_parameters(&self, request: &DescribePageRequest) -> ApiResult<ParameterPage> {
        self.call(
            self.config.params_url(),
            &format!("{PARAMS_TARGET_PREFIX}.DescribeParameters"),
            request,
        )
        .await
    }

    async fn get_parameter(&self, name: &str) -> ApiResult<ParameterDetail> {
        let request = GetParameterRequest::new(name.to_string());
        let response: GetParameterResponse = self
            .call(
                self.config.params_url(),
                &format!("{PARAMS_TARGET_PREFIX}.GetParameter"),
                &request,
            )
            .await?;
        Ok(response.parameter)
    }
}
