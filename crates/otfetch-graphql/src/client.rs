//! Single-exchange GraphQL transport.
//!
//! One POST of `{"query", "variables"}`, one parsed JSON body. No
//! retries, no backoff; transport failures and non-2xx statuses surface
//! unrecovered. A 2xx body without a `data` key is a malformed response.

use otfetch_common::error::OtfetchError;
use otfetch_common::sandbox::SandboxClient;
use otfetch_common::Result;
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// Open Targets Platform endpoint (gene/disease associations).
pub const PLATFORM_API_URL: &str = "https://api.platform.opentargets.org/api/v4/graphql";

/// Open Targets Genetics endpoint (variant search and lookup).
pub const GENETICS_API_URL: &str = "https://api.genetics.opentargets.org/graphql";

#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: SandboxClient,
}

impl GraphqlClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: SandboxClient::new()?,
        })
    }

    /// Perform one query against `endpoint` and return the payload under
    /// the body's `data` key.
    #[instrument(skip(self, query, variables))]
    pub async fn post(&self, endpoint: &str, query: &str, variables: Value) -> Result<Value> {
        let resp = self
            .client
            .post(endpoint)?
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?;

        let body: Value = resp.json().await?;
        debug!(endpoint, "GraphQL response received");

        match body.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(OtfetchError::MalformedResponse("data".to_string())),
        }
    }
}
