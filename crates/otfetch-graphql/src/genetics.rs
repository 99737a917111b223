//! Open Targets Genetics client.
//!
//! Endpoint: https://api.genetics.opentargets.org/graphql
//!
//! Resolves rsIDs to canonical variant identifiers and fetches variant
//! annotation payloads. An rsID with no matching variant is a valid empty
//! result, not an error.

use async_trait::async_trait;
use otfetch_common::error::OtfetchError;
use otfetch_common::Result;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::client::{GraphqlClient, GENETICS_API_URL};
use crate::queries::{VARIANT_INFO_QUERY, VARIANT_SEARCH_QUERY};
use crate::VariantSource;

pub struct GeneticsClient {
    gql: GraphqlClient,
}

impl GeneticsClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            gql: GraphqlClient::new()?,
        })
    }
}

#[async_trait]
impl VariantSource for GeneticsClient {
    #[instrument(skip(self))]
    async fn variant_id_for_rsid(&self, rsid: &str) -> Result<Option<String>> {
        let data = self
            .gql
            .post(GENETICS_API_URL, VARIANT_SEARCH_QUERY, json!({ "rsId": rsid }))
            .await?;

        // Search results are allowed to be absent entirely
        let variant_id = data["search"]["variants"]
            .as_array()
            .and_then(|variants| variants.first())
            .and_then(|v| v["id"].as_str())
            .map(String::from);

        debug!(rsid, found = variant_id.is_some(), "rsID search completed");
        Ok(variant_id)
    }

    #[instrument(skip(self))]
    async fn variant_info(&self, variant_id: &str) -> Result<Value> {
        let data = self
            .gql
            .post(
                GENETICS_API_URL,
                VARIANT_INFO_QUERY,
                json!({ "variantId": variant_id }),
            )
            .await?;

        match data.get("variantInfo") {
            Some(info) if !info.is_null() => Ok(info.clone()),
            _ => Err(OtfetchError::MalformedResponse("variantInfo".to_string())),
        }
    }
}
