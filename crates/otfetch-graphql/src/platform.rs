//! Open Targets Platform client.
//!
//! API docs: https://platform-docs.opentargets.org/data-access/graphql-api
//! Endpoint: https://api.platform.opentargets.org/api/v4/graphql
//!
//! Serves the disease-centric queries: ranked target associations and
//! per-gene genetic-evidence rows.

use async_trait::async_trait;
use otfetch_common::error::OtfetchError;
use otfetch_common::Result;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::client::{GraphqlClient, PLATFORM_API_URL};
use crate::queries::{DISEASE_ASSOCIATIONS_QUERY, DISEASE_EVIDENCES_QUERY};
use crate::AssociationSource;

pub struct PlatformClient {
    gql: GraphqlClient,
}

impl PlatformClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            gql: GraphqlClient::new()?,
        })
    }
}

#[async_trait]
impl AssociationSource for PlatformClient {
    #[instrument(skip(self))]
    async fn associated_targets(
        &self,
        efo_id: &str,
        sort_by: &str,
        size: usize,
    ) -> Result<Vec<Value>> {
        let variables = json!({
            "efoId": efo_id,
            "index": 0,
            "size": size,
            "sortBy": sort_by,
            "filter": "",
            "aggregationFilters": [],
        });

        let data = self
            .gql
            .post(PLATFORM_API_URL, DISEASE_ASSOCIATIONS_QUERY, variables)
            .await?;

        let rows = data["disease"]["associatedTargets"]["rows"]
            .as_array()
            .cloned()
            .ok_or_else(|| {
                OtfetchError::MalformedResponse("disease.associatedTargets.rows".to_string())
            })?;

        debug!(efo_id, rows = rows.len(), "associated targets retrieved");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn evidences(&self, ensembl_id: &str, efo_id: &str, size: usize) -> Result<Vec<Value>> {
        let variables = json!({
            "ensemblId": ensembl_id,
            "efoId": efo_id,
            "size": size,
        });

        let data = self
            .gql
            .post(PLATFORM_API_URL, DISEASE_EVIDENCES_QUERY, variables)
            .await?;

        let rows = data["disease"]["evidences"]["rows"]
            .as_array()
            .cloned()
            .ok_or_else(|| OtfetchError::MalformedResponse("disease.evidences.rows".to_string()))?;

        debug!(ensembl_id, efo_id, rows = rows.len(), "evidence rows retrieved");
        Ok(rows)
    }
}
