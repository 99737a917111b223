//! GraphQL clients for the two Open Targets endpoints.
//!
//! The platform endpoint serves disease/gene association queries, the
//! genetics endpoint serves variant search and lookup. Query text and
//! endpoint URLs are process-wide constants; callers pick the operation,
//! never the wire format.

pub mod client;
pub mod genetics;
pub mod platform;
pub mod queries;

use async_trait::async_trait;
use otfetch_common::Result;
use serde_json::Value;

pub use client::{GraphqlClient, GENETICS_API_URL, PLATFORM_API_URL};
pub use genetics::GeneticsClient;
pub use platform::PlatformClient;

/// Disease/gene association operations (platform endpoint).
#[async_trait]
pub trait AssociationSource: Send + Sync {
    /// One page of targets associated with a disease, ranked by the
    /// remote service according to `sort_by`.
    async fn associated_targets(
        &self,
        efo_id: &str,
        sort_by: &str,
        size: usize,
    ) -> Result<Vec<Value>>;

    /// Genetic-evidence rows linking one gene to one disease. An empty
    /// list is a valid result, not an error.
    async fn evidences(
        &self,
        ensembl_id: &str,
        efo_id: &str,
        size: usize,
    ) -> Result<Vec<Value>>;
}

/// Variant search and lookup operations (genetics endpoint).
#[async_trait]
pub trait VariantSource: Send + Sync {
    /// Resolve an rsID to the canonical variant identifier, `None` when
    /// the search returns no variants.
    async fn variant_id_for_rsid(&self, rsid: &str) -> Result<Option<String>>;

    /// Full annotation payload for one variant identifier.
    async fn variant_info(&self, variant_id: &str) -> Result<Value>;
}
