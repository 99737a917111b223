//! Multi-variant annotation lookup.
//!
//! Each rsID is resolved and fetched independently; the batch runs them
//! through a bounded unordered fan-out and merges the rows by their own
//! key columns, so completion order never affects the result.

use futures::stream::{self, StreamExt};
use otfetch_common::{Frame, Record, Result};
use otfetch_graphql::VariantSource;
use tracing::{debug, instrument, warn};

use crate::records::variant_record;

/// Key columns identifying a variant row.
const VARIANT_KEY: [&str; 4] = ["CHROM", "POS", "REF", "ALT"];

/// What to do when one rsID in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFailurePolicy {
    /// Fail the whole batch on the first error.
    Abort,
    /// Log the item at warn level and drop it.
    Skip,
}

/// Fan-out settings for [`variants_frame`].
#[derive(Debug, Clone)]
pub struct FanoutConfig {
    /// Number of in-flight lookups.
    pub workers: usize,
    pub on_item_failure: ItemFailurePolicy,
}

impl Default for FanoutConfig {
    fn default() -> Self {
        Self {
            workers: 8,
            on_item_failure: ItemFailurePolicy::Abort,
        }
    }
}

/// Annotation record for a single rsID, `None` when the search resolves
/// to no variant.
#[instrument(skip(source))]
pub async fn variant_record_for_rsid<S>(source: &S, rsid: &str) -> Result<Option<Record>>
where
    S: VariantSource + ?Sized,
{
    let Some(variant_id) = source.variant_id_for_rsid(rsid).await? else {
        return Ok(None);
    };
    let info = source.variant_info(&variant_id).await?;
    Ok(Some(variant_record(&info)))
}

/// Annotation table for a batch of rsIDs.
///
/// Lookups run through a fixed-width unordered fan-out; unresolved rsIDs
/// contribute no row. The merged frame is sorted by (CHROM, POS, REF,
/// ALT) and keyed on that tuple, with duplicate keys left visible to the
/// caller.
#[instrument(skip(source, rsids), fields(items = rsids.len()))]
pub async fn variants_frame<S>(
    source: &S,
    rsids: &[String],
    config: &FanoutConfig,
) -> Result<Frame>
where
    S: VariantSource + ?Sized,
{
    let mut lookups = stream::iter(rsids)
        .map(|rsid| async move { (rsid.as_str(), variant_record_for_rsid(source, rsid).await) })
        .buffer_unordered(config.workers.max(1));

    let mut frame = Frame::new();
    while let Some((rsid, outcome)) = lookups.next().await {
        match outcome {
            Ok(Some(record)) => frame.push_row(record),
            Ok(None) => debug!(rsid, "no variant for rsID"),
            Err(error) => match config.on_item_failure {
                ItemFailurePolicy::Abort => return Err(error),
                ItemFailurePolicy::Skip => warn!(rsid, %error, "skipping failed rsID"),
            },
        }
    }

    frame.sort_by_columns(&VARIANT_KEY);
    frame.set_key(&VARIANT_KEY);

    debug!(rows = frame.len(), "variant table assembled");
    Ok(frame)
}
