//! Disease/target association table.

use otfetch_common::{Frame, Result};
use otfetch_graphql::AssociationSource;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::records::gene_record;

/// Fetch up to `size` ranked gene/target associations for a disease and
/// keep the rows whose `genetic_association_score` is at least
/// `threshold` (inclusive). Rows missing the score never pass.
#[instrument(skip(source))]
pub async fn disease_targets<S>(
    source: &S,
    efo_id: &str,
    sort_by: &str,
    size: usize,
    threshold: f64,
) -> Result<Frame>
where
    S: AssociationSource + ?Sized,
{
    let rows = source.associated_targets(efo_id, sort_by, size).await?;

    let mut frame = Frame::new();
    for row in &rows {
        frame.push_row(gene_record(row)?);
    }

    frame.retain(|record| {
        record
            .get("genetic_association_score")
            .and_then(Value::as_f64)
            .map_or(false, |score| score >= threshold)
    });

    debug!(efo_id, rows = frame.len(), "disease target table assembled");
    Ok(frame)
}
