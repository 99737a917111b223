//! SNP/evidence tables: one gene at a time, or batched over the
//! top-ranked genes of a disease.

use otfetch_common::{Frame, Result};
use otfetch_graphql::AssociationSource;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::records::snp_record;
use crate::targets::disease_targets;
use crate::{DEFAULT_EVIDENCE_PAGE_SIZE, DEFAULT_SCORE_THRESHOLD};

/// Evidence rows linking one gene to one disease, as a frame. An empty
/// remote evidence list yields an empty frame.
#[instrument(skip(source))]
pub async fn snp_frame_for_gene<S>(
    source: &S,
    ensembl_id: &str,
    efo_id: &str,
    size: usize,
) -> Result<Frame>
where
    S: AssociationSource + ?Sized,
{
    let rows = source.evidences(ensembl_id, efo_id, size).await?;

    let mut frame = Frame::new();
    for row in &rows {
        frame.push_row(snp_record(row, efo_id, ensembl_id));
    }
    Ok(frame)
}

/// SNP table for a disease: evidence of the top `n_gene` ranked targets,
/// stacked, with rows whose rsID duplicates an earlier row removed
/// (first occurrence wins).
///
/// Target order comes from [`disease_targets`], which preserves the
/// ranking applied by the remote service. When fewer than `n_gene`
/// targets pass the score threshold, all of them are used.
#[instrument(skip(source))]
pub async fn snp_frame<S>(
    source: &S,
    efo_id: &str,
    n_gene: usize,
    sort_by: &str,
    size: usize,
) -> Result<Frame>
where
    S: AssociationSource + ?Sized,
{
    let targets = disease_targets(source, efo_id, sort_by, size, DEFAULT_SCORE_THRESHOLD).await?;

    let gene_ids: Vec<String> = targets
        .column("id")
        .iter()
        .filter_map(Value::as_str)
        .map(String::from)
        .take(n_gene)
        .collect();

    let mut result = Frame::new();
    for gene_id in &gene_ids {
        let frame =
            snp_frame_for_gene(source, gene_id, efo_id, DEFAULT_EVIDENCE_PAGE_SIZE).await?;
        result.append(frame);
    }

    result.dedup_by_column("variantRsId");
    debug!(efo_id, genes = gene_ids.len(), rows = result.len(), "SNP table assembled");
    Ok(result)
}
