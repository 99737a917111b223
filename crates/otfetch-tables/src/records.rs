//! Per-response-shape record builders.
//!
//! Each builder picks the fields the tables keep out of one raw API row
//! and returns a flat [`Record`].

use otfetch_common::error::OtfetchError;
use otfetch_common::{flatten_json, Record, Result};
use serde_json::Value;

/// Identifier of the genetic-association datatype score.
const GENETIC_ASSOCIATION: &str = "genetic_association";

/// Build one flat record from an associated-target row.
///
/// Flattens the nested `target` object, lifts the genetic-association
/// datatype score into `genetic_association_score` (omitted when the
/// datatype is absent), and drops the `__typename` metadata field.
pub fn gene_record(row: &Value) -> Result<Record> {
    let target = row
        .get("target")
        .ok_or_else(|| OtfetchError::MalformedResponse("target".to_string()))?;

    let mut record = flatten_json(target);

    if let Some(scores) = row["datatypeScores"].as_array() {
        for entry in scores {
            if entry["componentId"] == GENETIC_ASSOCIATION {
                record.insert(
                    "genetic_association_score".to_string(),
                    entry["score"].clone(),
                );
            }
        }
    }

    record.remove("__typename");
    Ok(record)
}

/// Build one flat record from an evidence row.
///
/// The evidence shape is already near-flat, so a fixed subset of fields
/// is copied verbatim; `chr` and `location` are derived by splitting the
/// composite `variantId` (`chromosome_position_ref_alt`), and the queried
/// disease and gene identifiers ride along as constant columns.
pub fn snp_record(row: &Value, efo_id: &str, ensembl_id: &str) -> Record {
    let mut record = Record::new();

    for field in [
        "variantRsId",
        "variantId",
        "studyId",
        "studySampleSize",
        "publicationFirstAuthor",
    ] {
        record.insert(field.to_string(), row[field].clone());
    }
    record.insert(
        "label".to_string(),
        row["variantFunctionalConsequence"]["label"].clone(),
    );

    if let Some(variant_id) = row["variantId"].as_str() {
        let mut parts = variant_id.split('_');
        if let Some(chr) = parts.next() {
            record.insert("chr".to_string(), Value::String(chr.to_string()));
        }
        if let Some(location) = parts.next() {
            record.insert("location".to_string(), Value::String(location.to_string()));
        }
    }

    record.insert("disease_ID".to_string(), Value::String(efo_id.to_string()));
    record.insert(
        "gene_related".to_string(),
        Value::String(ensembl_id.to_string()),
    );

    record
}

/// Reshape one variant annotation payload into a flat record.
///
/// Folds every flattened column containing the gnomAD marker into their
/// row-wise maximum as `gnomAD2_AF_popmax`, drops the source columns, and
/// renames the locus fields to the canonical short names CHROM, POS, REF,
/// ALT.
pub fn variant_record(variant: &Value) -> Record {
    let mut record = flatten_json(variant);

    let gnomad_columns: Vec<String> = record
        .keys()
        .filter(|k| k.contains("gnomad"))
        .cloned()
        .collect();

    let mut popmax: Option<f64> = None;
    for column in &gnomad_columns {
        if let Some(af) = record[column].as_f64() {
            popmax = Some(popmax.map_or(af, |m| m.max(af)));
        }
        record.remove(column);
    }
    record.insert(
        "gnomAD2_AF_popmax".to_string(),
        popmax.map_or(Value::Null, |m| {
            serde_json::Number::from_f64(m).map_or(Value::Null, Value::Number)
        }),
    );

    for (from, to) in [
        ("chromosome", "CHROM"),
        ("position", "POS"),
        ("refAllele", "REF"),
        ("altAllele", "ALT"),
    ] {
        if let Some(value) = record.remove(from) {
            record.insert(to.to_string(), value);
        }
    }

    record
}
