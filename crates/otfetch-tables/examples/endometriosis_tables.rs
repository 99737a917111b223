//! Fetch the endometriosis association tables end to end.

use otfetch_graphql::{GeneticsClient, PlatformClient};
use otfetch_tables::{
    disease_targets, snp_frame, variants_frame, FanoutConfig, DEFAULT_PAGE_SIZE,
    DEFAULT_SCORE_THRESHOLD, DEFAULT_SORT_BY,
};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let platform = PlatformClient::new()?;
    let efo_id = "EFO_0001065"; // endometriosis

    println!("Fetching associated targets for {efo_id}...");
    let targets = disease_targets(
        &platform,
        efo_id,
        DEFAULT_SORT_BY,
        DEFAULT_PAGE_SIZE,
        DEFAULT_SCORE_THRESHOLD,
    )
    .await?;
    println!("{} targets pass the score threshold", targets.len());
    for row in targets.rows().iter().take(5) {
        println!(
            "  {} {} score={}",
            row["id"].as_str().unwrap_or("?"),
            row["approvedSymbol"].as_str().unwrap_or("?"),
            row["genetic_association_score"]
        );
    }

    println!("\nAssembling the SNP evidence table for the top 5 genes...");
    let snps = snp_frame(&platform, efo_id, 5, DEFAULT_SORT_BY, DEFAULT_PAGE_SIZE).await?;
    println!("{} unique SNP rows", snps.len());

    let rsids: Vec<String> = snps
        .column("variantRsId")
        .iter()
        .filter_map(Value::as_str)
        .map(String::from)
        .take(8)
        .collect();

    println!("\nLooking up {} variants on the genetics endpoint...", rsids.len());
    let genetics = GeneticsClient::new()?;
    let variants = variants_frame(&genetics, &rsids, &FanoutConfig::default()).await?;
    println!("{} variant rows, columns: {:?}", variants.len(), variants.columns());
    for row in variants.rows() {
        println!(
            "  {}:{} {}>{} AF_popmax={}",
            row["CHROM"], row["POS"], row["REF"], row["ALT"], row["gnomAD2_AF_popmax"]
        );
    }

    Ok(())
}
