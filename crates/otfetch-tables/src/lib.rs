//! otfetch-tables — record builders, table assemblers, and the
//! multi-variant batch lookup.
//!
//! Everything here reshapes payloads already fetched by otfetch-graphql
//! into [`otfetch_common::Frame`] tables. Assemblers are generic over the
//! source traits so they can be exercised against stub sources without a
//! network.

pub mod evidence;
pub mod records;
pub mod targets;
pub mod variants;

pub use evidence::{snp_frame, snp_frame_for_gene};
pub use records::{gene_record, snp_record, variant_record};
pub use targets::disease_targets;
pub use variants::{variants_frame, FanoutConfig, ItemFailurePolicy};

/// Default ranking key for associated-target pages.
pub const DEFAULT_SORT_BY: &str = "genetic_association";

/// Default associated-target page size.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Default minimum genetic-association score.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.0035;

/// Default evidence page size per gene.
pub const DEFAULT_EVIDENCE_PAGE_SIZE: usize = 10;

/// Default number of top-ranked genes considered by [`snp_frame`].
pub const DEFAULT_TOP_GENES: usize = 25;
