//! otfetch-common — Shared error type, sandboxed HTTP client, JSON
//! flattening, and the tabular `Frame` container used across all otfetch
//! crates.

pub mod error;
pub mod flatten;
pub mod frame;
pub mod sandbox;

// Re-export commonly used types
pub use error::{OtfetchError, Result};
pub use flatten::flatten_json;
pub use frame::{Frame, Record};
