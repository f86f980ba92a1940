//! Error types for the `canopy-world` crate.
//!
//! Gating conditions (already watered, not checked in, ...) are not errors;
//! they come back as [`RejectionReason`](canopy_types::RejectionReason)
//! values. [`WorldError`] covers caller-contract violations only.

use canopy_types::TreeId;

/// Errors that can occur during forest operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A country name is not present in the catalog or the forest.
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    /// A tree id does not belong to the garden.
    #[error("unknown tree: {0}")]
    UnknownTree(TreeId),

    /// A catalog was built with two records sharing a name.
    #[error("duplicate country in catalog: {0}")]
    DuplicateCountry(String),

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in forest calculation")]
    ArithmeticOverflow,
}
