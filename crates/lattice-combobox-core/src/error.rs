//! Error types for Lattice Combobox.
//!
//! State transitions and selectors are total and never fail. The errors here
//! only come from caller-facing construction and validation helpers.

use crate::config::ItemId;

/// Result type alias for combobox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a combobox.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The namespace cannot be used as an element id prefix.
    #[error("Invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    /// Two distinct items produced the same identity.
    #[error("Duplicate item id '{0}': item ids must be unique")]
    DuplicateItemId(ItemId),
}

impl Error {
    /// Create a namespace error.
    pub fn invalid_namespace(namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNamespace {
            namespace: namespace.into(),
            reason: reason.into(),
        }
    }
}
