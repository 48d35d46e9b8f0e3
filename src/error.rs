//! Reasons the structured (DOM) extraction path gives up
//!
//! Never surfaced to callers of `parse`; each one routes to the regex-only
//! fallback.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("document is empty")]
    EmptyDocument,

    #[error("no markup elements found in document")]
    NoMarkup,

    #[error("structured extraction panicked: {0}")]
    Panicked(String),
}
