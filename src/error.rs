//! Error types for tree operations.
//!
//! Almost everything the tree does is in-memory and total: lookups on
//! missing values are signalled with `Option`, and inserting a duplicate or
//! deleting an absent value are quiet no-ops. The one fallible path is
//! rendering a tree diagram to an output stream.

use std::io;
use thiserror::Error;

/// Errors surfaced by the tree's display routines.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Writing the tree diagram to the output stream failed.
    #[error("failed to write tree diagram: {0}")]
    Diagram(#[from] io::Error),
}

/// Convenience alias for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
