//! Errors surfaced by the algorithm registry
//!
//! Compilation itself never fails: an unknown identifier degrades to an empty
//! run. [`UnknownAlgorithm`] only appears where a caller asks for a typed
//! [`Algorithm`](super::Algorithm), such as command-line parsing.

use thiserror::Error;

/// An identifier outside the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected one of: bubble-sort, selection-sort, insertion-sort, quick-sort, merge-sort)")]
pub struct UnknownAlgorithm(pub String);
