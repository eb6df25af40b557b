//! Domain-level errors (no external dependencies)

use std::collections::TryReserveError;
use thiserror::Error;

use crate::domain::Side;

/// Domain errors cover tree construction and traversal failures.
/// These are independent of configuration and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("traversal exceeds fixed capacity of {capacity} nodes")]
    CapacityExceeded { capacity: usize },

    #[error("cannot allocate traversal buffer: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("invalid level-order tree: {message}")]
    InvalidLevelOrder { message: String },

    #[error("level-order input has {count} value(s) with no parent slot left")]
    DanglingValues { count: usize },

    #[error("node does not exist in this tree")]
    UnknownNode,

    #[error("{side} child slot is already occupied")]
    SlotOccupied { side: Side },

    #[error("tree already has a root")]
    RootOccupied,

    #[error("tree of height {height} is too deep to render (limit {limit})")]
    TooDeepToRender { height: usize, limit: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
