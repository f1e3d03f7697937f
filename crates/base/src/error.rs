use serde::{Deserialize, Serialize};
use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum CreateError {
    #[error("Invalid heap options: {reason}.")]
    InvalidHeapOptions { reason: String },
    #[error("Layout of {len} nodes exceeds capacity {capacity}.")]
    Overflow { len: usize, capacity: usize },
    #[error("Layout is not a min-heap at index {index}.")]
    NotHeap { index: usize },
}

#[must_use]
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum InsertError {
    #[error("Value is not ordered.")]
    Unordered,
}
