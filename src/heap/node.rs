use base::scalar::F64;
use serde::{Deserialize, Serialize};

/// An element of [`BoundedMinHeap`](super::BoundedMinHeap).
///
/// Only `value` takes part in ordering; `payload` travels with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node<T = ()> {
    pub value: F64,
    pub payload: T,
}

impl<T> Node<T> {
    pub fn new(value: impl Into<F64>, payload: T) -> Self {
        Self {
            value: value.into(),
            payload,
        }
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::new(value, ())
    }
}

impl From<F64> for Node {
    fn from(value: F64) -> Self {
        Self::new(value, ())
    }
}

/// Outcome of an insertion.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission<T = ()> {
    /// Appended without evicting anything.
    Accepted,
    /// Appended after evicting the former root, which is returned.
    Displaced(Node<T>),
    /// Not admitted; the node is handed back.
    Rejected(Node<T>),
}

impl<T> Admission<T> {
    pub fn is_admitted(&self) -> bool {
        !matches!(self, Admission::Rejected(_))
    }

    /// The node that did not end up in the heap, if any.
    pub fn into_dropped(self) -> Option<Node<T>> {
        match self {
            Admission::Accepted => None,
            Admission::Displaced(node) | Admission::Rejected(node) => Some(node),
        }
    }
}
