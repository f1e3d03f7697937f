//! Fixed-capacity priority queue.
//!
//! [`BoundedMinHeap`] keeps at most `capacity` nodes. Once it is full, a new
//! node is admitted only if its value exceeds the current root, which is then
//! evicted, so a stream of insertions leaves the `capacity` largest values
//! behind with the smallest of them at the root.

pub mod heap;
pub mod prelude;

pub use heap::{BoundedMinHeap, parent_index};
pub use heap::node::{Admission, Node};
