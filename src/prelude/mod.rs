pub use crate::heap::node::{Admission, Node};
pub use crate::heap::{BoundedMinHeap, parent_index};

pub use base::error::*;
pub use base::options::*;
pub use base::scalar::*;
