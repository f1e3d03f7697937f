pub mod node;

use self::node::{Admission, Node};
use base::error::{CreateError, InsertError};
use base::options::HeapOptions;
use base::scalar::F64;
use log::{debug, trace, warn};

/// Index of the parent of `i` in the array layout, `None` for the root.
///
/// Does not look at any heap, so `i` is not checked against a length.
#[inline(always)]
pub fn parent_index(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}

/// An array-backed binary min-heap that never holds more than `capacity`
/// nodes.
///
/// Children of index `i` live at `2i + 1` and `2i + 2`. Storage for
/// `capacity` nodes is reserved up front and never grows.
pub struct BoundedMinHeap<T = ()> {
    nodes: Vec<Node<T>>,
    capacity: usize,
    reject_unordered: bool,
}

impl<T> BoundedMinHeap<T> {
    pub fn new(capacity: usize) -> Self {
        debug!("bounded heap created with capacity {capacity}");
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
            reject_unordered: true,
        }
    }

    pub fn with_options(options: &HeapOptions) -> Result<Self, CreateError> {
        options.check()?;
        let mut heap = Self::new(options.capacity as usize);
        heap.reject_unordered = options.reject_unordered;
        Ok(heap)
    }

    /// Adopts `nodes` as the array layout of a heap with room for `capacity`
    /// nodes. The layout must already satisfy the min-heap property.
    pub fn from_layout(
        capacity: usize,
        mut nodes: Vec<Node<T>>,
    ) -> Result<Self, CreateError> {
        let len = nodes.len();
        if len > capacity {
            return Err(CreateError::Overflow { len, capacity });
        }
        if let Some(index) = first_violation(&nodes) {
            return Err(CreateError::NotHeap { index });
        }
        nodes.reserve_exact(capacity - len);
        Ok(Self {
            nodes,
            capacity,
            reject_unordered: true,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.nodes.len() == self.capacity
    }

    /// The minimum node, without removing it.
    pub fn root(&self) -> Option<&Node<T>> {
        self.nodes.first()
    }

    pub fn peek(&self) -> Option<&Node<T>> {
        self.root()
    }

    /// Once the heap is full, a value must be greater than this to be admitted.
    pub fn threshold(&self) -> Option<F64> {
        if self.is_full() {
            self.root().map(|node| node.value)
        } else {
            None
        }
    }

    /// The backing array in heap order.
    pub fn as_slice(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn is_heap(&self) -> bool {
        first_violation(&self.nodes).is_none()
    }

    /// Index of the smaller child of `i`, `None` if `i` has no child.
    ///
    /// On equal values the right child wins.
    pub fn min_child_index(&self, i: usize) -> Option<usize> {
        let l = i.checked_mul(2)?.checked_add(1)?;
        if l >= self.nodes.len() {
            return None;
        }
        let r = l + 1;
        if r >= self.nodes.len() {
            return Some(l);
        }
        if self.nodes[l].value < self.nodes[r].value {
            Some(l)
        } else {
            Some(r)
        }
    }

    pub fn insert(&mut self, node: Node<T>) -> Admission<T> {
        if self.capacity == 0 {
            trace!("rejected {}: zero capacity", node.value);
            return Admission::Rejected(node);
        }
        let mut displaced = None;
        if let Some(threshold) = self.threshold() {
            if node.value <= threshold {
                trace!("rejected {}: not above root {threshold}", node.value);
                return Admission::Rejected(node);
            }
            displaced = self.pop();
            trace!("displaced {threshold} by {}", node.value);
        }
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
        match displaced {
            Some(node) => Admission::Displaced(node),
            None => Admission::Accepted,
        }
    }

    /// Like [`insert`](Self::insert), but refuses NaN.
    pub fn try_insert(&mut self, node: Node<T>) -> Result<Admission<T>, InsertError> {
        if !node.value.is_ordered() {
            return Err(InsertError::Unordered);
        }
        Ok(self.insert(node))
    }

    pub fn pop(&mut self) -> Option<Node<T>> {
        if self.nodes.is_empty() {
            return None;
        }
        let root = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Pops every node, in ascending order. The heap is empty afterwards.
    pub fn drain_sorted(&mut self) -> Vec<Node<T>> {
        let mut result = Vec::with_capacity(self.nodes.len());
        while let Some(node) = self.pop() {
            result.push(node);
        }
        result
    }

    pub fn into_sorted_vec(mut self) -> Vec<Node<T>> {
        self.drain_sorted()
    }

    fn sift_up(&mut self, mut c: usize) {
        while let Some(p) = parent_index(c) {
            if self.nodes[c].value >= self.nodes[p].value {
                break;
            }
            self.nodes.swap(c, p);
            c = p;
        }
    }

    fn sift_down(&mut self, mut c: usize) {
        while let Some(m) = self.min_child_index(c) {
            if self.nodes[c].value <= self.nodes[m].value {
                break;
            }
            self.nodes.swap(c, m);
            c = m;
        }
    }
}

impl<T> Extend<Node<T>> for BoundedMinHeap<T> {
    fn extend<I: IntoIterator<Item = Node<T>>>(&mut self, iter: I) {
        for node in iter {
            if self.reject_unordered {
                if let Err(e) = self.try_insert(node) {
                    warn!("dropped node: {e}");
                }
            } else {
                self.insert(node);
            }
        }
    }
}

fn first_violation<T>(nodes: &[Node<T>]) -> Option<usize> {
    (1..nodes.len()).find(|&i| {
        parent_index(i).is_some_and(|p| nodes[i].value < nodes[p].value)
    })
}
