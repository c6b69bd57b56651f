use num::{PrimInt, Signed};

use crate::config::QueueConfig;
use crate::error::{QueueError, QueueResult};

/// A value stored in the heap together with its priority
#[derive(Debug, Clone, PartialEq)]
pub struct HeapNode<E, P = i32> {
    priority: P,
    value: E,
}

impl<E, P: Copy> HeapNode<E, P> {
    pub fn new(priority: P, value: E) -> Self {
        HeapNode { priority, value }
    }

    pub fn priority(&self) -> P {
        self.priority
    }

    pub fn value(&self) -> &E {
        &self.value
    }

    pub fn into_parts(self) -> (P, E) {
        (self.priority, self.value)
    }
}

/// Index of the parent of `index`, or None for the root
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Binary min-heap of (priority, value) nodes stored in a Vec.
/// Children of `i` live at `2i + 1` and `2i + 2`; the root holds a smallest priority.
///
/// Not meant for concurrent mutation; wrap it in a lock if it must be shared.
#[derive(Debug, Clone)]
pub struct MinHeap<E, P = i32> {
    nodes: Vec<HeapNode<E, P>>,
    config: QueueConfig,
}

impl<E, P: PrimInt + Signed> Default for MinHeap<E, P> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<E, P: PrimInt + Signed> MinHeap<E, P> {
    pub fn new() -> Self {
        MinHeap::with_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Self {
        MinHeap {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn with_capacity(capacity: usize, config: QueueConfig) -> Self {
        MinHeap {
            nodes: Vec::with_capacity(capacity),
            config,
        }
    }

    pub fn config(&self) -> QueueConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Value at the root
    pub fn minimum(&self) -> QueueResult<&E> {
        self.nodes
            .first()
            .map(HeapNode::value)
            .ok_or(QueueError::EmptyCollection)
    }

    pub fn value_at(&self, index: usize) -> QueueResult<&E> {
        self.node_at(index).map(HeapNode::value)
    }

    pub fn priority_at(&self, index: usize) -> QueueResult<P> {
        self.node_at(index).map(HeapNode::priority)
    }

    fn node_at(&self, index: usize) -> QueueResult<&HeapNode<E, P>> {
        self.nodes.get(index).ok_or(QueueError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Nodes in storage order, which is not sorted order
    pub fn iter(&self) -> impl Iterator<Item = (P, &E)> {
        self.nodes.iter().map(|n| (n.priority, &n.value))
    }

    fn sift_up(&mut self, index: usize) {
        /* Move the node at `index` toward the root while it beats its parent */
        if let Some(parent_index) = parent(index) {
            if self.nodes[index].priority < self.nodes[parent_index].priority {
                self.nodes.swap(index, parent_index);
                self.sift_up(parent_index)
            }
        }
    }

    fn sift_down(&mut self, index: usize) {
        /* Move the node at `index` toward the leaves while a child beats it */
        let len = self.nodes.len();
        let child_1_idx = 2 * index + 1;
        let child_2_idx = 2 * index + 2;
        if child_1_idx >= len {
            return;
        }
        // pick the smaller child, the left one on ties
        let smaller = if child_2_idx < len
            && self.nodes[child_2_idx].priority < self.nodes[child_1_idx].priority
        {
            child_2_idx
        } else {
            child_1_idx
        };
        if self.nodes[smaller].priority < self.nodes[index].priority {
            self.nodes.swap(index, smaller);
            self.sift_down(smaller)
        }
    }

    /// Restore the heap property over the whole Vec, bottom-up from the last internal node
    pub fn heapify(&mut self) {
        for i in (0..self.nodes.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Insert a node and sift it up.
    /// Negative priorities are rejected or dropped according to the config.
    pub fn insert(&mut self, priority: P, value: E) -> QueueResult<()> {
        if self.config.admit(priority)? {
            self.nodes.push(HeapNode::new(priority, value));
            self.sift_up(self.nodes.len() - 1);
        }
        Ok(())
    }

    /// Append a batch and rebuild once.
    /// Under the rejecting policy a single negative priority fails the whole batch
    /// and nothing is appended.
    pub fn insert_many<I>(&mut self, items: I) -> QueueResult<()>
    where
        I: IntoIterator<Item = (P, E)>,
    {
        let mut batch = Vec::new();
        for (priority, value) in items {
            if self.config.admit(priority)? {
                batch.push(HeapNode::new(priority, value));
            }
        }
        if batch.is_empty() {
            return Ok(());
        }
        log::trace!(
            "rebuilding heap of {} nodes after bulk insert",
            self.nodes.len() + batch.len()
        );
        self.nodes.append(&mut batch);
        self.heapify();
        Ok(())
    }

    /// Remove the root node
    pub fn pop_node(&mut self) -> Option<HeapNode<E, P>> {
        if self.nodes.is_empty() {
            return None;
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let node = self.nodes.pop();
        self.sift_down(0);
        node
    }

    /// Remove the root and return its value
    pub fn remove_minimum(&mut self) -> QueueResult<E> {
        self.pop_node()
            .map(|node| node.value)
            .ok_or(QueueError::EmptyCollection)
    }

    pub fn is_valid_heap(&self) -> bool {
        (1..self.nodes.len()).all(|i| match parent(i) {
            Some(p) => self.nodes[p].priority <= self.nodes[i].priority,
            None => true,
        })
    }
}

impl<E: PartialEq, P: PrimInt + Signed> MinHeap<E, P> {
    /// Smallest storage index holding `value`
    pub fn find_first(&self, value: &E) -> Option<usize> {
        self.nodes.iter().position(|n| n.value == *value)
    }

    /// Rewrite the priority of the first node holding `value`
    pub fn change_priority(&mut self, value: &E, new_priority: P) -> QueueResult<()> {
        if !self.config.admit(new_priority)? {
            return Ok(());
        }
        let index = self.find_first(value).ok_or(QueueError::NotFound)?;
        let old_priority = self.nodes[index].priority;
        self.nodes[index].priority = new_priority;
        if new_priority < old_priority {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }
}
