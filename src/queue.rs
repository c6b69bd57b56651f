use std::convert::TryFrom;

use num::{PrimInt, Signed};

use crate::config::QueueConfig;
use crate::error::{QueueError, QueueResult};
use crate::heap::MinHeap;

/// Priority queue over integer priorities; lower values come out first.
///
/// Elements with equal priorities leave in no particular order.
/// Not safe for concurrent mutation, callers synchronize if they share it.
#[derive(Debug, Clone)]
pub struct PriorityQueue<E, P = i32> {
    heap: MinHeap<E, P>,
}

impl<E, P: PrimInt + Signed> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<E, P: PrimInt + Signed> PriorityQueue<E, P> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: MinHeap::new(),
        }
    }

    pub fn with_config(config: QueueConfig) -> Self {
        PriorityQueue {
            heap: MinHeap::with_config(config),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: MinHeap::with_capacity(capacity, QueueConfig::default()),
        }
    }

    pub fn insert(&mut self, priority: P, element: E) -> QueueResult<()> {
        self.heap.insert(priority, element)
    }

    pub fn insert_all<I>(&mut self, elements: I) -> QueueResult<()>
    where
        I: IntoIterator<Item = (P, E)>,
    {
        self.heap.insert_many(elements)
    }

    /// Take the element with the lowest priority value off the queue
    pub fn remove_front(&mut self) -> QueueResult<E> {
        self.heap.remove_minimum()
    }

    pub fn peek(&self) -> QueueResult<&E> {
        self.heap.minimum()
    }

    /// Elements in storage order; `all_priorities()[i]` belongs to `all_elements()[i]`
    pub fn all_elements(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.heap.iter().map(|(_, e)| e.clone()).collect()
    }

    pub fn all_priorities(&self) -> Vec<P> {
        self.heap.iter().map(|(p, _)| p).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (P, &E)> {
        self.heap.iter()
    }

    /// Drain into (priority, element) pairs, lowest priority first
    pub fn into_sorted_vec(mut self) -> Vec<(P, E)> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(node) = self.heap.pop_node() {
            sorted.push(node.into_parts());
        }
        sorted
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<E: Default, P: PrimInt + Signed> PriorityQueue<E, P> {
    /// Like `remove_front`, but an empty queue yields `E::default()`
    pub fn remove_front_or_default(&mut self) -> E {
        self.heap.remove_minimum().unwrap_or_default()
    }
}

impl<E: PartialEq, P: PrimInt + Signed> PriorityQueue<E, P> {
    pub fn contains(&self, element: &E) -> bool {
        self.heap.find_first(element).is_some()
    }

    /// Priority of the first matching element in storage order.
    /// With duplicates this need not be the smallest of their priorities.
    pub fn priority_of(&self, element: &E) -> Option<P> {
        self.heap
            .find_first(element)
            .and_then(|i| self.heap.priority_at(i).ok())
    }

    pub fn change_priority(&mut self, element: &E, new_priority: P) -> QueueResult<()> {
        self.heap.change_priority(element, new_priority)
    }
}

impl<E, P: PrimInt + Signed> TryFrom<Vec<(P, E)>> for PriorityQueue<E, P> {
    type Error = QueueError;

    fn try_from(v: Vec<(P, E)>) -> QueueResult<Self> {
        let mut queue = PriorityQueue::with_capacity(v.len());
        queue.insert_all(v)?;
        Ok(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_heap_order<E>(q: &PriorityQueue<E>) {
        let p = q.all_priorities();
        for i in 0..p.len() {
            for child in &[2 * i + 1, 2 * i + 2] {
                if let Some(c) = p.get(*child) {
                    assert!(p[i] <= *c, "priority {} above child {}", p[i], c);
                }
            }
        }
    }

    #[test]
    fn peek_priority_and_remove() {
        let mut q = PriorityQueue::new();
        q.insert(3, "a").unwrap();
        q.insert(1, "b").unwrap();
        q.insert(2, "c").unwrap();
        assert_eq!(q.peek(), Ok(&"b"));
        assert_eq!(q.priority_of(&"c"), Some(2));
        assert_eq!(q.remove_front(), Ok("b"));
        assert_eq!(q.peek(), Ok(&"c"));
        assert_eq!(q.size(), 2);
    }

    #[test]
    fn change_priority_to_front() {
        let mut q = PriorityQueue::new();
        q.insert_all(vec![(3, "a"), (1, "b"), (2, "c")]).unwrap();
        q.change_priority(&"a", 0).unwrap();
        assert_eq!(q.size(), 3);
        assert_eq!(q.priority_of(&"a"), Some(0));
        assert_eq!(q.remove_front(), Ok("a"));
        assert_heap_order(&q);
    }

    #[test]
    fn change_priority_of_missing() {
        let mut q = PriorityQueue::new();
        q.insert(1, 'x').unwrap();
        assert_eq!(q.change_priority(&'y', 0), Err(QueueError::NotFound));
        assert_eq!(q.all_priorities(), vec![1]);
    }

    #[test]
    fn drain_to_sorted() {
        let mut q = PriorityQueue::new();
        q.insert_all(vec![(5, 'e'), (1, 'a'), (3, 'c'), (2, 'b'), (4, 'd')])
            .unwrap();
        let mut drained = Vec::new();
        while !q.is_empty() {
            drained.push(q.remove_front().unwrap());
        }
        assert_eq!(drained, vec!['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn empty_queue() {
        let mut q: PriorityQueue<String> = PriorityQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.peek(), Err(QueueError::EmptyCollection));
        assert_eq!(q.remove_front(), Err(QueueError::EmptyCollection));
        assert_eq!(q.remove_front_or_default(), String::new());
        assert_eq!(q.size(), 0);
        assert_eq!(q.priority_of(&"a".to_string()), None);
        assert!(!q.contains(&"a".to_string()));
    }

    #[test]
    fn negative_priority_leaves_queue_unchanged() {
        let mut q = PriorityQueue::new();
        q.insert_all(vec![(2, 'a'), (7, 'b')]).unwrap();
        let elements = q.all_elements();
        let priorities = q.all_priorities();
        assert_eq!(q.insert(-1, 'c'), Err(QueueError::InvalidPriority));
        assert_eq!(q.size(), 2);
        assert_eq!(q.all_elements(), elements);
        assert_eq!(q.all_priorities(), priorities);

        let mut lenient = PriorityQueue::with_config(QueueConfig::dropping());
        lenient.insert(4, 'a').unwrap();
        assert_eq!(lenient.insert(-1, 'c'), Ok(()));
        assert_eq!(lenient.all_elements(), vec!['a']);
    }

    #[test]
    fn priority_of_first_found_duplicate() {
        let mut q = PriorityQueue::new();
        q.insert(1, "root").unwrap();
        q.insert(6, "dup").unwrap();
        q.insert(4, "dup").unwrap();
        let first = q.iter().position(|(_, e)| *e == "dup").unwrap();
        assert_eq!(q.priority_of(&"dup"), Some(q.all_priorities()[first]));
        assert!(q.contains(&"dup"));
    }

    #[test]
    fn try_from_and_sorted_vec() {
        let q = PriorityQueue::try_from(vec![(9, 'z'), (0, 'a'), (4, 'm')]).unwrap();
        assert_eq!(q.into_sorted_vec(), vec![(0, 'a'), (4, 'm'), (9, 'z')]);
        let bad = PriorityQueue::try_from(vec![(1, 'a'), (-1, 'b')]);
        assert_eq!(bad.err(), Some(QueueError::InvalidPriority));
    }

    #[test]
    fn random_queue_matches_sorted_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut q = PriorityQueue::new();
        let mut reference: Vec<(i32, usize)> = Vec::new();
        for id in 0..500usize {
            let p = rng.gen_range(0, 100);
            q.insert(p, id).unwrap();
            reference.push((p, id));
            assert_eq!(q.size(), reference.len());
            if rng.gen_bool(0.3) {
                let front = q.remove_front().unwrap();
                let min = reference.iter().map(|(p, _)| *p).min().unwrap();
                let pos = reference.iter().position(|(_, e)| *e == front).unwrap();
                assert_eq!(reference[pos].0, min);
                reference.remove(pos);
            }
            assert_heap_order(&q);
        }
        for (p, e) in q.iter() {
            assert!(reference.contains(&(p, *e)));
        }
        let sorted: Vec<i32> = q.into_sorted_vec().into_iter().map(|(p, _)| p).collect();
        let mut expected: Vec<i32> = reference.into_iter().map(|(p, _)| p).collect();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }
}
