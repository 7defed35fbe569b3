use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Weight;

struct Entry<T> {
    priority: Weight,
    seq: u64,
    elem: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so that the max-heap pops the smallest priority first,
    // and among equal priorities the earliest insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue backed by a binary heap.
///
/// `pop` always returns an entry whose priority is at most that of every other
/// entry currently held; ties are resolved in insertion order. Push and pop take
/// $O(\\log n)$ time. The same element may be held several times with different
/// priorities, there is no decrease-key operation.
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        MinQueue::new()
    }
}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        MinQueue { heap: BinaryHeap::new(), seq: 0 }
    }

    pub fn with_capacity(capacity:usize) -> Self {
        MinQueue { heap: BinaryHeap::with_capacity(capacity), seq: 0 }
    }

    pub fn push(&mut self, elem:T, priority:Weight) {
        self.heap.push(Entry { priority, seq: self.seq, elem });
        self.seq += 1;
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(T, Weight)> {
        self.heap.pop().map(|e| (e.elem, e.priority))
    }

    pub fn peek(&self) -> Option<(&T, Weight)> {
        self.heap.peek().map(|e| (&e.elem, e.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn ordering() {
        let mut Q = MinQueue::new();
        assert!(Q.is_empty());
        assert_eq!(Q.pop(), None);

        Q.push('c', 3.0);
        Q.push('a', -1.5);
        Q.push('d', f64::INFINITY);
        Q.push('b', 0.0);
        assert_eq!(Q.len(), 4);
        assert_eq!(Q.peek(), Some((&'a', -1.5)));

        assert_eq!(Q.pop(), Some(('a', -1.5)));
        assert_eq!(Q.pop(), Some(('b', 0.0)));
        assert_eq!(Q.pop(), Some(('c', 3.0)));
        assert_eq!(Q.pop(), Some(('d', f64::INFINITY)));
        assert!(Q.is_empty());
    }

    #[test]
    fn ties() {
        let mut Q = MinQueue::with_capacity(4);
        Q.push(1, 2.0);
        Q.push(2, 1.0);
        Q.push(3, 2.0);
        Q.push(4, 1.0);

        let order:Vec<_> = std::iter::from_fn(|| Q.pop()).map(|(x, _)| x).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn random_sequence() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut Q = MinQueue::new();
        let mut values = Vec::new();
        for i in 0..500 {
            let p:f64 = rng.gen_range(-100.0..100.0);
            Q.push(i, p);
            values.push(p);
        }
        values.sort_by(|a, b| a.total_cmp(b));

        let popped:Vec<_> = std::iter::from_fn(|| Q.pop()).map(|(_, p)| p).collect();
        assert_eq!(popped, values);
    }
}
