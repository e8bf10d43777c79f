//! Priority queue for the cost-ordered engines. Entries are never updated in place: a
//! cheaper route to a cell pushes a new entry and the engine discards stale ones when they
//! are popped.
use crate::position::Position;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Open set entry. `estimated_cost` is `f`, `cost` is `g`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmallestCostHolder<K> {
    pub estimated_cost: K,
    pub cost: K,
    pub position: Position,
    sequence: u64,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimated cost compares greatest, and
        // among equal estimates the earliest inserted entry wins.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

#[derive(Debug)]
pub(crate) struct OpenSet<K> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    next_sequence: u64,
}

impl<K: Ord> OpenSet<K> {
    pub fn new() -> OpenSet<K> {
        OpenSet {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, position: Position, cost: K, estimated_cost: K) {
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            cost,
            position,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<SmallestCostHolder<K>> {
        self.heap.pop()
    }
}
