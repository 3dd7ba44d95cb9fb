//! Slab storage for tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to a node stored in an `Arena<N>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

enum Slot<N> {
    Occupied(N),
    Vacant(Option<NodeId>),
}

/// Owns every node of a tree and hands out `NodeId`s to link them together.
///
/// Vacant slots form an intrusive free list so that a freed slot is reused by the next
/// allocation. Links between nodes are plain ids, so a tree may hold both owning child edges and
/// non-owning parent edges without any reference cycles: the arena alone is responsible for the
/// lifetime of the nodes.
pub struct Arena<N> {
    head: Option<NodeId>,
    slots: Vec<Slot<N>>,
    len: usize,
}

impl<N> Arena<N> {
    fn is_valid_id(&self, id: NodeId) -> bool {
        id.0 < self.slots.len()
    }

    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Stores `node` in the first vacant slot, growing the slab if there is none.
    pub fn allocate(&mut self, node: N) -> NodeId {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            },
            Some(id) => match mem::replace(&mut self.slots[id.0], Slot::Occupied(node)) {
                Slot::Vacant(next) => {
                    self.head = next;
                    id
                },
                Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
            },
        }
    }

    /// Releases the slot behind `id` and returns the node it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range or already vacant.
    pub fn free(&mut self, id: NodeId) -> N {
        if !self.is_valid_id(id) {
            panic!("Error: attempting to free an invalid slot.");
        }
        let old_slot = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.head));
        match old_slot {
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("Error: attempting to free a vacant slot.");
            },
            Slot::Occupied(node) => {
                self.len -= 1;
                self.head = Some(id);
                node
            },
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&N> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Returns mutable references to two distinct occupied slots.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or if either id does not refer to an occupied slot.
    pub fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut N, &mut N) {
        assert_ne!(a, b, "Error: expected two distinct slots.");
        let (low, high, swapped) = if a.0 < b.0 { (a.0, b.0, false) } else { (b.0, a.0, true) };
        let (head, tail) = self.slots.split_at_mut(high);
        match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied(first), Slot::Occupied(second)) => {
                if swapped {
                    (second, first)
                } else {
                    (first, second)
                }
            },
            _ => panic!("Error: expected two occupied slots."),
        }
    }

    /// Drops every node and forgets all ids handed out so far.
    pub fn clear(&mut self) {
        self.head = None;
        self.slots.clear();
        self.len = 0;
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: id does not refer to a live node.")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: id does not refer to a live node.")
    }
}
