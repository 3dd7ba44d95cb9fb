//! Search, insertion and deletion shared by every balanced tree in the crate.
//!
//! The core performs the ordinary binary search tree edit and hands the ancestors of the edited
//! position to a `Balance` strategy which restores its own invariant.

mod iter;
mod tree;

pub use self::iter::Iter;
pub use self::tree::Tree;

use crate::arena::NodeId;

/// The side of a node on which a child hangs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The structural part of a tree node that the core needs to read and relink.
pub trait Node<T> {
    fn new(key: T) -> Self;

    fn key(&self) -> &T;

    fn key_mut(&mut self) -> &mut T;

    fn into_key(self) -> T;

    fn left(&self) -> Option<NodeId>;

    fn right(&self) -> Option<NodeId>;

    fn set_left(&mut self, child: Option<NodeId>);

    fn set_right(&mut self, child: Option<NodeId>);

    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.set_left(child),
            Side::Right => self.set_right(child),
        }
    }
}

/// A rebalancing strategy plugged into `Tree`.
///
/// `path` always lists the ancestors of the edited position from the root downwards, as they were
/// when the edit happened.
pub trait Balance<T>: Sized {
    type Node: Node<T>;

    /// Called once `id` has been linked as a new leaf below the last node of `path`.
    fn repair_insert(tree: &mut Tree<T, Self>, path: &[NodeId], id: NodeId);

    /// Unlinks the leaf `id` from the tree, restores the invariant and returns its key.
    fn remove_leaf(tree: &mut Tree<T, Self>, path: &[NodeId], id: NodeId) -> T;
}
