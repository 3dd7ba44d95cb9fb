use crate::arena::NodeId;
use crate::avl_tree::node::Node;
use crate::bst::{self, Balance};
use log::trace;
use std::cmp;

/// Rebalancing strategy that keeps the heights of sibling subtrees within one of each other.
pub enum Avl {}

pub type Tree<T> = bst::Tree<T, Avl>;

/// Height of a subtree, where a missing child has height `-1` and a leaf has height `0`.
pub fn height<T>(tree: &Tree<T>, node: Option<NodeId>) -> i32 {
    match node {
        None => -1,
        Some(id) => tree[id].height,
    }
}

pub fn balance<T>(tree: &Tree<T>, id: NodeId) -> i32 {
    let node = &tree[id];
    height(tree, node.left) - height(tree, node.right)
}

fn update<T>(tree: &mut Tree<T>, id: NodeId) {
    let new_height = {
        let node = &tree[id];
        cmp::max(height(tree, node.left), height(tree, node.right)) + 1
    };
    tree[id].height = new_height;
}

// Promotes the left child of `id` and returns it as the new subtree root.
fn rotate_right<T>(tree: &mut Tree<T>, id: NodeId) -> NodeId {
    let child = match tree[id].left {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("avl: promoting left child");
    let inner = tree[child].right.take();
    tree[id].left = inner;
    update(tree, id);
    tree[child].right = Some(id);
    update(tree, child);
    child
}

// Promotes the right child of `id` and returns it as the new subtree root.
fn rotate_left<T>(tree: &mut Tree<T>, id: NodeId) -> NodeId {
    let child = match tree[id].right {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("avl: promoting right child");
    let inner = tree[child].left.take();
    tree[id].right = inner;
    update(tree, id);
    tree[child].left = Some(id);
    update(tree, child);
    child
}

fn rebalance<T>(tree: &mut Tree<T>, id: NodeId) -> NodeId {
    update(tree, id);

    let factor = balance(tree, id);
    if factor > 1 {
        if let Some(child) = tree[id].left {
            if balance(tree, child) < 0 {
                let new_child = rotate_left(tree, child);
                tree[id].left = Some(new_child);
            }
        }
        rotate_right(tree, id)
    } else if factor < -1 {
        if let Some(child) = tree[id].right {
            if balance(tree, child) > 0 {
                let new_child = rotate_right(tree, child);
                tree[id].right = Some(new_child);
            }
        }
        rotate_left(tree, id)
    } else {
        id
    }
}

// Rebalances the ancestors on `path` from the deepest upwards. Stops early once a subtree keeps
// both its root and its height, since nothing above it can have changed.
fn retrace<T>(tree: &mut Tree<T>, path: &[NodeId]) {
    for (depth, &id) in path.iter().enumerate().rev() {
        let old_height = tree[id].height;
        let subtree = rebalance(tree, id);
        if subtree == id {
            if tree[id].height == old_height {
                break;
            }
        } else {
            let parent = if depth == 0 { None } else { Some(path[depth - 1]) };
            tree.replace_child(parent, id, Some(subtree));
        }
    }
}

impl<T> Balance<T> for Avl {
    type Node = Node<T>;

    fn repair_insert(tree: &mut Tree<T>, path: &[NodeId], _: NodeId) {
        retrace(tree, path);
    }

    fn remove_leaf(tree: &mut Tree<T>, path: &[NodeId], id: NodeId) -> T {
        let key = tree.detach(path.last().cloned(), id);
        retrace(tree, path);
        key
    }
}
