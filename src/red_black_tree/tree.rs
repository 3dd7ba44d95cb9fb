use crate::arena::NodeId;
use crate::bst::Node as _;
use crate::bst::{self, Balance, Side};
use crate::red_black_tree::node::{Color, Node};
use log::trace;

/// Rebalancing strategy that keeps every root-to-leaf path at the same number of black nodes
/// with no two red nodes in a row.
pub enum RedBlack {}

pub type Tree<T> = bst::Tree<T, RedBlack>;

/// Missing children count as black.
pub fn is_red<T>(tree: &Tree<T>, node: Option<NodeId>) -> bool {
    match node {
        None => false,
        Some(id) => tree[id].color == Color::Red,
    }
}

pub fn is_black<T>(tree: &Tree<T>, node: Option<NodeId>) -> bool {
    !is_red(tree, node)
}

fn swap_colors<T>(tree: &mut Tree<T>, a: NodeId, b: NodeId) {
    let color = tree[a].color;
    tree[a].color = tree[b].color;
    tree[b].color = color;
}

fn child<T>(tree: &Tree<T>, id: NodeId, side: Side) -> NodeId {
    match tree[id].child(side) {
        Some(child) => child,
        None => unreachable!(),
    }
}

// Promotes the child of `id` on `side` into the place of `id`. The inner grandchild moves across
// to `id`, and the parent links of all three nodes as well as the slot that used to hold `id`
// (or the root) are updated.
fn rotate<T>(tree: &mut Tree<T>, id: NodeId, side: Side) -> NodeId {
    let child = child(tree, id, side);
    trace!("red-black: promoting {:?} child", side);

    let parent = tree[id].parent;
    let inner = tree[child].child(side.opposite());

    tree[id].set_child(side, inner);
    if let Some(inner) = inner {
        tree[inner].parent = Some(id);
    }

    tree[child].set_child(side.opposite(), Some(id));
    tree[id].parent = Some(child);
    tree[child].parent = parent;
    tree.replace_child(parent, id, Some(child));
    child
}

// Resolves a red child of `id` that itself has a red child. The right side is examined before the
// left one; on a subtree without such a violation this does nothing.
fn insert_fixup<T>(tree: &mut Tree<T>, id: NodeId) {
    for &side in &[Side::Right, Side::Left] {
        let child = match tree[id].child(side) {
            Some(child) if is_red(tree, Some(child)) => child,
            _ => continue,
        };
        let inner = tree[child].child(side.opposite());
        let outer = tree[child].child(side);
        let uncle = tree[id].child(side.opposite());

        if is_red(tree, inner) && is_black(tree, uncle) {
            trace!("red-black insert fixup: inner red grandchild with black uncle");
            rotate(tree, child, side.opposite());
            let promoted = self::child(tree, id, side);
            swap_colors(tree, id, promoted);
            rotate(tree, id, side);
            return;
        } else if is_red(tree, outer) && is_black(tree, uncle) {
            trace!("red-black insert fixup: outer red grandchild with black uncle");
            swap_colors(tree, id, child);
            rotate(tree, id, side);
            return;
        } else if is_red(tree, outer) || is_red(tree, inner) {
            trace!("red-black insert fixup: red uncle, recoloring");
            tree[id].color = Color::Red;
            tree[child].color = Color::Black;
            if let Some(uncle) = uncle {
                tree[uncle].color = Color::Black;
            }
            return;
        }
    }
}

// Restores the black-height after `id` lost one black node on its paths. `id` is either the black
// leaf about to be unlinked or, on later iterations, one of its ancestors.
fn delete_fixup<T>(tree: &mut Tree<T>, id: NodeId) {
    let mut x = id;
    while Some(x) != tree.root() && is_black(tree, Some(x)) {
        let parent = match tree[x].parent {
            Some(parent) => parent,
            None => break,
        };
        let side = if tree[parent].left == Some(x) {
            Side::Left
        } else {
            Side::Right
        };
        let far = side.opposite();

        let mut sibling = child(tree, parent, far);
        if is_red(tree, Some(sibling)) {
            trace!("red-black delete fixup: case 1, red sibling");
            swap_colors(tree, parent, sibling);
            rotate(tree, parent, far);
            sibling = child(tree, parent, far);
        }

        let near_nephew = tree[sibling].child(side);
        let far_nephew = tree[sibling].child(far);
        if is_black(tree, near_nephew) && is_black(tree, far_nephew) {
            trace!("red-black delete fixup: case 2, black nephews");
            tree[sibling].color = Color::Red;
            x = parent;
            continue;
        }

        if is_black(tree, far_nephew) {
            trace!("red-black delete fixup: case 3, near nephew red");
            if let Some(near_nephew) = near_nephew {
                swap_colors(tree, sibling, near_nephew);
            }
            rotate(tree, sibling, side);
            sibling = child(tree, parent, far);
        }

        trace!("red-black delete fixup: case 4, far nephew red");
        swap_colors(tree, sibling, parent);
        if let Some(far_nephew) = tree[sibling].child(far) {
            tree[far_nephew].color = Color::Black;
        }
        rotate(tree, parent, far);
        break;
    }
    tree[x].color = Color::Black;
}

impl<T> Balance<T> for RedBlack {
    type Node = Node<T>;

    fn repair_insert(tree: &mut Tree<T>, path: &[NodeId], id: NodeId) {
        tree[id].parent = path.last().cloned();
        for &ancestor in path.iter().rev() {
            insert_fixup(tree, ancestor);
        }
        if let Some(root) = tree.root() {
            tree[root].color = Color::Black;
        }
    }

    fn remove_leaf(tree: &mut Tree<T>, _: &[NodeId], id: NodeId) -> T {
        if is_black(tree, Some(id)) {
            delete_fixup(tree, id);
        }
        let parent = tree[id].parent;
        tree.detach(parent, id)
    }
}

#[cfg(test)]
pub mod tests {
    use super::{is_red, Tree};
    use crate::arena::NodeId;
    use crate::red_black_tree::node::Color;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::collections::BTreeSet;

    // Checks order, parent links and colors below `node`; returns the black-height of the subtree
    // counting the missing children.
    fn check_subtree(
        tree: &Tree<u32>,
        node: Option<NodeId>,
        parent: Option<NodeId>,
        low: Option<u32>,
        high: Option<u32>,
    ) -> usize {
        let id = match node {
            Some(id) => id,
            None => return 1,
        };
        let key = tree[id].key;
        assert_eq!(tree[id].parent, parent);
        assert!(low.map_or(true, |low| low < key));
        assert!(high.map_or(true, |high| key < high));

        if tree[id].color == Color::Red {
            assert!(!is_red(tree, tree[id].left));
            assert!(!is_red(tree, tree[id].right));
        }

        let left = check_subtree(tree, tree[id].left, Some(id), low, Some(key));
        let right = check_subtree(tree, tree[id].right, Some(id), Some(key), high);
        assert_eq!(left, right);
        match tree[id].color {
            Color::Black => left + 1,
            Color::Red => left,
        }
    }

    pub fn assert_valid(tree: &Tree<u32>) {
        if let Some(root) = tree.root() {
            assert_eq!(tree[root].color, Color::Black);
        }
        check_subtree(tree, tree.root(), None, None, None);
    }

    fn keys(tree: &Tree<u32>) -> Vec<u32> {
        tree.iter().map(|node| node.key).collect()
    }

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = Tree::new();
        for &key in keys {
            tree.insert(key);
            assert_valid(&tree);
        }
        tree
    }

    fn root_key(tree: &Tree<u32>) -> u32 {
        tree[tree.root().unwrap()].key
    }

    #[test]
    fn test_outer_double_red() {
        assert_eq!(root_key(&build(&[1, 2, 3])), 2);
        assert_eq!(root_key(&build(&[3, 2, 1])), 2);
    }

    #[test]
    fn test_inner_double_red() {
        assert_eq!(root_key(&build(&[1, 3, 2])), 2);
        assert_eq!(root_key(&build(&[3, 1, 2])), 2);
    }

    #[test]
    fn test_red_uncle_recolors() {
        let tree = build(&[2, 1, 3, 4]);
        let root = tree.root().unwrap();
        assert_eq!(tree[root].key, 2);
        let left = tree[root].left.unwrap();
        let right = tree[root].right.unwrap();
        assert_eq!(tree[left].color, Color::Black);
        assert_eq!(tree[right].color, Color::Black);
        assert_eq!(tree[tree[right].right.unwrap()].color, Color::Red);
    }

    #[test]
    fn test_scenario() {
        let mut tree = build(&[5, 2, 9, 3, 7, 4, 8, 1, 6]);
        assert_eq!(keys(&tree), (1..10).collect::<Vec<u32>>());
        assert!(tree.get(&9).is_ok());

        assert_eq!(tree.remove(&9), Ok(9));
        assert_valid(&tree);
        assert!(tree.get(&9).is_err());
        assert_eq!(keys(&tree), (1..9).collect::<Vec<u32>>());
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut tree = build(&(0..64).collect::<Vec<u32>>());
        while let Some(root) = tree.root() {
            let key = tree[root].key;
            assert_eq!(tree.remove(&key), Ok(key));
            assert_valid(&tree);
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_ascending() {
        let mut tree = build(&(0..512).rev().collect::<Vec<u32>>());
        for key in 0..512 {
            assert_eq!(tree.remove(&key), Ok(key));
            assert_valid(&tree);
        }
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_random_operations() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([2, 7, 1, 8]);
        let mut tree = Tree::new();
        let mut expected = BTreeSet::new();

        for _ in 0..2000 {
            let key = rng.gen_range(0, 256);
            if rng.gen() {
                assert_eq!(tree.insert(key), expected.insert(key));
            } else {
                assert_eq!(tree.remove(&key).ok(), expected.take(&key));
            }
            assert_valid(&tree);
            assert_eq!(tree.len(), expected.len());
        }
        assert_eq!(keys(&tree), expected.into_iter().collect::<Vec<u32>>());
    }
}
