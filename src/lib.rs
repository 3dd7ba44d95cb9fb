//! Ordered sets backed by self-balancing binary search trees.
//!
//! Both `AvlSet` and `RedBlackSet` share one search/insert/delete core and differ only in the
//! strategy used to repair the tree after a structural edit, which keeps their height logarithmic
//! in the number of keys.
//!
//! # Examples
//!
//! ```
//! use balanced_collections::avl_tree::AvlSet;
//! use balanced_collections::red_black_tree::RedBlackSet;
//!
//! let avl: AvlSet<u32> = vec![5, 2, 9].into_iter().collect();
//! let red_black: RedBlackSet<u32> = vec![5, 2, 9].into_iter().collect();
//!
//! assert_eq!(avl.traversal(), red_black.traversal());
//! ```

mod arena;
mod bst;
mod error;

pub mod avl_tree;
pub mod red_black_tree;

pub use self::error::{Error, Result};
