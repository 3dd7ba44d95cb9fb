use crate::bst;
use crate::error::Result;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::{RedBlack, Tree};
use log::debug;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree where every node is colored red or
/// black. No red node has a red child and every path from a node down to a missing child passes
/// through the same number of black nodes, so the longest path is at most twice the shortest.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackSet;
/// use balanced_collections::Error;
///
/// let mut set = RedBlackSet::new();
/// set.add(0);
/// set.add(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Ok(0));
/// assert_eq!(set.remove(&1), Err(Error::NotFound));
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: Tree::new() }
    }

    /// Constructs a new, empty `RedBlackSet<T>` with room for `capacity` keys before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::with_capacity(64);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackSet {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Adds a key to the set. Returns `false` and leaves the set unchanged if an equal key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let added = self.tree.insert(key);
        debug!("red-black: add (inserted: {}, len: {})", added, self.tree.len());
        added
    }

    /// Removes a key from the set and returns the stored key, or `Error::NotFound` if no equal
    /// key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// assert_eq!(set.remove(&1), Ok(1));
    /// assert_eq!(set.remove(&1), Err(Error::NotFound));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let ret = self.tree.remove(key);
        debug!("red-black: remove (found: {}, len: {})", ret.is_ok(), self.tree.len());
        ret
    }

    /// Returns the stored key equal to `key`, or `Error::NotFound` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(String::from("red"));
    /// assert_eq!(set.search("red").map(String::as_str), Ok("red"));
    /// assert_eq!(set.search("black"), Err(Error::NotFound));
    /// ```
    pub fn search<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.get(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// set.add(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of levels of the underlying tree, `0` for an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..7).collect();
    /// assert!(set.height() <= 6);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the color of the root node, or `None` if the set is empty. The root of a non-empty
    /// set is always black.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::{Color, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.root_color(), None);
    /// set.add(1);
    /// assert_eq!(set.root_color(), Some(Color::Black));
    /// ```
    pub fn root_color(&self) -> Option<Color> {
        self.tree.root().map(|root| self.tree[root].color)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.ceil(key)
    }

    /// Returns every key of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = vec![3, 1, 2].into_iter().collect();
    /// assert_eq!(set.traversal(), vec![&1, &2, &3]);
    /// ```
    pub fn traversal(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// set.add(2);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<T> {
        RedBlackSetIter {
            inner: self.tree.iter(),
        }
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.add(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T> {
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the keys in ascending order, each tagged with the color of its node.
impl<T> fmt::Display for RedBlackSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, node) in self.tree.iter().enumerate() {
            if index > 0 {
                write!(f, " => ")?;
            }
            write!(f, "{} [{}]", node.key, node.color)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in ascending order and yields immutable
/// references.
pub struct RedBlackSetIter<'a, T> {
    inner: bst::Iter<'a, T, RedBlack>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for RedBlackSetIter<'a, T> {}
