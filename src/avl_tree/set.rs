use crate::avl_tree::tree::{Avl, Tree};
use crate::bst;
use crate::error::Result;
use log::debug;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::Error;
///
/// let mut set = AvlSet::new();
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
pub struct AvlSet<T> {
    tree: Tree<T>,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: Tree::new() }
    }

    /// Constructs a new, empty `AvlSet<T>` with room for `capacity` keys before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::with_capacity(64);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        AvlSet {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Adds a key to the set. Returns `false` and leaves the set unchanged if an equal key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let added = self.tree.insert(key);
        debug!("avl: add (inserted: {}, len: {})", added, self.tree.len());
        added
    }

    /// Removes a key from the set and returns the stored key, or `Error::NotFound` if no equal
    /// key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = AvlSet::new();
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
        debug!("avl: remove (found: {}, len: {})", ret.is_ok(), self.tree.len());
        ret
    }

    /// Returns the stored key equal to `key`, or `Error::NotFound` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(String::from("avl"));
    /// assert_eq!(set.search("avl").map(String::as_str), Ok("avl"));
    /// assert_eq!(set.search("rb"), Err(Error::NotFound));
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..7).collect();
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![3, 1, 2].into_iter().collect();
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(2);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            inner: self.tree.iter(),
        }
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
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

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for AvlSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, key) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " => ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in ascending order and yields immutable
/// references.
pub struct AvlSetIter<'a, T> {
    inner: bst::Iter<'a, T, Avl>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for AvlSetIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::avl_tree::tree::tests::assert_valid;
    use crate::error::Error;

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_add() {
        let mut set = AvlSet::new();
        assert!(set.add(1));
        assert!(set.contains(&1));
        assert_eq!(set.search(&1), Ok(&1));
    }

    #[test]
    fn test_add_duplicate() {
        let mut set = AvlSet::new();
        set.extend(vec![5, 2, 9]);
        assert!(!set.add(2));
        assert_eq!(set.len(), 3);
        assert_eq!(set.traversal(), vec![&2, &5, &9]);
        assert_valid(&set.tree);
    }

    #[test]
    fn test_search_returns_stored_key() {
        #[derive(Debug)]
        struct Entry(u32, &'static str);

        impl PartialEq for Entry {
            fn eq(&self, other: &Entry) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Entry {}
        impl PartialOrd for Entry {
            fn partial_cmp(&self, other: &Entry) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Entry {
            fn cmp(&self, other: &Entry) -> ::std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut set = AvlSet::new();
        set.add(Entry(1, "stored"));
        assert!(!set.add(Entry(1, "ignored")));
        assert_eq!(set.search(&Entry(1, "query")).map(|entry| entry.1), Ok("stored"));
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.add(1);
        assert_eq!(set.remove(&1), Ok(1));
        assert!(!set.contains(&1));
        assert_eq!(set.search(&1), Err(Error::NotFound));
    }

    #[test]
    fn test_remove_empty() {
        let mut set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.remove(&1), Err(Error::NotFound));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_absent_leaves_set_unchanged() {
        let mut set: AvlSet<u32> = (0..10).map(|key| key * 2).collect();
        let before = set.traversal().into_iter().cloned().collect::<Vec<u32>>();
        assert_eq!(set.remove(&7), Err(Error::NotFound));
        assert_eq!(set.len(), 10);
        assert_eq!(set.traversal().into_iter().cloned().collect::<Vec<u32>>(), before);
        assert_valid(&set.tree);
    }

    #[test]
    fn test_round_trip() {
        let mut set: AvlSet<u32> = (0..20).collect();
        assert!(set.add(100));
        assert_eq!(set.remove(&100), Ok(100));
        assert_eq!(set.len(), 20);
        assert_eq!(set.search(&100), Err(Error::NotFound));
        assert_valid(&set.tree);
    }

    #[test]
    fn test_scenario() {
        let mut set = AvlSet::new();
        set.extend(vec![5, 2, 9, 3, 7, 4, 8, 1, 6]);
        assert_eq!(set.to_string(), "1 => 2 => 3 => 4 => 5 => 6 => 7 => 8 => 9");

        assert_eq!(set.remove(&9), Ok(9));
        assert_eq!(set.to_string(), "1 => 2 => 3 => 4 => 5 => 6 => 7 => 8");
        assert_valid(&set.tree);
    }

    #[test]
    fn test_min_max() {
        let mut set = AvlSet::new();
        set.add(1);
        set.add(3);
        set.add(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = AvlSet::new();
        set.add(1);
        set.add(3);
        set.add(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.add(1);
        set.add(5);
        set.add(3);

        let mut iter = set.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_into_iter() {
        let set: AvlSet<u32> = vec![4, 2, 6].into_iter().collect();
        let mut sum = 0;
        for key in &set {
            sum += *key;
        }
        assert_eq!(sum, 12);
        assert_eq!(format!("{:?}", set), "{2, 4, 6}");
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut set: AvlSet<u32> = (0..50).collect();
        set.clear();
        assert!(set.is_empty());
        assert!(set.add(7));
        assert_eq!(set.traversal(), vec![&7]);
        assert_valid(&set.tree);
    }
}
