use crate::tree::{Tree, TreeIterator};
use std::borrow::Borrow;

/// Ordered map backed by an unbalanced binary search tree.
///
/// Entries are kept in ascending key order. The tree is never rebalanced, so
/// every operation takes time proportional to its height, which becomes
/// linear when keys are inserted in sorted order.
#[derive(Clone, Debug)]
pub struct OrderedMap<K, V> {
    size: usize,
    tree: Tree<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new map.
    pub fn new() -> Self {
        Self {
            size: 0,
            tree: Tree::new(),
        }
    }

    /// Returns a number of entries in a map.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if a map is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns entries in ascending key order.
    pub fn iter(&self) -> MapIterator<'_, K, V> {
        self.into_iter()
    }

    /// Calls an action with every entry in ascending key order.
    ///
    /// The traversal completes before this method returns.
    pub fn for_each(&self, action: impl FnMut(&K, &V)) {
        self.tree.for_each(action)
    }

    #[cfg(test)]
    fn is_normal(&self) -> bool
    where
        K: Ord,
    {
        self.tree.is_normal() && self.tree.entry_count() == self.size
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Inserts a key-value pair into a map.
    ///
    /// If the key exists already, only its value is replaced and the previous
    /// one is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let value = self.tree.insert(key, value);

        if value.is_none() {
            self.size += 1;
        }

        value
    }

    /// Removes a key from a map if any and returns its value.
    pub fn remove<Q: Ord + ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        let (_, value) = self.tree.remove(key)?;

        debug_assert!(self.size > 0);
        self.size -= 1;

        Some(value)
    }

    /// Checks if a key is contained in a map.
    pub fn contains<Q: Ord + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.tree.get(key).is_some()
    }

    /// Finds a value corresponding to a key.
    pub fn get<Q: Ord + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.tree.get(key)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterator: I) {
        for (key, value) in iterator {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut map = Self::new();

        map.extend(iterator);

        map
    }
}

pub struct MapIterator<'a, K: 'a, V: 'a>(TreeIterator<'a, K, V>);

impl<'a, K, V> Iterator for MapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type IntoIter = MapIterator<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        MapIterator(self.tree.into_iter())
    }
}
