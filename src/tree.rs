use std::{borrow::Borrow, cmp::Ordering, fmt, mem};

type Link<K, V> = Option<Box<Node<K, V>>>;

pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree. Keys in a left subtree are strictly less
/// and keys in a right subtree strictly greater than their parent's key.
///
/// Sorted insertion turns the tree into a list, so no operation here recurses
/// on the tree height.
pub struct Tree<K, V> {
    root: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn for_each(&self, mut action: impl FnMut(&K, &V)) {
        for (key, value) in self {
            action(key, value);
        }
    }

    #[cfg(test)]
    pub fn entry_count(&self) -> usize {
        self.into_iter().count()
    }

    #[cfg(test)]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(&self.root, 1)];

        while let Some((link, depth)) = stack.pop() {
            if let Some(node) = link {
                height = height.max(depth);
                stack.push((&node.left, depth + 1));
                stack.push((&node.right, depth + 1));
            }
        }

        height
    }
}

impl<K: Ord, V> Tree<K, V> {
    #[must_use]
    pub fn get<Q: Ord + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        let mut link = &self.root;

        while let Some(node) = link {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }

        None
    }

    /// Returns the previous value if the key was present already.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.root;

        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            }
        }

        *link = Some(Box::new(Node::new(key, value)));

        None
    }

    pub fn remove<Q: Ord + ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
    {
        let mut link = &mut self.root;

        loop {
            let ordering = key.cmp(link.as_ref()?.key.borrow());

            match ordering {
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Greater => link = &mut link.as_mut()?.right,
                Ordering::Equal => break,
            }
        }

        let node = link.as_mut()?;

        // A node with two children stays in place and takes over its in-order
        // successor's entry instead.
        if node.left.is_some() && node.right.is_some() {
            let (key, value) = Self::remove_min(&mut node.right)?;

            return Some((
                mem::replace(&mut node.key, key),
                mem::replace(&mut node.value, value),
            ));
        }

        let Node {
            key,
            value,
            left,
            right,
        } = *link.take()?;

        *link = left.or(right);

        Some((key, value))
    }

    fn remove_min(mut link: &mut Link<K, V>) -> Option<(K, V)> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let Node {
            key, value, right, ..
        } = *link.take()?;

        *link = right;

        Some((key, value))
    }

    /// Checks that every key lies strictly between the bounds set by its
    /// ancestors.
    #[cfg(test)]
    pub fn is_normal(&self) -> bool {
        let mut stack = vec![(&self.root, None, None)];

        while let Some((link, lower, upper)) = stack.pop() {
            if let Some(node) = link {
                let key = &node.key;

                let below = lower.is_some_and(|lower| lower >= key);
                let above = upper.is_some_and(|upper| upper <= key);

                if below || above {
                    return false;
                }

                stack.push((&node.left, lower, Some(key)));
                stack.push((&node.right, Some(key), upper));
            }
        }

        true
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        let mut stack = self.root.take().into_iter().collect::<Vec<_>>();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Clone, V: Clone> Clone for Tree<K, V> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();

        {
            let mut stack = vec![];

            if let Some(node) = &self.root {
                stack.push((&**node, &mut tree.root));
            }

            while let Some((source, link)) = stack.pop() {
                let node = link.insert(Box::new(Node::new(
                    source.key.clone(),
                    source.value.clone(),
                )));
                let Node { left, right, .. } = &mut **node;

                for (source, link) in [(&source.left, left), (&source.right, right)] {
                    if let Some(source) = source {
                        stack.push((&**source, link));
                    }
                }
            }
        }

        tree
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Tree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_map().entries(self).finish()
    }
}

/// In-order iterator holding the left spine of the subtree still to visit.
pub struct TreeIterator<'a, K: 'a, V: 'a>(Vec<&'a Node<K, V>>);

impl<'a, K, V> TreeIterator<'a, K, V> {
    fn push_left_spine(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link {
            self.0.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type IntoIter = TreeIterator<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        let mut iterator = TreeIterator(vec![]);

        iterator.push_left_spine(&self.root);

        iterator
    }
}

impl<'a, K, V> Iterator for TreeIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0.pop()?;

        self.push_left_spine(&node.right);

        Some((&node.key, &node.value))
    }
}
