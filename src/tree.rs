//! A mutable, unbalanced BST of unique keys. Each [`Node`] owns its children outright and there are
//! no parent pointers: every operation starts at the root and works its way down.
//!
//! Besides the structure itself, each node carries a highlight flag. Searching sets the flag on
//! every node the search visits so a renderer can show the path that was taken.
//!
//! # Examples
//!
//! ```
//! use visual_bst::{Order, Tree};
//!
//! let mut tree: Tree<i32> = vec![50, 25, 75].into_iter().collect();
//!
//! // Duplicates are ignored.
//! assert!(tree.insert(30));
//! assert!(!tree.insert(30));
//! assert_eq!(tree.size(), 4);
//!
//! // Searching lights up the path from the root.
//! assert!(tree.search(&30));
//! assert_eq!(tree.highlighted(), vec![50, 25, 30]);
//! tree.reset_highlights();
//!
//! // Deleting a missing key is an error, deleting a present one hands the key back.
//! assert!(tree.delete(&42).is_err());
//! assert_eq!(tree.delete(&25), Ok(25));
//! assert_eq!(tree.keys(Order::In), vec![30, 50, 75]);
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;

use crate::error::TreeError;
use crate::traversal::{Order, Traversal};

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree holding at most one node per key. Inserting, searching, and deleting all
/// take `O(height)` but nothing keeps the tree balanced, so the height can grow to the number of
/// keys.
#[derive(Debug, Clone)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // A tree built from sorted keys is a linked list so the default recursive drop could run out
    // of stack. Unlink the nodes onto an explicit stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        drop(std::mem::take(self));
    }

    /// The root node, for callers that want to walk the structure (e.g. to draw it).
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there is no root.
    pub fn root(&self) -> Result<&Node<K>, TreeError<K>> {
        self.root.as_deref().ok_or(TreeError::EmptyTree)
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// The number of keys in the tree.
    pub fn size(&self) -> usize {
        self.root.as_deref().map_or(0, Node::size)
    }

    /// Inserts the key into the tree. Returns `true` if a new node was created and `false` if the
    /// key was already present, in which case the tree is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = Node::insert(&mut self.root, key);

        #[cfg(feature = "tracing")]
        tracing::debug!(inserted, "insert");

        inserted
    }

    /// Looks for the key, highlighting every node visited on the way down. If the key is present
    /// the path ends at its node, otherwise it ends at the last node before falling off the tree.
    ///
    /// Highlights accumulate across searches until [`Tree::reset_highlights`] is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_bst::Tree;
    ///
    /// let mut tree: Tree<i32> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.retrieve(&3), Some(&3));
    /// assert_eq!(tree.highlighted(), vec![2, 3]);
    ///
    /// tree.reset_highlights();
    /// assert_eq!(tree.retrieve(&0), None);
    /// assert_eq!(tree.highlighted(), vec![2, 1]);
    /// ```
    pub fn retrieve(&mut self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut visited = 0;
        let found = self
            .root
            .as_deref_mut()
            .and_then(|root| root.retrieve(key, &mut visited));

        #[cfg(feature = "tracing")]
        tracing::trace!(visited, found = found.is_some(), "search");

        found
    }

    /// Same as [`Tree::retrieve`] but only reports whether the key was found.
    pub fn search(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        self.retrieve(key).is_some()
    }

    /// Whether the tree holds the key. Unlike [`Tree::search`] this leaves the highlights alone.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Deletes the node containing the given key and returns the key.
    ///
    /// A node with two children isn't unlinked. It takes the key of its in-order successor (the
    /// smallest key in its right subtree) and the successor's node is unlinked instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if no node has the key. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_bst::{Order, Tree, TreeError};
    ///
    /// let mut tree: Tree<i32> = vec![2, 1, 4, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.root().map(|root| *root.key()), Ok(3));
    /// assert_eq!(tree.delete(&2), Err(TreeError::KeyNotFound(2)));
    /// assert_eq!(tree.keys(Order::In), vec![1, 3, 4]);
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<K, TreeError<K>>
    where
        K: Ord + Clone,
    {
        let deleted = Node::delete(&mut self.root, key);

        #[cfg(feature = "tracing")]
        tracing::debug!(deleted = deleted.is_some(), "delete");

        deleted.ok_or_else(|| TreeError::KeyNotFound(key.clone()))
    }

    /// Clears the highlight flag on every node.
    pub fn reset_highlights(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            root.reset_highlights();
        }
    }

    /// The keys of every highlighted node, in pre-order. After a single search this is the search
    /// path, root first.
    pub fn highlighted(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.collect_highlighted(&mut keys);
        }
        keys
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(&current.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(&current.key)
    }

    /// Captures the keys of the tree in the given order. The returned [`Traversal`] doesn't see
    /// any later changes to the tree.
    pub fn traverse(&self, order: Order) -> Traversal<K>
    where
        K: Clone,
    {
        Traversal::new(self, order)
    }

    /// The keys of the tree in the given order.
    pub fn keys(&self, order: Order) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(order).collect()
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    /// Inserts the keys in iteration order, so the first key becomes the root.
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// A `Node` has a key and up to two children. Every key in its left subtree is smaller than its
/// own and every key in its right subtree is larger.
#[derive(Debug, Clone)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
    highlighted: bool,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            highlighted: false,
        }
    }

    /// This node's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether a search has visited this node since highlights were last reset.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);
        left.max(right) + 1
    }

    /// How many nodes are in the subtree rooted at this node, including itself.
    pub fn size(&self) -> usize {
        self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size) + 1
    }

    fn insert(slot: &mut Link<K>, key: K) -> bool
    where
        K: Ord,
    {
        match slot {
            None => {
                *slot = Some(Box::new(Self::new(key)));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert(&mut node.left, key),
                Ordering::Equal => false,
                Ordering::Greater => Self::insert(&mut node.right, key),
            },
        }
    }

    fn retrieve(&mut self, key: &K, visited: &mut usize) -> Option<&K>
    where
        K: Ord,
    {
        self.highlighted = true;
        *visited += 1;
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref_mut()?.retrieve(key, visited),
            Ordering::Equal => Some(&self.key),
            Ordering::Greater => self.right.as_deref_mut()?.retrieve(key, visited),
        }
    }

    /// Deletes the node with the given key from the subtree in `slot`, returning the deleted key.
    fn delete(slot: &mut Link<K>, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let node = slot.as_mut()?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::delete(&mut node.left, key),
            Ordering::Greater => Self::delete(&mut node.right, key),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                // The successor is in the right subtree and has no left child, so unlinking it is
                // one of the easy cases below.
                let successor = Self::take_leftmost(&mut node.right)?;
                let deleted = std::mem::replace(&mut node.key, successor);
                node.debug_assert_ordered();
                Some(deleted)
            }
            Ordering::Equal => {
                let child = node.left.take().or_else(|| node.right.take());
                std::mem::replace(slot, child).map(|deleted| deleted.key)
            }
        }
    }

    /// Unlinks the leftmost node of the subtree in `slot`, returning its key. Its right subtree
    /// takes its place.
    fn take_leftmost(slot: &mut Link<K>) -> Option<K> {
        let node = slot.as_mut()?;
        if node.left.is_some() {
            return Self::take_leftmost(&mut node.left);
        }
        let right = node.right.take();
        std::mem::replace(slot, right).map(|leftmost| leftmost.key)
    }

    fn reset_highlights(&mut self) {
        self.highlighted = false;
        if let Some(left) = self.left.as_deref_mut() {
            left.reset_highlights();
        }
        if let Some(right) = self.right.as_deref_mut() {
            right.reset_highlights();
        }
    }

    fn collect_highlighted(&self, keys: &mut Vec<K>)
    where
        K: Clone,
    {
        if self.highlighted {
            keys.push(self.key.clone());
        }
        if let Some(left) = self.left() {
            left.collect_highlighted(keys);
        }
        if let Some(right) = self.right() {
            right.collect_highlighted(keys);
        }
    }

    fn debug_assert_ordered(&self)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
    }
}
