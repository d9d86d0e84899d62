//! Snapshot traversals. A [`Traversal`] copies every key of the tree into a queue when it is
//! created and then hands them out one at a time, so changing the tree afterwards doesn't affect
//! it. Start a new traversal to see the changes.
//!
//! # Examples
//!
//! ```
//! use visual_bst::{Order, Tree};
//!
//! let mut tree: Tree<i32> = vec![2, 1, 3].into_iter().collect();
//! let mut traversal = tree.traverse(Order::Pre);
//!
//! tree.insert(4);
//!
//! assert_eq!(traversal.next(), Some(2));
//! assert_eq!(traversal.to_string(), "1 3");
//! assert_eq!(tree.keys(Order::Pre), vec![2, 1, 3, 4]);
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::error::TreeError;
use crate::tree::{Node, Tree};

/// The order a [`Traversal`] visits nodes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This yields keys in ascending
    /// order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pre => "pre-order",
            Self::In => "in-order",
            Self::Post => "post-order",
        })
    }
}

/// The keys of a tree, captured in some [`Order`], waiting to be consumed.
#[derive(Debug, Clone)]
pub struct Traversal<K> {
    order: Order,
    queue: VecDeque<K>,
}

impl<K> Traversal<K> {
    /// Copies the keys of `tree` in the given order.
    pub fn new(tree: &Tree<K>, order: Order) -> Self
    where
        K: Clone,
    {
        let mut queue = VecDeque::new();
        if let Ok(root) = tree.root() {
            visit(root, order, &mut queue);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(%order, keys = queue.len(), "traversal");

        Self { order, queue }
    }

    /// The order the keys were captured in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Whether there are keys left.
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Takes the next key.
    ///
    /// # Errors
    ///
    /// [`TreeError::IteratorExhausted`] if every key has been taken. Use the [`Iterator`] impl to
    /// get `None` instead.
    pub fn try_next(&mut self) -> Result<K, TreeError<K>> {
        self.queue.pop_front().ok_or(TreeError::IteratorExhausted)
    }

    /// Traversals can't change the tree they came from, so this always fails.
    ///
    /// # Errors
    ///
    /// Always [`TreeError::UnsupportedRemoval`].
    pub fn remove(&mut self) -> Result<(), TreeError<K>> {
        Err(TreeError::UnsupportedRemoval)
    }
}

fn visit<K>(node: &Node<K>, order: Order, queue: &mut VecDeque<K>)
where
    K: Clone,
{
    if order == Order::Pre {
        queue.push_back(node.key().clone());
    }
    if let Some(left) = node.left() {
        visit(left, order, queue);
    }
    if order == Order::In {
        queue.push_back(node.key().clone());
    }
    if let Some(right) = node.right() {
        visit(right, order, queue);
    }
    if order == Order::Post {
        queue.push_back(node.key().clone());
    }
}

impl<K> Iterator for Traversal<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<K> ExactSizeIterator for Traversal<K> {}

/// Prints the remaining keys separated by spaces.
impl<K> fmt::Display for Traversal<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.queue.iter();
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}
