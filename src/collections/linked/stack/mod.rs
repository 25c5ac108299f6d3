pub mod into_iter;
pub mod iter;

use core::fmt;

pub use into_iter::IntoIter;
pub use iter::Iter;

use crate::collections::ContainerCommon;

struct Node<T> {
    item: T,
    below: Option<Box<Node<T>>>,
}

/// A last-in-first-out stack over a singly linked chain of nodes.
///
/// The top node owns the node below it, down to the oldest value.
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Node { item, below }));
        self.len += 1;
    }

    /// Removes the most recently pushed value, or returns `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let Node { item, below } = *node;
            self.top = below;
            self.len -= 1;
            item
        })
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.item)
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_deref_mut().map(|node| &mut node.item)
    }

    /// Iterates from the top down, i.e. in reverse push order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.top.as_deref(), self.len)
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.below.take();
        }
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut stack = Self::new();
        let mut tail = &mut stack.top;
        for item in self {
            let node = tail.insert(Box::new(Node {
                item: item.clone(),
                below: None,
            }));
            tail = &mut node.below;
        }
        stack.len = self.len;
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> ContainerCommon for Stack<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
