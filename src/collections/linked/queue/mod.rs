pub mod into_iter;
pub mod iter;

use core::{fmt, marker::PhantomData, ptr::NonNull};

pub use into_iter::IntoIter;
pub use iter::Iter;

use crate::collections::ContainerCommon;

struct Node<T> {
    item: T,
    next: Option<NonNull<Node<T>>>,
}

/// A first-in-first-out queue over a singly linked chain of nodes.
///
/// Values are enqueued behind the tail and dequeued from the head. The queue
/// keeps a non-owning link to its tail node, so both ends are O(1).
///
/// ```
/// use sak_linked::collections::Queue;
///
/// let mut q = Queue::new();
/// q.enqueue(1);
/// q.enqueue(2);
/// assert_eq!(q.peek(), Some(&1));
/// assert_eq!(q.dequeue(), Some(1));
/// assert_eq!(q.dequeue(), Some(2));
/// assert_eq!(q.dequeue(), None);
/// ```
pub struct Queue<T> {
    first: Option<NonNull<Node<T>>>,
    last: Option<NonNull<Node<T>>>,
    len: usize,
    _phantom_data: PhantomData<Box<Node<T>>>,
}

// SAFETY: the queue uniquely owns every node reachable from `first`,
// same as a chain of `Box`es would.
unsafe impl<T: Send> Send for Queue<T> {}

// SAFETY: `&Queue<T>` only ever hands out `&T`.
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Queue<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            first: None,
            last: None,
            len: 0,
            _phantom_data: PhantomData,
        }
    }

    /// Number of values currently stored.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Appends `item` behind the current tail.
    pub fn enqueue(&mut self, item: T) {
        let node = Box::new(Node { item, next: None });
        let node = NonNull::from(Box::leak(node));
        match self.last {
            // SAFETY: `last` is a live node owned by `self`, and `&mut self`
            // guarantees no reference into the chain is alive.
            Some(mut last) => unsafe { last.as_mut() }.next = Some(node),
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.len += 1;
    }

    /// Removes the oldest value, or returns `None` when empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.pop_front_node().map(|node| node.item)
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: `first` stays live for as long as `self` is borrowed.
        self.first.map(|first| unsafe { &first.as_ref().item })
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `peek`, and `&mut self` makes the access unique.
        self.first.map(|mut first| unsafe { &mut first.as_mut().item })
    }

    /// Iterates from the oldest value to the newest.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first, self.len)
    }

    fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        self.first.map(|first| {
            // SAFETY: every node was leaked from a `Box` in `enqueue`, and
            // `first` is unlinked right below, so the box is rebuilt once.
            let node = unsafe { Box::from_raw(first.as_ptr()) };
            self.first = node.next;
            if self.first.is_none() {
                self.last = None;
            }
            self.len -= 1;
            node
        })
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        // Unlink node by node; a recursive drop would overflow on long chains.
        while self.pop_front_node().is_some() {}
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        let mut q = Self::new();
        for item in self {
            q.enqueue(item.clone());
        }
        q
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> ContainerCommon for Queue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn t_scenario() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
        assert!(q.is_empty());
    }

    /// The first enqueue into an empty queue counts like any other.
    #[test]
    fn t_len_after_first_enqueue() {
        let mut q = Queue::new();
        assert_eq!(q.len(), 0);
        q.enqueue(1);
        assert_eq!(q.len(), 1);
        q.enqueue(2);
        assert_eq!(q.len(), 2);
        q.dequeue();
        assert_eq!(q.len(), 1);
        q.dequeue();
        q.dequeue();
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn t_fifo() {
        let mut q = Queue::new();
        for i in 0..100 {
            q.enqueue(i);
        }
        assert_eq!(q.len(), 100);
        for i in 0..100 {
            assert_eq!(q.dequeue(), Some(i));
        }
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn t_iter() {
        let mut q = Queue::new();
        q.enqueue("a");
        q.enqueue("b");
        q.enqueue("c");
        let mut iter = q.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&"a"));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), [&"b", &"c"]);
        // a fresh iterator starts over from the head
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!((&q).into_iter().count(), 3);
        assert_eq!(Queue::<i32>::new().iter().next(), None);
    }

    #[test]
    fn t_iter_fused() {
        let mut q = Queue::new();
        q.enqueue(1);
        let mut iter = q.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn t_peek_is_pure() {
        let mut q = Queue::new();
        q.enqueue(7);
        q.enqueue(8);
        for _ in 0..5 {
            assert_eq!(q.peek(), Some(&7));
        }
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue(), Some(7));
        assert_eq!(q.dequeue(), Some(8));
    }

    #[test]
    fn t_peek_mut() {
        let mut q = Queue::new();
        assert_eq!(q.peek_mut(), None);
        q.enqueue(1);
        q.enqueue(2);
        if let Some(front) = q.peek_mut() {
            *front += 10;
        }
        assert_eq!(q.dequeue(), Some(11));
        assert_eq!(q.dequeue(), Some(2));
    }

    #[test]
    fn t_reuse_after_drain() {
        let mut q = Queue::new();
        q.enqueue(1);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.iter().collect::<Vec<_>>(), [&2, &3]);
        assert_eq!(q.dequeue(), Some(2));
        q.enqueue(4);
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), Some(4));
        assert!(q.is_empty());
    }

    #[test]
    fn t_drop() {
        let dropped = Rc::new(Cell::new(0));
        let mut q = Queue::new();
        for _ in 0..10 {
            q.enqueue(Tracked(dropped.clone()));
        }
        drop(q.dequeue());
        assert_eq!(dropped.get(), 1);
        drop(q);
        assert_eq!(dropped.get(), 10);
    }

    #[test]
    fn t_into_iter_drop() {
        let dropped = Rc::new(Cell::new(0));
        let mut q = Queue::new();
        for _ in 0..5 {
            q.enqueue(Tracked(dropped.clone()));
        }
        let mut iter = q.into_iter();
        assert_eq!(iter.len(), 5);
        drop(iter.next());
        assert_eq!(dropped.get(), 1);
        drop(iter);
        assert_eq!(dropped.get(), 5);
    }

    #[test]
    fn t_into_iter() {
        let mut q = Queue::new();
        for i in 0..4 {
            q.enqueue(i);
        }
        assert_eq!(q.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3]);
    }

    #[test]
    fn t_long_chain_drop() {
        let mut q = Queue::new();
        for i in 0..1_000_000 {
            q.enqueue(i);
        }
        drop(q);
    }

    #[test]
    fn t_clone_eq_debug() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        let mut c = q.clone();
        assert_eq!(q, c);
        assert_eq!(format!("{:?}", c), "[1, 2, 3]");
        c.dequeue();
        assert_ne!(q, c);
        c.enqueue(1);
        assert_ne!(q, c);
        println!("{:?} {:?}", q, c);
    }

    #[test]
    fn t_container_common() {
        fn probe(c: &impl ContainerCommon) -> (usize, bool) {
            (c.len(), c.is_empty())
        }
        let mut q = Queue::new();
        assert_eq!(probe(&q), (0, true));
        q.enqueue(());
        assert_eq!(probe(&q), (1, false));
    }

    #[test]
    fn t_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Queue<String>>();
        assert_send_sync::<Iter<'static, String>>();
        assert_send_sync::<IntoIter<String>>();
    }
}
