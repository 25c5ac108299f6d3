use core::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::Node;

/// Borrowing iterator over a [`Queue`](super::Queue), head to tail.
///
/// The queue stays borrowed while the iterator lives, so it cannot be
/// mutated mid-walk.
pub struct Iter<'a, T> {
    head: Option<NonNull<Node<T>>>,
    len: usize,
    _phantom_data: PhantomData<&'a Node<T>>,
}

// SAFETY: behaves like `&'a T`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}

// SAFETY: behaves like `&'a T`.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            head,
            len,
            _phantom_data: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            len: self.len,
            _phantom_data: PhantomData,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.head.map(|node| {
            // SAFETY: the queue is borrowed for `'a`, so every node reachable
            // from the head stays live and unmodified.
            let node = unsafe { node.as_ref() };
            self.head = node.next;
            self.len -= 1;
            &node.item
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
