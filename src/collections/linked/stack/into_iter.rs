use core::{fmt, iter::FusedIterator};

use super::Stack;

/// Owning iterator over a [`Stack`], popping from the top.
#[derive(Clone)]
pub struct IntoIter<T> {
    inner: Stack<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(inner: Stack<T>) -> Self {
        IntoIter { inner }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
