//! Stack backed by a contiguous growable buffer.

use crate::error::{StackError, StackOp, StackResult};
use crate::{Stack, write_bottom_up};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::{FusedIterator, Rev};

/// Stack whose underlying storage is a `Vec`.
///
/// The top of the stack is the end of the buffer: pushing 1, 2, 3 stores
/// `[1, 2, 3]` with 3 on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayStack<T> {
    values: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Values the stack can hold before the buffer grows.
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Values in bottom-to-top order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the stack, returning values in bottom-to-top order.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn push(&mut self, value: T) {
        self.values.push(value);
    }

    fn pop(&mut self) -> StackResult<T> {
        self.values.pop().ok_or(StackError::empty(StackOp::Pop))
    }

    fn peek(&self) -> StackResult<&T> {
        self.values.last().ok_or(StackError::empty(StackOp::Peek))
    }

    fn peek_mut(&mut self) -> StackResult<&mut T> {
        self.values
            .last_mut()
            .ok_or(StackError::empty(StackOp::Peek))
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.values.iter().rev(),
        }
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T> From<Vec<T>> for ArrayStack<T> {
    /// The last element of `values` becomes the top.
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bottom_up(f, "ArrayStack", &self.values)
    }
}

/// Borrowing iterator over an [`ArrayStack`], top to bottom.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Rev<std::slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`ArrayStack`], top to bottom.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Rev<std::vec::IntoIter<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArrayStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.values.into_iter().rev(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
