//! Generic LIFO stacks.
//!
//! Two implementations share the [`Stack`] interface:
//! - [`ArrayStack`]: contiguous growable buffer, top at the end.
//! - [`LinkedStack`]: singly linked nodes, top at the head.
//!
//! Both iterate from top to bottom, render bottom to top
//! (`ArrayStack([1, 2, 3])` has 3 on top) and serialize as a bottom-to-top
//! sequence. Neither implements `Hash`: stacks are mutable containers.

mod array;
mod error;
mod linked;

pub use array::{ArrayStack, IntoIter as ArrayIntoIter, Iter as ArrayIter};
pub use error::{StackError, StackOp, StackResult};
pub use linked::{IntoIter as LinkedIntoIter, Iter as LinkedIter, LinkedStack};

/// Stack interface with LIFO/FILO semantics.
pub trait Stack<T> {
    /// Borrowing iterator, top to bottom.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Number of values on the stack.
    fn len(&self) -> usize;

    /// Alias of [`len`](Stack::len).
    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a value to the top of the stack.
    fn push(&mut self, value: T);

    /// Remove and return the value at the top of the stack.
    fn pop(&mut self) -> StackResult<T>;

    /// Return the value at the top of the stack without removing it.
    fn peek(&self) -> StackResult<&T>;

    /// Mutable access to the value at the top of the stack.
    fn peek_mut(&mut self) -> StackResult<&mut T>;

    /// Iterate from top to bottom.
    fn iter(&self) -> Self::Iter<'_>;

    /// Remove every value.
    fn clear(&mut self);
}

/// Writes `Name([a, b, c])` with values given bottom to top.
pub(crate) fn write_bottom_up<'a, T, I>(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    values: I,
) -> std::fmt::Result
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "{name}([")?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("])")
}
