//! Error types for stack operations.

use std::fmt;
use thiserror::Error;

/// The operation that was attempted on an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOp {
    Pop,
    Peek,
}

impl StackOp {
    pub fn as_str(self) -> &'static str {
        match self {
            StackOp::Pop => "pop",
            StackOp::Peek => "peek",
        }
    }
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`Stack`](crate::Stack) operations.
///
/// A failed operation never modifies the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was called while the stack held no values.
    #[error("{op} from an empty stack")]
    Empty { op: StackOp },
}

impl StackError {
    pub(crate) const fn empty(op: StackOp) -> Self {
        StackError::Empty { op }
    }

    /// The operation that failed.
    pub fn op(&self) -> StackOp {
        match self {
            StackError::Empty { op } => *op,
        }
    }
}

/// Result type alias using StackError.
pub type StackResult<T> = Result<T, StackError>;
