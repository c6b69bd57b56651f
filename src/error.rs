use std::fmt;

/// Errors reported by queue and heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// A negative priority was given to an operation that validates priorities
    InvalidPriority,
    /// The operation needs at least one element
    EmptyCollection,
    /// No stored element is equal to the one asked for
    NotFound,
    /// An index-level accessor was called past the end of the heap
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::InvalidPriority => write!(f, "priority must be non-negative"),
            QueueError::EmptyCollection => write!(f, "queue is empty"),
            QueueError::NotFound => write!(f, "element not found in queue"),
            QueueError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for heap of size {}", index, len)
            }
        }
    }
}

impl std::error::Error for QueueError {}

pub type QueueResult<T> = Result<T, QueueError>;
