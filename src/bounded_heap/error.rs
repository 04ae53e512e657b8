use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeapError {
    #[error("Heap is empty.")]
    Empty,

    #[error("Heap is at capacity ({}).", capacity)]
    CapacityExceeded { capacity: usize },

    #[error("Heap capacity must be at least 1 (got {}).", capacity)]
    InvalidCapacity { capacity: usize },
}

impl HeapError {
    #[cold]
    pub fn empty() -> Self {
        HeapError::Empty
    }

    #[cold]
    pub fn capacity_exceeded(capacity: usize) -> Self {
        HeapError::CapacityExceeded { capacity }
    }

    #[cold]
    pub fn invalid_capacity(capacity: usize) -> Self {
        HeapError::InvalidCapacity { capacity }
    }
}
