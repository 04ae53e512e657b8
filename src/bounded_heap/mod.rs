mod error;
mod min_heap;

pub use error::HeapError;

pub use min_heap::BoundedMinHeap;
pub use min_heap::Entry;
pub use min_heap::DEFAULT_CAPACITY;
