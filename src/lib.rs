pub mod bounded_heap;

pub use bounded_heap::BoundedMinHeap;
pub use bounded_heap::Entry;
pub use bounded_heap::HeapError;
pub use bounded_heap::DEFAULT_CAPACITY;
