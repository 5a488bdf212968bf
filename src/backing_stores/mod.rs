//! Thread-safe stores a [`ConcurrentQueue`](crate::ConcurrentQueue) can delegate to.
//!
//! Every store here is linearizable per call. None of them promise an order
//! across producers, only that items pushed by one thread come out in that
//! thread's push order.
pub mod concurrent_queue;
pub mod countable_wrapper;
pub mod crossbeam_queue;
pub mod lockfree_queue;
pub mod mutex_queue;

pub use countable_wrapper::CountableWrapper;
pub use lockfree_queue::LockfreeQueue;
pub use mutex_queue::MutexQueue;

pub trait BackingStore<T> {
    /// Creates a new, empty, unbounded store
    fn new() -> Self;
    fn push(&self, item: T);
    fn try_pop(&self) -> Option<T>;
    /// Number of resident items. Only exact when nothing is in flight.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A store that can push and pop concurrently but cannot report its length.
///
/// Wrap it in a [`CountableWrapper`] to get a [`BackingStore`].
pub trait RawStore<T> {
    fn new() -> Self;
    fn push(&self, item: T);
    fn pop(&self) -> Option<T>;
}
