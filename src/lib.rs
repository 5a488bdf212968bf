//! A thread-safe, unbounded FIFO queue whose backing store can be swapped
//! without touching the code that uses it.
//!
//! ```
//! use concurrent_fifo::ConcurrentQueue;
//!
//! let queue: ConcurrentQueue<i32> = ConcurrentQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.approximate_size(), 1);
//! ```
pub mod backing_stores;
mod queue;

pub use backing_stores::{BackingStore, RawStore};
pub use queue::ConcurrentQueue;
