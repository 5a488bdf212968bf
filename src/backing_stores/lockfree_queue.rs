use lockfree::queue::Queue;

use super::{CountableWrapper, RawStore};

/// `lockfree`'s queue has no length, so it is counted from the outside.
pub type LockfreeQueue<T> = CountableWrapper<Queue<T>>;

impl<T> RawStore<T> for Queue<T> {
    fn new() -> Self {
        Queue::new()
    }

    fn push(&self, item: T) {
        Queue::push(self, item)
    }

    fn pop(&self) -> Option<T> {
        Queue::pop(self)
    }
}
