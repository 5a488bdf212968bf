use concurrent_queue::ConcurrentQueue;

use super::BackingStore;

/// Always created unbounded and never closed, so pushes cannot fail.
impl<T> BackingStore<T> for ConcurrentQueue<T> {
    fn new() -> Self {
        ConcurrentQueue::unbounded()
    }

    fn push(&self, item: T) {
        let _ = ConcurrentQueue::push(self, item);
    }

    fn try_pop(&self) -> Option<T> {
        self.pop().ok()
    }

    fn len(&self) -> usize {
        ConcurrentQueue::len(self)
    }

    fn is_empty(&self) -> bool {
        ConcurrentQueue::is_empty(self)
    }
}
