use crossbeam_queue::SegQueue;

use super::BackingStore;

impl<T> BackingStore<T> for SegQueue<T> {
    fn new() -> Self {
        SegQueue::new()
    }

    fn push(&self, item: T) {
        SegQueue::push(self, item)
    }

    fn try_pop(&self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        SegQueue::len(self)
    }

    fn is_empty(&self) -> bool {
        SegQueue::is_empty(self)
    }
}
