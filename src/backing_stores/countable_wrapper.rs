use std::sync::atomic::{AtomicUsize, Ordering};

use super::{BackingStore, RawStore};

/// Gives a length to a [`RawStore`] by counting the items going through it.
pub struct CountableWrapper<S> {
    queue: S,
    enq_count: AtomicUsize,
    deq_count: AtomicUsize,
}

impl<S> CountableWrapper<S> {
    pub fn enq_count(&self) -> usize {
        self.enq_count.load(Ordering::SeqCst)
    }

    pub fn deq_count(&self) -> usize {
        self.deq_count.load(Ordering::SeqCst)
    }

    /// Never negative: deq_count is read first and can only trail enq_count.
    pub fn len(&self) -> usize {
        let dequeued = self.deq_count();
        self.enq_count().saturating_sub(dequeued)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S, T> BackingStore<T> for CountableWrapper<S>
where
    S: RawStore<T>,
{
    fn new() -> Self {
        Self {
            queue: S::new(),
            enq_count: 0.into(),
            deq_count: 0.into(),
        }
    }

    fn push(&self, item: T) {
        // Counted before the push so that deq_count can never overtake it
        self.enq_count.fetch_add(1, Ordering::SeqCst);
        self.queue.push(item)
    }

    fn try_pop(&self) -> Option<T> {
        let item = self.queue.pop()?;
        self.deq_count.fetch_add(1, Ordering::SeqCst);
        Some(item)
    }

    fn len(&self) -> usize {
        CountableWrapper::len(self)
    }

    fn is_empty(&self) -> bool {
        CountableWrapper::is_empty(self)
    }
}
