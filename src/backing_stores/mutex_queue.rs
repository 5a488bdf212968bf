use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use super::BackingStore;

/// One lock around a `VecDeque`. Slower under contention than the lock-free
/// stores, but every operation is totally ordered.
pub struct MutexQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> MutexQueue<T> {
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        // push_back/pop_front never run user code mid-mutation, so a poisoned
        // deque is still consistent.
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> BackingStore<T> for MutexQueue<T> {
    fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    fn push(&self, item: T) {
        self.lock().push_back(item);
    }

    fn try_pop(&self) -> Option<T> {
        self.lock().pop_front()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
