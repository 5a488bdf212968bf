use std::{fmt, marker::PhantomData};

use crossbeam_queue::SegQueue;

use crate::BackingStore;

/// Unbounded multi-producer multi-consumer queue.
///
/// Items from a single producer are dequeued in the order that producer
/// enqueued them. Across producers there is no order, unless the caller
/// serializes the calls, in which case the queue is strictly FIFO.
///
/// `B` is the store doing the actual synchronization. It is fixed at compile
/// time, so swapping it costs nothing at the call sites.
pub struct ConcurrentQueue<T, B = SegQueue<T>> {
    backing: B,
    // B owns the items, this only ties T to the type without
    // making Send/Sync depend on it.
    _phantom_data: PhantomData<fn() -> T>,
}

impl<T, B: BackingStore<T>> ConcurrentQueue<T, B> {
    pub fn new() -> Self {
        Self::with_backing(B::new())
    }

    /// Wraps an existing store. Items already in it stay queued.
    pub fn with_backing(backing: B) -> Self {
        Self {
            backing,
            _phantom_data: PhantomData,
        }
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    /// Whether the queue held no items when sampled.
    ///
    /// This is a hint: another thread may change the answer before the caller
    /// acts on it. A `false` here does not mean the next [`dequeue`] succeeds.
    ///
    /// [`dequeue`]: Self::dequeue
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Moves `item` to the tail of the queue.
    ///
    /// The item is visible to every consumer once this returns.
    pub fn enqueue(&self, item: T) {
        self.backing.push(item)
    }

    /// Takes the item at the head of the queue, if there is one.
    ///
    /// Never waits. `None` only means nothing was available right now, poll
    /// again later.
    pub fn dequeue(&self) -> Option<T> {
        self.backing.try_pop()
    }

    /// Moves the head of the queue into `dest` and returns `true`, or
    /// returns `false` and leaves `dest` as it was.
    pub fn dequeue_into(&self, dest: &mut T) -> bool {
        match self.dequeue() {
            Some(item) => {
                *dest = item;
                true
            }
            None => false,
        }
    }

    /// Number of queued items, exact only when no enqueue or dequeue is in
    /// flight. Meant for monitoring.
    pub fn approximate_size(&self) -> usize {
        self.backing.len()
    }
}

impl<T, B: BackingStore<T>> Default for ConcurrentQueue<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: BackingStore<T>> Extend<T> for ConcurrentQueue<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T, B: BackingStore<T>> FromIterator<T> for ConcurrentQueue<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, B: BackingStore<T>> fmt::Debug for ConcurrentQueue<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentQueue")
            .field("approximate_size", &self.approximate_size())
            .finish_non_exhaustive()
    }
}
