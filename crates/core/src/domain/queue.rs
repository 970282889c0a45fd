// Queue Domain Model
// Thread-safe FIFO backed by a slot arena: nodes are owned by the arena and
// linked by index, so each node is reachable only from its predecessor or head.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One link in the chain. Never leaves the queue.
struct QueueNode<T> {
    item: T,
    next: Option<usize>,
}

/// Lock-protected state: head, tail and count always change together.
struct Chain<T> {
    slots: Vec<Option<QueueNode<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    count: usize,
}

impl<T> Chain<T> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            count: 0,
        }
    }

    fn push_back(&mut self, item: T) {
        let node = QueueNode { item, next: None };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.slots[tail].as_mut()) {
            Some(last) => last.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.count += 1;
    }

    fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        let node = self.slots[idx].take()?;

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
            // Chain is empty: drop the arena bookkeeping, keep the capacity
            self.slots.clear();
            self.free.clear();
        } else {
            self.free.push(idx);
        }
        self.count -= 1;

        Some(node.item)
    }

    fn front(&self) -> Option<&T> {
        self.head
            .and_then(|idx| self.slots[idx].as_ref())
            .map(|node| &node.item)
    }
}

/// Concurrency-safe FIFO queue.
///
/// Every operation holds a single lock for its whole body, so callers on
/// different threads are serialized and never see a half-linked chain.
/// `poll` and `peek` never wait for data: an empty queue yields `None`.
///
/// # Example
/// ```
/// use linesift_core::domain::Queue;
///
/// let queue = Queue::new();
/// queue.push("first");
/// queue.push("second");
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.poll(), Some("first"));
/// assert_eq!(queue.peek(), Some("second"));
/// ```
pub struct Queue<T> {
    chain: Mutex<Chain<T>>,
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            chain: Mutex::new(Chain::new()),
        }
    }

    // No operation panics while holding the lock, so a poisoned guard still
    // protects a consistent chain.
    fn lock(&self) -> MutexGuard<'_, Chain<T>> {
        self.chain.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of items currently queued
    pub fn len(&self) -> usize {
        self.lock().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an item at the tail. Always succeeds.
    pub fn push(&self, item: T) {
        self.lock().push_back(item);
    }

    /// Remove and return the oldest item, or `None` if the queue is empty.
    pub fn poll(&self) -> Option<T> {
        self.lock().pop_front()
    }

    /// Inspect the oldest item in place without removing it.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.lock().front().map(f)
    }
}

impl<T: Clone> Queue<T> {
    /// Clone of the oldest item, or `None` if the queue is empty.
    pub fn peek(&self) -> Option<T> {
        self.peek_with(T::clone)
    }
}

impl<T: Clone> Queue<Option<T>> {
    /// Like `peek`, but a head holding `None` also reads as empty.
    pub fn peek_value(&self) -> Option<T> {
        self.peek().flatten()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("len", &self.len()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let chain = self.chain.get_mut().unwrap_or_else(PoisonError::into_inner);
        for item in iter {
            chain.push_back(item);
        }
    }
}
