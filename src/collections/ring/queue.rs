use std::fmt::{self, Debug, Formatter};

use super::{DEFAULT_CAP, GrowableBuffer};
use crate::util::error::EmptyContainer;

/// A FIFO queue over a [`GrowableBuffer`], with independent front and back cursors that advance
/// modulo the capacity.
///
/// Values are dequeued in strict enqueue order. When a growth event fires with the layout
/// wrapped around the end of the storage, the elements are re-packed front-first into the start
/// of the doubled storage, so the ordering guarantee holds across growth.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `front` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `len` | `O(1)` |
///
/// \* If the Queue is at capacity, `enqueue` doubles the backing storage and takes `O(n)`.
pub struct Queue<T> {
    buf: GrowableBuffer<T>,
    front: usize,
    back: usize,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates a new Queue with the default capacity of 5.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::ring::Queue;
    /// let queue: Queue<u8> = Queue::new();
    /// assert_eq!(queue.cap(), 5);
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Queue<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates a new Queue with capacity exactly equal to the provided value.
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            buf: GrowableBuffer::with_cap(cap),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Returns the number of values in the Queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Queue contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the backing storage.
    pub fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Appends the provided value at the back of the Queue, doubling the capacity first if the
    /// Queue is full.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::ring::Queue;
    /// let mut queue = Queue::new();
    /// for i in 0..6 {
    ///     queue.enqueue(i);
    /// }
    /// assert_eq!(queue.cap(), 10);
    /// assert_eq!(queue.dequeue(), Some(0));
    /// ```
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.buf.cap() {
            let (front, len, cap) = (self.front, self.len, self.buf.cap());
            // SAFETY: The len slots starting at front (wrapping modulo cap) hold the live values
            // in dequeue order; re-packing them linearly resets the ring to start at 0.
            unsafe {
                self.buf.grow_from((0..len).map(|offset| (front + offset) % cap));
            }
            self.front = 0;
            self.back = len;
        }
        self.buf.write(self.back, value);
        self.back = (self.back + 1) % self.buf.cap();
        self.len += 1;
    }

    /// Removes and returns the value at the front of the Queue, or [`None`] if the Queue is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::ring::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        match self.len.checked_sub(1) {
            Some(new_len) => {
                // SAFETY: The slot at front holds the oldest live value, and the front cursor
                // moves past it, so it will not be read or dropped again.
                let value = unsafe { self.buf.read(self.front) };
                self.front = (self.front + 1) % self.buf.cap();
                self.len = new_len;
                Some(value)
            },
            None => None,
        }
    }

    /// A variant of [`Queue::dequeue`] which returns a typed error on an empty Queue.
    pub fn checked_dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.dequeue().ok_or(EmptyContainer)
    }

    /// A variant of [`Queue::dequeue`] which yields the default value on an empty Queue, for
    /// callers relying on the classic unchecked contract.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::ring::Queue;
    /// let mut queue: Queue<u8> = Queue::new();
    /// assert_eq!(queue.dequeue_or_default(), 0);
    /// ```
    pub fn dequeue_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.dequeue().unwrap_or_default()
    }

    /// Borrows the value at the front of the Queue without removing it, or [`None`] if the Queue
    /// is empty.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: A non-empty Queue has a live value at the front cursor.
            Some(unsafe { self.buf.get(self.front) })
        }
    }

    /// Removes every value, resetting the front and back cursors to 0. The backing storage is
    /// retained at its current capacity.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::ring::Queue;
    /// let mut queue = Queue::new();
    /// for i in 0..4 {
    ///     queue.enqueue(i);
    /// }
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.cap(), 5);
    /// ```
    pub fn clear(&mut self) {
        let cap = self.buf.cap();
        for offset in 0..self.len {
            // SAFETY: The len slots starting at front (wrapping modulo cap) hold the live values,
            // each dropped exactly once here.
            unsafe { self.buf.drop_slot((self.front + offset) % cap) };
        }
        self.front = 0;
        self.back = 0;
        self.len = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|offset| {
                // SAFETY: The len slots starting at front (wrapping modulo capacity) are live.
                unsafe { self.buf.get((self.front + offset) % self.buf.cap()) }
            }))
            .finish()
    }
}
