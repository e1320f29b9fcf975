use std::{iter::repeat_with, mem};

/// Fixed-capacity FIFO queue over a buffer allocated once.
///
/// Indices wrap around the end of the buffer. Slots outside the live range
/// always hold `T::default()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CircularQueue<T> {
    values: Vec<T>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T: Default> CircularQueue<T> {
    /// Creates a queue holding at most `capacity` values.
    ///
    /// A queue of zero capacity is always both empty and full.
    pub fn new(capacity: usize) -> Self {
        Self {
            values: repeat_with(T::default).take(capacity).collect(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Appends a value at the back, handing it back if the queue is full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        self.values[self.tail] = value;
        self.tail = (self.tail + 1) % self.capacity();
        self.count += 1;

        Ok(())
    }

    /// Removes the value at the front, leaving a default value in its slot.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = mem::take(&mut self.values[self.head]);

        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;

        Some(value)
    }
}

impl<T> CircularQueue<T> {
    /// Returns the oldest value.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.values[self.head])
        }
    }

    /// Returns the newest value.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.values[(self.tail + self.capacity() - 1) % self.capacity()])
        }
    }

    /// Returns a number of values in a queue.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns the maximum number of values a queue holds.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Returns true if a queue is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if a queue is full.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }
}
