use heapless::Deque;

/// Fixed capacity FIFO that overwrites its oldest element when pushed while full.
///
/// Nothing pushed is ever rejected; instead, once `N` elements are waiting, each further push
/// silently evicts the element that would have been popped next. [RingBuffer::evicted] counts
/// how many elements have been lost that way.
pub struct RingBuffer<T, const N: usize> {
    queue: Deque<T, N>,
    evicted: u32,
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> RingBuffer<T, N> {
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
            evicted: 0,
        }
    }

    /// Append `value`. Returns the evicted oldest element when the buffer was already full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.queue.is_full() {
            self.evicted = self.evicted.wrapping_add(1);
            self.queue.pop_front()
        } else {
            None
        };
        // only fails when N == 0
        self.queue.push_back(value).ok();
        evicted
    }

    /// Remove the oldest element. `None` is the empty sentinel; an empty buffer is left untouched.
    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of elements lost to overflow since creation.
    pub fn evicted(&self) -> u32 {
        self.evicted
    }
}

#[cfg(test)]
#[path = "ring_buffer_test.rs"]
mod test;
