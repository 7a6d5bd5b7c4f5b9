use crate::bits::Bit;
use std::collections::VecDeque;

/// Bounded FIFO of the most recent bits
///
/// Appends go to the back; once `capacity` is exceeded the oldest bits are
/// evicted from the front. Length never exceeds capacity.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    bits: VecDeque<Bit>,
    capacity: usize,
}

impl SlidingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `chunk`, keeping only the most recent `capacity` bits
    pub fn extend(&mut self, chunk: &[Bit]) {
        // Bits older than the last `capacity` of the chunk would be evicted anyway
        let tail = &chunk[chunk.len().saturating_sub(self.capacity)..];

        let overflow = (self.bits.len() + tail.len()).saturating_sub(self.capacity);
        self.bits.drain(..overflow);
        self.bits.extend(tail.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bits.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Contiguous view of the window, oldest bit first
    pub fn as_slice(&mut self) -> &[Bit] {
        self.bits.make_contiguous()
    }

    pub fn to_vec(&self) -> Vec<Bit> {
        self.bits.iter().copied().collect()
    }
}
