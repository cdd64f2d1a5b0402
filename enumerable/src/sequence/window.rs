/// A fixed capacity circular buffer that retains the most recent elements
/// pushed into it.
///
/// Storage grows up to `capacity` and is then overwritten in place, starting
/// with the oldest element.
#[derive(Debug)]
pub(crate) struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    cursor: usize,
}

impl<T> RingBuffer<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "a ring buffer needs room for one element");
        Self {
            slots: Vec::new(),
            capacity,
            cursor: 0,
        }
    }

    /// Write `item` at the cursor. Once the buffer is full this evicts the
    /// oldest element, which is returned.
    pub(crate) fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.slots.len() < self.capacity {
            self.slots.push(item);
            None
        } else {
            Some(std::mem::replace(&mut self.slots[self.cursor], item))
        };
        self.cursor = (self.cursor + 1) % self.capacity;
        evicted
    }

    // (cursor - len + capacity) mod capacity, arranged so it cannot overflow:
    // while the buffer fills up the cursor equals the length.
    fn start(&self) -> usize {
        (self.cursor + (self.capacity - self.slots.len())) % self.capacity
    }

    /// Feed the retained elements to `visitor`, oldest first, until it
    /// returns `false`.
    pub(crate) fn replay(self, visitor: &mut dyn FnMut(T) -> bool) -> bool {
        let start = self.start();
        let mut slots = self.slots;
        slots.rotate_left(start);
        slots.into_iter().all(|item| visitor(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replayed<T>(buffer: RingBuffer<T>) -> Vec<T> {
        let mut out = Vec::new();
        buffer.replay(&mut |item| {
            out.push(item);
            true
        });
        out
    }

    #[test]
    fn test_partially_filled() {
        let mut buffer = RingBuffer::new(5);
        for i in 0..3 {
            assert_eq!(buffer.push(i), None);
        }
        assert_eq!(buffer.slots.len(), 3);
        assert_eq!(replayed(buffer), vec![0, 1, 2]);
    }

    #[test]
    fn test_exactly_full() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..3 {
            buffer.push(i);
        }
        assert_eq!(replayed(buffer), vec![0, 1, 2]);
    }

    #[test]
    fn test_wraparound() {
        let mut buffer = RingBuffer::new(5);
        for i in 0..100 {
            buffer.push(i);
        }
        assert_eq!(buffer.slots.len(), 5);
        assert_eq!(replayed(buffer), vec![95, 96, 97, 98, 99]);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut buffer = RingBuffer::new(2);
        assert_eq!(buffer.push('a'), None);
        assert_eq!(buffer.push('b'), None);
        assert_eq!(buffer.push('c'), Some('a'));
        assert_eq!(buffer.push('d'), Some('b'));
        assert_eq!(replayed(buffer), vec!['c', 'd']);
    }

    #[test]
    fn test_replay_stops_early() {
        let mut buffer = RingBuffer::new(4);
        for i in 0..10 {
            buffer.push(i);
        }
        let mut out = Vec::new();
        let completed = buffer.replay(&mut |item| {
            out.push(item);
            out.len() < 2
        });
        assert!(!completed);
        assert_eq!(out, vec![6, 7]);
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut buffer = RingBuffer::new(usize::MAX);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(replayed(buffer), vec![1, 2]);
    }
}
