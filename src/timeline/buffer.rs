use std::collections::VecDeque;

/// Fixed-capacity FIFO feeding the visible transcript. Pushing past capacity
/// evicts the oldest item, which is what keeps looping playback from growing
/// the DOM without bound.
#[derive(Clone, Debug)]
pub struct BoundedBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be at least 1");
        BoundedBuffer {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut buf = BoundedBuffer::new(4);
        for n in 1..=3 {
            buf.push(n);
        }
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn evicts_oldest_first_at_capacity() {
        let mut buf = BoundedBuffer::new(3);
        for n in 1..=4 {
            buf.push(n);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn clear_empties_without_touching_capacity() {
        let mut buf = BoundedBuffer::new(2);
        buf.push("a");
        buf.push("b");
        buf.clear();
        assert!(buf.is_empty());
        buf.push("c");
        buf.push("d");
        buf.push("e");
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec!["d", "e"]);
    }
}
