use std::collections::VecDeque;

/// FIFO queue of nodes waiting to be expanded.
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    queue: VecDeque<T>,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Frontier {
            queue: VecDeque::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    /// Panics when empty, check `is_empty` first.
    pub(crate) fn pop(&mut self) -> T {
        match self.queue.pop_front() {
            Some(item) => item,
            None => panic!("pop from an empty frontier"),
        }
    }
}
