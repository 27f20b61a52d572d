use std::collections::VecDeque;

/// A first-in first-out buffer used for level-order walks of a tree.
#[derive(Debug)]
pub(crate) struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends `item` to the back of the queue.
    pub(crate) fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item, or `None` when the queue is empty.
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Like [`Queue::pop`] but leaves the item in place.
    #[cfg(test)]
    pub(crate) fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }
}
