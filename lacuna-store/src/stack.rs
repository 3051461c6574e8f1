#[derive(Debug, Default, PartialEq, Clone, Copy)]
enum Entry<T> {
    Occupied(T),
    #[default]
    Empty,
}

impl<T> Entry<T> {
    fn as_value(&self) -> Option<&T> {
        match self {
            Self::Occupied(val) => Some(val),
            Self::Empty => None,
        }
    }
}

/// Allocate memory but never free it until the entire `Stack` is dropped.
/// Items popped from the stack are marked as `Empty` so the memory is reused.
#[derive(Debug, Default)]
pub struct Stack<T> {
    inner: Vec<Entry<T>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub const fn empty() -> Self {
        Self {
            inner: Vec::new(),
            len: 0,
        }
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: T) {
        let entry = Entry::Occupied(value);
        if self.len < self.inner.len() {
            self.inner[self.len] = entry;
        } else {
            self.inner.push(entry);
        }
        self.len += 1;
    }

    /// Pop a value off the stack
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        match std::mem::take(&mut self.inner[self.len]) {
            Entry::Occupied(value) => Some(value),
            Entry::Empty => unreachable!("the length would be zero if there wasn't a value present"),
        }
    }

    /// Create an iterator over the values on the stack, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.inner[..self.len].iter().filter_map(Entry::as_value)
    }

    /// A draining iterator over the values on the stack, newest first.
    /// ```
    /// # use lacuna_store::stack::Stack;
    /// let mut stack = Stack::empty();
    /// stack.push(1);
    /// stack.push(2);
    ///
    /// assert_eq!(stack.drain().next(), Some(2));
    /// assert!(stack.is_empty());
    /// ```
    pub fn drain(&mut self) -> impl DoubleEndedIterator<Item = T> + '_ {
        let len = std::mem::take(&mut self.len);
        self.inner[..len]
            .iter_mut()
            .rev()
            .filter_map(|e| match std::mem::take(e) {
                Entry::Occupied(value) => Some(value),
                Entry::Empty => None,
            })
    }

    /// Move every value into another stack, keeping the order.
    pub fn drain_into(&mut self, local: &mut Stack<T>) {
        if self.is_empty() {
            return;
        }
        self.drain().rev().for_each(|value| local.push(value));
    }

    /// Clear the values from the stack
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.inner[..self.len].fill_with(|| Entry::Empty);
        self.len = 0;
    }

    /// The stack can hold allocated memory even if `is_empty` returns true.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let inner = iter.into_iter().map(Entry::Occupied).collect::<Vec<_>>();

        Self {
            len: inner.len(),
            inner,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn drain() {
        let mut stack = Stack::empty();
        stack.push(1);
        stack.push(2);

        let mut iter = stack.drain();
        assert_eq!(2, iter.next().unwrap());
        drop(iter);

        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn reuse_memory() {
        let mut stack = Stack::empty();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        stack.push(3);
        assert_eq!(stack.inner.len(), 2);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn drain_into_keeps_order() {
        let mut stack = [1, 2, 3].into_iter().collect::<Stack<_>>();
        let mut local = Stack::empty();
        local.push(0);
        stack.drain_into(&mut local);

        assert!(stack.is_empty());
        assert_eq!(local.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn clear() {
        let mut stack = [1, 2].into_iter().collect::<Stack<_>>();
        stack.clear();
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);
    }
}
