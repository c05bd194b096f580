//! A LIFO stack over an owned chain of nodes.

use core::fmt;
use core::iter::FusedIterator;

use alloc::boxed::Box;

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A last-in, first-out stack.
///
/// All access happens at the top: [`push`](Self::push), [`pop`](Self::pop)
/// and [`peek`](Self::peek) are O(1), and there is no search, no positional
/// access and no ordering function.
///
/// # Examples
///
/// ```
/// use catena::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.peek(), Ok(&1));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// An empty stack.
    pub const fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    /// Number of values on the stack. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes `value` onto the top. O(1).
    pub fn push(&mut self, value: T) {
        self.top = Some(Box::new(Node {
            value,
            next: self.top.take(),
        }));
        self.len += 1;
    }

    /// Removes and returns the top value. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the stack holds no values.
    pub fn pop(&mut self) -> Result<T> {
        let mut top = self.top.take().ok_or(Error::Empty)?;
        self.top = top.next.take();
        self.len -= 1;
        Ok(top.value)
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the stack holds no values.
    pub fn peek(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.value)
            .ok_or(Error::Empty)
    }

    /// Discards every value.
    pub fn clear(&mut self) {
        self.len = 0;
        // Unlink iteratively; dropping the owned chain recursively could
        // overflow the stack on a long chain.
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }

    /// Iterates the values top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A borrowing iterator over a [`Stack`], top to bottom.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
