//! A FIFO queue over an owned chain of nodes.

use core::fmt;
use core::iter::FusedIterator;
use core::ptr::NonNull;

use alloc::boxed::Box;

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A first-in, first-out queue.
///
/// Values enter at the back and leave at the front, both in O(1). The queue
/// owns its nodes through the chain hanging off `first` and keeps a
/// non-owning cursor to the last node so appending never walks the chain.
/// There is no search, no positional access and no ordering function.
///
/// # Examples
///
/// ```
/// use catena::queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.peek(), Ok(&"b"));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct Queue<T> {
    first: Option<Box<Node<T>>>,
    last: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T> Queue<T> {
    /// An empty queue.
    pub const fn new() -> Self {
        Queue {
            first: None,
            last: None,
            len: 0,
        }
    }

    /// Number of values in the queue. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the back. O(1) through the tail cursor.
    pub fn enqueue(&mut self, value: T) {
        let mut node = Box::new(Node { value, next: None });
        let raw = NonNull::from(&mut *node);
        match self.last {
            Some(mut last) => {
                // Safety: the tail cursor points at the node owned by the
                // final forward link of the chain, and `&mut self` keeps it
                // unaliased.
                let tail = unsafe { last.as_mut() };
                tail.next = Some(node);
            }
            None => self.first = Some(node),
        }
        self.last = Some(raw);
        self.len += 1;
    }

    /// Removes and returns the front value. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue holds no values.
    pub fn dequeue(&mut self) -> Result<T> {
        let mut first = self.first.take().ok_or(Error::Empty)?;
        self.first = first.next.take();
        if self.first.is_none() {
            self.last = None;
        }
        self.len -= 1;
        Ok(first.value)
    }

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue holds no values.
    pub fn peek(&self) -> Result<&T> {
        self.first
            .as_deref()
            .map(|node| &node.value)
            .ok_or(Error::Empty)
    }

    /// Discards every value.
    pub fn clear(&mut self) {
        self.len = 0;
        self.last = None;
        // Unlink iteratively; dropping the owned chain recursively could
        // overflow the stack on a long chain.
        let mut cursor = self.first.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }

    /// Iterates the values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first.as_deref(),
        }
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

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// The tail cursor only ever aliases the node owned by the last forward
// link, so the queue moves and shares exactly as its element type allows.
unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

/// A borrowing iterator over a [`Queue`], front to back.
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
