use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use alloc::boxed::Box;

use super::Comparator;
use super::raw::RawLink;
use crate::error::{Error, Result};

type OwnedLink<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: OwnedLink<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { value, next: None }
    }

    /// Unlinks and returns this node's successor, joining this node to the
    /// node after it.
    fn detach_next(&mut self) -> Option<Box<Node<T>>> {
        let mut detached = self.next.take()?;
        self.next = detached.next.take();
        Some(detached)
    }
}

/// A singly linked list with a caller-supplied comparator.
///
/// The operations and error behavior match [`DoublyLinkedList`] exactly;
/// the difference is in the costs. Nodes carry a forward link only, so
/// removing at or near the tail must walk the list: [`pop_back`] is O(n)
/// here against O(1) on the doubly linked variant, and iteration is
/// forward-only.
///
/// [`DoublyLinkedList`]: super::DoublyLinkedList
/// [`pop_back`]: Self::pop_back
///
/// # Examples
///
/// ```
/// use catena::linked_list::ordered::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::with_natural_order();
///
/// list.push_back("b")?;
/// list.push_back("c")?;
/// list.push_front("a")?;
///
/// assert_eq!(list.pop_back()?, "c");
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// # Ok::<(), catena::error::Error>(())
/// ```
pub struct SinglyLinkedList<T> {
    head: OwnedLink<T>,
    tail: RawLink<Node<T>>,
    len: usize,
    cmp: Option<Comparator<T>>,
}

impl<T> SinglyLinkedList<T> {
    /// An empty list that will compare values with `cmp`.
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        SinglyLinkedList {
            head: None,
            tail: RawLink::none(),
            len: 0,
            cmp: Some(Box::new(cmp)),
        }
    }

    /// An empty list that compares values through their [`Ord`] instance.
    pub fn with_natural_order() -> Self
    where
        T: Ord + 'static,
    {
        Self::new(T::cmp)
    }

    /// Number of elements in the list. O(1).
    pub fn len(&self) -> Result<usize> {
        self.ensure_configured()?;
        Ok(self.len)
    }

    /// Inserts `value` before the head. O(1).
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.ensure_configured()?;
        self.push_front_inner(value);
        Ok(())
    }

    /// Appends `value` after the tail. O(1) through the tail cursor.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.ensure_configured()?;
        self.push_back_inner(value);
        Ok(())
    }

    /// Removes and returns the head value. O(1).
    pub fn pop_front(&mut self) -> Result<T> {
        self.ensure_configured()?;
        self.pop_front_inner().ok_or(Error::Empty)
    }

    /// Removes and returns the tail value.
    ///
    /// With no back links the new tail has to be found by walking from the
    /// head, so this is O(n).
    pub fn pop_back(&mut self) -> Result<T> {
        self.ensure_configured()?;
        self.pop_back_inner().ok_or(Error::Empty)
    }

    /// Same contract as [`DoublyLinkedList::insert_at`].
    ///
    /// [`DoublyLinkedList::insert_at`]: super::DoublyLinkedList::insert_at
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.ensure_configured()?;
        if index == 0 {
            self.push_front_inner(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back_inner(value);
            return Ok(());
        }
        let len = self.len;
        match self.node_at_mut(index - 1) {
            Some(prev) => {
                let mut node = Box::new(Node::new(value));
                node.next = prev.next.take();
                prev.next = Some(node);
                self.len += 1;
                Ok(())
            }
            None => Err(Error::OutOfBounds { index, len }),
        }
    }

    /// Same contract as [`DoublyLinkedList::remove_at`]; removing the tail
    /// costs O(n) here.
    ///
    /// [`DoublyLinkedList::remove_at`]: super::DoublyLinkedList::remove_at
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.ensure_configured()?;
        if self.len == 0 {
            return Err(Error::Empty);
        }
        if index == 0 {
            return self.pop_front_inner().ok_or(Error::Empty);
        }
        if index == self.len - 1 {
            return self.pop_back_inner().ok_or(Error::Empty);
        }
        let len = self.len;
        match self.node_at_mut(index - 1).and_then(Node::detach_next) {
            Some(node) => {
                self.len -= 1;
                Ok(node.value)
            }
            None => Err(Error::OutOfBounds { index, len }),
        }
    }

    /// Position of the first element matching `value` under the list's
    /// comparator, or `None` when nothing matches. O(n).
    pub fn index_of(&self, value: &T) -> Result<Option<usize>> {
        let cmp = self.comparator()?;
        let mut cursor = self.head.as_deref();
        let mut index = 0;
        while let Some(node) = cursor {
            if cmp(value, &node.value) == Ordering::Equal {
                return Ok(Some(index));
            }
            cursor = node.next.as_deref();
            index += 1;
        }
        Ok(None)
    }

    /// Removes the first element matching `value` under the list's
    /// comparator. Returns whether an element was removed.
    pub fn remove_value(&mut self, value: &T) -> Result<bool> {
        match self.index_of(value)? {
            Some(index) => {
                self.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reverses the list in place by pointing each forward link at the
    /// node's predecessor. O(n), a no-op below two elements.
    pub fn reverse(&mut self) -> Result<()> {
        self.ensure_configured()?;
        if self.len <= 1 {
            return Ok(());
        }
        let mut reversed: OwnedLink<T> = None;
        let mut rest = self.head.take();
        self.tail = RawLink::none();
        while let Some(mut node) = rest {
            rest = node.next.take();
            if self.tail.is_none() {
                // The first node moved over is the old head, the new tail.
                self.tail = RawLink::some(&mut *node);
            }
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        Ok(())
    }

    /// Iterates the values front to back. Iteration never consults the
    /// comparator, so an unconfigured list simply yields nothing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.cmp.is_some() {
            Ok(())
        } else {
            Err(Error::Uninitialized)
        }
    }

    fn comparator(&self) -> Result<&Comparator<T>> {
        self.cmp.as_ref().ok_or(Error::Uninitialized)
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor
    }

    fn push_front_inner(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        match self.head.take() {
            Some(head) => node.next = Some(head),
            None => self.tail = RawLink::some(&mut *node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    fn push_back_inner(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        let mut old_tail = mem::replace(&mut self.tail, RawLink::some(&mut *node));
        // Safety: a set tail link points at the node owned by the last
        // forward link of this chain, and `&mut self` keeps it unaliased.
        match unsafe { old_tail.as_mut() } {
            Some(tail) => tail.next = Some(node),
            None => self.head = Some(node),
        }
        self.len += 1;
    }

    fn pop_front_inner(&mut self) -> Option<T> {
        let mut head = self.head.take()?;
        match head.next.take() {
            Some(next) => self.head = Some(next),
            None => self.tail = RawLink::none(),
        }
        self.len -= 1;
        Some(head.value)
    }

    fn pop_back_inner(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        if self.len == 1 {
            let node = self.head.take()?;
            self.tail = RawLink::none();
            self.len = 0;
            return Some(node.value);
        }
        // Walk to the node before the tail; it becomes the new tail.
        let prev = self.node_at_mut(self.len - 2)?;
        let node = prev.next.take()?;
        let tail = RawLink::some(prev);
        self.tail = tail;
        self.len -= 1;
        Some(node.value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    /// An unconfigured list, as for [`DoublyLinkedList`](super::DoublyLinkedList):
    /// empty, comparator-less, and rejecting every operation with
    /// [`Error::Uninitialized`].
    fn default() -> Self {
        SinglyLinkedList {
            head: None,
            tail: RawLink::none(),
            len: 0,
            cmp: None,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping the owned chain recursively could
        // overflow the stack on a long list.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// The tail cursor only ever aliases a node owned by the same list, so the
// list moves and shares exactly as its element type allows.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

/// A borrowing iterator over a [`SinglyLinkedList`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.next?;
        self.remaining -= 1;
        self.next = node.next.as_deref();
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
