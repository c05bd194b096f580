use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ptr::NonNull;

use alloc::boxed::Box;

use super::Comparator;
use super::raw::RawLink;
use crate::error::{Error, Result};

/// The owning side of a node handoff.
type OwnedLink<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: OwnedLink<T>,
    prev: RawLink<Node<T>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node {
            value,
            next: None,
            prev: RawLink::none(),
        }
    }

    /// Makes `next` this node's successor, fixing up its back link.
    fn attach_next(&mut self, mut next: Box<Node<T>>) {
        next.prev = RawLink::some(self);
        self.next = Some(next);
    }

    /// Splices `node` between this node and its current successor.
    fn splice_next(&mut self, mut node: Box<Node<T>>) {
        let mut old_next = self.next.take();
        if let Some(old) = old_next.as_deref_mut() {
            old.prev = RawLink::some(&mut *node);
        }
        node.prev = RawLink::some(self);
        node.next = old_next;
        self.next = Some(node);
    }

    /// Takes this node's successor, clearing the successor's back link.
    fn take_next(&mut self) -> Option<Box<Node<T>>> {
        let mut next = self.next.take();
        if let Some(next) = next.as_deref_mut() {
            next.prev = RawLink::none();
        }
        next
    }

    /// Unlinks and returns this node's successor, joining this node to the
    /// node after it. The detached node comes back with both links cleared.
    fn detach_next(&mut self) -> Option<Box<Node<T>>> {
        let mut detached = self.next.take()?;
        let mut after = detached.next.take();
        if let Some(after) = after.as_deref_mut() {
            after.prev = RawLink::some(self);
        }
        self.next = after;
        detached.prev = RawLink::none();
        Some(detached)
    }
}

/// A doubly linked list with a caller-supplied comparator.
///
/// Every node owns its successor through a `Box` and keeps a non-owning
/// back link to its predecessor, so both ends support O(1) insertion and
/// removal. The comparator fixes the list's notion of value identity; see
/// the [module documentation](super) for its contract.
///
/// # Examples
///
/// ```
/// use catena::linked_list::ordered::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new(i32::cmp);
///
/// list.push_back(1)?;
/// list.push_back(2)?;
/// list.push_front(0)?;
/// list.insert_at(3, 3)?;
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(list.index_of(&2)?, Some(2));
/// assert_eq!(list.pop_back()?, 3);
/// # Ok::<(), catena::error::Error>(())
/// ```
pub struct DoublyLinkedList<T> {
    head: OwnedLink<T>,
    tail: RawLink<Node<T>>,
    len: usize,
    cmp: Option<Comparator<T>>,
}

impl<T> DoublyLinkedList<T> {
    /// An empty list that will compare values with `cmp`.
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        DoublyLinkedList {
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

    /// Inserts `value` before the head in O(1). Fails with
    /// [`Error::Uninitialized`] on an unconfigured list, as does every
    /// other operation.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.ensure_configured()?;
        self.push_front_inner(value);
        Ok(())
    }

    /// Appends `value` after the tail. O(1).
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.ensure_configured()?;
        self.push_back_inner(value);
        Ok(())
    }

    /// Removes and returns the head value. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list holds no elements.
    pub fn pop_front(&mut self) -> Result<T> {
        self.ensure_configured()?;
        self.pop_front_inner().ok_or(Error::Empty)
    }

    /// Removes and returns the tail value. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list holds no elements.
    pub fn pop_back(&mut self) -> Result<T> {
        self.ensure_configured()?;
        self.pop_back_inner().ok_or(Error::Empty)
    }

    /// Inserts `value` at position `index`, shifting the elements from that
    /// position one step toward the tail. `insert_at(0, ..)` is
    /// [`push_front`](Self::push_front) and `insert_at(len, ..)` is
    /// [`push_back`](Self::push_back); interior positions cost O(index).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `index > len`.
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
                prev.splice_next(Box::new(Node::new(value)));
                self.len += 1;
                Ok(())
            }
            None => Err(Error::OutOfBounds { index, len }),
        }
    }

    /// Removes and returns the value at position `index`. The first and
    /// last positions cost O(1), interior positions O(index).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list holds no elements, regardless of
    /// `index`; otherwise [`Error::OutOfBounds`] if `index >= len`.
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
    /// comparator. Returns whether an element was removed; an absent value
    /// is not an error.
    pub fn remove_value(&mut self, value: &T) -> Result<bool> {
        match self.index_of(value)? {
            Some(index) => {
                self.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reverses the list in place by relinking the existing nodes; no
    /// element is moved or cloned. O(n), a no-op below two elements.
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
            node.prev = RawLink::none();
            if self.tail.is_none() {
                // The first node moved over is the old head, the new tail.
                self.tail = RawLink::some(&mut *node);
            }
            if let Some(front) = reversed.as_deref_mut() {
                front.prev = RawLink::some(&mut *node);
            }
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        Ok(())
    }

    /// Iterates the values front to back; the iterator also walks back to
    /// front through [`DoubleEndedIterator`]. Iteration never consults the
    /// comparator, so an unconfigured list simply yields nothing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.head.as_deref(),
            back: self.tail.get(),
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
            Some(head) => node.attach_next(head),
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
            Some(tail) => tail.attach_next(node),
            None => self.head = Some(node),
        }
        self.len += 1;
    }

    fn pop_front_inner(&mut self) -> Option<T> {
        let mut head = self.head.take()?;
        match head.take_next() {
            Some(next) => self.head = Some(next),
            None => self.tail = RawLink::none(),
        }
        self.len -= 1;
        Some(head.value)
    }

    fn pop_back_inner(&mut self) -> Option<T> {
        let mut old_tail = self.tail.take();
        // Safety: as in `push_back_inner`.
        let tail = unsafe { old_tail.as_mut() }?;
        let mut prev = tail.prev.take();
        // Safety: a set back link points at the tail's live predecessor.
        let node = match unsafe { prev.as_mut() } {
            Some(prev_node) => {
                self.tail = RawLink::some(prev_node);
                prev_node.next.take()
            }
            None => self.head.take(),
        }?;
        self.len -= 1;
        Some(node.value)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    /// An unconfigured list: empty, with no comparator.
    ///
    /// This is the state `core::mem::take` leaves behind. Every operation
    /// on it fails until the list is rebuilt through a constructor.
    ///
    /// ```
    /// use catena::error::Error;
    /// use catena::linked_list::ordered::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<i32> = DoublyLinkedList::default();
    /// assert_eq!(list.push_back(1), Err(Error::Uninitialized));
    /// ```
    fn default() -> Self {
        DoublyLinkedList {
            head: None,
            tail: RawLink::none(),
            len: 0,
            cmp: None,
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping the owned chain recursively could
        // overflow the stack on a long list.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// The raw back links only ever alias nodes owned by the same list, so the
// list moves and shares exactly as its element type allows.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

/// A borrowing iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    front: Option<&'a Node<T>>,
    back: Option<NonNull<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = node.next.as_deref();
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        // Safety: `remaining` counts the nodes not yet yielded from either
        // end, so a non-zero count means the back cursor points at a live
        // node the iterator still borrows.
        let node = unsafe { self.back?.as_ref() };
        self.remaining -= 1;
        self.back = node.prev.get();
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
