//! # Catena
//!
//! Generic linear containers built from heap-allocated, singly-owned nodes.
//!
//! ## Core Components
//!
//! - [`linked_list::ordered`]: doubly and singly linked lists that carry a
//!   caller-supplied comparator, with positional and value-based mutation
//!   and in-place reversal.
//! - [`stack::Stack`]: a LIFO stack with single-ended access.
//! - [`queue::Queue`]: a FIFO queue with single-ended access.
//! - [`error::Error`]: the misuse taxonomy shared by every fallible
//!   operation.
//!
//! The containers are single-threaded values: they provide no interior
//! mutability and no hidden synchronization, and move between threads under
//! the usual `Send`/`Sync` rules for their element type.
//!
//! # Examples
//!
//! ```
//! use catena::linked_list::ordered::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new(i32::cmp);
//! list.push_back(1)?;
//! list.push_back(2)?;
//! list.push_front(0)?;
//!
//! assert_eq!(list.len()?, 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//! list.reverse()?;
//! assert_eq!(list.pop_front()?, 2);
//! # Ok::<(), catena::error::Error>(())
//! ```
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;
