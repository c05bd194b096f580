//! # Ordered Linked Lists
//!
//! Linked lists that carry a caller-supplied comparator, fixed at
//! construction and consulted by the value-based operations.
//!
//! ## Core Components
//!
//! - [`double::DoublyLinkedList`]: bidirectional links, O(1) mutation at
//!   both ends, double-ended iteration.
//! - [`single::SinglyLinkedList`]: forward links only, smaller nodes, O(n)
//!   tail removal.
//!
//! Both variants expose the same operations with the same error behavior,
//! so they can be swapped without touching call sites.
//!
//! ## The comparator
//!
//! Search operations probe the list with `cmp(probe, element)` and treat
//! [`Ordering::Equal`](core::cmp::Ordering::Equal) as a match. The `Less`
//! and `Greater` outcomes are never inspected: the lists do not sort
//! themselves, and insertion order is exactly the order the caller chose.
//! The comparator is the list's notion of identity, nothing more.
//!
//! ## Unconfigured lists
//!
//! A list obtained through [`Default`] has no comparator. It is a valid
//! value to hold, drop, or assign over, but every operation on it fails
//! with [`Error::Uninitialized`](crate::error::Error::Uninitialized). This
//! is also the state `core::mem::take` leaves behind.
//!
//! # Examples
//!
//! ```
//! use catena::linked_list::ordered::DoublyLinkedList;
//!
//! // Identity is case-insensitive; order of insertion is preserved.
//! let mut names = DoublyLinkedList::new(|a: &&str, b: &&str| {
//!     a.to_lowercase().cmp(&b.to_lowercase())
//! });
//!
//! names.push_back("Ada")?;
//! names.push_back("Grace")?;
//!
//! assert_eq!(names.index_of(&"GRACE")?, Some(1));
//! assert!(names.remove_value(&"ada")?);
//! assert_eq!(names.len()?, 1);
//! # Ok::<(), catena::error::Error>(())
//! ```

use core::cmp::Ordering;

use alloc::boxed::Box;

pub mod double;
pub mod single;

mod raw;

#[cfg(test)]
mod tests;

pub use double::DoublyLinkedList;
pub use single::SinglyLinkedList;

/// The ordering function a list carries.
///
/// Only the [`Ordering::Equal`] outcome is load-bearing; see the
/// [module documentation](self) for the full contract.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;
