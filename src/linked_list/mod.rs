//! Owned linked list implementations.
//!
//! In an owned linked list, the list allocates a private node for every
//! inserted value and releases it again on removal. This is in contrast to
//! an intrusive linked list, where the links are embedded in caller-managed
//! data and the list never allocates.
//!
//! # Examples
//!
//! ```
//! use catena::linked_list::ordered::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new(i32::cmp);
//!
//! list.push_back(2)?;
//! list.push_back(3)?;
//! list.push_front(1)?;
//!
//! assert_eq!(list.index_of(&3)?, Some(2));
//! assert!(list.remove_value(&2)?);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! # Ok::<(), catena::error::Error>(())
//! ```
pub mod ordered;
