extern crate std;

use core::cmp::Ordering;

use std::cell::Cell;
use std::format;
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

use crate::error::Error;
use crate::linked_list::ordered::SinglyLinkedList;

fn collect(list: &SinglyLinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_push_both_ends() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    list.push_back(2).unwrap();
    list.push_back(3).unwrap();
    list.push_front(1).unwrap();

    assert_eq!(list.len(), Ok(3));
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[test]
fn test_pop_back_walks_to_the_new_tail() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    for value in [1, 2, 3, 4] {
        list.push_back(value).unwrap();
    }

    assert_eq!(list.pop_back(), Ok(4));
    assert_eq!(list.pop_back(), Ok(3));

    // The tail cursor must have followed the removals back.
    list.push_back(9).unwrap();
    assert_eq!(collect(&list), vec![1, 2, 9]);
}

#[test]
fn test_pop_until_empty() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    list.push_back(1).unwrap();
    list.push_back(2).unwrap();

    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop_back(), Ok(2));
    assert_eq!(list.pop_back(), Err(Error::Empty));
    assert_eq!(list.pop_front(), Err(Error::Empty));

    // Emptied through pop_back: both end links must be reusable.
    list.push_front(5).unwrap();
    list.push_back(6).unwrap();
    assert_eq!(collect(&list), vec![5, 6]);
}

#[test]
fn test_insert_at_boundaries_and_interior() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    list.push_back(1).unwrap();
    list.insert_at(0, 0).unwrap();
    list.insert_at(2, 3).unwrap();
    list.insert_at(2, 2).unwrap();

    assert_eq!(collect(&list), vec![0, 1, 2, 3]);
    assert_eq!(
        list.insert_at(5, 9),
        Err(Error::OutOfBounds { index: 5, len: 4 })
    );
}

#[test]
fn test_insert_then_remove_at_each_index() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    for value in [0, 1, 2, 3] {
        list.push_back(value).unwrap();
    }

    for index in 0..=4 {
        list.insert_at(index, 9).unwrap();
        assert_eq!(list.remove_at(index), Ok(9));
        assert_eq!(collect(&list), vec![0, 1, 2, 3]);
    }

    // The tail rounds went through the cursor; it must still be usable.
    list.push_back(4).unwrap();
    assert_eq!(collect(&list), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_remove_at_each_position() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    for value in [0, 1, 2, 3] {
        list.push_back(value).unwrap();
    }

    assert_eq!(list.remove_at(2), Ok(2));
    assert_eq!(list.remove_at(2), Ok(3));
    assert_eq!(list.remove_at(0), Ok(0));
    assert_eq!(collect(&list), vec![1]);

    // Tail removal retargeted the cursor; appending still works.
    list.push_back(8).unwrap();
    assert_eq!(collect(&list), vec![1, 8]);
}

#[test]
fn test_remove_at_empty_wins_over_bounds() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    assert_eq!(list.remove_at(3), Err(Error::Empty));

    list.push_back(1).unwrap();
    assert_eq!(
        list.remove_at(4),
        Err(Error::OutOfBounds { index: 4, len: 1 })
    );
}

#[test]
fn test_reverse_relinks_forward_chain() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    for value in [1, 2, 3] {
        list.push_back(value).unwrap();
    }
    list.push_front(0).unwrap();
    list.insert_at(1, 1).unwrap();
    assert_eq!(collect(&list), vec![0, 1, 1, 2, 3]);

    list.reverse().unwrap();
    assert_eq!(collect(&list), vec![3, 2, 1, 1, 0]);

    // The old head is the tail now; appends land after it.
    list.push_back(7).unwrap();
    assert_eq!(list.pop_back(), Ok(7));

    list.reverse().unwrap();
    assert_eq!(collect(&list), vec![0, 1, 1, 2, 3]);
}

#[test]
fn test_index_of_and_remove_value_agree() {
    let mut list = SinglyLinkedList::new(i32::cmp);
    for value in [5, 6, 6, 7] {
        list.push_back(value).unwrap();
    }

    assert_eq!(list.index_of(&6), Ok(Some(1)));
    assert_eq!(list.remove_value(&6), Ok(true));
    assert_eq!(collect(&list), vec![5, 6, 7]);
    assert_eq!(list.index_of(&6), Ok(Some(1)));

    assert_eq!(list.remove_value(&9), Ok(false));
    assert_eq!(list.remove_value(&5), Ok(true));
    assert_eq!(list.remove_value(&7), Ok(true));
    assert_eq!(collect(&list), vec![6]);
}

#[test]
fn test_comparator_argument_order() {
    // Matching is one-directional: the searched value must sit strictly
    // below the element it is compared against.
    let mut list = SinglyLinkedList::new(|a: &i32, b: &i32| {
        if a < b {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    });
    list.push_back(5).unwrap();
    list.push_back(7).unwrap();

    assert_eq!(list.index_of(&3), Ok(Some(0)));
    assert_eq!(list.index_of(&6), Ok(Some(1)));
    assert_eq!(list.index_of(&7), Ok(None));

    assert_eq!(list.remove_value(&6), Ok(true));
    assert_eq!(collect(&list), vec![5]);
}

#[test]
fn test_unconfigured_rejects_every_operation() {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::default();

    assert_eq!(list.push_back(1), Err(Error::Uninitialized));
    assert_eq!(list.pop_front(), Err(Error::Uninitialized));
    assert_eq!(list.insert_at(0, 1), Err(Error::Uninitialized));
    assert_eq!(list.remove_value(&1), Err(Error::Uninitialized));
    assert_eq!(list.reverse(), Err(Error::Uninitialized));
    assert_eq!(list.len(), Err(Error::Uninitialized));
    assert_eq!(list.iter().next(), None);
}

struct Tally {
    id: i32,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tally {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_every_node_is_released() {
    let drops = Rc::new(Cell::new(0));
    let mut list = SinglyLinkedList::new(|a: &Tally, b: &Tally| a.id.cmp(&b.id));
    for id in 0..4 {
        let tally = Tally {
            id,
            drops: Rc::clone(&drops),
        };
        list.push_front(tally).unwrap();
    }

    drop(list.pop_back().unwrap());
    assert_eq!(drops.get(), 1);

    drop(list);
    assert_eq!(drops.get(), 4);
}

#[test]
fn test_debug_prints_like_a_sequence() {
    let mut list = SinglyLinkedList::with_natural_order();
    list.push_back('a').unwrap();
    list.push_back('b').unwrap();

    assert_eq!(format!("{list:?}"), "['a', 'b']");
}
