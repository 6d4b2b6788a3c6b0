//! Scenario tests for RingList
//!
//! Tests cover:
//! - Basic add / index / remove-by-value
//! - RemoveAt sequences that walk the head and tail across the wrap point
//! - Growth transparency
//! - CopyTo round-trips after repeated wrapping

use ringlist::{ListError, RingList};

fn contents(list: &RingList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

fn counted(capacity: usize, n: i32) -> RingList<i32> {
    let mut list = RingList::with_capacity(capacity).unwrap();
    for i in 0..n {
        list.add(i).unwrap();
    }
    list
}

// ============================================================================
// Basic behaviour
// ============================================================================

mod basic_tests {
    use super::*;

    #[test]
    fn test_add_index_remove_value() {
        let mut list = RingList::new();
        list.add(3).unwrap();
        assert_eq!(list[0], 3);
        list.add(4).unwrap();
        assert_eq!(list[1], 4);
        assert_eq!(list.index_of(&3), Some(0));
        assert!(list.remove(&3));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], 4);
    }

    #[test]
    fn test_index_of_missing() {
        let list = counted(4, 3);
        assert_eq!(list.index_of(&10), None);
        assert!(!list.contains(&10));
    }

    #[test]
    fn test_is_never_read_only() {
        let list: RingList<String> = RingList::new();
        assert!(!list.is_read_only());
    }

    #[test]
    fn test_non_copy_elements() {
        let mut list: RingList<String> = RingList::with_capacity(2).unwrap();
        for word in ["c", "d", "e"] {
            list.add(word.to_string()).unwrap();
        }
        list.push_front("b".to_string()).unwrap();
        list.insert(0, "a".to_string()).unwrap();
        assert_eq!(list.remove_at(2).unwrap(), "c");
        assert!(list.remove(&"e".to_string()));
        assert_eq!(list.to_vec(), vec!["a", "b", "d"]);
    }
}

// ============================================================================
// RemoveAt sequences
// ============================================================================

mod remove_at_tests {
    use super::*;

    #[test]
    fn test_remove_at_sequence_after_growth() {
        let mut list = counted(2, 8);
        assert!(list.capacity() >= 8);

        list.remove_at(5).unwrap();
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4, 6, 7]);
        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![0, 2, 3, 4, 6, 7]);
        list.remove_at(3).unwrap();
        assert_eq!(contents(&list), vec![0, 2, 3, 6, 7]);
        list.remove_at(2).unwrap();
        assert_eq!(contents(&list), vec![0, 2, 6, 7]);
        list.remove_at(2).unwrap();
        assert_eq!(contents(&list), vec![0, 2, 7]);
        list.remove_at(2).unwrap();
        assert_eq!(contents(&list), vec![0, 2]);
        list.remove_at(0).unwrap();
        assert_eq!(contents(&list), vec![2]);
        list.remove_at(0).unwrap();
        assert!(list.is_empty());
        assert_eq!(
            list.get(0),
            Err(ListError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_head_drain_then_append() {
        let mut list = counted(2, 8);
        for _ in 0..6 {
            list.remove_at(0).unwrap();
        }
        assert_eq!(contents(&list), vec![6, 7]);
        list.add(8).unwrap();
        list.add(9).unwrap();
        assert_eq!(contents(&list), vec![6, 7, 8, 9]);

        list.remove_at(2).unwrap();
        assert_eq!(contents(&list), vec![6, 7, 9]);
        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![6, 9]);
        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![6]);
        assert!(list.remove_at(1).is_err());
        list.remove_at(0).unwrap();
        assert!(list.get(0).is_err());
    }

    #[test]
    fn test_head_drain_then_wrap_tail() {
        let mut list = counted(2, 8);
        for _ in 0..6 {
            list.remove_at(0).unwrap();
        }
        for v in 8..12 {
            list.add(v).unwrap();
        }
        assert_eq!(list.capacity(), 8, "appends wrap instead of growing");
        assert_eq!(contents(&list), vec![6, 7, 8, 9, 10, 11]);

        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![6, 8, 9, 10, 11]);
        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![6, 9, 10, 11]);
        list.remove_at(0).unwrap();
        assert_eq!(contents(&list), vec![9, 10, 11]);
        list.remove_at(0).unwrap();
        assert_eq!(contents(&list), vec![10, 11]);
        list.remove_at(0).unwrap();
        assert_eq!(contents(&list), vec![11]);
    }

    #[test]
    fn test_head_at_last_slot_then_wrap() {
        let mut list = counted(2, 8);
        for _ in 0..7 {
            list.remove_at(0).unwrap();
        }
        for v in 8..13 {
            list.add(v).unwrap();
        }
        assert_eq!(contents(&list), vec![7, 8, 9, 10, 11, 12]);

        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![7, 9, 10, 11, 12]);
        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![7, 10, 11, 12]);
        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![7, 11, 12]);
        list.remove_at(0).unwrap();
        assert_eq!(contents(&list), vec![11, 12]);
        list.remove_at(1).unwrap();
        assert_eq!(contents(&list), vec![11]);
    }

    #[test]
    fn test_remove_at_returns_element() {
        let mut list = counted(4, 6);
        assert_eq!(list.remove_at(4), Ok(4));
        assert_eq!(list.remove_at(0), Ok(0));
        assert_eq!(list.pop_back(), Some(5));
    }
}

// ============================================================================
// Growth and CopyTo
// ============================================================================

mod growth_tests {
    use super::*;

    #[test]
    fn test_growth_preserves_order_while_wrapped() {
        let mut list = RingList::with_capacity(4).unwrap();
        let mut expected = Vec::new();
        for round in 0..6 {
            for v in 0..5 {
                let value = round * 10 + v;
                list.add(value).unwrap();
                expected.push(value);
            }
            for _ in 0..3 {
                list.remove_at(0).unwrap();
                expected.remove(0);
            }
            assert_eq!(contents(&list), expected, "round {}", round);
        }
        assert!(list.capacity() >= list.len());
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut list = counted(2, 100);
        let grown = list.capacity();
        while list.pop_front().is_some() {}
        assert_eq!(list.capacity(), grown);
        list.clear();
        assert_eq!(list.capacity(), grown);
    }

    #[test]
    fn test_copy_to_after_many_wraps() {
        let mut list = RingList::with_capacity(8).unwrap();
        for v in 0..8 {
            list.add(v).unwrap();
        }
        for v in 8..40 {
            list.remove_at(0).unwrap();
            list.add(v).unwrap();
        }
        assert_eq!(list.capacity(), 8);

        let mut dest = vec![-1; 10];
        list.copy_to(&mut dest, 2).unwrap();
        assert_eq!(&dest[..2], &[-1, -1]);
        assert_eq!(&dest[2..], &(32..40).collect::<Vec<_>>()[..]);
        assert_eq!(contents(&list), (32..40).collect::<Vec<_>>());
    }
}
