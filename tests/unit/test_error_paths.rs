//! Error path and edge case tests
//!
//! These tests focus on contract violations:
//! - Out-of-range indices never mutate the list
//! - Capacity exhaustion leaves the list untouched
//! - Invalid construction

use ringlist::{ListError, RingList, RingListConfig};

fn wrapped() -> RingList<i32> {
    let mut list = RingList::with_capacity(4).unwrap();
    for v in 0..4 {
        list.add(v).unwrap();
    }
    list.remove_at(0).unwrap();
    list.remove_at(0).unwrap();
    list.add(4).unwrap();
    list.add(5).unwrap();
    list
}

#[test]
fn test_out_of_range_leaves_list_unchanged() {
    let mut list = wrapped();
    let before = list.to_vec();
    let len = list.len();

    assert_eq!(list.get(len), Err(ListError::IndexOutOfRange { index: len, len }));
    assert!(list.get_mut(len + 5).is_err());
    assert!(list.set(len, 9).is_err());
    assert!(list.remove_at(len).is_err());
    assert!(list.remove_at(usize::MAX).is_err());
    assert!(list.insert(len + 1, 9).is_err());

    assert_eq!(list.to_vec(), before);
    assert_eq!(list.capacity(), 4);
}

#[test]
fn test_empty_list_rejects_access() {
    let mut list: RingList<i32> = RingList::new();
    assert!(list.get(0).is_err());
    assert!(list.set(0, 1).is_err());
    assert!(list.remove_at(0).is_err());
    assert_eq!(list.pop_front(), None);
    assert!(!list.remove(&1));
}

#[test]
fn test_capacity_exhaustion_is_distinct_and_clean() {
    let config = RingListConfig {
        initial_capacity: 1,
        max_capacity: Some(4),
    };
    let mut list = RingList::with_config(&config).unwrap();
    assert_eq!(list.max_capacity(), 4);
    for v in 0..4 {
        list.add(v).unwrap();
    }
    list.remove_at(0).unwrap();
    list.add(4).unwrap();
    let before = list.to_vec();

    assert_eq!(list.add(9), Err(ListError::CapacityExhausted { capacity: 4 }));
    assert_eq!(
        list.insert(2, 9),
        Err(ListError::CapacityExhausted { capacity: 4 })
    );
    assert_eq!(
        list.push_front(9),
        Err(ListError::CapacityExhausted { capacity: 4 })
    );
    assert_eq!(list.to_vec(), before);

    // removal still works and frees a slot
    list.remove_at(1).unwrap();
    list.insert(1, 9).unwrap();
    assert_eq!(list.to_vec(), vec![1, 9, 3, 4]);
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        RingList::<i32>::with_capacity(0),
        Err(ListError::InvalidCapacity { requested: 0, .. })
    ));
    let config = RingListConfig {
        initial_capacity: 5,
        max_capacity: Some(2),
    };
    assert_eq!(
        RingList::<i32>::with_config(&config).unwrap_err(),
        ListError::InvalidCapacity {
            requested: 5,
            max: 2
        }
    );
}

#[test]
fn test_copy_to_rejects_overflowing_offset() {
    let list = wrapped();
    let mut dest = [0; 8];
    assert!(matches!(
        list.copy_to(&mut dest, usize::MAX),
        Err(ListError::DestinationTooSmall { .. })
    ));
    assert!(matches!(
        list.copy_to(&mut dest, 5),
        Err(ListError::DestinationTooSmall {
            required: 9,
            available: 8
        })
    ));
    list.copy_to(&mut dest, 4).unwrap();
    assert_eq!(dest, [0, 0, 0, 0, 2, 3, 4, 5]);
}

#[test]
fn test_max_capacity_bounds() {
    let unbounded: RingList<u64> = RingList::new();
    let slot = std::mem::size_of::<Option<u64>>();
    assert_eq!(unbounded.max_capacity(), isize::MAX as usize / slot);

    // a configured cap above the platform limit is clamped to it
    let config = RingListConfig {
        initial_capacity: 2,
        max_capacity: Some(usize::MAX),
    };
    let clamped: RingList<u64> = RingList::with_config(&config).unwrap();
    assert_eq!(clamped.max_capacity(), unbounded.max_capacity());

    // growth stops exactly at a cap that is not a power of two
    let config = RingListConfig {
        initial_capacity: 3,
        max_capacity: Some(10),
    };
    let mut list = RingList::with_config(&config).unwrap();
    for v in 0..10 {
        list.add(v).unwrap();
    }
    assert_eq!(list.capacity(), list.max_capacity());
    assert!(list.add(10).is_err());
}
