#![no_main]

use libfuzzer_sys::fuzz_target;
use ringlist::{RingList, RingListConfig};

// Each pair of bytes is one operation: the low bits of the first byte pick
// the edit, the second byte is the index or value.
fuzz_target!(|data: &[u8]| {
    let Some((&capacity, ops)) = data.split_first() else {
        return;
    };
    let config = RingListConfig {
        initial_capacity: usize::from(capacity % 8) + 1,
        max_capacity: Some(512),
    };
    let Ok(mut list) = RingList::with_config(&config) else {
        return;
    };
    let mut reference: Vec<u8> = Vec::new();

    for pair in ops.chunks_exact(2) {
        let (kind, arg) = (pair[0], pair[1]);
        let index = usize::from(arg);
        match kind % 5 {
            0 => {
                if list.add(arg).is_ok() {
                    reference.push(arg);
                } else {
                    assert_eq!(reference.len(), 512);
                }
            }
            1 => {
                let fits = reference.len() < 512;
                match list.insert(index, kind) {
                    Ok(()) => {
                        assert!(fits && index <= reference.len());
                        reference.insert(index, kind);
                    }
                    Err(_) => assert!(!fits || index > reference.len()),
                }
            }
            2 => match list.remove_at(index) {
                Ok(v) => assert_eq!(v, reference.remove(index)),
                Err(_) => assert!(index >= reference.len()),
            },
            3 => match list.set(index, kind) {
                Ok(old) => assert_eq!(old, std::mem::replace(&mut reference[index], kind)),
                Err(_) => assert!(index >= reference.len()),
            },
            _ => {
                assert_eq!(list.remove(&arg), {
                    let pos = reference.iter().position(|v| *v == arg);
                    pos.map(|i| reference.remove(i)).is_some()
                });
            }
        }
        assert_eq!(list.len(), reference.len());
        assert!(list.iter().eq(reference.iter()));
    }
});
