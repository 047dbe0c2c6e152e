#![no_main]

use std::collections::VecDeque;

use lampstamp::ds::EvictionRing;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on EvictionRing
//
// Runs push, pop_if_full_then_push, pop, and clear against a bounded VecDeque
// model and checks both agree after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 32).max(1);
    let mut ring = EvictionRing::new(capacity);
    let mut model: VecDeque<u8> = VecDeque::with_capacity(capacity);

    for chunk in data[1..].chunks_exact(2) {
        let key = chunk[1];
        match chunk[0] % 4 {
            0 => {
                ring.push(key);
                if model.len() == capacity {
                    model.pop_front();
                }
                model.push_back(key);
            }
            1 => {
                let expected = if model.len() == capacity {
                    model.pop_front()
                } else {
                    None
                };
                model.push_back(key);
                assert_eq!(ring.pop_if_full_then_push(key), expected);
            }
            2 => {
                assert_eq!(ring.pop(), model.pop_front());
            }
            3 => {
                ring.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert!(ring.len() <= ring.capacity());
        assert_eq!(ring.len(), model.len());
        assert_eq!(ring.peek_oldest(), model.front());
        ring.debug_validate_invariants();
    }
});
