#![no_main]

use lampstamp::table::BoundedClockTable;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary get/increment/merge sequences on BoundedClockTable
//
// Checks the capacity bound, per-key monotonicity while resident, the merge
// rule, and map/ring agreement.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 16).max(1);
    let table: BoundedClockTable<u8> = BoundedClockTable::new(capacity);

    for chunk in data[1..].chunks_exact(3) {
        let key = chunk[1] % 32;
        let received = u64::from(chunk[2]);
        let before = table.get(&key);

        match chunk[0] % 3 {
            0 => {
                assert_eq!(table.get(&key), before);
            }
            1 => {
                assert_eq!(table.increment(&key), before + 1);
            }
            2 => {
                assert_eq!(table.merge(&key, received), before.max(received) + 1);
            }
            _ => unreachable!(),
        }

        assert!(table.len() <= capacity);
    }

    table.check_invariants().unwrap();
});
