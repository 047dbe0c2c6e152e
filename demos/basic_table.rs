use lampstamp::prelude::*;

fn main() {
    // A table that remembers clocks for at most 3 message ids
    let table: BoundedClockTable = BoundedClockTable::new(3);

    // Local event: stamp an outgoing message
    let sent = table.increment("msg-1");
    println!("msg-1 sent at {}", sent);

    // Receive event: a peer reports it has already seen msg-1 at 10
    let merged = table.merge("msg-1", 10);
    println!("msg-1 merged to {}", merged);

    // Admitting more ids than the capacity forgets the earliest one
    for id in ["msg-2", "msg-3", "msg-4"] {
        table.increment(id);
    }
    println!("msg-1 after eviction: {}", table.get("msg-1"));
    println!("resident: {:?}", table.resident_keys());
}
