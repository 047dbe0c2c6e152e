//! Two clients write the same message id through two servers that share one
//! versioned store. Lamport timestamps let the store reject the write that
//! arrives late even though it was sent first.
//!
//! Run with: `cargo run --example message_ordering`

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use lampstamp::prelude::*;
use parking_lot::Mutex;

#[derive(Debug, Clone)]
struct Message {
    id: String,
    client: usize,
    text: String,
    version: Timestamp,
    failed: bool,
}

#[derive(Debug, Default)]
struct Storage {
    messages: Mutex<HashMap<String, Message>>,
}

impl Storage {
    /// Stores `msg` unless the stored copy has an equal or newer version.
    fn commit(&self, msg: &Message) -> Result<(), Timestamp> {
        let mut messages = self.messages.lock();
        let stored = messages.get(&msg.id).map_or(DEFAULT_TIMESTAMP, |m| m.version);
        if stored >= msg.version {
            return Err(stored);
        }
        messages.insert(msg.id.clone(), msg.clone());
        Ok(())
    }

    fn read(&self, id: &str) -> Option<Message> {
        self.messages.lock().get(id).cloned()
    }
}

struct Server {
    name: &'static str,
    clock: BoundedClockTable,
    storage: Arc<Storage>,
    delay: Duration,
}

impl Server {
    fn serve(self, inbox: Receiver<Message>, replies: Vec<Sender<Message>>) {
        for mut msg in inbox {
            thread::sleep(self.delay);

            // A message older than what this server already knows is stale.
            let known = self.clock.get(msg.id.as_str());
            if msg.version < known {
                println!("\t{}: rejects '{}' (v{} < v{})", self.name, msg.text, msg.version, known);
                msg.failed = true;
                let _ = replies[msg.client].send(msg);
                continue;
            }

            msg.version = self.clock.merge(msg.id.as_str(), msg.version);
            // The store catches conflicts between servers whose clocks are independent.
            if let Err(stored) = self.storage.commit(&msg) {
                println!(
                    "\t{}: rejects '{}' (v{} not newer than stored v{})",
                    self.name, msg.text, msg.version, stored
                );
                msg.failed = true;
            } else {
                println!("\t{}: commits '{}' at v{}", self.name, msg.text, msg.version);
            }
            let _ = replies[msg.client].send(msg);
        }
    }
}

struct Client {
    id: usize,
    clock: BoundedClockTable,
    inbox: Receiver<Message>,
}

impl Client {
    fn send(&self, server: &Sender<Message>, id: &str, text: &str) {
        let msg = Message {
            id: id.to_string(),
            client: self.id,
            text: text.to_string(),
            version: self.clock.increment(id),
            failed: false,
        };
        println!("client-{} sends '{}' at v{}", self.id, msg.text, msg.version);
        if server.send(msg).is_err() {
            return;
        }

        if let Ok(reply) = self.inbox.recv() {
            if reply.failed {
                println!("\t\tclient-{}: '{}' was rejected", self.id, reply.text);
            } else {
                let version = self.clock.merge(id, reply.version);
                println!("\t\tclient-{}: '{}' acknowledged, now at v{}", self.id, reply.text, version);
            }
        }
    }
}

fn main() {
    let storage = Arc::new(Storage::default());

    let (client_tx, client_rx): (Vec<_>, Vec<_>) = (0..2).map(|_| mpsc::channel()).unzip();
    let mut server_txs = Vec::new();
    for (name, delay) in [("svr-1", 200), ("svr-2", 0)] {
        let (tx, rx) = mpsc::channel();
        server_txs.push(tx);
        let server = Server {
            name,
            clock: BoundedClockTable::new(1024),
            storage: storage.clone(),
            delay: Duration::from_millis(delay),
        };
        let replies = client_tx.clone();
        thread::spawn(move || server.serve(rx, replies));
    }

    let mut inboxes = client_rx.into_iter();
    let (Some(first_inbox), Some(second_inbox)) = (inboxes.next(), inboxes.next()) else {
        return;
    };
    let first = Client {
        id: 0,
        clock: BoundedClockTable::new(1024),
        inbox: first_inbox,
    };
    let second = Client {
        id: 1,
        clock: BoundedClockTable::new(1024),
        inbox: second_inbox,
    };

    thread::scope(|scope| {
        let (svr1, svr2) = (&server_txs[0], &server_txs[1]);
        scope.spawn(move || first.send(svr1, "msg-id-1", "foo"));
        thread::sleep(Duration::from_millis(100));
        scope.spawn(move || second.send(svr2, "msg-id-1", "bar"));
    });

    match storage.read("msg-id-1") {
        Some(msg) => println!("stored: '{}' at v{}", msg.text, msg.version),
        None => println!("stored: nothing"),
    }
}
