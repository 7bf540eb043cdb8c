//! Feed + store integration: the acknowledged set must survive a reload
//! and keep re-delivered announcements out of the visible list.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};

use emstrack::core::ack_store::AckStore;
use emstrack::core::feed::FeedState;
use emstrack::models::notification::Notification;

fn note(id: &str, msg: &str) -> Notification {
    Notification {
        id: id.into(),
        message: msg.into(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
    }
}

#[test]
fn acknowledged_set_survives_a_simulated_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("read_notifications.json");

    // First run: acknowledge a and b.
    {
        let store = AckStore::at(path.clone());
        let mut feed = FeedState::new(store.load(), 3);
        feed.on_batch(
            Utc::now(),
            vec![note("a", "one"), note("b", "two"), note("c", "three")],
        );
        feed.acknowledge("a");
        store.save(feed.acknowledged()).unwrap();
        feed.acknowledge("b");
        store.save(feed.acknowledged()).unwrap();
    }

    // Second run: a fresh feed rebuilt from storage.
    let store = AckStore::at(path);
    let mut feed = FeedState::new(store.load(), 3);
    feed.on_batch(
        Utc::now(),
        vec![note("a", "one"), note("b", "two"), note("c", "three")],
    );

    let visible: Vec<&str> = feed.visible().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(visible, vec!["c"]);
}

#[test]
fn redelivered_announcement_stays_acknowledged() {
    let mut feed = FeedState::new(HashSet::new(), 3);

    feed.on_batch(Utc::now(), vec![note("n1", "Hi")]);
    feed.acknowledge("n1");

    feed.on_batch(Utc::now(), vec![note("n1", "Hi"), note("n2", "There")]);

    let visible: Vec<&str> = feed.visible().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(visible, vec!["n2"]);
}

#[test]
fn save_writes_the_full_set_each_time() {
    let dir = tempfile::tempdir().unwrap();
    let store = AckStore::at(dir.path().join("read.json"));

    let mut feed = FeedState::new(store.load(), 3);
    feed.acknowledge("n1");
    store.save(feed.acknowledged()).unwrap();
    feed.acknowledge("n2");
    store.save(feed.acknowledged()).unwrap();

    let loaded = store.load();
    assert!(loaded.contains("n1"));
    assert!(loaded.contains("n2"));
}
