//! Announcement feed state.
//!
//! The visible list is always a view: every known message minus the
//! acknowledged ids. Incoming batches never override an acknowledgement,
//! and freshly arrived messages carry a highlight mark for a fixed window.
//! The clock is injected so the window is testable.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::models::notification::Notification;

pub struct FeedState {
    /// Every message seen on this subscription, in arrival order.
    all: Vec<Notification>,
    acknowledged: HashSet<String>,
    /// Arrival instants of messages still inside the highlight window.
    recent: HashMap<String, DateTime<Utc>>,
    highlight_window: Duration,
}

impl FeedState {
    pub fn new(acknowledged: HashSet<String>, highlight_secs: u64) -> Self {
        Self {
            all: Vec::new(),
            acknowledged,
            recent: HashMap::new(),
            highlight_window: Duration::seconds(highlight_secs as i64),
        }
    }

    /// Merge an incoming batch. Acknowledged ids are dropped, re-delivered
    /// ids are ignored, the rest are appended and marked recent. Returns
    /// how many messages were newly added.
    pub fn on_batch(&mut self, now: DateTime<Utc>, batch: Vec<Notification>) -> usize {
        let mut added = 0;
        for note in batch {
            if self.acknowledged.contains(&note.id) {
                continue;
            }
            if self.all.iter().any(|n| n.id == note.id) {
                continue;
            }
            self.recent.insert(note.id.clone(), now);
            self.all.push(note);
            added += 1;
        }
        added
    }

    /// Drop highlight marks older than the window.
    pub fn expire_recent(&mut self, now: DateTime<Utc>) {
        let window = self.highlight_window;
        self.recent.retain(|_, arrived| now - *arrived < window);
    }

    pub fn is_recent(&self, id: &str) -> bool {
        self.recent.contains_key(id)
    }

    /// Dismiss a message locally. Returns true if it was visible.
    /// The caller persists the acknowledged set immediately afterwards.
    pub fn acknowledge(&mut self, id: &str) -> bool {
        let was_visible =
            !self.acknowledged.contains(id) && self.all.iter().any(|n| n.id == id);
        self.acknowledged.insert(id.to_string());
        self.recent.remove(id);
        was_visible
    }

    pub fn acknowledged(&self) -> &HashSet<String> {
        &self.acknowledged
    }

    /// The visible feed, newest first.
    pub fn visible(&self) -> Vec<&Notification> {
        self.all
            .iter()
            .filter(|n| !self.acknowledged.contains(&n.id))
            .rev()
            .collect()
    }
}
