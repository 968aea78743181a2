//! The bounded message feed shown to the player.

use std::collections::VecDeque;

use serde::Serialize;

/// The most recent narrative messages, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageFeed {
    messages: VecDeque<String>,
    #[serde(skip)]
    capacity: usize,
    #[serde(skip)]
    posted: u64,
}

impl MessageFeed {
    /// Create an empty feed that keeps at most `capacity` messages.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
            posted: 0,
        }
    }

    /// Append a message, dropping the oldest ones beyond capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
        self.posted += 1;
    }

    /// Replace the contents with a single message.
    pub fn reset(&mut self, message: impl Into<String>) {
        self.messages.clear();
        self.push(message);
    }

    /// Retained messages, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// The newest message.
    pub fn latest(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }

    /// Number of retained messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Count of every message ever pushed, including evicted ones.
    pub fn posted(&self) -> u64 {
        self.posted
    }

    /// Retained messages pushed after the feed's `posted` count was `mark`.
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &str> {
        let fresh = usize::try_from(self.posted.saturating_sub(mark)).unwrap_or(usize::MAX);
        let skip = self.messages.len().saturating_sub(fresh);
        self.iter().skip(skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_most_recent() {
        let mut feed = MessageFeed::new(3);
        for i in 0..5 {
            feed.push(format!("m{i}"));
        }
        let kept: Vec<_> = feed.iter().collect();
        assert_eq!(kept, ["m2", "m3", "m4"]);
        assert_eq!(feed.latest(), Some("m4"));
        assert_eq!(feed.posted(), 5);
    }

    #[test]
    fn reset_leaves_one() {
        let mut feed = MessageFeed::new(10);
        feed.push("a");
        feed.push("b");
        feed.reset("welcome");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.latest(), Some("welcome"));
    }

    #[test]
    fn since_returns_new_messages() {
        let mut feed = MessageFeed::new(10);
        feed.push("old");
        let mark = feed.posted();
        feed.push("new 1");
        feed.push("new 2");
        let fresh: Vec<_> = feed.since(mark).collect();
        assert_eq!(fresh, ["new 1", "new 2"]);
        assert_eq!(feed.since(feed.posted()).count(), 0);
    }

    #[test]
    fn since_limited_to_retained() {
        let mut feed = MessageFeed::new(2);
        let mark = feed.posted();
        for i in 0..4 {
            feed.push(format!("m{i}"));
        }
        let fresh: Vec<_> = feed.since(mark).collect();
        assert_eq!(fresh, ["m2", "m3"]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let mut feed = MessageFeed::new(10);
        feed.push("hello");
        let json = serde_json::to_value(&feed).unwrap();
        assert_eq!(json, serde_json::json!(["hello"]));
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(capacity in 1usize..20, count in 0usize..100) {
            let mut feed = MessageFeed::new(capacity);
            for i in 0..count {
                feed.push(i.to_string());
                prop_assert!(feed.len() <= capacity);
            }
            if count > 0 {
                let last = (count - 1).to_string();
                prop_assert_eq!(feed.latest(), Some(last.as_str()));
            }
        }
    }
}
