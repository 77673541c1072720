use std::collections::VecDeque;

use crate::models::message::{ChatMessage, MessageFragment};
use crate::utils::text_processing;

/// One rendered line in the log: the message plus its display fragments,
/// materialized once on append.
#[derive(Clone, Debug)]
pub struct ChatLogEntry {
    pub id: u64,
    pub message: ChatMessage,
    pub fragments: Vec<MessageFragment>,
}

impl ChatLogEntry {
    fn new(id: u64, message: ChatMessage) -> Self {
        let fragments = match &message {
            ChatMessage::Chatter(msg) => {
                text_processing::message_fragments(&msg.text, &msg.emotes)
            }
            ChatMessage::System(notice) => vec![MessageFragment::Text(notice.text.clone())],
        };
        Self {
            id,
            message,
            fragments,
        }
    }
}

/// Fixed-capacity message history, oldest first. Capacity `0` keeps
/// everything.
#[derive(Debug, Default)]
pub struct ChatLog {
    capacity: usize,
    next_id: u64,
    entries: VecDeque<ChatLogEntry>,
}

impl ChatLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_id: 0,
            entries: VecDeque::new(),
        }
    }

    /// Appends a message, returning the evicted oldest entry once the log
    /// is over capacity.
    pub fn append(&mut self, message: ChatMessage) -> Option<ChatLogEntry> {
        let entry = ChatLogEntry::new(self.next_id, message);
        self.next_id += 1;
        self.entries.push_back(entry);
        if self.capacity != 0 && self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(text: &str) -> ChatMessage {
        ChatMessage::system(text)
    }

    fn texts(log: &ChatLog) -> Vec<String> {
        log.iter()
            .map(|entry| match &entry.message {
                ChatMessage::System(msg) => msg.text.clone(),
                ChatMessage::Chatter(msg) => msg.text.clone(),
            })
            .collect()
    }

    #[test]
    fn bounded_log_keeps_most_recent() {
        let mut log = ChatLog::new(2);
        assert!(log.append(system("A")).is_none());
        assert!(log.append(system("B")).is_none());

        let evicted = log.append(system("C")).expect("third append must evict");
        match evicted.message {
            ChatMessage::System(msg) => assert_eq!(msg.text, "A"),
            _ => panic!("expected the system message A"),
        }
        assert_eq!(texts(&log), vec!["B", "C"]);
    }

    #[test]
    fn log_holds_min_of_appends_and_capacity() {
        for capacity in [1, 3, 5] {
            for appends in 0..8 {
                let mut log = ChatLog::new(capacity);
                for i in 0..appends {
                    log.append(system(&i.to_string()));
                }
                assert_eq!(log.len(), appends.min(capacity));
                let expected: Vec<String> = (appends.saturating_sub(capacity)..appends)
                    .map(|i| i.to_string())
                    .collect();
                assert_eq!(texts(&log), expected);
            }
        }
    }

    #[test]
    fn capacity_zero_is_unbounded() {
        let mut log = ChatLog::new(0);
        for i in 0..100 {
            assert!(log.append(system(&i.to_string())).is_none());
        }
        assert_eq!(log.len(), 100);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = ChatLog::new(4);
        log.append(system("A"));
        log.append(system("B"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn entry_ids_are_monotonic_across_evictions() {
        let mut log = ChatLog::new(1);
        log.append(system("A"));
        log.append(system("B"));
        log.append(system("C"));
        let ids: Vec<u64> = log.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn system_entries_carry_a_single_text_fragment() {
        let mut log = ChatLog::new(0);
        log.append(system("Connected to channel: shroud"));
        let entry = log.iter().next().unwrap();
        assert_eq!(
            entry.fragments,
            vec![MessageFragment::Text(
                "Connected to channel: shroud".to_owned()
            )]
        );
    }
}
