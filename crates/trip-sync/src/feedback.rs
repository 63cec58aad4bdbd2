//! Feedback Channel
//!
//! Short status lines shown under the trip controls and under the item list.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Trips,
    Items,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Err,
    Info,
}

impl Tone {
    /// CSS class the renderer attaches to the message
    pub fn class(self) -> &'static str {
        match self {
            Tone::Ok => "text-success",
            Tone::Err => "text-danger",
            Tone::Info => "text-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
    /// Bumped every time the region's message is replaced
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackBoard {
    messages: HashMap<Region, Message>,
    next_seq: u64,
}

impl FeedbackBoard {
    pub fn set(&mut self, region: Region, text: impl Into<String>, tone: Tone) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.messages.insert(region, Message { text: text.into(), tone, seq });
        seq
    }

    pub fn ok(&mut self, region: Region, text: impl Into<String>) -> u64 {
        self.set(region, text, Tone::Ok)
    }

    pub fn err(&mut self, region: Region, text: impl Into<String>) -> u64 {
        self.set(region, text, Tone::Err)
    }

    /// Blank the region (an empty info line)
    pub fn clear(&mut self, region: Region) -> u64 {
        self.set(region, "", Tone::Info)
    }

    /// Clear only if `seq` is still the region's current message
    pub fn clear_if(&mut self, region: Region, seq: u64) -> bool {
        match self.messages.get(&region) {
            Some(message) if message.seq == seq => {
                self.messages.remove(&region);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, region: Region) -> Option<&Message> {
        self.messages.get(&region).filter(|m| !m.text.is_empty())
    }
}
