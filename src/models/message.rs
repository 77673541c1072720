use super::emote::{Emote, EmoteSpan};
use chrono::{DateTime, Local};

#[derive(Clone, Debug, PartialEq)]
pub enum MessageFragment {
    Text(String),
    Emote(Emote),
}

/// One chat line as received from the channel, before fragment
/// materialization.
#[derive(Clone, Debug)]
pub struct ChatterMessage {
    pub sender_name: String,
    pub sender_color: Option<(u8, u8, u8)>,
    pub text: String,
    pub emotes: Vec<EmoteSpan>,
    pub timestamp: DateTime<Local>,
}

/// A connect/disconnect notice shown inline in the chat log.
#[derive(Clone, Debug)]
pub struct SystemMessage {
    pub text: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Clone, Debug)]
pub enum ChatMessage {
    System(SystemMessage),
    Chatter(ChatterMessage),
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        ChatMessage::System(SystemMessage {
            text: text.into(),
            timestamp: Local::now(),
        })
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        match self {
            ChatMessage::System(msg) => msg.timestamp,
            ChatMessage::Chatter(msg) => msg.timestamp,
        }
    }
}
