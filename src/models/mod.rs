pub mod chat_log;
pub mod emote;
pub mod message;
