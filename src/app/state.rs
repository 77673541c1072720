use crate::models::chat_log::ChatLog;

/// Everything the overlay window needs to draw a frame.
pub struct AppState {
    pub chat: ChatLog,
}

impl AppState {
    pub fn new(message_count_limit: usize) -> Self {
        Self {
            chat: ChatLog::new(message_count_limit),
        }
    }
}
