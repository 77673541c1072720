use super::state::AppState;
use crate::events::app_event::AppEvent;
use crate::models::message::ChatMessage;

pub fn reduce(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Connected { channel } => {
            push(state, ChatMessage::system(format!("Connected to channel: {channel}")));
        }
        AppEvent::Disconnected { channel } => {
            push(
                state,
                ChatMessage::system(format!("Disconnected from channel: {channel}")),
            );
        }
        AppEvent::Message(message) => {
            push(state, ChatMessage::Chatter(message));
        }
    }
}

fn push(state: &mut AppState, message: ChatMessage) {
    if let Some(evicted) = state.chat.append(message) {
        tracing::trace!(id = evicted.id, "dropped oldest message");
    }
}
