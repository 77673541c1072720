use crate::models::message::ChatterMessage;

/// Events delivered from the IRC reader task to the UI thread.
#[derive(Debug)]
pub enum AppEvent {
    Connected { channel: String },
    Disconnected { channel: String },
    Message(ChatterMessage),
}
