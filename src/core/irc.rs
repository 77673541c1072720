use chrono::Local;
use eyre::Report;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use twitch_irc::login::StaticLoginCredentials;
use twitch_irc::message::{PrivmsgMessage, ServerMessage};
use twitch_irc::{ClientConfig, SecureTCPTransport, TwitchIRCClient};

use crate::events::app_event::AppEvent;
use crate::models::emote;
use crate::models::message::ChatterMessage;

type IrcClient = TwitchIRCClient<SecureTCPTransport, StaticLoginCredentials>;

/// Receive-only link between one Twitch channel's chat and the UI event
/// channel.
///
/// The IRC protocol itself, TLS, and reconnection live in the client
/// library; this only translates its server messages into [`AppEvent`]s.
/// After an automatic reconnect the re-join surfaces as another
/// `Connected` notice.
pub struct IrcBridge {
    client: IrcClient,
    channel: String,
    reader_task: JoinHandle<()>,
}

impl IrcBridge {
    /// Creates the anonymous IRC client and spawns the reader task on the
    /// given runtime. Call [`IrcBridge::connect`] to actually join.
    pub fn spawn(channel: String, event_tx: mpsc::Sender<AppEvent>, runtime: &Handle) -> Self {
        let (mut incoming, client) = IrcClient::new(ClientConfig::default());

        let reader_channel = channel.clone();
        let reader_task = runtime.spawn(async move {
            while let Some(message) = incoming.recv().await {
                forward(&reader_channel, message, &event_tx).await;
            }
            tracing::info!("IRC message stream closed");
        });

        Self {
            client,
            channel,
            reader_task,
        }
    }

    /// Joins the configured channel. Safe to call repeatedly; the client
    /// tracks wanted channels as a set.
    pub fn connect(&self) -> Result<(), Report> {
        tracing::info!("Joining channel: {}", self.channel);
        self.client.join(self.channel.clone())?;
        Ok(())
    }

    /// Leaves the channel. Already-displayed messages stay in the log.
    pub fn disconnect(&self) {
        tracing::info!("Leaving channel: {}", self.channel);
        self.client.part(self.channel.clone());
    }
}

impl Drop for IrcBridge {
    fn drop(&mut self) {
        self.reader_task.abort();
    }
}

async fn forward(channel: &str, message: ServerMessage, event_tx: &mpsc::Sender<AppEvent>) {
    let event = match message {
        ServerMessage::Join(join) if join.channel_login == channel => AppEvent::Connected {
            channel: join.channel_login,
        },
        ServerMessage::Part(part) if part.channel_login == channel => AppEvent::Disconnected {
            channel: part.channel_login,
        },
        ServerMessage::Privmsg(msg) => AppEvent::Message(chatter_message(msg)),
        other => {
            tracing::trace!(?other, "ignoring server message");
            return;
        }
    };

    if event_tx.send(event).await.is_err() {
        tracing::error!("UI event channel closed, dropping chat event");
    }
}

fn chatter_message(msg: PrivmsgMessage) -> ChatterMessage {
    // Tolerate absent tags: no color and no emotes both render fine.
    let emotes = msg
        .source
        .tags
        .0
        .get("emotes")
        .and_then(|value| value.as_deref())
        .map(emote::parse_emote_tag)
        .unwrap_or_default();

    ChatterMessage {
        sender_name: msg.sender.name,
        sender_color: msg.name_color.map(|color| (color.r, color.g, color.b)),
        text: msg.message_text.trim_end().to_owned(),
        emotes,
        timestamp: Local::now(),
    }
}
