use crate::{
    app::{config::Config, state::AppState},
    models::{
        chat_log::ChatLogEntry,
        message::{ChatMessage, MessageFragment},
    },
};
use eframe::egui::{self, Color32, Image, RichText, ScrollArea, Vec2};

const SYSTEM_COLOR: Color32 = Color32::from_gray(150);
const DEFAULT_SENDER_COLOR: Color32 = Color32::from_gray(160);

pub fn draw_chat_log(ui: &mut egui::Ui, state: &AppState, config: &Config) {
    ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in state.chat.iter() {
                draw_entry(ui, entry, config);
            }
        });
}

fn draw_entry(ui: &mut egui::Ui, entry: &ChatLogEntry, config: &Config) {
    ui.horizontal_wrapped(|ui| {
        if config.show_timestamps {
            let stamp = entry.message.timestamp().format("%H:%M").to_string();
            ui.label(RichText::new(stamp).color(SYSTEM_COLOR).small());
        }

        match &entry.message {
            ChatMessage::System(notice) => {
                ui.label(RichText::new(&notice.text).color(SYSTEM_COLOR).italics());
            }
            ChatMessage::Chatter(msg) => {
                let color = msg
                    .sender_color
                    .map(|(r, g, b)| Color32::from_rgb(r, g, b))
                    .unwrap_or(DEFAULT_SENDER_COLOR);
                let sender = RichText::new(format!("{}:", msg.sender_name)).color(color);
                ui.label(sender);

                for fragment in &entry.fragments {
                    match fragment {
                        MessageFragment::Text(text) => {
                            ui.label(text);
                        }
                        MessageFragment::Emote(emote) => {
                            ui.add(
                                Image::new(emote.url.as_str())
                                    .max_size(Vec2::splat(config.emote_size)),
                            )
                            .on_hover_text(&emote.name);
                        }
                    }
                }
            }
        }
    });
}
