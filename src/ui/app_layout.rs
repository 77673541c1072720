use crate::{
    app::{config::Config, reducer, state::AppState},
    core::irc::IrcBridge,
    events::app_event::AppEvent,
    ui::chat_log,
};
use eframe::egui::{self, FontDefinitions};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub struct App {
    state: AppState,
    config: Config,
    event_rx: mpsc::Receiver<AppEvent>,
    bridge: IrcBridge,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, runtime: Handle) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        install_system_fonts(&cc.egui_ctx);
        apply_text_style(&cc.egui_ctx, &config);

        let (event_tx, event_rx) = mpsc::channel(100);

        let bridge = IrcBridge::spawn(config.channel.clone(), event_tx, &runtime);
        if let Err(e) = bridge.connect() {
            tracing::error!("Failed to join channel {}: {}", config.channel, e);
        }

        let state = AppState::new(config.message_count_limit);
        Self {
            state,
            config,
            event_rx,
            bridge,
        }
    }
}

impl eframe::App for App {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Fully transparent so only the chat lines show over the stream.
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.event_rx.try_recv() {
            reducer::reduce(&mut self.state, event);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                chat_log::draw_chat_log(ui, &self.state, &self.config);
            });

        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.bridge.disconnect();
    }
}

fn apply_text_style(ctx: &egui::Context, config: &Config) {
    let mut style = (*ctx.style()).clone();
    for font_id in style.text_styles.values_mut() {
        font_id.size = config.font_size;
    }
    ctx.set_style(style);
}

/// Registers CJK-capable system fonts with egui. Chat display names and
/// messages are frequently outside the bundled fonts' glyph range.
fn install_system_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let preferred = [
        "Microsoft YaHei",
        "PingFang SC",
        "Noto Sans CJK SC",
        "Yu Gothic",
        "Hiragino Sans",
        "Noto Sans CJK JP",
        "Malgun Gothic",
        "Apple SD Gothic Neo",
        "Noto Sans CJK KR",
    ];

    let mut loaded_font_count = 0;
    for font_name in preferred {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(font_name)],
            ..Default::default()
        };
        let Some(font_id) = db.query(&query) else {
            continue;
        };
        let Some(font_source) = db.face_source(font_id) else {
            continue;
        };
        let font_data = match font_source.0 {
            fontdb::Source::Binary(data) => Some(data.as_ref().as_ref().to_vec()),
            fontdb::Source::File(path) => std::fs::read(path).ok(),
            fontdb::Source::SharedFile(path, _) => std::fs::read(path).ok(),
        };
        let Some(font_data) = font_data else {
            continue;
        };

        let egui_font_name = format!("system-{}", font_name.to_lowercase().replace(' ', "_"));
        fonts.font_data.insert(
            egui_font_name.clone(),
            egui::FontData::from_owned(font_data).into(),
        );
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push(egui_font_name);

        tracing::info!("Loaded system font: {}", font_name);
        loaded_font_count += 1;
    }

    if loaded_font_count == 0 {
        tracing::warn!("No CJK-capable system fonts found. Default fonts will be used.");
    }

    ctx.set_fonts(fonts);
}
