mod app_layout;
mod chat_log;

pub use app_layout::App;
