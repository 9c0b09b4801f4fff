mod api;
mod app;
mod charts;
mod config;
mod locale;
mod message;
mod reports;
mod screens;
mod theme;

use app::App;
use iced::Settings;
use lucide_icons::LUCIDE_FONT_BYTES;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("voos_dashboard=info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .settings(Settings {
            fonts: vec![LUCIDE_FONT_BYTES.into()],
            ..Default::default()
        })
        .window_size((1280.0, 900.0))
        .run()
}
