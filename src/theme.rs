use iced::{widget::button, Background, Color, Theme};

pub const ACCENT: Color = Color::from_rgb8(0x00, 0x8c, 0xba);
pub const DRAWER_BG: Color = Color::from_rgb8(0x0b, 0x1d, 0x2a);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x10, 0x29, 0x3a);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xe8, 0xf4, 0xfa);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0x9d, 0xb4, 0xc4);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xf2, 0xfa, 0xfd);

// Chart palette: dark blue for emphasis, light blue for regular bars,
// orange for the worst performers.
pub const CHART_PRIMARY: Color = Color::from_rgba8(0, 77, 153, 0.9);
pub const CHART_SECONDARY: Color = Color::from_rgba8(0, 140, 186, 0.9);
pub const CHART_HIGHLIGHT: Color = Color::from_rgba8(255, 102, 0, 0.9);
pub const CHART_TEXT: Color = Color::from_rgb8(0x33, 0x33, 0x33);
pub const GRID_LINE: Color = Color::from_rgba8(0, 0, 0, 0.05);

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = ACCENT;

    if matches!(status, button::Status::Hovered) {
        background.a = 0.85;
    }

    if matches!(status, button::Status::Pressed) {
        background.a = 0.7;
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_ON_ACCENT,
        ..Default::default()
    }
}
