use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PENDING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const BADGE_BACKGROUND: Color = Color::Rgb(0x7d, 0xd3, 0xfc);
pub const BADGE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const CARD_SELECTED: Color = Color::Rgb(0x26, 0x26, 0x26);
