use ratatui::style::Color;

pub const COIN_GOLD: Color = Color::Rgb(0xf5, 0xb7, 0x32);
pub const COIN_SHADE: Color = Color::Rgb(0xc2, 0x85, 0x1c);
pub const GHOST_TINT: Color = Color::Rgb(0xfd, 0xe6, 0x8a);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const INDICATOR_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const INDICATOR_BG: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
