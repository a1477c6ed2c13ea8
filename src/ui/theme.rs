use ratatui::style::Color;

pub const OPERATION_ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);
pub const DIGIT_BG: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const ACTION_BG: Color = Color::Rgb(0xaa, 0xaa, 0xaa);
pub const HIGHLIGHT_BG: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const READOUT_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
