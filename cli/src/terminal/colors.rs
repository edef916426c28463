use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 34, g: 197, b: 94 };
pub const ACCENT: Color = Color::TrueColor { r: 134, g: 239, b: 172 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ERROR: Color = Color::Red;
pub const BUSY: Color = Color::Yellow;

pub const IPV4_ADDR: Color = Color::TrueColor { r: 96, g: 165, b: 250 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 192, g: 132, b: 252 };
