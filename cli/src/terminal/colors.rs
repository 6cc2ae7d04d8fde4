use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 190 };
pub const ACCENT: Color = Color::TrueColor { r: 240, g: 190, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 215, g: 215, b: 215 };

pub const IPV4_ADDR: Color = Color::TrueColor { r: 110, g: 170, b: 250 };
pub const IPV4_PREFIX: Color = Color::TrueColor { r: 70, g: 120, b: 200 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 190, g: 140, b: 250 };
pub const IPV6_PREFIX: Color = Color::TrueColor { r: 140, g: 100, b: 200 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 230, g: 150, b: 110 };

pub const GOOD: Color = Color::Green;
pub const BAD: Color = Color::Red;
