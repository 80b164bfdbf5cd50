use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 102,
    g: 217,
    b: 239,
};
pub const ACCENT: Color = Color::TrueColor {
    r: 230,
    g: 219,
    b: 116,
};
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor {
    r: 220,
    g: 220,
    b: 220,
};
pub const NUMBER: Color = Color::TrueColor {
    r: 174,
    g: 129,
    b: 255,
};
