//! # Product Model
//!
//! Products are the items run through the filter engine. Each one has a
//! name, a [`Color`] and a [`Size`], both parseable from user input.

use std::fmt;
use std::str::FromStr;

use crate::error::SolidError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Green,
    Blue,
    White,
    Yellow,
    Black,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Green,
        Color::Blue,
        Color::White,
        Color::Yellow,
        Color::Black,
    ];
}

impl FromStr for Color {
    type Err = SolidError;

    /// Parses a color name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "white" => Ok(Color::White),
            "yellow" => Ok(Color::Yellow),
            "black" => Ok(Color::Black),
            _ => Err(SolidError::UnknownColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Black => "Black",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Size {
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
}

impl FromStr for Size {
    type Err = SolidError;

    /// Parses a size name. Accepts the short forms `s`, `m`, `l`, `xl` and `xxl`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(Size::Small),
            "medium" | "m" => Ok(Size::Medium),
            "large" | "l" => Ok(Size::Large),
            "xlarge" | "xl" => Ok(Size::XLarge),
            "xxlarge" | "xxl" => Ok(Size::XXLarge),
            _ => Err(SolidError::UnknownSize(s.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::XLarge => "XLarge",
            Size::XXLarge => "XXLarge",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Color: {}, Size: {}",
            self.name, self.color, self.size
        )
    }
}

/// The demo catalog used by the command line.
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new("Yuoof", Color::Green, Size::Medium),
        Product::new("Riao", Color::Green, Size::Large),
        Product::new("Muuf", Color::Green, Size::Medium),
        Product::new("Scroing", Color::Blue, Size::XLarge),
        Product::new("Riang", Color::Blue, Size::XLarge),
        Product::new("Tzing", Color::Black, Size::Large),
    ]
}
