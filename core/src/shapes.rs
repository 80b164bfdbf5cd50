//! # Shapes
//!
//! A square is not modelled as a rectangle with a constraint bolted on.
//! [`Rectangle`] and [`Square`] are unrelated immutable values that share the
//! [`Shape`] trait, so code written against `Shape` behaves the same for both
//! and a square can never end up with two different sides.

use std::fmt;

pub trait Shape {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn with_width(self, width: u32) -> Self {
        Self { width, ..self }
    }

    pub fn with_height(self, height: u32) -> Self {
        Self { height, ..self }
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn with_side(self, side: u32) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle::new(square.side, square.side)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.width, self.height)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.side, self.side)
    }
}

/// Total area of a mixed set of shapes.
pub fn total_area(shapes: &[&dyn Shape]) -> u64 {
    shapes.iter().map(|s| s.area()).sum()
}
