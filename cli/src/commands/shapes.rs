use solid_common::config::Config;
use solid_core::shapes::{self, Rectangle, Shape, Square};

use crate::terminal::{format, print};

pub fn shapes(width: u32, height: u32, side: u32, cfg: &Config) -> anyhow::Result<()> {
    let rectangle = Rectangle::new(width, height);
    let square = Square::default().with_side(side);

    print::section("areas", cfg);
    print::bullet(format!(
        "Rectangle: {} has an area of {}",
        rectangle,
        format::count(rectangle.area())
    ));
    print::bullet(format!(
        "Square: {} has an area of {}",
        square,
        format::count(square.area())
    ));

    let all: [&dyn Shape; 2] = [&rectangle, &square];
    let total = shapes::total_area(&all);
    print::bullet(format!("Together they cover {}", format::count(total)));
    Ok(())
}
