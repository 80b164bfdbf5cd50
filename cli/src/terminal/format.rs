use colored::*;
use solid_common::models::product::{Color as ProductColor, Product};

use crate::terminal::{colors, print::Field};

pub fn product_color(color: ProductColor) -> ColoredString {
    let name = color.to_string();
    match color {
        ProductColor::Green => name.green(),
        ProductColor::Blue => name.blue(),
        ProductColor::White => name.white(),
        ProductColor::Yellow => name.yellow(),
        ProductColor::Black => name.bright_black(),
    }
}

pub fn product_fields(product: &Product) -> Vec<Field<'static>> {
    vec![
        ("Color", product_color(product.color)),
        ("Size", product.size.to_string().color(colors::ACCENT)),
    ]
}

pub fn count(n: impl ToString) -> ColoredString {
    n.to_string().color(colors::NUMBER).bold()
}
