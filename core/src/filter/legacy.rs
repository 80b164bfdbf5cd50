//! Per-criterion product filtering.
//!
//! Every new criterion (or combination of criteria) needs another method on
//! [`ProductFilter`]. Kept to compare against [`super::SpecFilter`], which
//! handles the same cases without changing.

use solid_common::models::product::{Color, Product, Size};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.color == color)
    }

    pub fn by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.size == size)
    }

    pub fn by_color_and_size<'a>(
        &self,
        products: &'a [Product],
        color: Color,
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products
            .iter()
            .filter(move |p| p.color == color && p.size == size)
    }
}
