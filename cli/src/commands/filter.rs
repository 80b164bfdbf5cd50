use std::time::Instant;

use colored::*;
use solid_common::config::Config;
use solid_common::models::product::{self, Color, Product, Size};
use solid_common::success;
use solid_core::filter::legacy::ProductFilter;
use solid_core::filter::{ColorSpecification, Filter, SizeSpecification, SpecFilter, Specification};
use tracing::info_span;

use crate::terminal::{colors, format, print};

pub fn filter(color: Option<Color>, size: Option<Size>, legacy: bool, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("filter", legacy);
    let _guard = span.enter();

    let products: Vec<Product> = product::catalog();
    let start_time: Instant = Instant::now();

    let matched: Vec<&Product> = if legacy {
        legacy_filter(&products, color, size)
    } else {
        spec_filter(&products, color, size)
    };

    success!("filtered {} products in {:?}", products.len(), start_time.elapsed());

    if matched.is_empty() {
        print::section("no matching products", cfg);
        print::no_results("no products matched");
        return Ok(());
    }

    print::section("matching products", cfg);
    print_products(&matched, cfg);
    print_summary(matched.len(), products.len(), cfg);
    Ok(())
}

fn spec_filter(products: &[Product], color: Option<Color>, size: Option<Size>) -> Vec<&Product> {
    let color_spec: Option<ColorSpecification> = color.map(ColorSpecification::new);
    let size_spec: Option<SizeSpecification> = size.map(SizeSpecification::new);

    let mut specs: Vec<&dyn Specification<Product>> = Vec::new();
    if let Some(spec) = &color_spec {
        specs.push(spec);
    }
    if let Some(spec) = &size_spec {
        specs.push(spec);
    }

    let filter = SpecFilter::new();
    filter.filter(products, &specs).collect()
}

fn legacy_filter(products: &[Product], color: Option<Color>, size: Option<Size>) -> Vec<&Product> {
    let filter = ProductFilter::new();
    match (color, size) {
        (Some(color), Some(size)) => filter.by_color_and_size(products, color, size).collect(),
        (Some(color), None) => filter.by_color(products, color).collect(),
        (None, Some(size)) => filter.by_size(products, size).collect(),
        (None, None) => products.iter().collect(),
    }
}

fn print_products(products: &[&Product], cfg: &Config) {
    for (idx, product) in products.iter().enumerate() {
        match cfg.quiet {
            2 => print::bullet(product.to_string()),
            _ => print::entry(idx, &product.name, &format::product_fields(product)),
        }
        if cfg.quiet < 2 && idx + 1 != products.len() {
            print::blank();
        }
    }
}

fn print_summary(matched: usize, total: usize, cfg: &Config) {
    let output: ColoredString = format!(
        "Filter Complete: {} of {} products matched",
        format::count(matched),
        format::count(total)
    )
    .color(colors::TEXT_DEFAULT);

    print::summary(&output.to_string(), cfg);
}
