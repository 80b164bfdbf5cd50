#![cfg(test)]
use solid_common::models::product::{Color, Product, Size};
use solid_core::filter::{ColorSpecification, Filter, SizeSpecification, SpecFilter, Specification};

#[test]
fn green_medium_out_of_three() {
    let items = vec![
        Product::new("first", Color::Green, Size::Medium),
        Product::new("second", Color::Green, Size::Large),
        Product::new("third", Color::Blue, Size::XLarge),
    ];
    let green = ColorSpecification::new(Color::Green);
    let medium = SizeSpecification::new(Size::Medium);
    let specs: [&dyn Specification<Product>; 2] = [&green, &medium];

    let filter = SpecFilter::new();
    let result: Vec<&Product> = filter.filter(&items, &specs).collect();

    assert_eq!(result, [&items[0]]);
}

#[test]
fn single_item_without_specs_is_unchanged() {
    let items = vec![Product::new("only", Color::Green, Size::Medium)];

    let filter = SpecFilter::new();
    let result: Vec<&Product> = filter.filter(&items, &[]).collect();

    assert_eq!(result, [&items[0]]);
}

#[test]
fn ad_hoc_closure_joins_named_specs() {
    let items = solid_common::models::product::catalog();
    let blue = ColorSpecification::new(Color::Blue);
    let starts_with_r = |p: &Product| p.name.starts_with('R');
    let specs: [&dyn Specification<Product>; 2] = [&blue, &starts_with_r];

    let filter = SpecFilter::new();
    let names: Vec<&str> = filter
        .filter(&items, &specs)
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, ["Riang"]);
}
