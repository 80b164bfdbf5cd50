#![cfg(test)]
use solid_common::models::product::{self, Color, Product, Size};
use solid_core::filter::{
    ColorSpecification, Filter, SizeSpecification, SpecFilter, Specification, SpecificationExt,
};

/// Every color/size combination, plus a few duplicates, so the laws are
/// checked on more than the demo catalog.
fn inventory() -> Vec<Product> {
    let sizes = [Size::Small, Size::Medium, Size::Large, Size::XLarge, Size::XXLarge];
    let mut items: Vec<Product> = Color::ALL
        .iter()
        .flat_map(|&color| {
            sizes
                .iter()
                .map(move |&size| Product::new(format!("{color}-{size}"), color, size))
        })
        .collect();
    items.extend(product::catalog());
    items
}

fn single_specs() -> Vec<Box<dyn Specification<Product>>> {
    vec![
        Box::new(ColorSpecification::new(Color::Green)),
        Box::new(ColorSpecification::new(Color::Yellow)),
        Box::new(SizeSpecification::new(Size::Large)),
        Box::new(SizeSpecification::new(Size::XXLarge)),
        Box::new(|p: &Product| p.name.starts_with('R')),
    ]
}

#[test]
fn identity_without_specs() {
    let items = inventory();
    let filter = SpecFilter::new();

    let result: Vec<&Product> = filter.filter(&items, &[]).collect();
    assert_eq!(result, items.iter().collect::<Vec<_>>());
}

#[test]
fn single_spec_keeps_satisfying_items_in_order() {
    let items = inventory();
    let filter = SpecFilter::new();

    for spec in single_specs() {
        let specs: [&dyn Specification<Product>; 1] = [spec.as_ref()];
        let result: Vec<&Product> = filter.filter(&items, &specs).collect();
        let expected: Vec<&Product> = items.iter().filter(|p| spec.is_satisfied(p)).collect();
        assert_eq!(result, expected);
    }
}

#[test]
fn two_specs_equal_filtering_twice() {
    let items = inventory();
    let filter = SpecFilter::new();
    let specs = single_specs();

    for first in &specs {
        for second in &specs {
            let both: [&dyn Specification<Product>; 2] = [first.as_ref(), second.as_ref()];
            let only_first: [&dyn Specification<Product>; 1] = [first.as_ref()];
            let only_second: [&dyn Specification<Product>; 1] = [second.as_ref()];

            let at_once: Vec<&Product> = filter.filter(&items, &both).collect();
            let chained: Vec<&Product> = filter
                .filter(filter.filter(&items, &only_first), &only_second)
                .collect();
            assert_eq!(at_once, chained);
        }
    }
}

#[test]
fn conjunction_matches_spec_list() {
    let items = inventory();
    let filter = SpecFilter::new();
    let green = ColorSpecification::new(Color::Green);
    let large = SizeSpecification::new(Size::Large);
    let combined = green.and(large);

    let listed: [&dyn Specification<Product>; 2] = [&green, &large];
    let single: [&dyn Specification<Product>; 1] = [&combined];

    let from_list: Vec<&Product> = filter.filter(&items, &listed).collect();
    let from_and: Vec<&Product> = filter.filter(&items, &single).collect();
    assert_eq!(from_list, from_and);
    assert!(!from_and.is_empty());
}

#[test]
fn empty_input_stays_empty() {
    let items: Vec<Product> = Vec::new();
    let filter = SpecFilter::new();

    for spec in single_specs() {
        let specs: [&dyn Specification<Product>; 1] = [spec.as_ref()];
        assert_eq!(filter.filter(&items, &specs).count(), 0);
    }
    assert_eq!(filter.filter(&items, &[]).count(), 0);
}

#[test]
fn calling_again_starts_over() {
    let items = inventory();
    let filter = SpecFilter::new();
    let blue = ColorSpecification::new(Color::Blue);
    let specs: [&dyn Specification<Product>; 1] = [&blue];

    let mut partial = filter.filter(&items, &specs);
    let first = partial.next();
    drop(partial);

    assert_eq!(filter.filter(&items, &specs).next(), first);
}
