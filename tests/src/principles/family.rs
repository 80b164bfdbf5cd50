#![cfg(test)]
use solid_common::models::person::Person;
use solid_core::relationships::{RelationshipBrowser, Relationships, Research};

fn two_generations() -> Relationships {
    let john = Person::new("John");
    let james = Person::new("James");
    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&john, &james);
    relationships.add_parent_and_child(&john, &Person::new("Ann"));
    relationships.add_parent_and_child(&james, &Person::new("Lily"));
    relationships
}

#[test]
fn research_lists_children_in_order() {
    let research = Research::new(Box::new(two_generations()));

    let names: Vec<String> = research
        .children_of(&Person::new("John"))
        .into_iter()
        .map(|p| p.name.clone())
        .collect();

    assert_eq!(names, ["James", "Ann"]);
}

#[test]
fn every_child_points_back_to_its_parent() {
    let relationships = two_generations();

    for parent in ["John", "James"] {
        for child in relationships.find_all_children_of(parent) {
            let parents = relationships.find_all_parents_of(&child.name);
            assert_eq!(parents.len(), 1);
            assert_eq!(parents[0].name, parent);
        }
    }
}

#[test]
fn grandchildren_are_not_children() {
    let relationships = two_generations();
    let names: Vec<&str> = relationships
        .find_all_children_of("John")
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    assert!(!names.contains(&"Lily"));
}
