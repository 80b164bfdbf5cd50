use solid_common::config::Config;
use solid_common::models::person::Person;
use solid_common::{SolidError, success};
use solid_core::relationships::{Relationships, Research};

use crate::terminal::{format, print};

/// The family every run starts from: John, parent of James and Ann.
pub fn family() -> Relationships {
    let parent = Person::new("John");
    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&parent, &Person::new("James"));
    relationships.add_parent_and_child(&parent, &Person::new("Ann"));
    relationships
}

pub fn children(name: &str, cfg: &Config) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SolidError::InvalidArgument("a name is required".to_string()).into());
    }

    let research = Research::new(Box::new(family()));
    let parent = Person::new(name);

    let children = research.children_of(&parent);
    if children.is_empty() {
        print::section(&format!("{parent} has no children"), cfg);
        print::no_results(&format!("no children recorded for {parent}"));
        return Ok(());
    }

    print::section(&format!("children of {parent}"), cfg);
    for child in &children {
        print::bullet(format!("Parent {parent} has a child named {child}"));
    }

    success!("{} children found for {}", format::count(children.len()), parent);
    Ok(())
}
