//! # Family Relationships
//!
//! The high-level [`Research`] service answers questions about a family tree
//! without knowing how the tree is stored.
//!
//! **Architectural Note:**
//! [`Research`] depends only on the [`RelationshipBrowser`] abstraction. The
//! low-level [`Relationships`] store implements it, and is free to change its
//! internal layout without touching the high-level code.

use solid_common::models::person::{Person, Relationship};
use tracing::debug;

/// Defines the queries high-level code may run against a family tree.
pub trait RelationshipBrowser {
    /// Returns every person `name` is a parent of, in insertion order.
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;

    /// Returns every person `name` is a child of, in insertion order.
    fn find_all_parents_of(&self, name: &str) -> Vec<&Person>;
}

/// Low-level storage of `(from, relationship, to)` edges.
#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `parent` as a parent of `child`, and `child` as a child of `parent`.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        debug!(parent = %parent, child = %child, "adding relationship");
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    fn related_to(&self, name: &str, relationship: Relationship) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|(from, rel, _)| from.name == name && *rel == relationship)
            .map(|(_, _, to)| to)
            .collect()
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.related_to(name, Relationship::Parent)
    }

    fn find_all_parents_of(&self, name: &str) -> Vec<&Person> {
        self.related_to(name, Relationship::Child)
    }
}

/// High-level service reporting on a family tree.
pub struct Research {
    browser: Box<dyn RelationshipBrowser>,
}

impl Research {
    pub fn new(browser: Box<dyn RelationshipBrowser>) -> Self {
        Self { browser }
    }

    /// Returns the children of `parent`.
    pub fn children_of(&self, parent: &Person) -> Vec<&Person> {
        let children = self.browser.find_all_children_of(&parent.name);
        for child in &children {
            debug!("Parent {} has a child named {}", parent.name, child.name);
        }
        children
    }

    /// Returns the parents of `child`.
    pub fn parents_of(&self, child: &Person) -> Vec<&Person> {
        self.browser.find_all_parents_of(&child.name)
    }
}
