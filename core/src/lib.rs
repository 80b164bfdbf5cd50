//! # SOLID by example
//!
//! One module per principle, each a small working program rather than a
//! diagram:
//!
//! * **[`filter`]**: Open/Closed. A predicate filter engine extended through specifications.
//! * **[`relationships`]**: Dependency Inversion. High-level research over a browser trait.
//! * **[`machines`]**: Interface Segregation. Narrow printer/scanner/copier traits.
//! * **[`shapes`]**: Liskov Substitution. Rectangles and squares without a fragile hierarchy.
//! * **[`journal`]** and **[`persistence`]**: Single Responsibility. Data and storage kept apart.

pub mod filter;
pub mod journal;
pub mod machines;
pub mod persistence;
pub mod relationships;
pub mod shapes;
