//! The **predicate filter engine**.
//!
//! Filtering is closed for modification and open for extension: [`SpecFilter`]
//! never changes when new criteria appear, callers just hand it more
//! [`Specification`]s. The [`legacy`] module keeps the per-criterion filter
//! this design replaces.
//!
//! **Contract:**
//! * The output is a subsequence of the input, in input order.
//! * An item is kept iff every specification holds for it. No specifications keeps everything.
//! * Specifications run in the order given and stop at the first rejection.
//! * Results are lazy borrows of the input; nothing is copied or mutated.

use tracing::debug;

pub mod legacy;
pub mod specification;

pub use specification::{
    And, ColorSpecification, SizeSpecification, Specification, SpecificationExt,
};

/// Defines how a collection is narrowed down by a set of specifications.
pub trait Filter<T> {
    /// Lazily yields the items of `items` satisfying every spec in `specs`.
    ///
    /// Each call starts from scratch. Accepts the output of a previous call,
    /// so filters can be chained.
    fn filter<'a, 's, I>(
        &self,
        items: I,
        specs: &'s [&'s dyn Specification<T>],
    ) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>;
}

/// Logical AND across all supplied specifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecFilter;

impl SpecFilter {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Filter<T> for SpecFilter {
    fn filter<'a, 's, I>(
        &self,
        items: I,
        specs: &'s [&'s dyn Specification<T>],
    ) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        debug!(specs = specs.len(), "filtering with specifications");
        items
            .into_iter()
            .filter(move |item| specs.iter().all(|spec| spec.is_satisfied(item)))
    }
}
