//! Specifications: reusable, named predicates over an item.
//!
//! Any `Fn(&T) -> bool` is already a specification, so ad-hoc criteria do not
//! need a dedicated type. Named variants exist for the criteria the command
//! line exposes.

use solid_common::models::product::{Color, Product, Size};

/// A single-operation predicate over `T`.
///
/// Implementations must be pure: the answer depends only on `item` and on the
/// parameters bound at construction.
pub trait Specification<T: ?Sized> {
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Specification<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self)(item)
    }
}

/// Combinators available on every specification.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Satisfied when both `self` and `other` are. `other` is only evaluated if `self` holds.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        S: Specification<T>,
    {
        And {
            left: self,
            right: other,
        }
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<T: ?Sized, A, B> Specification<T> for And<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) && self.right.is_satisfied(item)
    }
}

/// Matches products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}
