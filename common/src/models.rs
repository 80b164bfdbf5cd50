//! # Domain Models
//!
//! Plain records used by the demonstrations in `solid-core`.
//!
//! * [`product::Product`]: an item with a [`product::Color`] and a [`product::Size`].
//! * [`person::Person`]: a named member of a family tree.
//! * [`document::Document`]: what printers, scanners and copiers exchange.
//!
//! Models carry parsing and display logic but no behaviour beyond that.

pub mod document;
pub mod person;
pub mod product;
