//! Shared building blocks for the `solid` workspace.
//!
//! * **[`models`]**: plain records the demonstrations operate on.
//! * **[`error`]**: the library error type.
//! * **[`config`]**: runtime options passed down from the command line.

pub mod config;
pub mod error;
pub mod models;

mod macros;

pub use error::{Result, SolidError};

#[doc(hidden)]
pub use tracing;
