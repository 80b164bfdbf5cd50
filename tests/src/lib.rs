//! Cross-crate tests for the `solid` workspace.

mod filter;
mod principles;
