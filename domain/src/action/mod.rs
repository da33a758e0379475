//! Action domain module
//!
//! An action is the logical operation a model asks the knowledge-base tool to
//! perform (`search`, `read`, `update`, ...). This module holds the closed set
//! of [`Action`]s with their argument declarations, and the [`ArgumentBag`]
//! that carries the model's loosely-typed arguments.
//!
//! Validation is pure and happens before any request is built:
//!
//! ```text
//! ArgumentBag ──action()──▶ Action ──validate_for()──▶ Ok / ArgumentError
//! ```

pub mod arguments;
pub mod entities;

pub use arguments::{ArgumentBag, ArgumentError, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use entities::{Action, ArgSpec};
