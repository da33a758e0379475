//! Output formatting

pub mod console;
pub mod presenter;
