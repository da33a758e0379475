//! Tool domain module
//!
//! The knowledge-base adapter is exposed to the model as a single tool. This
//! module holds the tool's self-description ([`ToolDefinition`]) and the
//! value every call returns ([`ToolResult`]).
//!
//! ```text
//! ┌────────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolDefinition │───▶│ ArgumentBag  │───▶│ ToolResult   │
//! │ (schema)       │    │ (invocation) │    │ (output)     │
//! └────────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! The domain only defines these shapes; rendering them as JSON Schema lives
//! in the infrastructure layer.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolDefinition, ToolParameter};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
