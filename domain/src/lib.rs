//! Domain layer for kbridge
//!
//! This crate contains the pure core of the knowledge-base adapter: the
//! closed set of actions, defensive argument access, the normalized document
//! records and the payload extraction that maps every backend shape onto
//! them. It performs no I/O.
//!
//! # Core Concepts
//!
//! - **Action** — a logical operation (`search`, `read`, `update`, ...) with
//!   statically declared required arguments
//! - **DocumentRecord** — the unit every transport converges on
//! - **Extraction** — a two-stage decode that tolerates direct arrays, nested
//!   objects and opaque `content` wrappers
//! - **ToolResult** — the terminal value of every call, success or failure

pub mod action;
pub mod document;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use action::{Action, ArgSpec, ArgumentBag, ArgumentError, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use document::{
    ActionOutcome, CategoryCount, DocumentRecord, ExtractionError, ParentRef, RecordList,
    SearchResults, TagCount, UpdatedRecord, WorkspaceList, WorkspaceStructure, WorkspaceSummary,
};
pub use tool::{ToolDefinition, ToolError, ToolParameter, ToolResult, ToolResultMetadata};
