//! Document domain module
//!
//! [`DocumentRecord`] is the unit callers ultimately care about: every
//! transport's payload is reduced to records (or to a workspace summary /
//! structure) by the pure functions in [`extract`], and the result of a whole
//! action is an [`ActionOutcome`].

pub mod entities;
pub mod extract;
pub mod outcome;

pub use entities::{
    CategoryCount, DocumentRecord, ParentRef, TagCount, WorkspaceStructure, WorkspaceSummary,
};
pub use extract::{
    ExtractionError, content_texts, extract_document, extract_record, extract_records,
    extract_structure, extract_workspaces,
};
pub use outcome::{ActionOutcome, RecordList, SearchResults, UpdatedRecord, WorkspaceList};
