//! Action outcome — the extracted, transport-independent result of one action

use serde::{Deserialize, Serialize};

use super::entities::{DocumentRecord, WorkspaceStructure, WorkspaceSummary};

/// Successful result of an action, ready for rendering.
///
/// Empty record lists are legitimate outcomes ("no matches") and are
/// rendered as such; failures never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    Workspaces(WorkspaceList),
    Pages(RecordList),
    Search(SearchResults),
    Document(DocumentRecord),
    Created(DocumentRecord),
    Updated(UpdatedRecord),
    Structure(WorkspaceStructure),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceList {
    pub workspaces: Vec<WorkspaceSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordList {
    pub records: Vec<DocumentRecord>,
}

/// Search hits together with the query that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    /// Meaning-based rather than keyword search
    pub semantic: bool,
    pub records: Vec<DocumentRecord>,
}

/// An updated page and the names of the fields that were sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedRecord {
    pub record: DocumentRecord,
    pub changed: Vec<String>,
}

impl ActionOutcome {
    /// Number of records/workspaces carried by the outcome.
    pub fn record_count(&self) -> usize {
        match self {
            ActionOutcome::Workspaces(list) => list.workspaces.len(),
            ActionOutcome::Pages(list) => list.records.len(),
            ActionOutcome::Search(results) => results.records.len(),
            ActionOutcome::Document(_)
            | ActionOutcome::Created(_)
            | ActionOutcome::Updated(_)
            | ActionOutcome::Structure(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_count() {
        let outcome = ActionOutcome::Search(SearchResults {
            query: "q".to_string(),
            semantic: false,
            records: vec![DocumentRecord::new("a", "A"), DocumentRecord::new("b", "B")],
        });
        assert_eq!(outcome.record_count(), 2);

        let empty = ActionOutcome::Pages(RecordList { records: vec![] });
        assert_eq!(empty.record_count(), 0);
    }

    #[test]
    fn test_serialize_tagged() {
        let outcome = ActionOutcome::Created(DocumentRecord::new("p1", "T"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "created");
        assert_eq!(json["id"], "p1");
    }
}
