//! Plain-text presenter for action outcomes
//!
//! Numbering is 1-based, tags are shown only when present, and nothing is
//! truncated. Both channels currently carry the same text.

use kbridge_application::{PresenterPort, Rendering};
use kbridge_domain::util::join_tags;
use kbridge_domain::{
    Action, ActionOutcome, DocumentRecord, SearchResults, UpdatedRecord, WorkspaceStructure,
    WorkspaceSummary,
};

const MISSING_BODY: &str = "(Content could not be extracted)";

/// Renders outcomes as the plain text the model and the user read
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Render an outcome to text
    pub fn format(outcome: &ActionOutcome) -> String {
        match outcome {
            ActionOutcome::Workspaces(list) => Self::workspaces(&list.workspaces),
            ActionOutcome::Pages(list) => Self::pages(&list.records),
            ActionOutcome::Search(results) => Self::search(results),
            ActionOutcome::Document(record) => Self::document(record),
            ActionOutcome::Created(record) => Self::created(record),
            ActionOutcome::Updated(updated) => Self::updated(updated),
            ActionOutcome::Structure(structure) => Self::structure(structure),
        }
    }

    fn workspaces(workspaces: &[WorkspaceSummary]) -> String {
        if workspaces.is_empty() {
            return "No workspaces found".to_string();
        }

        let mut lines = vec!["Available Workspaces:".to_string()];
        for ws in workspaces {
            lines.push(format!(
                "- {} (ID: {}, Members: {})",
                ws.name, ws.id, ws.member_count
            ));
        }
        lines.join("\n")
    }

    fn pages(records: &[DocumentRecord]) -> String {
        if records.is_empty() {
            return "No pages found in workspace".to_string();
        }

        let mut lines = vec![format!("Pages in workspace (showing {}):", records.len())];
        for (i, page) in records.iter().enumerate() {
            let tags = if page.tags.is_empty() {
                String::new()
            } else {
                format!(" [Tags: {}]", join_tags(&page.tags))
            };
            lines.push(format!("{}. {} (ID: {}){}", i + 1, page.title, page.id, tags));
            if let Some(updated) = &page.updated_at {
                lines.push(format!("   Updated: {}", updated));
            }
        }
        lines.join("\n")
    }

    fn search(results: &SearchResults) -> String {
        let noun = if results.semantic {
            "semantic matches"
        } else {
            "results"
        };

        if results.records.is_empty() {
            return if results.semantic {
                format!("No semantic matches found for: {}", results.query)
            } else {
                format!("No results found for: {}", results.query)
            };
        }

        let mut lines = vec![format!(
            "Found {} {} for '{}':",
            results.records.len(),
            noun,
            results.query
        )];
        for (i, item) in results.records.iter().enumerate() {
            let tags = if item.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", join_tags(&item.tags))
            };
            lines.push(format!("{}. {} (ID: {}){}", i + 1, item.title, item.id, tags));
            if let Some(snippet) = item.snippet() {
                lines.push(format!("   {}", snippet));
            }
        }
        lines.join("\n")
    }

    fn document(page: &DocumentRecord) -> String {
        let mut lines = Vec::new();
        if !page.title.is_empty() {
            lines.push(format!("Document: {}", page.title));
        }
        lines.push(format!("ID: {}", page.id));
        if !page.tags.is_empty() {
            lines.push(format!("Tags: {}", join_tags(&page.tags)));
        }
        if let Some(parent) = &page.parent {
            lines.push(format!("Parent: {} (ID: {})", parent.title, parent.id));
        }
        if let Some(updated) = &page.updated_at {
            lines.push(format!("Updated: {}", updated));
        }
        lines.push(String::new());
        lines.push(
            page.body()
                .map(|body| body.trim_end_matches('\n'))
                .unwrap_or(MISSING_BODY)
                .to_string(),
        );
        lines.join("\n")
    }

    fn created(page: &DocumentRecord) -> String {
        let tags = if page.tags.is_empty() {
            String::new()
        } else {
            format!(" with tags [{}]", join_tags(&page.tags))
        };
        format!("Created page '{}' (ID: {}){}", page.title, page.id, tags)
    }

    fn updated(updated: &UpdatedRecord) -> String {
        format!(
            "Updated page '{}' (ID: {}) - changed: {}",
            updated.record.title,
            updated.record.id,
            updated.changed.join(", ")
        )
    }

    fn structure(ws: &WorkspaceStructure) -> String {
        let mut lines = vec![
            format!("Workspace: {} (ID: {})", ws.workspace_name, ws.workspace_id),
            format!("Total Pages: {}", ws.total_pages),
        ];

        if !ws.categories.is_empty() {
            lines.push(String::new());
            lines.push("Categories:".to_string());
            for cat in &ws.categories {
                lines.push(format!("  - {} ({} pages)", cat.name, cat.page_count));
            }
        }

        if !ws.tags.is_empty() {
            lines.push(String::new());
            lines.push("Tags:".to_string());
            for tag in &ws.tags {
                lines.push(format!("  - {} ({} pages)", tag.name, tag.count));
            }
        }

        lines.join("\n")
    }
}

impl PresenterPort for TextPresenter {
    fn render(&self, _action: Action, outcome: &ActionOutcome) -> Rendering {
        Rendering::same(Self::format(outcome))
    }
}
