//! Typed-query (GraphQL) request builders
//!
//! Every action maps to one query document and a variables object. All
//! actions except `list_workspaces` are scoped to a workspace, taken from the
//! `workspace_id` argument or the configured default.

use kbridge_domain::{Action, ArgumentBag, ArgumentError};
use serde_json::{Map, Value};

use super::{OutcomePlan, PlannedRequest, update_fields};
use crate::ports::transport::Request;

/// Actions expressible as typed queries
pub const SUPPORTED: &[Action] = &[
    Action::ListWorkspaces,
    Action::ListPages,
    Action::Search,
    Action::Read,
    Action::Create,
    Action::Update,
    Action::GetStructure,
];

const LIST_WORKSPACES: &str = r#"
query ListWorkspaces {
  workspaces {
    id
    name
    createdAt
    memberCount
  }
}
"#;

const LIST_PAGES: &str = r#"
query ListPages($workspaceId: ID!, $limit: Int!) {
  workspace(id: $workspaceId) {
    pages(limit: $limit) {
      id
      title
      createdAt
      updatedAt
      tags
    }
  }
}
"#;

const SEARCH_PAGES: &str = r#"
query SearchPages($workspaceId: ID!, $query: String!, $limit: Int!) {
  workspace(id: $workspaceId) {
    search(query: $query, limit: $limit) {
      id
      title
      snippet
      tags
      updatedAt
    }
  }
}
"#;

const READ_PAGE: &str = r#"
query ReadPage($workspaceId: ID!, $pageId: ID!) {
  workspace(id: $workspaceId) {
    page(id: $pageId) {
      id
      title
      content
      tags
      createdAt
      updatedAt
      parent {
        id
        title
      }
    }
  }
}
"#;

const CREATE_PAGE: &str = r#"
mutation CreatePage($workspaceId: ID!, $title: String!, $content: String, $tags: [String!]) {
  createPage(workspaceId: $workspaceId, title: $title, content: $content, tags: $tags) {
    id
    title
    tags
  }
}
"#;

const UPDATE_PAGE: &str = r#"
mutation UpdatePage($workspaceId: ID!, $pageId: ID!, $title: String, $content: String, $tags: [String!]) {
  updatePage(workspaceId: $workspaceId, pageId: $pageId, title: $title, content: $content, tags: $tags) {
    id
    title
    tags
    updatedAt
  }
}
"#;

const GET_STRUCTURE: &str = r#"
query GetStructure($workspaceId: ID!) {
  workspace(id: $workspaceId) {
    id
    name
    structure {
      categories {
        name
        pageCount
      }
      tags {
        name
        count
      }
      totalPages
    }
  }
}
"#;

/// Build the typed-query request for `action`.
pub fn build(
    action: Action,
    args: &ArgumentBag,
    default_workspace: Option<&str>,
) -> Result<PlannedRequest, ArgumentError> {
    if action == Action::ListWorkspaces {
        return Ok(PlannedRequest {
            request: Request::new(LIST_WORKSPACES, Map::new()),
            plan: OutcomePlan::Workspaces,
        });
    }

    let workspace_id = args
        .get_non_empty_string("workspace_id")
        .or(default_workspace.filter(|w| !w.is_empty()))
        .ok_or_else(|| ArgumentError::missing("workspace_id", action))?;

    let mut vars = Map::new();
    vars.insert("workspaceId".to_string(), Value::from(workspace_id));

    let (document, plan) = match action {
        Action::ListPages => {
            vars.insert("limit".to_string(), Value::from(args.limit()));
            (
                LIST_PAGES,
                OutcomePlan::Pages {
                    path: &["workspace", "pages"],
                },
            )
        }
        Action::Search => {
            let query = required(args, action)?;
            vars.insert("query".to_string(), Value::from(query));
            vars.insert("limit".to_string(), Value::from(args.limit()));
            (
                SEARCH_PAGES,
                OutcomePlan::Search {
                    path: &["workspace", "search"],
                    query: query.to_string(),
                    semantic: false,
                    limit: None,
                },
            )
        }
        Action::Read => {
            let page_id = required(args, action)?;
            vars.insert("pageId".to_string(), Value::from(page_id));
            (
                READ_PAGE,
                OutcomePlan::Document {
                    path: &["workspace", "page"],
                    requested_id: page_id.to_string(),
                },
            )
        }
        Action::Create => {
            let title = required(args, action)?;
            vars.insert("title".to_string(), Value::from(title));
            if let Some(content) = args.get_string("content") {
                vars.insert("content".to_string(), Value::from(content));
            }
            if let Some(tags) = args.get_string_list("tags") {
                vars.insert("tags".to_string(), Value::from(tags));
            }
            (CREATE_PAGE, OutcomePlan::Created { path: &["createPage"] })
        }
        Action::Update => {
            let page_id = required(args, action)?;
            let fields = update_fields(args);
            if fields.is_empty() {
                return Err(ArgumentError::NoUpdates);
            }
            vars.insert("pageId".to_string(), Value::from(page_id));
            let changed = fields.iter().map(|(name, _)| name.to_string()).collect();
            for (name, value) in fields {
                vars.insert(name.to_string(), value);
            }
            (
                UPDATE_PAGE,
                OutcomePlan::Updated {
                    path: &["updatePage"],
                    changed,
                },
            )
        }
        Action::GetStructure => (GET_STRUCTURE, OutcomePlan::Structure),
        Action::ListWorkspaces | Action::SemanticSearch => {
            return Err(ArgumentError::Unsupported {
                action: action.as_str().to_string(),
                backend: "typed-query".to_string(),
            });
        }
    };

    Ok(PlannedRequest {
        request: Request::new(document, vars),
        plan,
    })
}

/// First required argument of `action` (every typed-query action has at most one).
fn required(args: &ArgumentBag, action: Action) -> Result<&str, ArgumentError> {
    let spec = action
        .required_args()
        .first()
        .ok_or_else(|| ArgumentError::missing("argument", action))?;
    args.require_string(spec, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_sends_only_supplied_fields() {
        let args = ArgumentBag::new()
            .with_arg("page_id", "p1")
            .with_arg("title", "T")
            .with_arg("tags", json!(["x", "y"]));

        let planned = build(Action::Update, &args, Some("ws")).unwrap();
        let request = &planned.request;

        assert_eq!(request.param("title"), Some(&json!("T")));
        assert_eq!(request.param("tags"), Some(&json!(["x", "y"])));
        assert!(request.param("content").is_none());
        assert_eq!(request.param("pageId"), Some(&json!("p1")));
        assert!(request.operation().contains("mutation UpdatePage"));

        match planned.plan {
            OutcomePlan::Updated { changed, .. } => assert_eq!(changed, vec!["title", "tags"]),
            other => panic!("unexpected plan: {:?}", other),
        }
    }

    #[test]
    fn test_update_without_fields_fails() {
        let args = ArgumentBag::new()
            .with_arg("page_id", "p1")
            .with_arg("title", "");
        assert_eq!(
            build(Action::Update, &args, Some("ws")).unwrap_err(),
            ArgumentError::NoUpdates
        );
    }

    #[test]
    fn test_workspace_argument_overrides_default() {
        let args = ArgumentBag::new().with_arg("workspace_id", "ws-arg");
        let planned = build(Action::ListPages, &args, Some("ws-default")).unwrap();
        assert_eq!(planned.request.param("workspaceId"), Some(&json!("ws-arg")));
        assert_eq!(planned.request.param("limit"), Some(&json!(10)));
    }

    #[test]
    fn test_missing_workspace_fails() {
        let err = build(Action::GetStructure, &ArgumentBag::new(), None).unwrap_err();
        assert_eq!(err.to_string(), "workspace_id is required for get_structure");
    }

    #[test]
    fn test_list_workspaces_needs_no_workspace() {
        let planned = build(Action::ListWorkspaces, &ArgumentBag::new(), None).unwrap();
        assert!(planned.request.params().is_empty());
        assert_eq!(planned.plan, OutcomePlan::Workspaces);
    }

    #[test]
    fn test_search_limit_clamped() {
        let args = ArgumentBag::new()
            .with_arg("query", "rust")
            .with_arg("limit", 99);
        let planned = build(Action::Search, &args, Some("ws")).unwrap();
        assert_eq!(planned.request.param("limit"), Some(&json!(50)));
        assert_eq!(planned.request.param("query"), Some(&json!("rust")));
    }

    #[test]
    fn test_read_accepts_query_as_page_id() {
        let args = ArgumentBag::new().with_arg("query", "p9");
        let planned = build(Action::Read, &args, Some("ws")).unwrap();
        assert_eq!(planned.request.param("pageId"), Some(&json!("p9")));
    }

    #[test]
    fn test_create_omits_absent_optionals() {
        let args = ArgumentBag::new().with_arg("title", "New");
        let planned = build(Action::Create, &args, Some("ws")).unwrap();
        assert!(planned.request.param("content").is_none());
        assert!(planned.request.param("tags").is_none());
    }
}
