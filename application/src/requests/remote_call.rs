//! Remote-call request builders
//!
//! The call family exposes three remote tools. Workspace scoping is handled
//! by the remote service, so `workspace_id` is ignored here.

use kbridge_domain::{Action, ArgumentBag, ArgumentError};
use serde_json::{Map, Value};

use super::{OutcomePlan, PlannedRequest};
use crate::ports::transport::Request;

/// Actions expressible as remote calls
pub const SUPPORTED: &[Action] = &[Action::Search, Action::SemanticSearch, Action::Read];

const KEYWORD_SEARCH: &str = "keyword_search";
const SEMANTIC_SEARCH: &str = "semantic_search";
const READ_DOCUMENT: &str = "read_document";

/// Build the remote-call request for `action`.
pub fn build(action: Action, args: &ArgumentBag) -> Result<PlannedRequest, ArgumentError> {
    let spec = action
        .required_args()
        .first()
        .ok_or_else(|| ArgumentError::missing("query", action))?;
    let value = args.require_string(spec, action)?;

    // The remote tools take no limit; an explicit one is applied client side.
    let limit = args
        .contains("limit")
        .then(|| usize::try_from(args.limit()).unwrap_or(usize::MAX));

    let (tool, key, plan) = match action {
        Action::Search | Action::SemanticSearch => (
            if action == Action::Search {
                KEYWORD_SEARCH
            } else {
                SEMANTIC_SEARCH
            },
            "query",
            OutcomePlan::Search {
                path: &[],
                query: value.to_string(),
                semantic: action == Action::SemanticSearch,
                limit,
            },
        ),
        Action::Read => (
            READ_DOCUMENT,
            "docId",
            OutcomePlan::Document {
                path: &[],
                requested_id: value.to_string(),
            },
        ),
        _ => {
            return Err(ArgumentError::Unsupported {
                action: action.as_str().to_string(),
                backend: "remote-call".to_string(),
            });
        }
    };

    let mut arguments = Map::new();
    arguments.insert(key.to_string(), Value::from(value));

    Ok(PlannedRequest {
        request: Request::new(tool, arguments),
        plan,
    })
}
