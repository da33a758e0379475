//! Request construction
//!
//! Translates a validated (Action, ArgumentBag) pair into a transport
//! [`Request`] for the configured [`WireProtocol`], together with an
//! [`OutcomePlan`] describing how the resulting payload is to be extracted.
//!
//! ```text
//! (Action, ArgumentBag) ──build()──▶ PlannedRequest { request, plan }
//!                                       │                 │
//!                            transport.execute()    plan.extract(payload)
//!                                       ▼                 ▼
//!                                   RawPayload ──────▶ ActionOutcome
//! ```
//!
//! Builders only fail with [`ArgumentError`]s, so every failure here happens
//! before a request leaves the process.

pub mod remote_call;
pub mod typed_query;

use kbridge_domain::document::extract;
use kbridge_domain::{
    Action, ActionOutcome, ArgumentBag, ArgumentError, ExtractionError, RecordList,
    SearchResults, UpdatedRecord, WorkspaceList,
};
use serde_json::Value;

use crate::ports::transport::{Request, WireProtocol};

/// A request together with the plan for interpreting its payload
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRequest {
    pub request: Request,
    pub plan: OutcomePlan,
}

/// How to turn a raw payload into an [`ActionOutcome`].
///
/// Paths are the field paths used when the payload is a directly typed
/// nested object; content-wrapper payloads ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomePlan {
    Workspaces,
    Pages {
        path: &'static [&'static str],
    },
    Search {
        path: &'static [&'static str],
        query: String,
        semantic: bool,
        /// Client-side cap for backends that do not accept a limit
        limit: Option<usize>,
    },
    Document {
        path: &'static [&'static str],
        requested_id: String,
    },
    Created {
        path: &'static [&'static str],
    },
    Updated {
        path: &'static [&'static str],
        changed: Vec<String>,
    },
    Structure,
}

impl OutcomePlan {
    /// Extract the outcome from a success payload. Pure; no I/O.
    pub fn extract(&self, payload: &Value) -> Result<ActionOutcome, ExtractionError> {
        Ok(match self {
            OutcomePlan::Workspaces => ActionOutcome::Workspaces(WorkspaceList {
                workspaces: extract::extract_workspaces(payload)?,
            }),
            OutcomePlan::Pages { path } => ActionOutcome::Pages(RecordList {
                records: extract::extract_records(payload, path)?,
            }),
            OutcomePlan::Search {
                path,
                query,
                semantic,
                limit,
            } => {
                let mut records = extract::extract_records(payload, path)?;
                if let Some(limit) = limit {
                    records.truncate(*limit);
                }
                ActionOutcome::Search(SearchResults {
                    query: query.clone(),
                    semantic: *semantic,
                    records,
                })
            }
            OutcomePlan::Document { path, requested_id } => {
                ActionOutcome::Document(extract::extract_document(payload, path, requested_id)?)
            }
            OutcomePlan::Created { path } => {
                ActionOutcome::Created(extract::extract_record(payload, path)?)
            }
            OutcomePlan::Updated { path, changed } => ActionOutcome::Updated(UpdatedRecord {
                record: extract::extract_record(payload, path)?,
                changed: changed.clone(),
            }),
            OutcomePlan::Structure => ActionOutcome::Structure(extract::extract_structure(payload)?),
        })
    }
}

/// Actions each protocol family can express
pub fn supported_actions(protocol: WireProtocol) -> &'static [Action] {
    match protocol {
        WireProtocol::TypedQuery => typed_query::SUPPORTED,
        WireProtocol::RemoteCall => remote_call::SUPPORTED,
    }
}

/// Build the request for `action` on `protocol`.
///
/// `args` must already have passed [`ArgumentBag::validate_for`].
pub fn build(
    protocol: WireProtocol,
    action: Action,
    args: &ArgumentBag,
    default_workspace: Option<&str>,
) -> Result<PlannedRequest, ArgumentError> {
    if !supported_actions(protocol).contains(&action) {
        return Err(ArgumentError::Unsupported {
            action: action.as_str().to_string(),
            backend: protocol.as_str().to_string(),
        });
    }

    match protocol {
        WireProtocol::TypedQuery => typed_query::build(action, args, default_workspace),
        WireProtocol::RemoteCall => remote_call::build(action, args),
    }
}

/// Title/content/tags actually supplied for an update, in that order.
///
/// Empty strings do not count as supplied; an explicit (even empty) tag list
/// does, so tags can be cleared.
pub(crate) fn update_fields(args: &ArgumentBag) -> Vec<(&'static str, Value)> {
    let mut fields = Vec::new();
    if let Some(title) = args.get_non_empty_string("title") {
        fields.push(("title", Value::from(title)));
    }
    if let Some(content) = args.get_non_empty_string("content") {
        fields.push(("content", Value::from(content)));
    }
    if let Some(tags) = args.get_string_list("tags") {
        fields.push(("tags", Value::from(tags)));
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unsupported_action_rejected_before_build() {
        let args = ArgumentBag::new().with_arg("query", "rust");
        let err = build(WireProtocol::TypedQuery, Action::SemanticSearch, &args, Some("ws"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "action semantic_search is not supported by the typed-query backend"
        );

        let args = ArgumentBag::new().with_arg("title", "T");
        assert!(build(WireProtocol::RemoteCall, Action::Create, &args, None).is_err());
    }

    #[test]
    fn test_update_fields_filters_empty_strings() {
        let args = ArgumentBag::new()
            .with_arg("title", "T")
            .with_arg("content", "")
            .with_arg("tags", json!(["x", "y"]));

        let names: Vec<&str> = update_fields(&args).into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["title", "tags"]);
    }

    #[test]
    fn test_search_plan_truncates_to_limit() {
        let plan = OutcomePlan::Search {
            path: &["workspace", "search"],
            query: "q".to_string(),
            semantic: true,
            limit: Some(1),
        };
        let payload = json!([{"id": "a"}, {"id": "b"}]);
        let outcome = plan.extract(&payload).unwrap();
        assert_eq!(outcome.record_count(), 1);
    }

    #[test]
    fn test_plan_extraction_error_propagates() {
        let plan = OutcomePlan::Pages {
            path: &["workspace", "pages"],
        };
        assert!(plan.extract(&json!({"workspace": {"pages": 7}})).is_err());
    }
}
