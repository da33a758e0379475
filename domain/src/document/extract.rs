//! Payload extraction — recover document records from raw success payloads
//!
//! Backends answer the same logical request with differently shaped JSON.
//! Extraction is a pure, two-stage decode that hides those differences:
//!
//! ```text
//! RawPayload (serde_json::Value)
//!   ├─ [ {...}, {...} ]                       direct array   → element-wise
//!   ├─ { content: [ {text: "<json>"}, ... ] } content wrapper → decode each text again
//!   └─ { workspace: { pages: [...] } }        nested object  → follow the field path
//! ```
//!
//! Content-wrapper entries whose text is not valid JSON (or decodes to a
//! record with neither id nor title) are skipped, so one bad entry never fails the whole call. Reads
//! are the exception: there the wrapper carries free text, which is
//! concatenated into the document body.
//!
//! An empty record list is a valid outcome. A payload that fits none of the
//! shapes is an [`ExtractionError`], never an empty list.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::entities::{
    CategoryCount, DocumentRecord, TagCount, WorkspaceStructure, WorkspaceSummary,
};

/// The success payload did not match any expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("missing field '{0}' in response")]
    MissingField(String),

    #[error("unexpected {found} at '{path}', expected {expected}")]
    UnexpectedShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed record at '{path}': {message}")]
    Malformed { path: String, message: String },

    #[error("response contained no record")]
    NoRecord,
}

/// Extract a list of records (list/search results).
///
/// `path` is the field path used when the payload is a nested object, e.g.
/// `["workspace", "search"]`.
pub fn extract_records(
    payload: &Value,
    path: &[&str],
) -> Result<Vec<DocumentRecord>, ExtractionError> {
    if let Value::Array(items) = payload {
        return decode_elements(items, "");
    }

    if let Some(texts) = content_texts(payload) {
        return Ok(texts.into_iter().flat_map(records_from_text).collect());
    }

    let target = navigate(payload, path)?;
    match target {
        Value::Array(items) => decode_elements(items, &path.join(".")),
        other => Err(unexpected(path, "an array of records", other)),
    }
}

/// Extract a single record (create/update results).
pub fn extract_record(payload: &Value, path: &[&str]) -> Result<DocumentRecord, ExtractionError> {
    if let Some(texts) = content_texts(payload) {
        return texts
            .into_iter()
            .flat_map(records_from_text)
            .next()
            .ok_or(ExtractionError::NoRecord);
    }

    let target = navigate(payload, path)?;
    match target {
        Value::Object(_) => decode(target, &path.join(".")),
        other => Err(unexpected(path, "a record object", other)),
    }
}

/// Extract a single document together with its body (read results).
///
/// A content wrapper carries free text rather than records: every `text`
/// entry is appended (newline-terminated) to the body, and the record gets
/// `requested_id` with an empty title.
pub fn extract_document(
    payload: &Value,
    path: &[&str],
    requested_id: &str,
) -> Result<DocumentRecord, ExtractionError> {
    if let Some(texts) = content_texts(payload) {
        let body: String = texts.iter().map(|t| format!("{}\n", t)).collect();
        let mut record = DocumentRecord::new(requested_id, "");
        if !body.is_empty() {
            record.content = Some(body);
        }
        return Ok(record);
    }

    extract_record(payload, path)
}

/// Extract the workspace list (`{ workspaces: [...] }`).
pub fn extract_workspaces(payload: &Value) -> Result<Vec<WorkspaceSummary>, ExtractionError> {
    let path = ["workspaces"];
    let target = match payload {
        Value::Array(_) => payload,
        _ => navigate(payload, &path)?,
    };
    match target {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item, &format!("workspaces[{}]", i)))
            .collect(),
        other => Err(unexpected(&path, "an array of workspaces", other)),
    }
}

/// Extract the structure summary (`{ workspace: { id, name, structure } }`).
pub fn extract_structure(payload: &Value) -> Result<WorkspaceStructure, ExtractionError> {
    let workspace = navigate(payload, &["workspace"])?;
    let structure = navigate(workspace, &["structure"])
        .map_err(|_| ExtractionError::MissingField("workspace.structure".to_string()))?;

    let categories: Vec<CategoryCount> = optional_list(structure, "categories")?;
    let tags: Vec<TagCount> = optional_list(structure, "tags")?;

    Ok(WorkspaceStructure {
        workspace_id: string_field(workspace, "id"),
        workspace_name: string_field(workspace, "name"),
        total_pages: structure
            .get("totalPages")
            .and_then(|v| v.as_u64())
            .unwrap_or(0),
        categories,
        tags,
    })
}

/// Collect the `text` entries of a content wrapper.
///
/// Returns `None` when the payload is not a wrapper at all. Entries with a
/// `type` other than `"text"` are ignored.
pub fn content_texts(payload: &Value) -> Option<Vec<&str>> {
    let items = payload.get("content")?.as_array()?;
    Some(
        items
            .iter()
            .filter(|item| {
                item.get("type")
                    .and_then(|t| t.as_str())
                    .is_none_or(|t| t == "text")
            })
            .filter_map(|item| item.get("text").and_then(|t| t.as_str()))
            .collect(),
    )
}

/// Second-stage decode of one content entry; anything unusable yields nothing.
fn records_from_text(text: &str) -> Vec<DocumentRecord> {
    let items = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        Ok(value @ Value::Object(_)) => vec![value],
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<DocumentRecord>(item).ok())
        .filter(|record| !record.is_blank())
        .collect()
}

fn navigate<'a>(payload: &'a Value, path: &[&str]) -> Result<&'a Value, ExtractionError> {
    let mut current = payload;
    for (depth, segment) in path.iter().enumerate() {
        current = match current.get(segment) {
            Some(Value::Null) | None => {
                return Err(ExtractionError::MissingField(path[..=depth].join(".")));
            }
            Some(value) => value,
        };
    }
    Ok(current)
}

fn decode_elements(items: &[Value], path: &str) -> Result<Vec<DocumentRecord>, ExtractionError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode(item, &format!("{}[{}]", path, i)))
        .collect()
}

fn decode<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T, ExtractionError> {
    T::deserialize(value).map_err(|e| ExtractionError::Malformed {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn optional_list<T: DeserializeOwned>(
    parent: &Value,
    key: &str,
) -> Result<Vec<T>, ExtractionError> {
    match parent.get(key) {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(value) => decode(value, key),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn unexpected(path: &[&str], expected: &'static str, found: &Value) -> ExtractionError {
    ExtractionError::UnexpectedShape {
        path: path.join("."),
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
