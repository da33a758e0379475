//! Document entities — the normalized records every transport converges on

use serde::{Deserialize, Serialize};

/// Reference to a parent page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// A knowledge-base document or page.
///
/// Field names accept both the typed-query spelling (`id`, `updatedAt`) and
/// the call-protocol spelling (`docId`). Every field is optional on the
/// wire: a missing or `null` id or title becomes the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireRecord")]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
}

/// Wire form of [`DocumentRecord`]; each id spelling is its own field so a
/// record carrying several of them still decodes.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    #[serde(default)]
    doc_id: Option<String>,
    #[serde(default, rename = "doc_id")]
    doc_id_snake: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
    #[serde(default, alias = "created_at")]
    created_at: Option<String>,
    #[serde(default, alias = "updated_at")]
    updated_at: Option<String>,
    #[serde(default)]
    parent: Option<ParentRef>,
}

impl From<WireRecord> for DocumentRecord {
    fn from(wire: WireRecord) -> Self {
        Self {
            id: wire
                .doc_id
                .or(wire.doc_id_snake)
                .or(wire.id)
                .unwrap_or_default(),
            title: wire.title,
            snippet: wire.snippet,
            content: wire.content,
            tags: wire.tags,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            parent: wire.parent,
        }
    }
}

impl DocumentRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Snippet text when present and non-empty
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref().filter(|s| !s.is_empty())
    }

    /// Body text when present and non-empty
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether neither an id nor a title was decoded
    pub fn is_blank(&self) -> bool {
        self.id.is_empty() && self.title.is_empty()
    }
}

/// A workspace visible to the configured credential
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub member_count: u64,
}

/// Page count of one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub name: String,
    #[serde(default)]
    pub page_count: u64,
}

/// Usage count of one tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// Organisation summary of a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceStructure {
    pub workspace_id: String,
    pub workspace_name: String,
    pub total_pages: u64,
    pub categories: Vec<CategoryCount>,
    pub tags: Vec<TagCount>,
}

/// Deserialize `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_typed_query_shape() {
        let record: DocumentRecord = serde_json::from_value(json!({
            "id": "p1",
            "title": "Notes",
            "tags": ["rust"],
            "updatedAt": "2024-01-02",
            "parent": {"id": "p0", "title": "Root"}
        }))
        .unwrap();

        assert_eq!(record.id, "p1");
        assert_eq!(record.tags, vec!["rust"]);
        assert_eq!(record.updated_at.as_deref(), Some("2024-01-02"));
        assert_eq!(record.parent.unwrap().title, "Root");
    }

    #[test]
    fn test_record_from_call_shape() {
        let record: DocumentRecord = serde_json::from_value(json!({
            "docId": "d1",
            "title": "A",
            "snippet": "first lines"
        }))
        .unwrap();

        assert_eq!(record.id, "d1");
        assert_eq!(record.snippet(), Some("first lines"));
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_record_null_fields() {
        let record: DocumentRecord =
            serde_json::from_value(json!({"id": "x", "title": null, "tags": null})).unwrap();
        assert_eq!(record.title, "");
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_record_without_id_keeps_title() {
        let record: DocumentRecord =
            serde_json::from_value(json!({"title": "no id", "snippet": "s"})).unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.title, "no id");
        assert!(!record.is_blank());
    }

    #[test]
    fn test_record_null_id() {
        let record: DocumentRecord =
            serde_json::from_value(json!({"id": null, "title": "T"})).unwrap();
        assert_eq!(record.id, "");
    }

    #[test]
    fn test_record_with_several_id_spellings_prefers_doc_id() {
        let record: DocumentRecord =
            serde_json::from_value(json!({"docId": "d1", "id": "x", "title": "A"})).unwrap();
        assert_eq!(record.id, "d1");

        let record: DocumentRecord =
            serde_json::from_value(json!({"doc_id": "d2", "id": "x"})).unwrap();
        assert_eq!(record.id, "d2");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let mut record = DocumentRecord::new("p1", "T");
        record.updated_at = Some("2024".to_string());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["updatedAt"], "2024");
        assert!(value.get("snippet").is_none());
    }

    #[test]
    fn test_empty_snippet_is_none() {
        let record = DocumentRecord::new("x", "t").with_snippet("");
        assert!(record.snippet().is_none());
    }
}
