//! Action entities — the closed set of knowledge-base operations

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A knowledge-base operation the tool can perform.
///
/// Every variant has exactly one handler in the action router, and a fixed
/// set of required argument keys (see [`Action::required_args`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// List the workspaces visible to the credential
    ListWorkspaces,
    /// List pages of a workspace (bounded by `limit`)
    ListPages,
    /// Keyword search
    Search,
    /// Meaning-based search
    SemanticSearch,
    /// Read a single document with its body
    Read,
    /// Create a page
    Create,
    /// Update title/content/tags of a page
    Update,
    /// Summarize categories and tags of a workspace
    GetStructure,
}

/// Alternative spellings accepted for action names.
///
/// Models frequently reach for the longer `*_page` forms used by older
/// versions of the tool.
const ACTION_ALIASES: &[(&str, Action)] = &[
    ("list", Action::ListPages),
    ("read_page", Action::Read),
    ("create_page", Action::Create),
    ("update_page", Action::Update),
    ("keyword_search", Action::Search),
];

/// Declaration of one argument an action reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    /// Primary argument key
    pub key: &'static str,
    /// Other keys accepted in place of `key`, tried in order
    pub alternatives: &'static [&'static str],
}

impl ArgSpec {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            alternatives: &[],
        }
    }

    pub const fn or(key: &'static str, alternatives: &'static [&'static str]) -> Self {
        Self { key, alternatives }
    }

    /// All keys in lookup order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.key).chain(self.alternatives.iter().copied())
    }
}

impl Action {
    /// All canonical actions, in schema order.
    pub const ALL: [Action; 8] = [
        Action::ListWorkspaces,
        Action::ListPages,
        Action::Search,
        Action::SemanticSearch,
        Action::Read,
        Action::Create,
        Action::Update,
        Action::GetStructure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ListWorkspaces => "list_workspaces",
            Action::ListPages => "list_pages",
            Action::Search => "search",
            Action::SemanticSearch => "semantic_search",
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::GetStructure => "get_structure",
        }
    }

    /// Verb phrase used in failure messages ("failed to <verb>: ...").
    pub fn verb(&self) -> &'static str {
        match self {
            Action::ListWorkspaces => "list workspaces",
            Action::ListPages => "list pages",
            Action::Search => "search",
            Action::SemanticSearch => "run semantic search",
            Action::Read => "read page",
            Action::Create => "create page",
            Action::Update => "update page",
            Action::GetStructure => "get structure",
        }
    }

    /// Arguments that must be present before the action is dispatched.
    pub fn required_args(&self) -> &'static [ArgSpec] {
        const QUERY: &[ArgSpec] = &[ArgSpec::new("query")];
        const PAGE_ID: &[ArgSpec] = &[ArgSpec::new("page_id")];
        const READ: &[ArgSpec] = &[ArgSpec::or("page_id", &["query"])];
        const TITLE: &[ArgSpec] = &[ArgSpec::new("title")];

        match self {
            Action::ListWorkspaces | Action::ListPages | Action::GetStructure => &[],
            Action::Search | Action::SemanticSearch => QUERY,
            Action::Read => READ,
            Action::Create => TITLE,
            Action::Update => PAGE_ID,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    /// Parse a canonical action name or one of its aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(action) = Action::ALL.iter().find(|a| a.as_str() == s) {
            return Ok(*action);
        }
        ACTION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == s)
            .map(|(_, action)| *action)
            .ok_or_else(|| format!("unknown action: {}", s))
    }
}
