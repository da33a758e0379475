//! `knowledge_base` tool — the surface the agent host calls.
//!
//! Wraps an [`ActionRouter`] with the tool identity (name, description and
//! parameter schema) the model sees.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `action` | string (enum) | Yes | Operation to perform |
//! | `workspace_id` | string | No | Overrides the configured workspace |
//! | `page_id` | string | No | Page for `read` / `update` |
//! | `title` | string | No | Title for `create` / `update` |
//! | `content` | string | No | Markdown body for `create` / `update` |
//! | `tags` | string[] | No | Tags for `create` / `update` |
//! | `query` | string | No | Search query, or document id for `read` |
//! | `limit` | integer 1–50 | No | Maximum results (default 10) |
//!
//! The `action` enum lists only what the configured backend can express.

use super::schema::JsonSchemaToolConverter;
use kbridge_application::{ActionRouter, ToolSchemaPort, WireProtocol};
use kbridge_domain::tool::entities::{ToolDefinition, ToolParameter};
use kbridge_domain::{ArgumentBag, MAX_LIMIT, MIN_LIMIT, ToolResult};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

const FULL_DESCRIPTION: &str = "Interact with the knowledge base: list workspaces and pages, \
search pages, read page content, create and update notes with tags, and summarize workspace \
structure.";

const CALL_DESCRIPTION: &str = "Search and read documents from the knowledge base, by keyword \
or by meaning.";

/// The knowledge-base tool as seen by an agent host
pub struct KnowledgeBaseTool {
    router: ActionRouter,
    schema: JsonSchemaToolConverter,
}

impl KnowledgeBaseTool {
    pub fn new(router: ActionRouter) -> Self {
        Self {
            router,
            schema: JsonSchemaToolConverter,
        }
    }

    pub fn name(&self) -> &str {
        self.router.tool_name()
    }

    pub fn description(&self) -> &'static str {
        match self.router.protocol() {
            WireProtocol::TypedQuery => FULL_DESCRIPTION,
            WireProtocol::RemoteCall => CALL_DESCRIPTION,
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        let actions = self.router.supported_actions().iter().map(|a| a.as_str());

        ToolDefinition::new(self.name(), self.description())
            .with_parameter(
                ToolParameter::new("action", "Action to perform", true).with_enum(actions),
            )
            .with_parameter(ToolParameter::new(
                "workspace_id",
                "Workspace ID (optional, uses the configured default if not specified)",
                false,
            ))
            .with_parameter(ToolParameter::new(
                "page_id",
                "Page ID (required for read and update)",
                false,
            ))
            .with_parameter(ToolParameter::new(
                "title",
                "Page title (required for create, optional for update)",
                false,
            ))
            .with_parameter(ToolParameter::new(
                "content",
                "Page content in markdown format (for create and update)",
                false,
            ))
            .with_parameter(
                ToolParameter::new("tags", "Tags to set on the page", false).array_of("string"),
            )
            .with_parameter(ToolParameter::new(
                "query",
                "Search query (for search actions) or document ID (for read)",
                false,
            ))
            .with_parameter(
                ToolParameter::new("limit", "Maximum number of results (default: 10)", false)
                    .with_range(MIN_LIMIT, MAX_LIMIT),
            )
    }

    /// JSON Schema of the tool's arguments
    pub fn parameters(&self) -> Value {
        self.schema.parameters_schema(&self.definition())
    }

    /// Name, description and argument schema in one document
    pub fn schema(&self) -> Value {
        self.schema.tool_to_schema(&self.definition())
    }

    /// Run one call. Never panics; every failure is inside the result.
    pub async fn execute(&self, cancel: &CancellationToken, args: &ArgumentBag) -> ToolResult {
        self.router.execute(args, cancel).await
    }

    /// Run one call from raw JSON arguments (non-objects act as an empty bag)
    pub async fn execute_json(&self, cancel: &CancellationToken, args: Value) -> ToolResult {
        self.execute(cancel, &ArgumentBag::from_value(args)).await
    }
}
