//! Application-level configuration.
//!
//! Values the action router needs that do not belong to any transport.

/// Tool name used when none is configured
pub const DEFAULT_TOOL_NAME: &str = "knowledge_base";

/// Router behavior configuration.
#[derive(Debug, Clone)]
pub struct RouterParams {
    /// Name reported in every [`ToolResult`](kbridge_domain::ToolResult)
    pub tool_name: String,
    /// Workspace used when a call does not pass `workspace_id`
    pub default_workspace_id: Option<String>,
}

impl Default for RouterParams {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            default_workspace_id: None,
        }
    }
}

impl RouterParams {
    pub fn with_workspace(mut self, workspace_id: impl Into<String>) -> Self {
        let id = workspace_id.into();
        self.default_workspace_id = (!id.is_empty()).then_some(id);
        self
    }

    pub fn with_tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }
}
