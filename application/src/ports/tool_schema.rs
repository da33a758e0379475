//! Tool schema conversion port.
//!
//! Separates "what the tool accepts" (domain [`ToolDefinition`]) from "how
//! that is serialized for the model API" (infrastructure).

use kbridge_domain::tool::entities::ToolDefinition;

/// Port for converting the tool definition to JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// JSON Schema object describing the tool's arguments
    /// (`{"type": "object", "properties": ..., "required": [...]}`).
    fn parameters_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Full provider-neutral tool description: name, description and
    /// `input_schema`.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": self.parameters_schema(tool),
        })
    }
}
