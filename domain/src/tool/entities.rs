//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Definition of the tool as advertised to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Stable tool identifier (e.g., "knowledge_base")
    pub name: String,
    /// Human-readable capability summary
    pub description: String,
    /// Parameter specifications, in schema order
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint ("string", "integer", "array")
    pub param_type: String,
    /// Element type for array parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    /// Allowed values for enumerated string parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Inclusive lower bound for integer parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Inclusive upper bound for integer parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
            items: None,
            enum_values: Vec::new(),
            minimum: None,
            maximum: None,
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    /// Mark as an array whose elements have `item_type`
    pub fn array_of(mut self, item_type: impl Into<String>) -> Self {
        self.param_type = "array".to_string();
        self.items = Some(item_type.into());
        self
    }

    pub fn with_enum(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Mark as an integer bounded to `min..=max`
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.param_type = "integer".to_string();
        self.minimum = Some(min);
        self.maximum = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("knowledge_base", "Search the knowledge base")
            .with_parameter(
                ToolParameter::new("action", "Action to perform", true)
                    .with_enum(["search", "read"]),
            )
            .with_parameter(ToolParameter::new("limit", "Max results", false).with_range(1, 50));

        assert_eq!(tool.name, "knowledge_base");
        assert_eq!(tool.parameters.len(), 2);
        assert_eq!(tool.required_parameters().count(), 1);
        assert_eq!(tool.parameter("action").unwrap().enum_values, vec!["search", "read"]);

        let limit = tool.parameter("limit").unwrap();
        assert_eq!(limit.param_type, "integer");
        assert_eq!(limit.maximum, Some(50));
    }

    #[test]
    fn test_array_parameter() {
        let tags = ToolParameter::new("tags", "Tags", false).array_of("string");
        assert_eq!(tags.param_type, "array");
        assert_eq!(tags.items.as_deref(), Some("string"));
    }
}
