//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces provider-neutral
//! JSON Schema for the model's tool-use API.

use kbridge_application::ToolSchemaPort;
use kbridge_domain::tool::entities::{ToolDefinition, ToolParameter};
use serde_json::{Map, Value, json};

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"` (with `enum` when values are listed)
/// - `"integer"` → `"integer"` (with `minimum`/`maximum` when bounded)
/// - `"number"`, `"boolean"` → themselves
/// - `"array"` → `"array"` with `items.type`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    fn property(param: &ToolParameter) -> Value {
        let schema_type = match param.param_type.as_str() {
            "string" => "string",
            "integer" => "integer",
            "number" => "number",
            "boolean" => "boolean",
            "array" => "array",
            _ => "string",
        };

        let mut prop = Map::new();
        prop.insert("type".to_string(), json!(schema_type));
        prop.insert("description".to_string(), json!(param.description));

        if schema_type == "array" {
            let item_type = param.items.as_deref().unwrap_or("string");
            prop.insert("items".to_string(), json!({ "type": item_type }));
        }
        if !param.enum_values.is_empty() {
            prop.insert("enum".to_string(), json!(param.enum_values));
        }
        if let Some(min) = param.minimum {
            prop.insert("minimum".to_string(), json!(min));
        }
        if let Some(max) = param.maximum {
            prop.insert("maximum".to_string(), json!(max));
        }

        Value::Object(prop)
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn parameters_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            properties.insert(param.name.clone(), Self::property(param));
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("knowledge_base", "Knowledge base access")
            .with_parameter(
                ToolParameter::new("action", "Action to perform", true)
                    .with_enum(["search", "read"]),
            )
            .with_parameter(ToolParameter::new("tags", "Tags", false).array_of("string"))
            .with_parameter(ToolParameter::new("limit", "Max results", false).with_range(1, 50));

        let schema = converter.tool_to_schema(&tool);

        assert_eq!(schema["name"], "knowledge_base");
        assert_eq!(schema["description"], "Knowledge base access");
        assert_eq!(schema["input_schema"]["type"], "object");

        let props = &schema["input_schema"]["properties"];
        assert_eq!(props["action"]["type"], "string");
        assert_eq!(props["action"]["enum"], json!(["search", "read"]));
        assert_eq!(props["tags"]["type"], "array");
        assert_eq!(props["tags"]["items"]["type"], "string");
        assert_eq!(props["limit"]["type"], "integer");
        assert_eq!(props["limit"]["minimum"], 1);
        assert_eq!(props["limit"]["maximum"], 50);

        let required = schema["input_schema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "action");
    }

    #[test]
    fn test_unknown_type_maps_to_string() {
        let tool = ToolDefinition::new("t", "d")
            .with_parameter(ToolParameter::new("p", "path", false).with_type("path"));
        let schema = JsonSchemaToolConverter.parameters_schema(&tool);
        assert_eq!(schema["properties"]["p"]["type"], "string");
        assert!(schema["properties"]["p"].get("enum").is_none());
    }
}
