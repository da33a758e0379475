//! Console output formatter for tool results

use colored::Colorize;
use kbridge_domain::ToolResult;

/// Formats tool results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-facing text; failures get a colored code prefix
    pub fn format(result: &ToolResult) -> String {
        match result.error() {
            None => result.for_user.clone(),
            Some(error) => format!(
                "{} {}",
                format!("[{}]", error.code).red().bold(),
                result.for_user
            ),
        }
    }

    /// Format as JSON
    pub fn format_json(result: &ToolResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line summary of the call metadata (for verbose runs)
    pub fn format_summary(result: &ToolResult) -> String {
        let status = if result.is_success() {
            "ok".green()
        } else {
            "failed".red()
        };

        let mut parts = vec![format!("{} {}", result.tool_name.cyan(), status)];
        if let Some(action) = &result.metadata.action {
            parts.push(format!("action={}", action));
        }
        if let Some(count) = result.metadata.record_count {
            parts.push(format!("records={}", count));
        }
        if let Some(ms) = result.metadata.duration_ms {
            parts.push(format!("{}ms", ms));
        }
        parts.join(" ").dimmed().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbridge_domain::ToolError;

    #[test]
    fn test_success_is_plain_text() {
        colored::control::set_override(false);
        let result = ToolResult::success("knowledge_base", "model", "No pages found in workspace");
        assert_eq!(ConsoleFormatter::format(&result), "No pages found in workspace");
    }

    #[test]
    fn test_failure_carries_code() {
        colored::control::set_override(false);
        let result = ToolResult::failure(
            "knowledge_base",
            ToolError::invalid_argument("query is required for search"),
        );
        assert_eq!(
            ConsoleFormatter::format(&result),
            "[INVALID_ARGUMENT] query is required for search"
        );
    }

    #[test]
    fn test_summary_and_json() {
        colored::control::set_override(false);
        let result = ToolResult::success("knowledge_base", "m", "u")
            .with_action("search")
            .with_record_count(2)
            .with_duration(15);

        assert_eq!(
            ConsoleFormatter::format_summary(&result),
            "knowledge_base ok action=search records=2 15ms"
        );

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&result)).unwrap();
        assert_eq!(json["for_user"], "u");
        assert_eq!(json["metadata"]["record_count"], 2);
    }
}
