//! Tool domain value objects — immutable result and error types
//!
//! Every call of the knowledge-base tool ends in exactly one [`ToolResult`].
//! Failures are values too: the result carries a [`ToolError`] whose code
//! tells the caller which stage failed.
//!
//! | Code | Stage | Network call made? |
//! |------|-------|--------------------|
//! | `INVALID_ARGUMENT` | Argument validation | No |
//! | `TRANSPORT_FAILED` | HTTP exchange / envelope decode | Yes |
//! | `TIMEOUT` | HTTP exchange | Yes |
//! | `CANCELLED` | Caller aborted the exchange | Yes |
//! | `REMOTE_ERROR` | Service reported a domain error | Yes |
//! | `EXTRACTION_FAILED` | Payload matched no known shape | Yes |

use serde::{Deserialize, Serialize};

/// Error attached to a failed [`ToolResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "INVALID_ARGUMENT", "REMOTE_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn transport_failed(message: impl Into<String>) -> Self {
        Self::new("TRANSPORT_FAILED", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new("TIMEOUT", message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new("CANCELLED", message)
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::new("REMOTE_ERROR", message)
    }

    pub fn extraction_failed(message: impl Into<String>) -> Self {
        Self::new("EXTRACTION_FAILED", message)
    }

    /// Whether the failure happened before any request left the process
    pub fn is_validation(&self) -> bool {
        self.code == "INVALID_ARGUMENT"
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Outward value of one tool call.
///
/// `for_model` is fed back into the model's context, `for_user` is shown to
/// the human. They are currently identical but kept apart so the human
/// channel can get richer formatting without changing the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Text for the model
    pub for_model: String,
    /// Text for the human
    pub for_user: String,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about one call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Resolved canonical action name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Duration of the round trip in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Number of records in the outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

impl ToolResult {
    /// Create a successful result from the two renderings
    pub fn success(
        tool_name: impl Into<String>,
        for_model: impl Into<String>,
        for_user: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            for_model: for_model.into(),
            for_user: for_user.into(),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result; both channels carry the error message
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            for_model: error.message.clone(),
            for_user: error.message.clone(),
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.metadata.action = Some(action.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_record_count(mut self, count: usize) -> Self {
        self.metadata.record_count = Some(count);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_error(&self) -> bool {
        !self.success
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}
