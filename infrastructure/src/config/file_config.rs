//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into transport settings and
//! router parameters by the binary.
//!
//! ```toml
//! [backend]
//! protocol = "streaming_call"     # typed_query | call | streaming_call
//! endpoint = "https://kb.example.com/mcp"
//! api_key = "..."
//! workspace_id = "ws-123"
//! timeout_secs = 30
//! framing = "json_rpc"            # json_rpc | bare (call protocols only)
//!
//! [tool]
//! name = "knowledge_base"
//! ```

use crate::transport::CallFraming;
use kbridge_application::{DEFAULT_TOOL_NAME, RouterParams, WireProtocol};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but calls may fail.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    EmptyEndpoint,
    InvalidEndpointScheme { endpoint: String },
    ZeroTimeout,
    MissingApiKey,
    MissingWorkspace,
    EmptyToolName,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

/// Backend protocol selected by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendProtocol {
    /// GraphQL-style `{query, variables}` over HTTP
    #[default]
    TypedQuery,
    /// Synchronous JSON call
    Call,
    /// Call that may answer with an SSE body
    StreamingCall,
}

impl BackendProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendProtocol::TypedQuery => "typed_query",
            BackendProtocol::Call => "call",
            BackendProtocol::StreamingCall => "streaming_call",
        }
    }

    /// Request family this protocol speaks
    pub fn wire_protocol(&self) -> WireProtocol {
        match self {
            BackendProtocol::TypedQuery => WireProtocol::TypedQuery,
            BackendProtocol::Call | BackendProtocol::StreamingCall => WireProtocol::RemoteCall,
        }
    }
}

impl std::fmt::Display for BackendProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Which transport to construct
    pub protocol: BackendProtocol,
    /// Full URL requests are POSTed to
    pub endpoint: String,
    /// Bearer credential
    pub api_key: Option<String>,
    /// Workspace used when a call does not pass one
    pub workspace_id: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Call envelope framing (ignored by typed_query)
    pub framing: CallFraming,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            protocol: BackendProtocol::default(),
            endpoint: String::new(),
            api_key: None,
            workspace_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            framing: CallFraming::default(),
        }
    }
}

impl FileBackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key, treating an empty string as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Workspace id, treating an empty string as unset
    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref().filter(|w| !w.is_empty())
    }

    fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyEndpoint,
                "backend.endpoint is not set",
            ));
        } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEndpointScheme {
                    endpoint: endpoint.to_string(),
                },
                format!("backend.endpoint must be an http(s) URL, got '{}'", endpoint),
            ));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "backend.timeout_secs cannot be 0",
            ));
        }

        if self.api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey,
                "backend.api_key is not set; requests are sent without credentials",
            ));
        }

        if self.protocol == BackendProtocol::TypedQuery && self.workspace_id().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingWorkspace,
                "backend.workspace_id is not set; every call must pass workspace_id",
            ));
        }

        issues
    }
}

/// Raw tool configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolConfig {
    /// Name reported to the model
    pub name: String,
}

impl Default for FileToolConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_TOOL_NAME.to_string(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote knowledge-base backend
    pub backend: FileBackendConfig,
    /// Tool identity
    pub tool: FileToolConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.backend.validate();

        if self.tool.name.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyToolName,
                "tool.name cannot be empty",
            ));
        }

        issues
    }

    /// Whether [`validate`](Self::validate) found anything fatal
    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    /// Router parameters derived from this configuration
    pub fn router_params(&self) -> RouterParams {
        let params = RouterParams::default().with_tool_name(self.tool.name.clone());
        match self.backend.workspace_id() {
            Some(workspace) => params.with_workspace(workspace),
            None => params,
        }
    }

    /// Effective configuration as TOML, with the API key masked
    pub fn to_display_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.backend.api_key().is_some() {
            shown.backend.api_key = Some("********".to_string());
        }
        toml::to_string_pretty(&shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FileConfig {
        let mut config = FileConfig::default();
        config.backend.endpoint = "https://kb.example.com/graphql".to_string();
        config.backend.api_key = Some("secret".to_string());
        config.backend.workspace_id = Some("ws-1".to_string());
        config
    }

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.backend.protocol, BackendProtocol::TypedQuery);
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.backend.framing, CallFraming::JsonRpc);
        assert_eq!(config.tool.name, "knowledge_base");
    }

    #[test]
    fn test_valid_config_has_no_issues() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn test_empty_endpoint_is_error() {
        let mut config = valid();
        config.backend.endpoint = "  ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyEndpoint);
        assert!(config.has_errors());
    }

    #[test]
    fn test_missing_credentials_are_warnings() {
        let mut config = valid();
        config.backend.api_key = Some(String::new());
        config.backend.workspace_id = None;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(!config.has_errors());
    }

    #[test]
    fn test_workspace_not_required_for_call_protocols() {
        let mut config = valid();
        config.backend.protocol = BackendProtocol::StreamingCall;
        config.backend.workspace_id = None;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_bad_scheme_and_zero_timeout() {
        let mut config = valid();
        config.backend.endpoint = "ftp://kb".to_string();
        config.backend.timeout_secs = 0;

        let codes: Vec<ConfigIssueCode> = config.validate().into_iter().map(|i| i.code).collect();
        assert!(codes.contains(&ConfigIssueCode::ZeroTimeout));
        assert!(matches!(
            codes[0],
            ConfigIssueCode::InvalidEndpointScheme { .. }
        ));
    }

    #[test]
    fn test_parse_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [backend]
            protocol = "streaming_call"
            endpoint = "https://kb.example.com/mcp"
            framing = "bare"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.protocol, BackendProtocol::StreamingCall);
        assert_eq!(config.backend.framing, CallFraming::Bare);
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(
            config.backend.protocol.wire_protocol(),
            WireProtocol::RemoteCall
        );
    }

    #[test]
    fn test_router_params() {
        let params = valid().router_params();
        assert_eq!(params.tool_name, "knowledge_base");
        assert_eq!(params.default_workspace_id.as_deref(), Some("ws-1"));
    }

    #[test]
    fn test_display_masks_api_key() {
        let shown = valid().to_display_toml().unwrap();
        assert!(!shown.contains("secret"));
        assert!(shown.contains("********"));
    }
}
