//! Configuration file loading for kbridge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KBRIDGE_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./kbridge.toml` or `./.kbridge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/kbridge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    BackendProtocol, ConfigIssue, ConfigIssueCode, DEFAULT_TIMEOUT_SECS, FileBackendConfig,
    FileConfig, FileToolConfig, Severity,
};
pub use loader::ConfigLoader;
