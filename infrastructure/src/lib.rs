//! Infrastructure layer for kbridge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP transports, configuration file
//! loading and the `knowledge_base` tool facade.

pub mod config;
pub mod tools;
pub mod transport;

// Re-export commonly used types
pub use config::{
    BackendProtocol, ConfigIssue, ConfigIssueCode, ConfigLoader, FileBackendConfig, FileConfig,
    FileToolConfig, Severity,
};
pub use tools::{JsonSchemaToolConverter, KnowledgeBaseTool};
pub use transport::{
    CallFraming, HttpSettings, StreamingCallTransport, SyncCallTransport, TypedQueryTransport,
    build_transport,
};
