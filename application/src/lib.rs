//! Application layer for kbridge
//!
//! This crate contains the action router, request builders, port definitions
//! and router configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod requests;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_TOOL_NAME, RouterParams};
pub use ports::{
    presenter::{PresenterPort, Rendering},
    tool_schema::ToolSchemaPort,
    transport::{RawPayload, RemoteError, Request, TransportError, TransportPort, WireProtocol},
};
pub use requests::{OutcomePlan, PlannedRequest};
pub use use_cases::route_action::{ActionError, ActionRouter};
