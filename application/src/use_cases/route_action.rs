//! Route Action use case.
//!
//! Drives one knowledge-base tool call from an untyped argument bag to a
//! [`ToolResult`]:
//!
//! ```text
//! validating ──(action + required args ok)──▶ dispatched ──▶ ToolResult
//!     │                                          │
//!     └── ArgumentError (no network call)        └── transport / remote /
//!                                                    extraction failure
//! ```
//!
//! Every failure is folded into the result; nothing is raised to the caller.

use crate::config::RouterParams;
use crate::ports::presenter::PresenterPort;
use crate::ports::transport::{TransportError, TransportPort, WireProtocol};
use crate::requests;
use kbridge_domain::util::truncate_str;
use kbridge_domain::{
    Action, ActionOutcome, ArgumentBag, ArgumentError, ExtractionError, ToolError, ToolResult,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that end a routed call.
#[derive(Error, Debug)]
pub enum ActionError {
    /// Rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ArgumentError),

    /// The exchange failed or the service reported an error
    #[error("failed to {verb}: {source}")]
    Transport {
        verb: &'static str,
        source: TransportError,
    },

    /// The payload matched no expected shape
    #[error("failed to {verb}: {source}")]
    Extraction {
        verb: &'static str,
        source: ExtractionError,
    },
}

impl ActionError {
    /// Whether the call failed before reaching the network
    pub fn is_validation(&self) -> bool {
        matches!(self, ActionError::Validation(_))
    }

    /// Convert into the outward error value
    pub fn to_tool_error(&self) -> ToolError {
        let message = self.to_string();
        match self {
            ActionError::Validation(_) => ToolError::invalid_argument(message),
            ActionError::Transport { source, .. } => match source {
                TransportError::Timeout(_) => ToolError::timeout(message),
                TransportError::Cancelled => ToolError::cancelled(message),
                TransportError::Remote(_) => ToolError::remote(message),
                _ => ToolError::transport_failed(message),
            },
            ActionError::Extraction { .. } => ToolError::extraction_failed(message),
        }
    }
}

/// Use case for routing one knowledge-base action.
///
/// Holds no per-call state; one router can serve any number of concurrent
/// calls.
#[derive(Clone)]
pub struct ActionRouter {
    transport: Arc<dyn TransportPort>,
    presenter: Arc<dyn PresenterPort>,
    params: RouterParams,
}

impl ActionRouter {
    pub fn new(
        transport: Arc<dyn TransportPort>,
        presenter: Arc<dyn PresenterPort>,
        params: RouterParams,
    ) -> Self {
        Self {
            transport,
            presenter,
            params,
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.params.tool_name
    }

    pub fn params(&self) -> &RouterParams {
        &self.params
    }

    /// Wire protocol of the configured transport
    pub fn protocol(&self) -> WireProtocol {
        self.transport.protocol()
    }

    /// Actions the configured transport can express
    pub fn supported_actions(&self) -> &'static [Action] {
        requests::supported_actions(self.protocol())
    }

    /// Execute one call and fold the outcome into a [`ToolResult`].
    pub async fn execute(&self, args: &ArgumentBag, cancel: &CancellationToken) -> ToolResult {
        let started = Instant::now();

        let action = match args.action() {
            Ok(action) => action,
            Err(e) => return self.fail(None, ActionError::from(e), started),
        };

        match self.dispatch(action, args, cancel).await {
            Ok(outcome) => {
                let rendering = self.presenter.render(action, &outcome);
                let duration_ms = started.elapsed().as_millis() as u64;
                info!(
                    "{} completed: {} record(s) in {}ms",
                    action,
                    outcome.record_count(),
                    duration_ms
                );
                ToolResult::success(
                    self.params.tool_name.as_str(),
                    rendering.for_model,
                    rendering.for_user,
                )
                .with_action(action.as_str())
                .with_record_count(outcome.record_count())
                .with_duration(duration_ms)
            }
            Err(e) => self.fail(Some(action), e, started),
        }
    }

    /// Resolve, validate and dispatch, returning the typed outcome.
    pub async fn route(
        &self,
        args: &ArgumentBag,
        cancel: &CancellationToken,
    ) -> Result<(Action, ActionOutcome), ActionError> {
        let action = args.action()?;
        let outcome = self.dispatch(action, args, cancel).await?;
        Ok((action, outcome))
    }

    async fn dispatch(
        &self,
        action: Action,
        args: &ArgumentBag,
        cancel: &CancellationToken,
    ) -> Result<ActionOutcome, ActionError> {
        let protocol = self.protocol();
        if !self.supported_actions().contains(&action) {
            return Err(ArgumentError::Unsupported {
                action: action.as_str().to_string(),
                backend: protocol.as_str().to_string(),
            }
            .into());
        }
        args.validate_for(action)?;

        let planned = requests::build(
            protocol,
            action,
            args,
            self.params.default_workspace_id.as_deref(),
        )?;

        info!("Dispatching {} via {}", action, self.transport.name());
        debug!(
            "Request operation: {}",
            truncate_str(planned.request.operation().trim(), 80)
        );

        let payload = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportError::Cancelled),
            result = self.transport.execute(&planned.request) => result,
        }
        .map_err(|source| ActionError::Transport {
            verb: action.verb(),
            source,
        })?;

        planned
            .plan
            .extract(&payload)
            .map_err(|source| ActionError::Extraction {
                verb: action.verb(),
                source,
            })
    }

    fn fail(&self, action: Option<Action>, error: ActionError, started: Instant) -> ToolResult {
        match action {
            Some(action) => warn!("{} failed: {}", action, error),
            None => warn!("Tool call rejected: {}", error),
        }

        let mut tool_error = error.to_tool_error();
        if !error.is_validation() {
            tool_error = tool_error.with_details(format!("via {}", self.transport.name()));
        }

        let mut result = ToolResult::failure(self.params.tool_name.as_str(), tool_error)
            .with_duration(started.elapsed().as_millis() as u64);
        if let Some(action) = action {
            result = result.with_action(action.as_str());
        }
        result
    }
}
