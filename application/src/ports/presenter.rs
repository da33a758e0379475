//! Presenter port
//!
//! Turns an extracted [`ActionOutcome`] into text. Implementations live in
//! the presentation layer.

use kbridge_domain::{Action, ActionOutcome};

/// The two text channels of a tool result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Text fed back to the model
    pub for_model: String,
    /// Text shown to the human
    pub for_user: String,
}

impl Rendering {
    /// Same text on both channels
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            for_model: text.clone(),
            for_user: text,
        }
    }
}

/// Port for rendering outcomes.
///
/// Rendering must be pure and deterministic: same action and outcome, same
/// text.
pub trait PresenterPort: Send + Sync {
    fn render(&self, action: Action, outcome: &ActionOutcome) -> Rendering;
}
