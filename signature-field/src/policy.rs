//! Error display policy.
//!
//! Decides, per interaction event, which message (if any) a field shows.
//! Rules, in priority order:
//!
//! 1. Empty text is never an error.
//! 2. A configured [`ValidateHook`] is consulted once per event. A custom
//!    message wins on any event type; an explicit empty message suppresses
//!    the error for that event; no answer defers to the defaults.
//! 3. By default errors surface only on blur. A change never introduces the
//!    default message.
//! 4. A showing error is sticky across changes while the text stays invalid.

use tracing::{debug, trace};

use crate::types::{ElementType, ErrorDisplay, EventType};
use crate::validator::Validator;

/// What the host's hook sees for each evaluated event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEvent<'a> {
    pub element_type: ElementType,
    pub event_type: EventType,
    pub is_error: bool,
    /// The default message, present only when `is_error` is true.
    pub error_message: Option<&'a str>,
}

/// A hook's answer for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverrideDecision {
    /// No opinion; default behavior applies.
    #[default]
    Unset,
    /// Show nothing for this event, even if the value is invalid.
    Suppress,
    /// Show this message instead of the default.
    Custom(String),
}

impl OverrideDecision {
    /// Decode a loosely-shaped `{ errorMessage?: string }` answer.
    pub fn from_message(message: Option<&str>) -> Self {
        match message {
            None => OverrideDecision::Unset,
            Some("") => OverrideDecision::Suppress,
            Some(m) => OverrideDecision::Custom(m.to_string()),
        }
    }
}

/// Host hook that can replace or suppress the default error.
pub trait ValidateHook {
    fn on_validate(&self, event: &ValidationEvent<'_>) -> OverrideDecision;
}

impl<F> ValidateHook for F
where
    F: Fn(&ValidationEvent<'_>) -> OverrideDecision,
{
    fn on_validate(&self, event: &ValidationEvent<'_>) -> OverrideDecision {
        self(event)
    }
}

/// The text an event carries, along with the email it stands for.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub email: &'a str,
}

/// Result of evaluating one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub display: ErrorDisplay,
    /// Whether the value failed validation, independent of any override.
    pub is_error: bool,
}

/// Stateless evaluator for one element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    element_type: ElementType,
}

impl ErrorPolicy {
    pub fn new(element_type: ElementType) -> Self {
        Self { element_type }
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Compute the next display state.
    pub fn evaluate(
        &self,
        current: &ErrorDisplay,
        event_type: EventType,
        candidate: Candidate<'_>,
        validator: &dyn Validator,
        hook: Option<&dyn ValidateHook>,
    ) -> Evaluation {
        let empty = candidate.text.is_empty();
        let validity = (!empty).then(|| validator.check(candidate.email));
        let is_error = validity.as_ref().is_some_and(|v| !v.valid);
        let default_message = validity
            .as_ref()
            .filter(|v| !v.valid)
            .map(|v| v.default_message.as_str());

        trace!(
            element = %self.element_type,
            event = %event_type,
            is_error,
            "evaluating field"
        );

        let decision = match hook {
            Some(hook) => hook.on_validate(&ValidationEvent {
                element_type: self.element_type,
                event_type,
                is_error,
                error_message: default_message,
            }),
            None => OverrideDecision::Unset,
        };

        let next = if empty {
            ErrorDisplay::NoError
        } else {
            match decision {
                OverrideDecision::Custom(message) => ErrorDisplay::ShowingUserError(message),
                OverrideDecision::Suppress => ErrorDisplay::Suppressed,
                OverrideDecision::Unset => match (event_type, default_message) {
                    (_, None) => ErrorDisplay::NoError,
                    (EventType::Blur, Some(message)) => {
                        ErrorDisplay::ShowingDefaultError(message.to_string())
                    }
                    // Still invalid while editing: keep whatever is showing.
                    (EventType::Change, Some(_)) => current.clone(),
                },
            }
        };

        if &next != current {
            debug!(
                element = %self.element_type,
                event = %event_type,
                from = ?current,
                to = ?next,
                "error display changed"
            );
        }
        Evaluation {
            display: next,
            is_error,
        }
    }
}
