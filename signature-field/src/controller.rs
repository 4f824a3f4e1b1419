//! FieldController: the event-driven surface of a signature field.
//!
//! Owns the text the user sees and the error display state. Collaborators
//! (validator, commit sink, hooks) are borrowed for the controller's lifetime.
//! Every event runs to completion before the next is accepted:
//!
//! ```text
//! event → codec.email_of → validator → policy → state update [→ commit]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::ValueCodec;
use crate::config::FieldConfig;
use crate::error::{FieldError, Result};
use crate::policy::{Candidate, ErrorPolicy, ValidateHook};
use crate::types::{ErrorDisplay, ErrorState, EventType, StructuredValue};
use crate::validator::Validator;

/// Receives the committed value once per blur.
///
/// `None` means the text is not commit-ready; it is distinct from every
/// string, including `""` for an empty field.
pub trait CommitSink {
    fn commit(&self, field_name: &str, value: Option<&str>);
}

impl<F> CommitSink for F
where
    F: Fn(&str, Option<&str>),
{
    fn commit(&self, field_name: &str, value: Option<&str>) {
        self(field_name, value)
    }
}

/// Raw input listeners, notified once per event after the policy has run.
pub trait InputListener {
    fn on_change(&self, _field_name: &str, _text: &str) {}
    fn on_blur(&self, _field_name: &str, _text: &str) {}
}

/// One host event, as queued or scripted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldEvent {
    Change { text: String },
    Blur,
}

impl FieldEvent {
    pub fn change(text: impl Into<String>) -> Self {
        FieldEvent::Change { text: text.into() }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            FieldEvent::Change { .. } => EventType::Change,
            FieldEvent::Blur => EventType::Blur,
        }
    }

    /// Parse a JSON array of events.
    pub fn parse_script(script: &str) -> Result<Vec<FieldEvent>> {
        serde_json::from_str(script).map_err(|e| FieldError::invalid_script(e.to_string()))
    }
}

/// What a single dispatched event produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOutcome {
    pub event: EventType,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Present for blur only; `Some(None)` is the absent value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<Option<String>>,
}

/// Renderable snapshot of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub text: String,
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_help_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

pub struct FieldController<'a> {
    config: FieldConfig,
    codec: ValueCodec,
    policy: ErrorPolicy,
    validator: &'a dyn Validator,
    sink: &'a dyn CommitSink,
    hook: Option<&'a dyn ValidateHook>,
    listener: Option<&'a dyn InputListener>,
    text: String,
    display: ErrorDisplay,
}

impl<'a> FieldController<'a> {
    /// Mount a field, seeding its text from the configured saved value.
    pub fn new(config: FieldConfig, validator: &'a dyn Validator, sink: &'a dyn CommitSink) -> Self {
        let codec = ValueCodec::new(config.service_name.as_str());
        let seed = codec.seed(&config.initial_saved_value);
        debug!(field = %config.name, text = %seed.text, "field mounted");

        Self {
            policy: ErrorPolicy::new(config.element_type),
            codec,
            config,
            validator,
            sink,
            hook: None,
            listener: None,
            text: seed.text,
            display: ErrorDisplay::NoError,
        }
    }

    pub fn with_validate_hook(mut self, hook: &'a dyn ValidateHook) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn with_input_listener(mut self, listener: &'a dyn InputListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// The user edited the text. Never commits.
    pub fn on_change(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.evaluate(EventType::Change);
        if let Some(listener) = self.listener {
            listener.on_change(&self.config.name, &self.text);
        }
    }

    /// The user left the field. Commits exactly once and returns what was
    /// committed.
    pub fn on_blur(&mut self) -> Option<String> {
        let is_error = self.evaluate(EventType::Blur);

        let committed = if is_error {
            None
        } else if self.text.is_empty() {
            Some(String::new())
        } else {
            Some(self.codec.serialize(&self.structured_value()))
        };

        debug!(
            field = %self.config.name,
            committed = ?committed,
            "committing field value"
        );
        self.sink.commit(&self.config.name, committed.as_deref());

        if let Some(listener) = self.listener {
            listener.on_blur(&self.config.name, &self.text);
        }
        committed
    }

    /// Process one queued event.
    pub fn dispatch(&mut self, event: FieldEvent) -> EventOutcome {
        let event_type = event.event_type();
        let commit = match event {
            FieldEvent::Change { text } => {
                self.on_change(text);
                None
            }
            FieldEvent::Blur => Some(self.on_blur()),
        };

        EventOutcome {
            event: event_type,
            text: self.text.clone(),
            error: self.error().map(str::to_string),
            commit,
        }
    }

    /// Process events strictly in order.
    pub fn replay(&mut self, events: impl IntoIterator<Item = FieldEvent>) -> Vec<EventOutcome> {
        events.into_iter().map(|event| self.dispatch(event)).collect()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Derived from the current text; never stored.
    pub fn structured_value(&self) -> StructuredValue {
        self.codec.value_of(&self.text)
    }

    /// The message currently displayed, if any.
    pub fn error(&self) -> Option<&str> {
        self.display.message()
    }

    pub fn error_display(&self) -> &ErrorDisplay {
        &self.display
    }

    pub fn error_state(&self) -> ErrorState {
        self.display.to_error_state()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn view(&self) -> FieldView {
        FieldView {
            name: self.config.name.clone(),
            text: self.text.clone(),
            placeholder: self.config.placeholder().to_string(),
            extra_help_text: self
                .config
                .extra_help_text
                .clone()
                .filter(|t| !t.is_empty()),
            error_message: self.error().map(str::to_string),
        }
    }

    /// Run the policy for an event and store the result. Returns whether
    /// the text failed validation.
    fn evaluate(&mut self, event_type: EventType) -> bool {
        let email = self.codec.email_of(&self.text);
        let evaluation = self.policy.evaluate(
            &self.display,
            event_type,
            Candidate {
                text: &self.text,
                email: &email,
            },
            self.validator,
            self.hook,
        );
        self.display = evaluation.display;
        evaluation.is_error
    }
}
