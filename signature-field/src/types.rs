//! Core value and state types for the external signature field.
//!
//! The structured value serializes to the persisted JSON form via serde.
//! Field declaration order is the wire key order, so `identity` always
//! precedes `serviceName`.

use serde::{Deserialize, Serialize};

/// The signer's identity as entered by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// The structured value behind an external signature field.
///
/// `email` is raw user text and is not guaranteed to be well-formed.
/// `service_name` is fixed per field instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuredValue {
    pub identity: Identity,
    #[serde(rename = "serviceName", default)]
    pub service_name: String,
}

impl StructuredValue {
    /// A value with the given email bound to a signing service.
    pub fn new(email: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            identity: Identity {
                email: email.into(),
            },
            service_name: service_name.into(),
        }
    }

    /// The "no value" state: empty email, configured service.
    pub fn empty(service_name: impl Into<String>) -> Self {
        Self::new(String::new(), service_name)
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }
}

/// Kinds of form element that can appear in validation events.
///
/// External signatures validate as identities, so the default message for an
/// `ExternalSignature` field is scoped to `Identity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ElementType {
    ExternalSignature,
    Identity,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::ExternalSignature => "ExternalSignature",
            ElementType::Identity => "Identity",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user interaction that triggered an evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Change,
    Blur,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Change => "change",
            EventType::Blur => "blur",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a displayed message came from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSource {
    #[default]
    Default,
    User,
}

/// The error currently attached to a field, as seen by a renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub source: ErrorSource,
}

/// Error display state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    #[default]
    NoError,
    ShowingDefaultError(String),
    ShowingUserError(String),
    /// An override silenced the error for the last evaluated event.
    Suppressed,
}

impl ErrorDisplay {
    /// The message to render, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDisplay::ShowingDefaultError(m) | ErrorDisplay::ShowingUserError(m) => {
                Some(m.as_str())
            }
            ErrorDisplay::NoError | ErrorDisplay::Suppressed => None,
        }
    }

    pub fn is_showing(&self) -> bool {
        self.message().is_some()
    }

    pub fn to_error_state(&self) -> ErrorState {
        match self {
            ErrorDisplay::ShowingUserError(m) => ErrorState {
                message: Some(m.clone()),
                source: ErrorSource::User,
            },
            ErrorDisplay::ShowingDefaultError(m) => ErrorState {
                message: Some(m.clone()),
                source: ErrorSource::Default,
            },
            // Suppression is a user decision with nothing to show.
            ErrorDisplay::Suppressed => ErrorState {
                message: None,
                source: ErrorSource::User,
            },
            ErrorDisplay::NoError => ErrorState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_value_serializes_identity_first() {
        let value = StructuredValue::new("a@b.io", "DocuSign");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"identity":{"email":"a@b.io"},"serviceName":"DocuSign"}"#);
    }

    #[test]
    fn empty_value_keeps_service_name() {
        let value = StructuredValue::empty("DocuSign");
        assert_eq!(value.email(), "");
        assert_eq!(value.service_name, "DocuSign");
    }

    #[test]
    fn event_type_wire_names() {
        assert_eq!(serde_json::to_string(&EventType::Change).unwrap(), r#""change""#);
        assert_eq!(serde_json::to_string(&EventType::Blur).unwrap(), r#""blur""#);
        assert_eq!(EventType::Blur.to_string(), "blur");
    }

    #[test]
    fn element_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ElementType::ExternalSignature).unwrap(),
            r#""ExternalSignature""#
        );
        assert_eq!(ElementType::Identity.to_string(), "Identity");
    }

    #[test]
    fn error_display_messages() {
        assert_eq!(ErrorDisplay::NoError.message(), None);
        assert_eq!(ErrorDisplay::Suppressed.message(), None);
        assert_eq!(
            ErrorDisplay::ShowingDefaultError("bad".into()).message(),
            Some("bad")
        );
        assert!(ErrorDisplay::ShowingUserError("custom".into()).is_showing());
    }

    #[test]
    fn error_state_tracks_source() {
        let state = ErrorDisplay::ShowingUserError("custom".into()).to_error_state();
        assert_eq!(state.message.as_deref(), Some("custom"));
        assert_eq!(state.source, ErrorSource::User);

        let state = ErrorDisplay::ShowingDefaultError("bad".into()).to_error_state();
        assert_eq!(state.source, ErrorSource::Default);

        let state = ErrorDisplay::Suppressed.to_error_state();
        assert_eq!(state.message, None);
        assert_eq!(state.source, ErrorSource::User);

        assert_eq!(ErrorDisplay::NoError.to_error_state(), ErrorState::default());
    }
}
