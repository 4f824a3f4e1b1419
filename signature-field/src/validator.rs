//! Validity checking for the email a field currently holds.
//!
//! The validity rule itself is owned by the host. This module only fixes the
//! contract ([`Validator`]) and provides two ready implementations: a regex
//! email check and a closure adapter.

use std::collections::HashMap;

use regex::Regex;

use crate::error::Result;
use crate::types::ElementType;

/// Generic message appended to a readable type name.
pub const FIELD_DEFAULT_ERROR_MESSAGE: &str = "Something looks incorrect.";

/// Email address pattern
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Outcome of a validity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub valid: bool,
    /// Message to show if the host does not override it. Present even when
    /// `valid` is true so the message is stable per field type.
    pub default_message: String,
}

impl Validity {
    pub fn is_error(&self) -> bool {
        !self.valid
    }
}

/// A pure validity predicate over a candidate email.
pub trait Validator {
    fn check(&self, candidate_email: &str) -> Validity;
}

/// Explicit mapping from element type to readable name used to build the
/// type-scoped default message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultMessages {
    generic: String,
    readable: HashMap<ElementType, String>,
}

impl DefaultMessages {
    pub fn new(generic: impl Into<String>) -> Self {
        Self {
            generic: generic.into(),
            readable: HashMap::new(),
        }
    }

    /// Set the readable name for an element type.
    pub fn readable(mut self, element: ElementType, name: impl Into<String>) -> Self {
        self.readable.insert(element, name.into());
        self
    }

    pub fn generic(&self) -> &str {
        &self.generic
    }

    /// `"<Readable>: <generic>"`, or just the generic message when the type
    /// has no readable name.
    pub fn message_for(&self, element: ElementType) -> String {
        match self.readable.get(&element) {
            Some(name) => format!("{}: {}", name, self.generic),
            None => self.generic.clone(),
        }
    }
}

impl Default for DefaultMessages {
    fn default() -> Self {
        Self::new(FIELD_DEFAULT_ERROR_MESSAGE)
            .readable(ElementType::ExternalSignature, "External signature")
            .readable(ElementType::Identity, "Identity")
    }
}

/// Regex-backed email validator.
///
/// Reports the `Identity` message since an external signature validates
/// its signer as an identity.
#[derive(Debug, Clone)]
pub struct EmailPatternValidator {
    pattern: Regex,
    message: String,
}

impl EmailPatternValidator {
    /// Validator using [`EMAIL_PATTERN`] and the given message mapping.
    pub fn new(messages: &DefaultMessages) -> Result<Self> {
        Self::with_pattern(EMAIL_PATTERN, messages)
    }

    /// Validator using a custom pattern.
    pub fn with_pattern(pattern: &str, messages: &DefaultMessages) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: messages.message_for(ElementType::Identity),
        })
    }
}

impl Validator for EmailPatternValidator {
    fn check(&self, candidate_email: &str) -> Validity {
        Validity {
            valid: self.pattern.is_match(candidate_email),
            default_message: self.message.clone(),
        }
    }
}

/// Adapts a host predicate into a [`Validator`] with a fixed message.
pub struct FnValidator<F> {
    predicate: F,
    message: String,
}

impl<F> FnValidator<F>
where
    F: Fn(&str) -> bool,
{
    pub fn new(predicate: F, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&str) -> bool,
{
    fn check(&self, candidate_email: &str) -> Validity {
        Validity {
            valid: (self.predicate)(candidate_email),
            default_message: self.message.clone(),
        }
    }
}
