//! Conversion between the persisted string form and [`StructuredValue`].
//!
//! The persisted form is compact JSON:
//!
//! ```text
//! {"identity":{"email":"alex@openlaw.io"},"serviceName":"DocuSign"}
//! ```
//!
//! Decoding is tolerant: whitespace and unknown keys are accepted and a
//! missing or non-string `serviceName` decodes as `""`. Anything else that
//! does not fit the shape is a [`ParseFailure`], never a panic.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::ParseFailure;
use crate::types::{Identity, StructuredValue};

/// Wire shape accepted on decode. `serviceName` is kept untyped so that a
/// value of the wrong type degrades instead of failing the whole parse.
#[derive(Deserialize)]
struct WireValue {
    identity: Identity,
    #[serde(rename = "serviceName", default)]
    service_name: serde_json::Value,
}

/// Initial state for a freshly mounted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// Text shown to the user.
    pub text: String,
    /// Structured value the field starts from.
    pub value: StructuredValue,
}

/// Codec bound to one field's configured signing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCodec {
    service_name: String,
}

impl ValueCodec {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Decode a persisted string.
    ///
    /// An empty string is the "no value" state and yields the empty default
    /// bound to this codec's service.
    pub fn parse(&self, raw: &str) -> Result<StructuredValue, ParseFailure> {
        if raw.is_empty() {
            return Ok(StructuredValue::empty(self.service_name.as_str()));
        }

        let wire: WireValue = serde_json::from_str(raw).map_err(|e| ParseFailure {
            raw: raw.to_string(),
            reason: e.to_string(),
        })?;

        let service_name = match wire.service_name {
            serde_json::Value::String(s) => s,
            _ => String::new(),
        };

        Ok(StructuredValue {
            identity: wire.identity,
            service_name,
        })
    }

    /// Encode a structured value: `identity` then `serviceName`, no whitespace.
    pub fn serialize(&self, value: &StructuredValue) -> String {
        // Unreachable for two string fields.
        serde_json::to_string(value).unwrap_or_else(|_| {
            format!(
                r#"{{"identity":{{"email":{}}},"serviceName":{}}}"#,
                serde_json::Value::from(value.identity.email.as_str()),
                serde_json::Value::from(value.service_name.as_str())
            )
        })
    }

    /// The email a piece of user text stands for.
    ///
    /// A serialized value contributes its email; any other text (typically a
    /// bare, possibly incomplete address) is the email as typed.
    pub fn email_of(&self, text: &str) -> String {
        if text.trim_start().starts_with('{') {
            if let Ok(value) = self.parse(text) {
                return value.identity.email;
            }
        }
        text.to_string()
    }

    /// The structured value for the text currently in the field.
    pub fn value_of(&self, text: &str) -> StructuredValue {
        StructuredValue::new(self.email_of(text), self.service_name.as_str())
    }

    /// Seed text and value from a saved string.
    ///
    /// A malformed saved value is shown verbatim while the structured value
    /// starts empty.
    pub fn seed(&self, saved: &str) -> Seed {
        match self.parse(saved) {
            Ok(value) => {
                trace!(email = %value.email(), "seeded from saved value");
                Seed {
                    text: value.identity.email.clone(),
                    value,
                }
            }
            Err(failure) => {
                debug!(%failure, "saved value is malformed, showing it verbatim");
                Seed {
                    text: saved.to_string(),
                    value: StructuredValue::empty(self.service_name.as_str()),
                }
            }
        }
    }
}
