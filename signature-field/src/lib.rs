//! External signature form field
//!
//! `signature-field` is the controller behind a single form input that binds a
//! signer's email to a named external signing service. It knows nothing about
//! rendering or form layout; hosts drive it with change and blur events and
//! receive the committed value back.
//!
//! # Architecture
//!
//! - **ValueCodec**: persisted JSON string ⇄ [`StructuredValue`], tolerant of malformed input
//! - **Validator**: opaque validity predicate injected by the host
//! - **ErrorPolicy**: decides per event whether and what error to show
//! - **FieldController**: owns the text and error state and drives the others
//!
//! # Example
//!
//! ```rust
//! use signature_field::{DefaultMessages, EmailPatternValidator, FieldConfig, FieldController};
//!
//! let validator = EmailPatternValidator::new(&DefaultMessages::default())?;
//! let sink = |name: &str, value: Option<&str>| println!("{name}: {value:?}");
//! let mut field = FieldController::new(FieldConfig::new("Signatory"), &validator, &sink);
//!
//! field.on_change("alex@openlaw.io");
//! assert_eq!(
//!     field.on_blur().as_deref(),
//!     Some(r#"{"identity":{"email":"alex@openlaw.io"},"serviceName":""}"#)
//! );
//! # Ok::<(), signature_field::FieldError>(())
//! ```

pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod policy;
pub mod types;
pub mod validator;

pub use codec::{Seed, ValueCodec};
pub use config::FieldConfig;
pub use controller::{CommitSink, EventOutcome, FieldController, FieldEvent, FieldView, InputListener};
pub use error::{FieldError, ParseFailure, Result};
pub use policy::{Candidate, ErrorPolicy, Evaluation, OverrideDecision, ValidateHook, ValidationEvent};
pub use types::{ElementType, ErrorDisplay, ErrorSource, ErrorState, EventType, Identity, StructuredValue};
pub use validator::{DefaultMessages, EmailPatternValidator, FnValidator, Validator, Validity};
