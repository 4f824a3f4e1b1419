//! `replay` and `parse` commands.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use signature_field::{
    DefaultMessages, EmailPatternValidator, EventOutcome, EventType, FieldConfig, FieldController,
    FieldEvent, OverrideDecision, ValidateHook, ValidationEvent, ValueCodec,
};

/// Override hook assembled from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ScriptHook {
    pub suppress_on_change: bool,
    pub custom_error: Option<String>,
}

impl ValidateHook for ScriptHook {
    fn on_validate(&self, event: &ValidationEvent<'_>) -> OverrideDecision {
        if !event.is_error {
            return OverrideDecision::Unset;
        }
        if self.suppress_on_change && event.event_type == EventType::Change {
            return OverrideDecision::Suppress;
        }
        match &self.custom_error {
            Some(message) => OverrideDecision::Custom(message.clone()),
            None => OverrideDecision::Unset,
        }
    }
}

/// Replay a script against a freshly mounted field.
pub fn run_replay(
    config_path: &Path,
    script_path: Option<&Path>,
    hook: &ScriptHook,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let config = FieldConfig::load(Some(config_path))
        .with_context(|| format!("loading {}", config_path.display()))?;

    let script = match script_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading script from stdin")?;
            buf
        }
    };
    let events = FieldEvent::parse_script(&script)?;
    debug!(events = events.len(), "replaying script");

    let validator = EmailPatternValidator::new(&DefaultMessages::default())?;
    let sink = |name: &str, value: Option<&str>| {
        info!(field = %name, value = ?value, "commit");
    };
    let mut field = FieldController::new(config, &validator, &sink).with_validate_hook(hook);

    for outcome in field.replay(events) {
        if json {
            writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
        } else {
            writeln!(out, "{}", format_outcome(&outcome))?;
        }
    }
    Ok(())
}

/// Print the seed a persisted value produces.
pub fn run_parse(raw: &str, service_name: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let codec = ValueCodec::new(service_name);
    match codec.parse(raw) {
        Ok(value) => {
            writeln!(out, "text: {}", value.email())?;
            writeln!(out, "value: {}", codec.serialize(&value))?;
        }
        Err(failure) => {
            let seed = codec.seed(raw);
            writeln!(out, "text: {}", seed.text)?;
            writeln!(out, "value: {}", codec.serialize(&seed.value))?;
            writeln!(out, "malformed: {}", failure.reason)?;
        }
    }
    Ok(())
}

fn format_outcome(outcome: &EventOutcome) -> String {
    let mut line = format!(
        "{} text={:?} error={}",
        outcome.event,
        outcome.text,
        outcome.error.as_deref().map_or("-".to_string(), |e| format!("{:?}", e))
    );
    if let Some(commit) = &outcome.commit {
        match commit {
            Some(value) => line.push_str(&format!(" commit={}", value)),
            None => line.push_str(" commit=<absent>"),
        }
    }
    line
}
