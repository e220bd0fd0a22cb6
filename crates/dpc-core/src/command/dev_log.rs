use crate::command::{CommandContext, CommandError, Construct, Validate};
use derive_more::Display;
use dpc_types::{Color, Selector, TextElement};

///
/// Severity
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Severity {
    #[default]
    #[display("info")]
    Info,
    #[display("warning")]
    Warning,
    #[display("critical")]
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Warning => Color::Yellow,
            Self::Critical => Color::Red,
        }
    }
}

///
/// Log
///
/// In-game debug message broadcast to every player. Always development-only,
/// so release builds drop it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Log {
    pub message: String,
    pub severity: Severity,
}

impl Log {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn crit(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Critical)
    }
}

impl Validate for Log {
    fn validate(&self) -> Result<(), CommandError> {
        Ok(())
    }
}

impl Construct for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn construct(&self, ctx: &CommandContext) -> Result<String, CommandError> {
        let label = ctx.script.as_ref().map_or("N/A", |s| s.location().path());
        let text = TextElement::new(format!(
            "[{label} | {}] - {}",
            self.severity, self.message
        ))
        .color(self.severity.color());

        let json = text
            .to_json()
            .map_err(|e| CommandError::invalid(self.name(), e.to_string()))?;

        Ok(format!("tellraw {} {json}", Selector::all()))
    }
}

///
/// TESTS
///
