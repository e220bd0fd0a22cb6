use crate::command::{CommandContext, CommandError, Construct, Validate};
use dpc_types::{Target, TextElement};

// a command occupies exactly one non-blank line
fn single_line(command: &'static str, text: &str) -> Result<(), CommandError> {
    if text.trim().is_empty() {
        return Err(CommandError::invalid(command, "text must not be empty"));
    }
    if text.contains(['\n', '\r']) {
        return Err(CommandError::invalid(
            command,
            "text must fit on a single line",
        ));
    }

    Ok(())
}

///
/// Say
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Say {
    pub message: String,
}

impl Say {
    pub fn new(message: impl Into<String>) -> Result<Self, CommandError> {
        let cmd = Self {
            message: message.into(),
        };
        cmd.validate()?;

        Ok(cmd)
    }
}

impl Validate for Say {
    fn validate(&self) -> Result<(), CommandError> {
        single_line(self.name(), &self.message)
    }
}

impl Construct for Say {
    fn name(&self) -> &'static str {
        "say"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        Ok(format!("{} {}", self.name(), self.message))
    }
}

///
/// TellRaw
///
/// Sends a JSON text component to the targeted players.
///

#[derive(Clone, Debug, PartialEq)]
pub struct TellRaw {
    pub target: Target,
    pub text: TextElement,
}

impl TellRaw {
    pub fn new(target: impl Into<Target>, text: impl Into<TextElement>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
        }
    }
}

impl Validate for TellRaw {
    fn validate(&self) -> Result<(), CommandError> {
        Ok(())
    }
}

impl Construct for TellRaw {
    fn name(&self) -> &'static str {
        "tellraw"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        let json = self
            .text
            .to_json()
            .map_err(|e| CommandError::invalid(self.name(), e.to_string()))?;

        Ok(format!("{} {} {json}", self.name(), self.target))
    }
}

///
/// Literal
///
/// Raw command text written to the script verbatim, for anything the typed
/// commands do not cover.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Literal {
    pub content: String,
}

impl Literal {
    pub fn new(content: impl Into<String>) -> Result<Self, CommandError> {
        let cmd = Self {
            content: content.into(),
        };
        cmd.validate()?;

        Ok(cmd)
    }
}

impl Validate for Literal {
    fn validate(&self) -> Result<(), CommandError> {
        single_line(self.name(), &self.content)
    }
}

impl Construct for Literal {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        Ok(self.content.clone())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use dpc_types::{Color, Selector};

    #[test]
    fn say() {
        let cmd = Say::new("hello world").unwrap();
        assert_eq!(
            cmd.construct(&CommandContext::default()).unwrap(),
            "say hello world"
        );
        assert!(Say::new("two\nlines").is_err());
    }

    #[test]
    fn tellraw_renders_component() {
        let cmd = TellRaw::new(
            Selector::all().tag("admin"),
            TextElement::new("hi").color(Color::Gold).bold(true),
        );
        assert_eq!(
            cmd.construct(&CommandContext::default()).unwrap(),
            r#"tellraw @a[tag=admin] {"text":"hi","color":"gold","bold":true}"#
        );
    }

    #[test]
    fn literal_is_verbatim() {
        let cmd = Literal::new("weather clear 600").unwrap();
        assert_eq!(
            cmd.construct(&CommandContext::default()).unwrap(),
            "weather clear 600"
        );
        assert_eq!(cmd.name(), "literal");
        assert!(Literal::new("a\r\nb").is_err());
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            Say::new("").unwrap_err(),
            CommandError::invalid("say", "text must not be empty")
        );
        assert!(Say::new("   ").is_err());
        assert!(Literal::new("").is_err());

        let mut cmd = Say::new("x").unwrap();
        cmd.message.clear();
        assert!(cmd.validate().is_err());
    }
}
