use crate::command::{CommandContext, CommandError, Construct, Validate};
use dpc_utils::format::join_args;

///
/// Comment
///
/// A `#` line. The parts are joined with spaces; each embedded newline
/// starts a new comment line.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    pub content: String,
}

impl Comment {
    pub fn new<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: std::fmt::Display,
    {
        Self {
            content: join_args(parts),
        }
    }

    /// The `#` lines; rendering a comment cannot fail.
    #[must_use]
    pub fn render(&self) -> String {
        self.content
            .split('\n')
            .map(|line| {
                let line = line.trim_end();
                if line.is_empty() {
                    "#".to_string()
                } else {
                    format!("# {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Validate for Comment {
    fn validate(&self) -> Result<(), CommandError> {
        Ok(())
    }
}

impl Construct for Comment {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        Ok(self.render())
    }
}

///
/// Empty
///
/// A placeholder line with no behaviour.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Empty;

impl Validate for Empty {
    fn validate(&self) -> Result<(), CommandError> {
        Ok(())
    }
}

impl Construct for Empty {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        Ok("# Empty Line".to_string())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn render(cmd: &impl Construct) -> String {
        cmd.construct(&CommandContext::default()).unwrap()
    }

    #[test]
    fn joins_parts_with_spaces() {
        assert_eq!(render(&Comment::new(["spawn", "the", "boss"])), "# spawn the boss");
        assert_eq!(render(&Comment::new([1, 2])), "# 1 2");
    }

    #[test]
    fn multiline_content() {
        let cmd = Comment::new(["first\n\nthird"]);
        assert_eq!(render(&cmd), "# first\n#\n# third");
        assert_eq!(cmd.render(), render(&cmd));
    }

    #[test]
    fn empty_placeholder() {
        assert_eq!(render(&Empty), "# Empty Line");
        assert_eq!(Empty.name(), "empty");
    }
}
