//!
//! The command family.
//!
//! Each submodule models one grammar rule of the target command language.
//! Variants hold plain data and implement `Construct`, which formats that
//! data into a single command line. The closed `CommandKind` enum collects
//! every variant; `Command` pairs a kind with the context its owning script
//! hands it through `update_data`.
//!

mod advancement;
mod attribute;
mod bossbar;
mod clear;
mod clone;
mod comment;
mod dev_log;
mod execute;
mod function;
mod message;
mod scoreboard;

pub use advancement::*;
pub use attribute::*;
pub use bossbar::*;
pub use clear::*;
pub use clone::*;
pub use comment::*;
pub use dev_log::*;
pub use execute::*;
pub use function::*;
pub use message::*;
pub use scoreboard::*;

use crate::script::ScriptRef;
use dpc_types::{ParseError, Target};
use thiserror::Error as ThisError;

///
/// CommandError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum CommandError {
    #[error("{command}: {message}")]
    InvalidArguments {
        command: &'static str,
        message: String,
    },

    #[error("{command}: '{what}' can only be resolved inside a script")]
    MissingContext { command: &'static str, what: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CommandError {
    pub fn invalid(command: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            command,
            message: message.into(),
        }
    }

    pub fn missing_context(command: &'static str, what: impl Into<String>) -> Self {
        Self::MissingContext {
            command,
            what: what.into(),
        }
    }
}

// selectors that may match non-player entities are rejected; names and
// uuids cannot be checked here
pub(crate) fn require_players(command: &'static str, target: &Target) -> Result<(), CommandError> {
    match target {
        Target::Selector(s) if !s.targets_player(false) => Err(CommandError::invalid(
            command,
            format!("target '{s}' may select non-player entities"),
        )),
        _ => Ok(()),
    }
}

///
/// Validate
///
/// Argument-shape checks for a single command. Run by the fallible
/// constructors and again before every `construct`, since fields are public.
///

pub trait Validate {
    fn validate(&self) -> Result<(), CommandError>;
}

///
/// Construct
///

pub trait Construct: Validate {
    /// Lowercase name of the grammar rule. For game commands this is the
    /// keyword that leads the rendered line.
    fn name(&self) -> &'static str;

    /// Format the command into one line of script text.
    ///
    /// Must not mutate anything; scripts may construct the same command any
    /// number of times.
    fn construct(&self, ctx: &CommandContext) -> Result<String, CommandError>;
}

///
/// CommandContext
///
/// What the owning script tells a command about its placement.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandContext {
    pub line_number: Option<usize>,
    pub script: Option<ScriptRef>,
}

impl CommandContext {
    /// The owning script, or a `MissingContext` error naming what needed it.
    pub fn require_script(
        &self,
        command: &'static str,
        what: &str,
    ) -> Result<&ScriptRef, CommandError> {
        self.script
            .as_ref()
            .ok_or_else(|| CommandError::missing_context(command, what))
    }
}

macro_rules! command_kinds {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        ///
        /// CommandKind
        ///

        #[derive(Clone, Debug, PartialEq)]
        #[remain::sorted]
        pub enum CommandKind {
            $($variant($ty),)*
        }

        impl CommandKind {
            fn inner(&self) -> &dyn Construct {
                match self {
                    $(Self::$variant(c) => c as &dyn Construct,)*
                }
            }
        }

        $(
            impl From<$ty> for CommandKind {
                fn from(c: $ty) -> Self {
                    Self::$variant(c)
                }
            }

            impl From<$ty> for Command {
                fn from(c: $ty) -> Self {
                    Self::new(CommandKind::$variant(c))
                }
            }
        )*
    };
}

command_kinds! {
    Advancement(Advancement),
    Attribute(Attribute),
    Bossbar(Bossbar),
    Clear(Clear),
    Clone(CloneRegion),
    Comment(Comment),
    Empty(Empty),
    Execute(Execute),
    Function(Function),
    Literal(Literal),
    Log(Log),
    Say(Say),
    Scoreboard(Scoreboard),
    TellRaw(TellRaw),
}

///
/// Command
///

#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    kind: CommandKind,
    context: CommandContext,
    dev: bool,
}

impl Command {
    #[must_use]
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            context: CommandContext::default(),
            dev: false,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &CommandKind {
        &self.kind
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.inner().name()
    }

    /// Render this command with the context last handed to it.
    pub fn construct(&self) -> Result<String, CommandError> {
        self.construct_in(&self.context)
    }

    /// Record the owning script and this command's line within it.
    pub fn update_data(&mut self, line_number: usize, script: &ScriptRef) {
        self.context = CommandContext {
            line_number: Some(line_number),
            script: Some(script.clone()),
        };
    }

    #[must_use]
    pub const fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Mark this command as development-only.
    #[must_use]
    pub const fn dev(mut self) -> Self {
        self.dev = true;
        self
    }

    /// Development-only: flagged with `dev`, a `Log`, or an `execute` whose
    /// `run` payload is development-only.
    #[must_use]
    pub fn is_dev(&self) -> bool {
        match &self.kind {
            CommandKind::Log(_) => true,
            CommandKind::Execute(e) => self.dev || e.run.as_deref().is_some_and(Self::is_dev),
            _ => self.dev,
        }
    }

    /// Scoreboard objectives this command reads or writes.
    #[must_use]
    pub fn objectives(&self) -> Vec<&Objective> {
        match &self.kind {
            CommandKind::Execute(e) => e.objectives(),
            CommandKind::Scoreboard(sb) => sb.action.objectives(),
            _ => Vec::new(),
        }
    }

    /// Comment-like lines render as `#` text rather than game commands.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, CommandKind::Comment(_) | CommandKind::Empty(_))
    }

    // nested commands (execute ... run) render with their parent's context
    pub(crate) fn construct_in(&self, ctx: &CommandContext) -> Result<String, CommandError> {
        let inner = self.kind.inner();
        inner.validate()?;
        inner.construct(ctx)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use dpc_types::{ResourceLocation, Selector};

    fn script_ref(loc: &str) -> ScriptRef {
        ScriptRef::new(loc.parse::<ResourceLocation>().unwrap())
    }

    #[test]
    fn name_is_the_leading_token() {
        let cmds: Vec<Command> = vec![
            Say::new("hi").unwrap().into(),
            Clear::new(Selector::current()).into(),
            Empty.into(),
            Comment::new(["note"]).into(),
        ];
        let names: Vec<_> = cmds.iter().map(Command::name).collect();
        assert_eq!(names, ["say", "clear", "empty", "comment"]);
    }

    #[test]
    fn update_data_sets_context() {
        let mut cmd = Command::from(Empty);
        assert_eq!(cmd.context(), &CommandContext::default());

        cmd.update_data(4, &script_ref("pack:init"));
        assert_eq!(cmd.context().line_number, Some(4));
        assert_eq!(
            cmd.context().script.as_ref().unwrap().location().to_string(),
            "pack:init"
        );
    }

    #[test]
    fn construct_is_repeatable() {
        let mut cmd = Command::from(Function::new("./helper").unwrap());
        cmd.update_data(0, &script_ref("pack:util/main"));

        let first = cmd.construct().unwrap();
        let second = cmd.construct().unwrap();
        assert_eq!(first, "function pack:util/helper");
        assert_eq!(first, second);
    }

    #[test]
    fn dev_flags() {
        assert!(!Command::from(Empty).is_dev());
        assert!(Command::from(Empty).dev().is_dev());
        assert!(Command::from(Log::info("x")).is_dev());
    }

    #[test]
    fn dev_payloads_make_execute_dev() {
        let wrapped = Execute::new().as_entity(Selector::all()).run(Log::info("x")).unwrap();
        assert!(Command::from(wrapped).is_dev());

        let flagged = Execute::new()
            .at(Selector::current())
            .run(Command::from(Say::new("dbg").unwrap()).dev())
            .unwrap();
        assert!(Command::from(flagged).is_dev());

        let nested = Execute::new()
            .run(Execute::new().as_entity(Selector::all()).run(Log::warn("x")).unwrap())
            .unwrap();
        assert!(Command::from(nested).is_dev());

        let plain = Execute::new().as_entity(Selector::all()).run(Say::new("hi").unwrap()).unwrap();
        assert!(!Command::from(plain).is_dev());
    }

    #[test]
    fn construct_revalidates_mutated_fields() {
        let mut clear = Clear::new(Selector::current());
        clear.count = Some(3);

        let err = Command::from(clear).construct().unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments { command: "clear", .. }));
    }
}
