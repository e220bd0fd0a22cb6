//!
//! In-memory scripts: an ordered list of commands at a resource location.
//!
//! Rendering hands every command its body index and a `ScriptRef` through
//! `update_data`, then constructs each line. Nothing here touches the
//! filesystem.
//!

use crate::{
    command::{Command, CommandError, CommandKind, Comment, Objective, ScoreboardAction},
    config::{Config, ConfigModel},
    log::Topic,
};
use dpc_types::{ParseError, ResourceLocation};
use dpc_utils::case::to_snake_case;
use thiserror::Error as ThisError;

///
/// ScriptError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ScriptError {
    #[error("index {index} is out of range for script '{script}' ({len} commands)")]
    IndexOutOfRange {
        script: ResourceLocation,
        index: usize,
        len: usize,
    },

    #[error("{script} line {line}: {source}")]
    Line {
        script: ResourceLocation,
        line: usize,
        #[source]
        source: CommandError,
    },
}

///
/// ScriptRef
///
/// What a command keeps of its owning script: its location and the
/// namespace of the pack it is rendered for.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ScriptRef {
    location: ResourceLocation,
    pack_namespace: Option<String>,
}

impl ScriptRef {
    #[must_use]
    pub const fn new(location: ResourceLocation) -> Self {
        Self {
            location,
            pack_namespace: None,
        }
    }

    #[must_use]
    pub fn in_pack(mut self, namespace: impl Into<String>) -> Self {
        self.pack_namespace = Some(namespace.into());
        self
    }

    /// Prefix for pack-scoped names. Falls back to the script's own
    /// namespace when no pack was given.
    #[must_use]
    pub fn pack_namespace(&self) -> &str {
        self.pack_namespace
            .as_deref()
            .unwrap_or_else(|| self.location.namespace())
    }

    #[must_use]
    pub const fn location(&self) -> &ResourceLocation {
        &self.location
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        self.location.namespace()
    }

    /// File name of the script without its directory.
    #[must_use]
    pub fn name(&self) -> &str {
        self.location.file_name()
    }
}

///
/// Script
///

#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    location: ResourceLocation,
    description: Option<String>,
    commands: Vec<Command>,
}

impl Script {
    #[must_use]
    pub const fn new(location: ResourceLocation) -> Self {
        Self {
            location,
            description: None,
            commands: Vec::new(),
        }
    }

    /// A top-level script whose path is the snake-cased title,
    /// e.g. `("pack", "Spawn Boss")` becomes `pack:spawn_boss`.
    pub fn named(namespace: &str, title: &str) -> Result<Self, ParseError> {
        let location = ResourceLocation::new(namespace, &to_snake_case(title))?;

        Ok(Self::new(location))
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    #[must_use]
    pub const fn location(&self) -> &ResourceLocation {
        &self.location
    }

    #[must_use]
    pub fn script_ref(&self) -> ScriptRef {
        ScriptRef::new(self.location.clone())
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: impl Into<Command>) -> &mut Self {
        self.commands.push(command.into());
        self
    }

    pub fn extend<I, C>(&mut self, commands: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Command>,
    {
        self.commands.extend(commands.into_iter().map(Into::into));
        self
    }

    /// Insert at `index`, shifting later commands down.
    pub fn insert(&mut self, index: usize, command: impl Into<Command>) -> Result<(), ScriptError> {
        if index > self.commands.len() {
            return Err(ScriptError::IndexOutOfRange {
                script: self.location.clone(),
                index,
                len: self.commands.len(),
            });
        }
        self.commands.insert(index, command.into());

        Ok(())
    }

    /// Objectives used by this script's commands, in order of first use.
    #[must_use]
    pub fn objectives(&self) -> Vec<&Objective> {
        let mut seen: Vec<&Objective> = Vec::new();
        for objective in self.commands.iter().flat_map(Command::objectives) {
            if !seen.contains(&objective) {
                seen.push(objective);
            }
        }

        seen
    }

    ///
    /// Build a script that creates every objective the given scripts use,
    /// typically run from the pack's load function.
    ///
    /// Criteria come from an `objectives add` in those scripts when one
    /// exists, otherwise `dummy`. With no objectives the script holds a
    /// single placeholder comment.
    ///
    pub fn objective_setup<'a, I>(location: ResourceLocation, scripts: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let scripts: Vec<&Self> = scripts.into_iter().collect();
        let mut setup = Self::new(location);
        let mut created: Vec<&Objective> = Vec::new();

        for objective in scripts.iter().copied().flat_map(Self::objectives) {
            if created.contains(&objective) {
                continue;
            }
            created.push(objective);

            let criteria = scripts
                .iter()
                .flat_map(|s| s.commands.iter())
                .find_map(|cmd| match cmd.kind() {
                    CommandKind::Scoreboard(sb) => match &sb.action {
                        ScoreboardAction::ObjectivesAdd {
                            objective: added,
                            criteria,
                            ..
                        } if added == objective => Some(criteria.clone()),
                        _ => None,
                    },
                    _ => None,
                })
                .unwrap_or_default();
            setup.push(objective.create(criteria));
        }

        if setup.is_empty() {
            setup.push(Comment::new(["No scoreboards to initialize"]));
        }

        setup
    }

    /// Bracket whatever `body` pushes between two comment lines.
    pub fn wrap_comment<F>(&mut self, start: &str, end: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push(Comment::new([start]));
        body(self);
        self.push(Comment::new([end]))
    }

    /// Render with the thread's active config.
    pub fn render(&mut self) -> Result<String, ScriptError> {
        let config = Config::current();
        self.render_with(&config)
    }

    ///
    /// Render every command into script text.
    ///
    /// Development-only commands are skipped unless `pack.dev` is set. Line
    /// numbers handed to commands are positions in the command list, so they
    /// stay stable whether or not dev commands are emitted. Pack-scoped
    /// objectives take `pack.namespace`.
    ///
    pub fn render_with(&mut self, config: &ConfigModel) -> Result<String, ScriptError> {
        let script_ref = self.script_ref().in_pack(&config.pack.namespace);
        let mut body = Vec::with_capacity(self.commands.len());
        let mut skipped = 0_usize;

        for (line, cmd) in self.commands.iter_mut().enumerate() {
            cmd.update_data(line, &script_ref);

            if cmd.is_dev() && !config.pack.dev {
                skipped += 1;
                continue;
            }

            let text = cmd.construct().map_err(|source| ScriptError::Line {
                script: self.location.clone(),
                line,
                source,
            })?;
            body.push(text);
        }

        crate::log!(
            Topic::Script,
            Debug,
            "rendered {} ({} lines, {} dev-only skipped)",
            self.location,
            body.len(),
            skipped
        );

        if body.is_empty() {
            return Ok(format!("# No content generated for {}", self.location));
        }

        let mut out = self.header(config);
        out.extend(body);

        Ok(out.join("\n"))
    }

    // generated-by line and description block, followed by a blank line
    fn header(&self, config: &ConfigModel) -> Vec<String> {
        let mut lines = Vec::new();

        if config.script.header {
            lines.push(format!(
                "# This script was automatically generated for [{}]",
                config.pack.name
            ));
        }
        if let Some(desc) = &self.description {
            lines.push(Comment::new([format!("---\n{desc}")]).render());
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }

        lines
    }
}

///
/// TESTS
///
