//!
//! `execute`: a chain of context modifiers and conditions, optionally
//! finished by a nested command.
//!

use crate::command::{Command, CommandContext, CommandError, Construct, Objective, Validate};
use derive_more::Display;
use dpc_types::{
    Anchor, Block, BlockPosition, Dimension, ResourceLocation, Rotation, Swizzle, Target,
    WorldPosition,
};

///
/// IntRange
///
/// Inclusive integer range as used by `matches`: `5`, `..5`, `5..`, `1..5`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IntRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl IntRange {
    #[must_use]
    pub const fn exact(value: i32) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    #[must_use]
    pub const fn at_least(min: i32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    #[must_use]
    pub const fn at_most(max: i32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    #[must_use]
    pub const fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    fn check(self) -> Result<(), String> {
        match (self.min, self.max) {
            (None, None) => Err("range needs at least one bound".to_string()),
            (Some(min), Some(max)) if min > max => {
                Err(format!("range minimum {min} exceeds maximum {max}"))
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for IntRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => write!(f, "{min}"),
            (Some(min), Some(max)) => write!(f, "{min}..{max}"),
            (Some(min), None) => write!(f, "{min}.."),
            (None, Some(max)) => write!(f, "..{max}"),
            (None, None) => f.write_str(".."),
        }
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CompareOp {
    #[display("<")]
    Less,
    #[display("<=")]
    LessOrEqual,
    #[display("=")]
    Equal,
    #[display(">=")]
    GreaterOrEqual,
    #[display(">")]
    Greater,
}

///
/// ScoreComparison
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreComparison {
    Compare(CompareOp, Target, Objective),
    Matches(IntRange),
}

///
/// Condition
///
/// The test behind an `if`/`unless` subcommand.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Condition {
    Block(BlockPosition, Block),
    Dimension(Dimension),
    Entity(Target),
    Loaded(BlockPosition),
    Predicate(ResourceLocation),
    Score {
        target: Target,
        objective: Objective,
        comparison: ScoreComparison,
    },
}

impl Condition {
    /// `score <target> <objective> matches <range>`
    pub fn score_matches(target: impl Into<Target>, objective: &Objective, range: IntRange) -> Self {
        Self::Score {
            target: target.into(),
            objective: objective.clone(),
            comparison: ScoreComparison::Matches(range),
        }
    }

    /// `score <target> <objective> <op> <source> <source objective>`
    pub fn score_compare(
        target: impl Into<Target>,
        objective: &Objective,
        op: CompareOp,
        source: impl Into<Target>,
        source_objective: &Objective,
    ) -> Self {
        Self::Score {
            target: target.into(),
            objective: objective.clone(),
            comparison: ScoreComparison::Compare(op, source.into(), source_objective.clone()),
        }
    }

    #[must_use]
    pub fn objectives(&self) -> Vec<&Objective> {
        match self {
            Self::Score {
                objective,
                comparison: ScoreComparison::Compare(_, _, source_objective),
                ..
            } => vec![objective, source_objective],
            Self::Score { objective, .. } => vec![objective],
            _ => Vec::new(),
        }
    }

    fn render(&self, ctx: &CommandContext) -> Result<String, CommandError> {
        const EXECUTE: &str = "execute";

        let line = match self {
            Self::Block(pos, block) => format!("block {pos} {block}"),
            Self::Dimension(dim) => format!("dimension {dim}"),
            Self::Entity(target) => format!("entity {target}"),
            Self::Loaded(pos) => format!("loaded {pos}"),
            Self::Predicate(loc) => format!("predicate {loc}"),
            Self::Score {
                target,
                objective,
                comparison,
            } => {
                let objective = objective.render(EXECUTE, ctx)?;
                match comparison {
                    ScoreComparison::Compare(op, source, source_objective) => format!(
                        "score {target} {objective} {op} {source} {}",
                        source_objective.render(EXECUTE, ctx)?
                    ),
                    ScoreComparison::Matches(range) => {
                        format!("score {target} {objective} matches {range}")
                    }
                }
            }
        };

        Ok(line)
    }
}

///
/// Subcommand
///

#[derive(Clone, Debug, PartialEq)]
pub enum Subcommand {
    Align(Swizzle),
    Anchored(Anchor),
    As(Target),
    At(Target),
    Facing(WorldPosition),
    FacingEntity(Target, Anchor),
    If(Condition),
    In(Dimension),
    Positioned(WorldPosition),
    PositionedAs(Target),
    Rotated(Rotation),
    RotatedAs(Target),
    Unless(Condition),
}

impl Subcommand {
    fn render(&self, ctx: &CommandContext) -> Result<String, CommandError> {
        let line = match self {
            Self::Align(axes) => format!("align {axes}"),
            Self::Anchored(anchor) => format!("anchored {anchor}"),
            Self::As(target) => format!("as {target}"),
            Self::At(target) => format!("at {target}"),
            Self::Facing(pos) => format!("facing {pos}"),
            Self::FacingEntity(target, anchor) => format!("facing entity {target} {anchor}"),
            Self::If(cond) => format!("if {}", cond.render(ctx)?),
            Self::In(dim) => format!("in {dim}"),
            Self::Positioned(pos) => format!("positioned {pos}"),
            Self::PositionedAs(target) => format!("positioned as {target}"),
            Self::Rotated(rot) => format!("rotated {rot}"),
            Self::RotatedAs(target) => format!("rotated as {target}"),
            Self::Unless(cond) => format!("unless {}", cond.render(ctx)?),
        };

        Ok(line)
    }

    const fn condition(&self) -> Option<&Condition> {
        match self {
            Self::If(c) | Self::Unless(c) => Some(c),
            _ => None,
        }
    }
}

///
/// Execute
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Execute {
    pub subcommands: Vec<Subcommand>,
    pub run: Option<Box<Command>>,
}

impl Execute {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, sub: Subcommand) -> Self {
        self.subcommands.push(sub);
        self
    }

    #[must_use]
    pub fn align(self, axes: Swizzle) -> Self {
        self.then(Subcommand::Align(axes))
    }

    #[must_use]
    pub fn anchored(self, anchor: Anchor) -> Self {
        self.then(Subcommand::Anchored(anchor))
    }

    #[must_use]
    pub fn as_entity(self, target: impl Into<Target>) -> Self {
        self.then(Subcommand::As(target.into()))
    }

    #[must_use]
    pub fn at(self, target: impl Into<Target>) -> Self {
        self.then(Subcommand::At(target.into()))
    }

    #[must_use]
    pub fn facing(self, pos: impl Into<WorldPosition>) -> Self {
        self.then(Subcommand::Facing(pos.into()))
    }

    #[must_use]
    pub fn facing_entity(self, target: impl Into<Target>, anchor: Anchor) -> Self {
        self.then(Subcommand::FacingEntity(target.into(), anchor))
    }

    #[must_use]
    pub fn in_dimension(self, dimension: Dimension) -> Self {
        self.then(Subcommand::In(dimension))
    }

    #[must_use]
    pub fn positioned(self, pos: impl Into<WorldPosition>) -> Self {
        self.then(Subcommand::Positioned(pos.into()))
    }

    #[must_use]
    pub fn positioned_as(self, target: impl Into<Target>) -> Self {
        self.then(Subcommand::PositionedAs(target.into()))
    }

    #[must_use]
    pub fn rotated(self, rotation: Rotation) -> Self {
        self.then(Subcommand::Rotated(rotation))
    }

    #[must_use]
    pub fn rotated_as(self, target: impl Into<Target>) -> Self {
        self.then(Subcommand::RotatedAs(target.into()))
    }

    #[must_use]
    pub fn if_condition(self, condition: Condition) -> Self {
        self.then(Subcommand::If(condition))
    }

    #[must_use]
    pub fn unless(self, condition: Condition) -> Self {
        self.then(Subcommand::Unless(condition))
    }

    /// Objectives tested by the conditions, then those of the `run` payload.
    #[must_use]
    pub fn objectives(&self) -> Vec<&Objective> {
        let mut out: Vec<&Objective> = self
            .subcommands
            .iter()
            .filter_map(Subcommand::condition)
            .flat_map(Condition::objectives)
            .collect();
        if let Some(run) = &self.run {
            out.extend(run.objectives());
        }

        out
    }

    /// Finish the chain with a command. Validation happens here so a bad
    /// payload is reported where it is attached.
    pub fn run(mut self, command: impl Into<Command>) -> Result<Self, CommandError> {
        self.run = Some(Box::new(command.into()));
        self.validate()?;

        Ok(self)
    }
}

impl Validate for Execute {
    fn validate(&self) -> Result<(), CommandError> {
        let name = self.name();

        if self.subcommands.is_empty() && self.run.is_none() {
            return Err(CommandError::invalid(
                name,
                "needs at least one subcommand or a run payload",
            ));
        }
        if self.run.as_deref().is_some_and(Command::is_comment) {
            return Err(CommandError::invalid(name, "cannot run a comment line"));
        }

        for cond in self.subcommands.iter().filter_map(Subcommand::condition) {
            if let Condition::Score {
                comparison: ScoreComparison::Matches(range),
                ..
            } = cond
            {
                range.check().map_err(|msg| CommandError::invalid(name, msg))?;
            }
        }

        Ok(())
    }
}

impl Construct for Execute {
    fn name(&self) -> &'static str {
        "execute"
    }

    fn construct(&self, ctx: &CommandContext) -> Result<String, CommandError> {
        let mut parts = vec![self.name().to_string()];

        for sub in &self.subcommands {
            parts.push(sub.render(ctx)?);
        }
        if let Some(run) = &self.run {
            parts.push(format!("run {}", run.construct_in(ctx)?));
        }

        Ok(parts.join(" "))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Comment, Empty, Function, Say};
    use crate::script::ScriptRef;
    use dpc_types::Selector;

    fn render(cmd: &Execute) -> String {
        cmd.validate().unwrap();
        cmd.construct(&CommandContext::default()).unwrap()
    }

    #[test]
    fn chain_with_run() {
        let cmd = Execute::new()
            .as_entity(Selector::all())
            .at(Selector::current())
            .anchored(Anchor::Eyes)
            .run(Say::new("hi").unwrap())
            .unwrap();
        assert_eq!(render(&cmd), "execute as @a at @s anchored eyes run say hi");
    }

    #[test]
    fn positional_subcommands() {
        let cmd = Execute::new()
            .align("xz".parse().unwrap())
            .positioned(BlockPosition::relative(0, 1, 0))
            .rotated(Rotation::relative(90.0, 0.0))
            .facing_entity(Selector::nearest(), Anchor::Feet)
            .in_dimension(Dimension::the_end());
        assert_eq!(
            render(&cmd),
            "execute align xz positioned ~0 ~1 ~0 rotated ~90 ~0 \
             facing entity @p feet in minecraft:the_end"
        );
    }

    #[test]
    fn conditions() {
        let timer = Objective::new("timer").unwrap();
        let best = Objective::new("best").unwrap();
        let stone = Block::new(ResourceLocation::minecraft("stone").unwrap());

        let cmd = Execute::new()
            .if_condition(Condition::score_matches(Selector::current(), &timer, IntRange::at_least(20)))
            .unless(Condition::Block(BlockPosition::relative(0, -1, 0), stone))
            .if_condition(Condition::score_compare(
                Selector::current(),
                &timer,
                CompareOp::GreaterOrEqual,
                Selector::all(),
                &best,
            ))
            .if_condition(Condition::Predicate("pack:is_night".parse().unwrap()));
        assert_eq!(
            render(&cmd),
            "execute if score @s timer matches 20.. unless block ~0 ~-1 ~0 minecraft:stone \
             if score @s timer >= @a best if predicate pack:is_night"
        );
    }

    #[test]
    fn run_payload_uses_parent_context() {
        let cmd = Execute::new()
            .as_entity(Selector::all())
            .run(Function::new("./tick").unwrap())
            .unwrap();
        let ctx = CommandContext {
            line_number: Some(3),
            script: Some(ScriptRef::new("pack:boss/main".parse().unwrap())),
        };
        assert_eq!(
            cmd.construct(&ctx).unwrap(),
            "execute as @a run function pack:boss/tick"
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(Execute::new().validate().is_err());
        assert!(Execute::new().run(Comment::new(["x"])).is_err());
        assert!(Execute::new().as_entity(Selector::all()).run(Empty).is_err());

        let bad = Execute::new().if_condition(Condition::score_matches(
            Selector::current(),
            &Objective::new("t").unwrap(),
            IntRange::between(5, 1),
        ));
        assert!(bad.validate().is_err());
    }

    #[test]
    fn collects_condition_and_payload_objectives() {
        let timer = Objective::new("timer").unwrap();
        let best = Objective::new("best").unwrap();
        let lives = Objective::scoped("lives").unwrap();

        let cmd = Execute::new()
            .if_condition(Condition::score_compare(
                Selector::current(),
                &timer,
                CompareOp::Less,
                Selector::all(),
                &best,
            ))
            .run(lives.set(Selector::current(), 3))
            .unwrap();
        let names: Vec<_> = cmd.objectives().into_iter().map(Objective::name).collect();
        assert_eq!(names, ["timer", "best", "lives"]);
    }

    #[test]
    fn int_range_rendering() {
        assert_eq!(IntRange::exact(3).to_string(), "3");
        assert_eq!(IntRange::at_most(3).to_string(), "..3");
        assert_eq!(IntRange::between(1, 3).to_string(), "1..3");
    }
}
