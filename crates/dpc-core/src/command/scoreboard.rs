use crate::{
    command::{CommandContext, CommandError, Construct, Validate},
    config::Config,
};
use derive_more::Display;
use dpc_types::{ScoreBound, Selector, Target, TextElement};
use dpc_utils::format::opt_arg;

const SCOREBOARD: &str = "scoreboard";

///
/// Objective
///
/// A scoreboard objective name. Pack-scoped objectives are prefixed with
/// the pack namespace when rendered, so packs sharing a world do not
/// collide.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Objective {
    name: String,
    scoped: bool,
}

impl Objective {
    /// An objective rendered exactly as named.
    pub fn new(name: impl Into<String>) -> Result<Self, CommandError> {
        Self::build(name.into(), false)
    }

    /// An objective rendered as `{namespace}_{name}`.
    pub fn scoped(name: impl Into<String>) -> Result<Self, CommandError> {
        Self::build(name.into(), true)
    }

    fn build(name: String, scoped: bool) -> Result<Self, CommandError> {
        if name.is_empty() {
            return Err(CommandError::invalid(SCOREBOARD, "objective name is empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(CommandError::invalid(
                SCOREBOARD,
                format!("objective name '{name}' contains whitespace"),
            ));
        }

        Ok(Self { name, scoped })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_scoped(&self) -> bool {
        self.scoped
    }

    /// The name as it appears in a command line.
    pub fn render(&self, command: &'static str, ctx: &CommandContext) -> Result<String, CommandError> {
        if !self.scoped {
            return Ok(self.name.clone());
        }

        let script = ctx.require_script(command, &self.name)?;
        Ok(self.qualified(script.pack_namespace()))
    }

    /// The name as rendered inside a pack with the given namespace.
    #[must_use]
    pub fn qualified(&self, namespace: &str) -> String {
        if self.scoped {
            format!("{namespace}_{}", self.name)
        } else {
            self.name.clone()
        }
    }

    //
    // command shortcuts
    //

    #[must_use]
    pub fn create(&self, criteria: Criteria) -> Scoreboard {
        Scoreboard::new(ScoreboardAction::ObjectivesAdd {
            objective: self.clone(),
            criteria,
            display_name: None,
        })
    }

    #[must_use]
    pub fn set(&self, target: impl Into<Target>, value: i32) -> Scoreboard {
        Scoreboard::new(ScoreboardAction::PlayersSet {
            target: target.into(),
            objective: self.clone(),
            value,
        })
    }

    pub fn add(&self, target: impl Into<Target>, value: i32) -> Result<Scoreboard, CommandError> {
        Scoreboard::checked(ScoreboardAction::PlayersAdd {
            target: target.into(),
            objective: self.clone(),
            value,
        })
    }

    pub fn remove(&self, target: impl Into<Target>, value: i32) -> Result<Scoreboard, CommandError> {
        Scoreboard::checked(ScoreboardAction::PlayersRemove {
            target: target.into(),
            objective: self.clone(),
            value,
        })
    }

    #[must_use]
    pub fn reset(&self, target: impl Into<Target>) -> Scoreboard {
        Scoreboard::new(ScoreboardAction::PlayersReset {
            target: target.into(),
            objective: Some(self.clone()),
        })
    }

    #[must_use]
    pub fn get(&self, target: impl Into<Target>) -> Scoreboard {
        Scoreboard::new(ScoreboardAction::PlayersGet {
            target: target.into(),
            objective: self.clone(),
        })
    }
}

///
/// ScoreFilter
///
/// Selector `scores={...}` conditions keyed by an `Objective`. A selector
/// renders without a script, so pack-scoped objectives take the namespace
/// of the thread's active pack config.
///

pub trait ScoreFilter: Sized {
    #[must_use]
    fn if_objective(self, objective: &Objective, value: i32, bound: ScoreBound) -> Self {
        let namespace = Config::current().pack.namespace.clone();
        self.if_objective_in(&namespace, objective, value, bound)
    }

    /// As `if_objective`, qualifying scoped objectives with `namespace`.
    #[must_use]
    fn if_objective_in(
        self,
        namespace: &str,
        objective: &Objective,
        value: i32,
        bound: ScoreBound,
    ) -> Self;
}

impl ScoreFilter for Selector {
    fn if_objective_in(
        self,
        namespace: &str,
        objective: &Objective,
        value: i32,
        bound: ScoreBound,
    ) -> Self {
        self.if_score(objective.qualified(namespace), value, bound)
    }
}

///
/// Criteria
///

#[derive(Clone, Debug, Default, Display, Eq, PartialEq)]
pub enum Criteria {
    #[display("air")]
    Air,
    #[display("armor")]
    Armor,
    #[display("deathCount")]
    DeathCount,
    #[default]
    #[display("dummy")]
    Dummy,
    #[display("food")]
    Food,
    #[display("health")]
    Health,
    #[display("level")]
    Level,
    #[display("playerKillCount")]
    PlayerKillCount,
    #[display("totalKillCount")]
    TotalKillCount,
    #[display("trigger")]
    Trigger,
    #[display("xp")]
    Xp,

    /// Compound criteria such as `minecraft.used:minecraft.carrot_on_a_stick`.
    #[display("{_0}")]
    Custom(String),
}

///
/// ScoreOperation
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ScoreOperation {
    #[display("=")]
    Assign,
    #[display("+=")]
    Add,
    #[display("-=")]
    Subtract,
    #[display("*=")]
    Multiply,
    #[display("/=")]
    Divide,
    #[display("%=")]
    Modulo,
    #[display("<")]
    Min,
    #[display(">")]
    Max,
    #[display("><")]
    Swap,
}

///
/// ScoreboardAction
///

#[derive(Clone, Debug, PartialEq)]
pub enum ScoreboardAction {
    ObjectivesAdd {
        objective: Objective,
        criteria: Criteria,
        display_name: Option<TextElement>,
    },
    ObjectivesList,
    ObjectivesRemove {
        objective: Objective,
    },
    PlayersAdd {
        target: Target,
        objective: Objective,
        value: i32,
    },
    PlayersGet {
        target: Target,
        objective: Objective,
    },
    PlayersOperation {
        target: Target,
        objective: Objective,
        operation: ScoreOperation,
        source: Target,
        source_objective: Objective,
    },
    PlayersRemove {
        target: Target,
        objective: Objective,
        value: i32,
    },

    /// `objective: None` resets every score of the target.
    PlayersReset {
        target: Target,
        objective: Option<Objective>,
    },
    PlayersSet {
        target: Target,
        objective: Objective,
        value: i32,
    },
}

impl ScoreboardAction {
    /// Objectives this action reads or writes.
    #[must_use]
    pub fn objectives(&self) -> Vec<&Objective> {
        match self {
            Self::ObjectivesAdd { objective, .. }
            | Self::ObjectivesRemove { objective }
            | Self::PlayersAdd { objective, .. }
            | Self::PlayersGet { objective, .. }
            | Self::PlayersRemove { objective, .. }
            | Self::PlayersSet { objective, .. } => vec![objective],
            Self::PlayersOperation {
                objective,
                source_objective,
                ..
            } => vec![objective, source_objective],
            Self::PlayersReset { objective, .. } => objective.iter().collect(),
            Self::ObjectivesList => Vec::new(),
        }
    }
}

///
/// Scoreboard
///

#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    pub action: ScoreboardAction,
}

impl Scoreboard {
    #[must_use]
    pub const fn new(action: ScoreboardAction) -> Self {
        Self { action }
    }

    pub fn checked(action: ScoreboardAction) -> Result<Self, CommandError> {
        let cmd = Self::new(action);
        cmd.validate()?;

        Ok(cmd)
    }

    #[must_use]
    pub const fn list_objectives() -> Self {
        Self::new(ScoreboardAction::ObjectivesList)
    }

    #[must_use]
    pub fn remove_objective(objective: &Objective) -> Self {
        Self::new(ScoreboardAction::ObjectivesRemove {
            objective: objective.clone(),
        })
    }

    /// Reset every objective of the target.
    #[must_use]
    pub fn reset_all(target: impl Into<Target>) -> Self {
        Self::new(ScoreboardAction::PlayersReset {
            target: target.into(),
            objective: None,
        })
    }

    #[must_use]
    pub fn operation(
        target: impl Into<Target>,
        objective: &Objective,
        operation: ScoreOperation,
        source: impl Into<Target>,
        source_objective: &Objective,
    ) -> Self {
        Self::new(ScoreboardAction::PlayersOperation {
            target: target.into(),
            objective: objective.clone(),
            operation,
            source: source.into(),
            source_objective: source_objective.clone(),
        })
    }

    /// Attach a display name to an `objectives add` command.
    #[must_use]
    pub fn display_name(mut self, text: impl Into<TextElement>) -> Self {
        if let ScoreboardAction::ObjectivesAdd { display_name, .. } = &mut self.action {
            *display_name = Some(text.into());
        }
        self
    }
}

impl Validate for Scoreboard {
    fn validate(&self) -> Result<(), CommandError> {
        match &self.action {
            ScoreboardAction::PlayersAdd { value, .. }
            | ScoreboardAction::PlayersRemove { value, .. }
                if *value < 0 =>
            {
                Err(CommandError::invalid(
                    self.name(),
                    format!("add/remove amount must not be negative, got {value}"),
                ))
            }
            _ => Ok(()),
        }
    }
}

impl Construct for Scoreboard {
    fn name(&self) -> &'static str {
        SCOREBOARD
    }

    fn construct(&self, ctx: &CommandContext) -> Result<String, CommandError> {
        let name = self.name();
        let obj = |o: &Objective| o.render(name, ctx);

        let body = match &self.action {
            ScoreboardAction::ObjectivesAdd {
                objective,
                criteria,
                display_name,
            } => format!(
                "objectives add {} {criteria}{}",
                obj(objective)?,
                opt_arg(display_name.as_ref())
            ),
            ScoreboardAction::ObjectivesList => "objectives list".to_string(),
            ScoreboardAction::ObjectivesRemove { objective } => {
                format!("objectives remove {}", obj(objective)?)
            }
            ScoreboardAction::PlayersAdd {
                target,
                objective,
                value,
            } => format!("players add {target} {} {value}", obj(objective)?),
            ScoreboardAction::PlayersGet { target, objective } => {
                format!("players get {target} {}", obj(objective)?)
            }
            ScoreboardAction::PlayersOperation {
                target,
                objective,
                operation,
                source,
                source_objective,
            } => format!(
                "players operation {target} {} {operation} {source} {}",
                obj(objective)?,
                obj(source_objective)?
            ),
            ScoreboardAction::PlayersRemove {
                target,
                objective,
                value,
            } => format!("players remove {target} {} {value}", obj(objective)?),
            ScoreboardAction::PlayersReset { target, objective } => {
                let objective = objective.as_ref().map(obj).transpose()?;
                format!("players reset {target}{}", opt_arg(objective))
            }
            ScoreboardAction::PlayersSet {
                target,
                objective,
                value,
            } => format!("players set {target} {} {value}", obj(objective)?),
        };

        Ok(format!("{name} {body}"))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptRef;
    use dpc_types::Selector;

    fn in_pack() -> CommandContext {
        CommandContext {
            line_number: Some(0),
            script: Some(ScriptRef::new("tcev:load".parse().unwrap())),
        }
    }

    #[test]
    fn objective_names_are_checked() {
        assert!(Objective::new("").is_err());
        assert!(Objective::new("two words").is_err());
        assert!(Objective::scoped("kills").is_ok());
    }

    #[test]
    fn scoped_objectives_take_script_namespace() {
        let kills = Objective::scoped("kills").unwrap();
        assert_eq!(
            kills.create(Criteria::default()).construct(&in_pack()).unwrap(),
            "scoreboard objectives add tcev_kills dummy"
        );

        let err = kills.create(Criteria::Dummy).construct(&CommandContext::default());
        assert!(matches!(err, Err(CommandError::MissingContext { .. })));
    }

    #[test]
    fn scoped_objectives_prefer_pack_namespace() {
        let kills = Objective::scoped("kills").unwrap();
        let ctx = CommandContext {
            line_number: Some(0),
            script: Some(ScriptRef::new("tcev:load".parse().unwrap()).in_pack("arena")),
        };

        assert_eq!(
            kills.set(Selector::all(), 1).construct(&ctx).unwrap(),
            "scoreboard players set @a arena_kills 1"
        );
        assert_eq!(Objective::new("raw").unwrap().qualified("arena"), "raw");
    }

    #[test]
    fn selector_score_filters_use_objectives() {
        let kills = Objective::scoped("kills").unwrap();
        let deaths = Objective::new("deaths").unwrap();

        let s = Selector::all()
            .if_objective_in("arena", &kills, 5, ScoreBound::AtLeast)
            .if_objective_in("arena", &deaths, 0, ScoreBound::Exact);
        assert_eq!(s.to_string(), "@a[scores={arena_kills=5..,deaths=0}]");

        // no config on this thread: the default pack namespace applies
        let s = std::thread::spawn(move || {
            Selector::all().if_objective(&kills, 1, ScoreBound::AtMost).to_string()
        })
        .join()
        .unwrap();
        assert_eq!(s, "@a[scores={dpc_kills=..1}]");
    }

    #[test]
    fn players_commands() {
        let ctx = CommandContext::default();
        let timer = Objective::new("timer").unwrap();

        assert_eq!(
            timer.set(Selector::all(), 0).construct(&ctx).unwrap(),
            "scoreboard players set @a timer 0"
        );
        assert_eq!(
            timer.add(Selector::current(), 5).unwrap().construct(&ctx).unwrap(),
            "scoreboard players add @s timer 5"
        );
        assert_eq!(
            timer.reset(Selector::current()).construct(&ctx).unwrap(),
            "scoreboard players reset @s timer"
        );
        assert_eq!(
            Scoreboard::reset_all(Selector::all()).construct(&ctx).unwrap(),
            "scoreboard players reset @a"
        );
        assert!(timer.remove(Selector::current(), -1).is_err());
    }

    #[test]
    fn operation_and_display_name() {
        let ctx = CommandContext::default();
        let a = Objective::new("a").unwrap();
        let b = Objective::new("b").unwrap();

        let op = Scoreboard::operation(Selector::current(), &a, ScoreOperation::Swap, Selector::nearest(), &b);
        assert_eq!(
            op.construct(&ctx).unwrap(),
            "scoreboard players operation @s a >< @p b"
        );

        let add = a
            .create(Criteria::Custom("minecraft.custom:minecraft.jump".to_string()))
            .display_name("Jumps");
        assert_eq!(
            add.construct(&ctx).unwrap(),
            r#"scoreboard objectives add a minecraft.custom:minecraft.jump {"text":"Jumps"}"#
        );
    }
}
