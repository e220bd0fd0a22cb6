use crate::command::{CommandContext, CommandError, Construct, Validate};
use derive_more::Display;
use dpc_types::{ResourceLocation, Target, TextElement};
use dpc_utils::format::opt_arg;

///
/// BossbarColor
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum BossbarColor {
    #[display("blue")]
    Blue,
    #[display("green")]
    Green,
    #[display("pink")]
    Pink,
    #[display("purple")]
    Purple,
    #[display("red")]
    Red,
    #[default]
    #[display("white")]
    White,
    #[display("yellow")]
    Yellow,
}

///
/// BossbarStyle
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum BossbarStyle {
    #[display("notched_6")]
    Notched6,
    #[display("notched_10")]
    Notched10,
    #[display("notched_12")]
    Notched12,
    #[display("notched_20")]
    Notched20,
    #[default]
    #[display("progress")]
    Progress,
}

///
/// BossbarField
///
/// Queryable properties for `bossbar get`.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum BossbarField {
    #[display("max")]
    Max,
    #[display("players")]
    Players,
    #[display("value")]
    Value,
    #[display("visible")]
    Visible,
}

///
/// BossbarSetting
///

#[derive(Clone, Debug, PartialEq)]
pub enum BossbarSetting {
    Color(BossbarColor),
    Max(i32),
    Name(TextElement),

    /// `None` clears the player list.
    Players(Option<Target>),
    Style(BossbarStyle),
    Value(i32),
    Visible(bool),
}

impl std::fmt::Display for BossbarSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color(c) => write!(f, "color {c}"),
            Self::Max(v) => write!(f, "max {v}"),
            Self::Name(text) => write!(f, "name {text}"),
            Self::Players(target) => write!(f, "players{}", opt_arg(target.as_ref())),
            Self::Style(s) => write!(f, "style {s}"),
            Self::Value(v) => write!(f, "value {v}"),
            Self::Visible(v) => write!(f, "visible {v}"),
        }
    }
}

///
/// BossbarAction
///

#[derive(Clone, Debug, PartialEq)]
pub enum BossbarAction {
    Add {
        id: ResourceLocation,
        name: TextElement,
    },
    Get {
        id: ResourceLocation,
        field: BossbarField,
    },
    List,
    Remove {
        id: ResourceLocation,
    },
    Set {
        id: ResourceLocation,
        setting: BossbarSetting,
    },
}

///
/// Bossbar
///

#[derive(Clone, Debug, PartialEq)]
pub struct Bossbar {
    pub action: BossbarAction,
}

impl Bossbar {
    #[must_use]
    pub fn add(id: ResourceLocation, name: impl Into<TextElement>) -> Self {
        Self {
            action: BossbarAction::Add {
                id,
                name: name.into(),
            },
        }
    }

    #[must_use]
    pub const fn get(id: ResourceLocation, field: BossbarField) -> Self {
        Self {
            action: BossbarAction::Get { id, field },
        }
    }

    #[must_use]
    pub const fn list() -> Self {
        Self {
            action: BossbarAction::List,
        }
    }

    #[must_use]
    pub const fn remove(id: ResourceLocation) -> Self {
        Self {
            action: BossbarAction::Remove { id },
        }
    }

    pub fn set(id: ResourceLocation, setting: BossbarSetting) -> Result<Self, CommandError> {
        let cmd = Self {
            action: BossbarAction::Set { id, setting },
        };
        cmd.validate()?;

        Ok(cmd)
    }
}

impl Validate for Bossbar {
    fn validate(&self) -> Result<(), CommandError> {
        match &self.action {
            BossbarAction::Set {
                setting: BossbarSetting::Max(max),
                ..
            } if *max <= 0 => Err(CommandError::invalid(
                self.name(),
                format!("max must be greater than 0, got {max}"),
            )),
            BossbarAction::Set {
                setting: BossbarSetting::Value(value),
                ..
            } if *value < 0 => Err(CommandError::invalid(
                self.name(),
                format!("value must not be negative, got {value}"),
            )),
            _ => Ok(()),
        }
    }
}

impl Construct for Bossbar {
    fn name(&self) -> &'static str {
        "bossbar"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        let name = self.name();
        let line = match &self.action {
            BossbarAction::Add { id, name: text } => format!("{name} add {id} {text}"),
            BossbarAction::Get { id, field } => format!("{name} get {id} {field}"),
            BossbarAction::List => format!("{name} list"),
            BossbarAction::Remove { id } => format!("{name} remove {id}"),
            BossbarAction::Set { id, setting } => format!("{name} set {id} {setting}"),
        };

        Ok(line)
    }
}

///
/// TESTS
///
