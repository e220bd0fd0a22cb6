use crate::command::{CommandContext, CommandError, Construct, Validate, require_players};
use derive_more::Display;
use dpc_types::{ResourceLocation, Target};
use dpc_utils::format::opt_arg;

///
/// AdvancementAction
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum AdvancementAction {
    #[display("grant")]
    Grant,
    #[display("revoke")]
    Revoke,
}

///
/// AdvancementScope
///
/// Where along the advancement tree the command stops.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum AdvancementScope {
    #[display("everything")]
    Everything,
    #[display("only")]
    Only,
    #[display("from")]
    From,
    #[display("through")]
    Through,
    #[display("until")]
    Until,
}

///
/// Advancement
///
/// Grants or revokes advancements for the targeted players.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Advancement {
    pub action: AdvancementAction,
    pub target: Target,
    pub scope: AdvancementScope,
    pub advancement: Option<ResourceLocation>,
    pub criterion: Option<String>,
}

impl Advancement {
    pub fn new(
        action: AdvancementAction,
        target: impl Into<Target>,
        scope: AdvancementScope,
        advancement: Option<ResourceLocation>,
        criterion: Option<String>,
    ) -> Result<Self, CommandError> {
        let cmd = Self {
            action,
            target: target.into(),
            scope,
            advancement,
            criterion,
        };
        cmd.validate()?;

        Ok(cmd)
    }

    /// `advancement <action> <target> everything`
    #[must_use]
    pub fn everything(action: AdvancementAction, target: impl Into<Target>) -> Self {
        Self {
            action,
            target: target.into(),
            scope: AdvancementScope::Everything,
            advancement: None,
            criterion: None,
        }
    }

    /// `advancement <action> <target> only <advancement> [<criterion>]`
    #[must_use]
    pub fn only(
        action: AdvancementAction,
        target: impl Into<Target>,
        advancement: ResourceLocation,
        criterion: Option<String>,
    ) -> Self {
        Self {
            action,
            target: target.into(),
            scope: AdvancementScope::Only,
            advancement: Some(advancement),
            criterion,
        }
    }
}

impl Validate for Advancement {
    fn validate(&self) -> Result<(), CommandError> {
        let name = self.name();
        require_players(name, &self.target)?;

        match (self.scope, &self.advancement) {
            (AdvancementScope::Everything, Some(_)) => {
                return Err(CommandError::invalid(
                    name,
                    "'everything' does not take an advancement",
                ));
            }
            (AdvancementScope::Everything, None) | (_, Some(_)) => {}
            (scope, None) => {
                return Err(CommandError::invalid(
                    name,
                    format!("'{scope}' requires an advancement"),
                ));
            }
        }

        if self.criterion.is_some() && self.scope != AdvancementScope::Only {
            return Err(CommandError::invalid(
                name,
                "a criterion is only valid with 'only'",
            ));
        }

        Ok(())
    }
}

impl Construct for Advancement {
    fn name(&self) -> &'static str {
        "advancement"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        Ok(format!(
            "{} {} {} {}{}{}",
            self.name(),
            self.action,
            self.target,
            self.scope,
            opt_arg(self.advancement.as_ref()),
            opt_arg(self.criterion.as_deref()),
        ))
    }
}

///
/// TESTS
///
