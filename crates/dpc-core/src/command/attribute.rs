use crate::command::{CommandContext, CommandError, Construct, Validate};
use derive_more::Display;
use dpc_types::{ResourceLocation, Target, Uuid};
use dpc_utils::format::opt_arg;

///
/// AttributeAction
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum AttributeAction {
    #[display("get")]
    Get,
    #[display("base get")]
    BaseGet,
    #[display("base set")]
    BaseSet,
    #[display("modifier add")]
    ModifierAdd,
    #[display("modifier remove")]
    ModifierRemove,
    #[display("modifier value get")]
    ModifierValueGet,
}

impl AttributeAction {
    const fn takes_scale(self) -> bool {
        matches!(self, Self::Get | Self::BaseGet | Self::ModifierValueGet)
    }
}

///
/// ModifierOperation
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ModifierOperation {
    #[display("add")]
    Add,
    #[display("multiply")]
    Multiply,
    #[display("multiply_base")]
    MultiplyBase,
}

///
/// Attribute
///
/// Reads or modifies an attribute of the targeted entity. Which optional
/// fields are required depends on `action`; see `validate`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub target: Target,
    pub attribute: ResourceLocation,
    pub action: AttributeAction,
    pub scale: Option<f64>,
    pub uuid: Option<Uuid>,
    pub modifier_name: Option<String>,
    pub value: Option<f64>,
    pub operation: Option<ModifierOperation>,
}

impl Attribute {
    fn bare(target: Target, attribute: ResourceLocation, action: AttributeAction) -> Self {
        Self {
            target,
            attribute,
            action,
            scale: None,
            uuid: None,
            modifier_name: None,
            value: None,
            operation: None,
        }
    }

    #[must_use]
    pub fn get(target: impl Into<Target>, attribute: ResourceLocation, scale: Option<f64>) -> Self {
        Self {
            scale,
            ..Self::bare(target.into(), attribute, AttributeAction::Get)
        }
    }

    #[must_use]
    pub fn base_get(
        target: impl Into<Target>,
        attribute: ResourceLocation,
        scale: Option<f64>,
    ) -> Self {
        Self {
            scale,
            ..Self::bare(target.into(), attribute, AttributeAction::BaseGet)
        }
    }

    #[must_use]
    pub fn base_set(target: impl Into<Target>, attribute: ResourceLocation, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::bare(target.into(), attribute, AttributeAction::BaseSet)
        }
    }

    pub fn modifier_add(
        target: impl Into<Target>,
        attribute: ResourceLocation,
        uuid: Uuid,
        name: impl Into<String>,
        value: f64,
        operation: ModifierOperation,
    ) -> Result<Self, CommandError> {
        let cmd = Self {
            uuid: Some(uuid),
            modifier_name: Some(name.into()),
            value: Some(value),
            operation: Some(operation),
            ..Self::bare(target.into(), attribute, AttributeAction::ModifierAdd)
        };
        cmd.validate()?;

        Ok(cmd)
    }

    #[must_use]
    pub fn modifier_remove(target: impl Into<Target>, attribute: ResourceLocation, uuid: Uuid) -> Self {
        Self {
            uuid: Some(uuid),
            ..Self::bare(target.into(), attribute, AttributeAction::ModifierRemove)
        }
    }

    #[must_use]
    pub fn modifier_value_get(
        target: impl Into<Target>,
        attribute: ResourceLocation,
        uuid: Uuid,
        scale: Option<f64>,
    ) -> Self {
        Self {
            uuid: Some(uuid),
            scale,
            ..Self::bare(target.into(), attribute, AttributeAction::ModifierValueGet)
        }
    }
}

impl Validate for Attribute {
    fn validate(&self) -> Result<(), CommandError> {
        let name = self.name();
        let action = self.action;
        let missing = |field: &str| {
            CommandError::invalid(name, format!("'{action}' requires {field}"))
        };
        let unexpected = |field: &str| {
            CommandError::invalid(name, format!("'{action}' does not take {field}"))
        };

        let needs_uuid = matches!(
            action,
            AttributeAction::ModifierAdd
                | AttributeAction::ModifierRemove
                | AttributeAction::ModifierValueGet
        );
        let needs_value = matches!(action, AttributeAction::BaseSet | AttributeAction::ModifierAdd);
        let needs_modifier = matches!(action, AttributeAction::ModifierAdd);

        match (needs_uuid, self.uuid.is_some()) {
            (true, false) => return Err(missing("a uuid")),
            (false, true) => return Err(unexpected("a uuid")),
            _ => {}
        }
        match (needs_value, self.value.is_some()) {
            (true, false) => return Err(missing("a value")),
            (false, true) => return Err(unexpected("a value")),
            _ => {}
        }
        match (needs_modifier, self.modifier_name.is_some()) {
            (true, false) => return Err(missing("a modifier name")),
            (false, true) => return Err(unexpected("a modifier name")),
            _ => {}
        }
        match (needs_modifier, self.operation.is_some()) {
            (true, false) => return Err(missing("an operation")),
            (false, true) => return Err(unexpected("an operation")),
            _ => {}
        }
        if self.scale.is_some() && !action.takes_scale() {
            return Err(unexpected("a scale"));
        }
        for (field, v) in [("value", self.value), ("scale", self.scale)] {
            if v.is_some_and(|v| !v.is_finite()) {
                return Err(CommandError::invalid(
                    name,
                    format!("{field} must be a finite number"),
                ));
            }
        }
        if self
            .modifier_name
            .as_deref()
            .is_some_and(|n| n.is_empty() || n.chars().any(char::is_whitespace))
        {
            return Err(CommandError::invalid(
                name,
                "modifier name must be a single non-empty word",
            ));
        }

        Ok(())
    }
}

impl Construct for Attribute {
    fn name(&self) -> &'static str {
        "attribute"
    }

    // scale trails everything else: `modifier value get <uuid> [<scale>]`
    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        Ok(format!(
            "{} {} {} {}{}{}{}{}{}",
            self.name(),
            self.target,
            self.attribute,
            self.action,
            opt_arg(self.uuid.as_ref()),
            opt_arg(self.modifier_name.as_deref()),
            opt_arg(self.value),
            opt_arg(self.operation),
            opt_arg(self.scale),
        ))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use dpc_types::Selector;

    fn max_health() -> ResourceLocation {
        "generic.max_health".parse().unwrap()
    }

    fn uuid() -> Uuid {
        Uuid::from(1_u128)
    }

    fn render(cmd: &Attribute) -> String {
        cmd.validate().unwrap();
        cmd.construct(&CommandContext::default()).unwrap()
    }

    #[test]
    fn get_with_and_without_scale() {
        assert_eq!(
            render(&Attribute::get(Selector::current(), max_health(), None)),
            "attribute @s minecraft:generic.max_health get"
        );
        assert_eq!(
            render(&Attribute::base_get(Selector::current(), max_health(), Some(0.5))),
            "attribute @s minecraft:generic.max_health base get 0.5"
        );
    }

    #[test]
    fn base_set_renders_value() {
        assert_eq!(
            render(&Attribute::base_set(Selector::current(), max_health(), 40.0)),
            "attribute @s minecraft:generic.max_health base set 40"
        );
    }

    #[test]
    fn modifier_add_renders_all_fields() {
        let cmd = Attribute::modifier_add(
            Selector::current(),
            max_health(),
            uuid(),
            "bonus",
            2.5,
            ModifierOperation::MultiplyBase,
        )
        .unwrap();
        assert_eq!(
            render(&cmd),
            "attribute @s minecraft:generic.max_health modifier add \
             00000000-0000-0000-0000-000000000001 bonus 2.5 multiply_base"
        );
    }

    #[test]
    fn modifier_value_get_puts_scale_last() {
        let cmd = Attribute::modifier_value_get(Selector::current(), max_health(), uuid(), Some(2.0));
        assert_eq!(
            render(&cmd),
            "attribute @s minecraft:generic.max_health modifier value get \
             00000000-0000-0000-0000-000000000001 2"
        );
    }

    #[test]
    fn rejects_mismatched_fields() {
        let mut cmd = Attribute::base_set(Selector::current(), max_health(), 1.0);
        cmd.value = None;
        assert!(cmd.validate().is_err());

        let mut cmd = Attribute::modifier_remove(Selector::current(), max_health(), uuid());
        cmd.scale = Some(1.0);
        assert!(cmd.validate().is_err());

        let mut cmd = Attribute::get(Selector::current(), max_health(), None);
        cmd.operation = Some(ModifierOperation::Add);
        assert!(cmd.validate().is_err());

        let bad_name = Attribute::modifier_add(
            Selector::current(),
            max_health(),
            uuid(),
            "two words",
            1.0,
            ModifierOperation::Add,
        );
        assert!(bad_name.is_err());
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let cmd = Attribute::base_set(Selector::current(), max_health(), f64::NAN);
        assert_eq!(
            cmd.validate().unwrap_err(),
            CommandError::invalid("attribute", "value must be a finite number")
        );

        let cmd = Attribute::base_get(Selector::current(), max_health(), Some(f64::INFINITY));
        assert!(cmd.validate().is_err());

        let added = Attribute::modifier_add(
            Selector::current(),
            max_health(),
            uuid(),
            "bonus",
            f64::NEG_INFINITY,
            ModifierOperation::Add,
        );
        assert!(added.is_err());
    }
}
