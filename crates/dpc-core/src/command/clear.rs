use crate::command::{CommandContext, CommandError, Construct, Validate, require_players};
use dpc_types::{Item, Target};
use dpc_utils::format::opt_arg;

///
/// Clear
///
/// Removes items from the targeted players' inventories. With no item the
/// whole inventory is cleared.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Clear {
    pub target: Target,
    pub item: Option<Item>,
    pub count: Option<u32>,
}

impl Clear {
    #[must_use]
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            item: None,
            count: None,
        }
    }

    #[must_use]
    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Limit how many matching items are removed. Requires an item.
    pub fn count(mut self, count: u32) -> Result<Self, CommandError> {
        self.count = Some(count);
        self.validate()?;

        Ok(self)
    }
}

impl Validate for Clear {
    fn validate(&self) -> Result<(), CommandError> {
        require_players(self.name(), &self.target)?;

        if self.count.is_some() && self.item.is_none() {
            return Err(CommandError::invalid(
                self.name(),
                "a count requires an item",
            ));
        }

        Ok(())
    }
}

impl Construct for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        Ok(format!(
            "{} {}{}{}",
            self.name(),
            self.target,
            opt_arg(self.item.as_ref()),
            opt_arg(self.count),
        ))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use dpc_types::{ResourceLocation, Selector};

    fn diamond() -> Item {
        Item::new(ResourceLocation::minecraft("diamond").unwrap())
    }

    #[test]
    fn whole_inventory() {
        let cmd = Clear::new(Selector::all());
        assert_eq!(cmd.construct(&CommandContext::default()).unwrap(), "clear @a");
    }

    #[test]
    fn item_and_count() {
        let cmd = Clear::new(Selector::current()).item(diamond()).count(0).unwrap();
        assert_eq!(
            cmd.construct(&CommandContext::default()).unwrap(),
            "clear @s minecraft:diamond 0"
        );
    }

    #[test]
    fn count_without_item_is_rejected() {
        let err = Clear::new(Selector::current()).count(3).unwrap_err();
        assert_eq!(err, CommandError::invalid("clear", "a count requires an item"));
    }

    #[test]
    fn entity_selectors_are_rejected() {
        let pigs = Selector::everything().with_type(&ResourceLocation::minecraft("pig").unwrap());
        assert!(Clear::new(pigs).validate().is_err());

        let players = Selector::everything().with("type", "player");
        assert!(Clear::new(players).validate().is_ok());
    }
}
