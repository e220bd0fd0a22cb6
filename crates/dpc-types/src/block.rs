use crate::ResourceLocation;
use std::fmt::{self, Display};

///
/// Block
///
/// A block type with optional block states, e.g.
/// `minecraft:furnace[facing=north,lit=true]`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Block {
    pub id: ResourceLocation,
    states: Vec<(String, String)>,
}

impl Block {
    #[must_use]
    pub const fn new(id: ResourceLocation) -> Self {
        Self {
            id,
            states: Vec::new(),
        }
    }

    /// Set a block state, replacing an earlier value for the same key.
    #[must_use]
    pub fn with_state(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.states.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.states.push((key.to_string(), value)),
        }
        self
    }

    #[must_use]
    pub fn states(&self) -> &[(String, String)] {
        &self.states
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;

        if !self.states.is_empty() {
            let body = self
                .states
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(",");
            write!(f, "[{body}]")?;
        }

        Ok(())
    }
}

impl From<ResourceLocation> for Block {
    fn from(id: ResourceLocation) -> Self {
        Self::new(id)
    }
}

///
/// Item
///
/// An item type, optionally narrowed by raw item components.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Item {
    pub id: ResourceLocation,
    pub components: Option<String>,
}

impl Item {
    #[must_use]
    pub const fn new(id: ResourceLocation) -> Self {
        Self {
            id,
            components: None,
        }
    }

    #[must_use]
    pub fn with_components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.components {
            Some(c) => write!(f, "{}[{c}]", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

impl From<ResourceLocation> for Item {
    fn from(id: ResourceLocation) -> Self {
        Self::new(id)
    }
}

///
/// TESTS
///
