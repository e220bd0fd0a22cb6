use crate::command::{CommandContext, CommandError, Construct, Validate};
use dpc_types::ResourceLocation;

///
/// FunctionTarget
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FunctionTarget {
    Absolute(ResourceLocation),

    /// Resolved against the owning script's directory at construct time.
    Relative(String),

    /// A function tag, rendered `#namespace:path`.
    Tag(ResourceLocation),
}

///
/// Function
///
/// Calls another function by location, by a path relative to the calling
/// script, or by function tag.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Function {
    pub target: FunctionTarget,
}

impl Function {
    ///
    /// Parse a call target.
    ///
    /// `ns:path` is absolute, `#ns:path` is a tag, and anything without a
    /// namespace (`./helper`, `../shared/x`, `helper`) is relative.
    ///
    pub fn new(raw: &str) -> Result<Self, CommandError> {
        let target = if let Some(tag) = raw.strip_prefix('#') {
            FunctionTarget::Tag(tag.parse()?)
        } else if ResourceLocation::is_relative(raw) {
            ResourceLocation::validate_relative(raw)?;
            FunctionTarget::Relative(raw.to_string())
        } else {
            FunctionTarget::Absolute(raw.parse()?)
        };

        Ok(Self { target })
    }

    #[must_use]
    pub const fn absolute(location: ResourceLocation) -> Self {
        Self {
            target: FunctionTarget::Absolute(location),
        }
    }

    #[must_use]
    pub const fn tag(location: ResourceLocation) -> Self {
        Self {
            target: FunctionTarget::Tag(location),
        }
    }
}

impl From<ResourceLocation> for Function {
    fn from(location: ResourceLocation) -> Self {
        Self::absolute(location)
    }
}

impl Validate for Function {
    fn validate(&self) -> Result<(), CommandError> {
        if let FunctionTarget::Relative(raw) = &self.target {
            ResourceLocation::validate_relative(raw)?;
        }

        Ok(())
    }
}

impl Construct for Function {
    fn name(&self) -> &'static str {
        "function"
    }

    fn construct(&self, ctx: &CommandContext) -> Result<String, CommandError> {
        let name = self.name();
        let line = match &self.target {
            FunctionTarget::Absolute(loc) => format!("{name} {loc}"),
            FunctionTarget::Tag(loc) => format!("{name} #{loc}"),
            FunctionTarget::Relative(raw) => {
                let script = ctx.require_script(name, raw)?;
                let loc = script.location().resolve(raw)?;
                format!("{name} {loc}")
            }
        };

        Ok(line)
    }
}

///
/// TESTS
///
