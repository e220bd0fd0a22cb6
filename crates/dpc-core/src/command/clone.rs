use crate::command::{CommandContext, CommandError, Construct, Validate};
use derive_more::Display;
use dpc_types::{Block, BlockPosition, Dimension};

///
/// CloneMask
///

#[derive(Clone, Debug, Default, Display, Eq, PartialEq)]
pub enum CloneMask {
    #[default]
    #[display("replace")]
    Replace,
    #[display("masked")]
    Masked,

    /// Copy only blocks matching the filter.
    #[display("filtered {_0}")]
    Filtered(Block),
}

///
/// CloneBehavior
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum CloneBehavior {
    #[display("force")]
    Force,
    #[display("move")]
    Move,
    #[default]
    #[display("normal")]
    Normal,
}

///
/// CloneRegion
///
/// Copies the box spanned by `start` and `end` to `destination`, optionally
/// across dimensions.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CloneRegion {
    pub source: Option<Dimension>,
    pub start: BlockPosition,
    pub end: BlockPosition,
    pub target: Option<Dimension>,
    pub destination: BlockPosition,
    pub mask: CloneMask,
    pub behavior: CloneBehavior,
}

impl CloneRegion {
    #[must_use]
    pub fn new(
        start: impl Into<BlockPosition>,
        end: impl Into<BlockPosition>,
        destination: impl Into<BlockPosition>,
    ) -> Self {
        Self {
            source: None,
            start: start.into(),
            end: end.into(),
            target: None,
            destination: destination.into(),
            mask: CloneMask::default(),
            behavior: CloneBehavior::default(),
        }
    }

    /// Clone from another dimension into the executing one.
    #[must_use]
    pub fn from_dimension(
        source: Dimension,
        start: impl Into<BlockPosition>,
        end: impl Into<BlockPosition>,
        destination: impl Into<BlockPosition>,
    ) -> Self {
        Self {
            source: Some(source),
            ..Self::new(start, end, destination)
        }
    }

    /// Clone from the executing dimension into another one.
    #[must_use]
    pub fn to_dimension(
        target: Dimension,
        start: impl Into<BlockPosition>,
        end: impl Into<BlockPosition>,
        destination: impl Into<BlockPosition>,
    ) -> Self {
        Self {
            target: Some(target),
            ..Self::new(start, end, destination)
        }
    }

    #[must_use]
    pub fn between(
        source: Dimension,
        target: Dimension,
        start: impl Into<BlockPosition>,
        end: impl Into<BlockPosition>,
        destination: impl Into<BlockPosition>,
    ) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
            ..Self::new(start, end, destination)
        }
    }

    #[must_use]
    pub fn masked(mut self) -> Self {
        self.mask = CloneMask::Masked;
        self
    }

    #[must_use]
    pub fn filtered(mut self, filter: impl Into<Block>) -> Self {
        self.mask = CloneMask::Filtered(filter.into());
        self
    }

    #[must_use]
    pub const fn behavior(mut self, behavior: CloneBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

impl Validate for CloneRegion {
    fn validate(&self) -> Result<(), CommandError> {
        Ok(())
    }
}

impl Construct for CloneRegion {
    fn name(&self) -> &'static str {
        "clone"
    }

    fn construct(&self, _ctx: &CommandContext) -> Result<String, CommandError> {
        let mut parts = vec![self.name().to_string()];

        if let Some(source) = &self.source {
            parts.push(format!("from {source}"));
        }
        parts.push(self.start.to_string());
        parts.push(self.end.to_string());
        if let Some(target) = &self.target {
            parts.push(format!("to {target}"));
        }
        parts.push(self.destination.to_string());
        parts.push(self.mask.to_string());
        parts.push(self.behavior.to_string());

        Ok(parts.join(" "))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use dpc_types::ResourceLocation;

    fn render(cmd: &CloneRegion) -> String {
        cmd.construct(&CommandContext::default()).unwrap()
    }

    #[test]
    fn defaults_to_replace_normal() {
        let cmd = CloneRegion::new((0, 64, 0), [4, 68, 4], BlockPosition::relative(0, 1, 0));
        assert_eq!(render(&cmd), "clone 0 64 0 4 68 4 ~0 ~1 ~0 replace normal");
    }

    #[test]
    fn filter_overrides_mask() {
        let stone = ResourceLocation::minecraft("stone").unwrap();
        let cmd = CloneRegion::new((0, 0, 0), (1, 1, 1), (5, 5, 5))
            .masked()
            .filtered(stone)
            .behavior(CloneBehavior::Move);
        assert_eq!(
            render(&cmd),
            "clone 0 0 0 1 1 1 5 5 5 filtered minecraft:stone move"
        );
    }

    #[test]
    fn cross_dimension() {
        let from = CloneRegion::from_dimension(Dimension::the_nether(), (0, 0, 0), (1, 1, 1), (2, 2, 2));
        assert_eq!(
            render(&from),
            "clone from minecraft:the_nether 0 0 0 1 1 1 2 2 2 replace normal"
        );

        let both = CloneRegion::between(
            Dimension::the_nether(),
            Dimension::the_end(),
            (0, 0, 0),
            (1, 1, 1),
            (2, 2, 2),
        )
        .masked()
        .behavior(CloneBehavior::Force);
        assert_eq!(
            render(&both),
            "clone from minecraft:the_nether 0 0 0 1 1 1 to minecraft:the_end 2 2 2 masked force"
        );
    }
}
