//!
//! Coordinates, rotations and axis sets.
//!
//! A position carries a single `Relative` mode for all three axes. Local (`^`)
//! coordinates cannot be mixed with the other modes in-game, so the type
//! never allows it.
//!

use crate::ParseError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    ops::{Add, Sub},
    str::FromStr,
};

///
/// Relative
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Relative {
    /// Absolute world coordinates.
    #[default]
    World,
    /// Offset from the executing entity (`~`).
    Entity,
    /// Offset along the executing entity's view (`^`).
    Rotation,
}

impl Relative {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::World => "",
            Self::Entity => "~",
            Self::Rotation => "^",
        }
    }
}

///
/// BlockPosition
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub relative: Relative,
}

impl BlockPosition {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            x,
            y,
            z,
            relative: Relative::World,
        }
    }

    /// `~x ~y ~z`
    #[must_use]
    pub const fn relative(x: i32, y: i32, z: i32) -> Self {
        Self::new(x, y, z).with_relative(Relative::Entity)
    }

    /// `^x ^y ^z`
    #[must_use]
    pub const fn local(x: i32, y: i32, z: i32) -> Self {
        Self::new(x, y, z).with_relative(Relative::Rotation)
    }

    /// `~0 ~0 ~0`
    #[must_use]
    pub const fn here() -> Self {
        Self::relative(0, 0, 0)
    }

    #[must_use]
    pub const fn with_relative(mut self, relative: Relative) -> Self {
        self.relative = relative;
        self
    }

    /// True when this position is relative to the world.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self.relative, Relative::World)
    }

    /// Shift by the given deltas, saturating at the `i32` bounds.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
            relative: self.relative,
        }
    }
}

impl Display for BlockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.relative.prefix();
        write!(f, "{p}{} {p}{} {p}{}", self.x, self.y, self.z)
    }
}

// the left-hand side keeps its mode
impl Add for BlockPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.offset(rhs.x, rhs.y, rhs.z)
    }
}

impl Sub for BlockPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
            z: self.z.saturating_sub(rhs.z),
            relative: self.relative,
        }
    }
}

impl From<(i32, i32, i32)> for BlockPosition {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for BlockPosition {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

///
/// WorldPosition
///
/// A point in continuous space, used where the game accepts fractional
/// coordinates (`positioned`, `facing`).
///

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WorldPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub relative: Relative,
}

impl WorldPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            relative: Relative::World,
        }
    }

    #[must_use]
    pub const fn relative(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z).with_relative(Relative::Entity)
    }

    #[must_use]
    pub const fn local(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z).with_relative(Relative::Rotation)
    }

    #[must_use]
    pub const fn with_relative(mut self, relative: Relative) -> Self {
        self.relative = relative;
        self
    }

    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self.relative, Relative::World)
    }
}

impl Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.relative.prefix();
        write!(f, "{p}{} {p}{} {p}{}", self.x, self.y, self.z)
    }
}

impl From<BlockPosition> for WorldPosition {
    fn from(pos: BlockPosition) -> Self {
        Self::new(f64::from(pos.x), f64::from(pos.y), f64::from(pos.z)).with_relative(pos.relative)
    }
}

impl From<(f64, f64, f64)> for WorldPosition {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

///
/// Angle
///

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Angle {
    pub degrees: f32,
    pub relative: bool,
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            write!(f, "~{}", self.degrees)
        } else {
            write!(f, "{}", self.degrees)
        }
    }
}

///
/// Rotation
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, PartialEq, Serialize)]
#[display("{yaw} {pitch}")]
pub struct Rotation {
    pub yaw: Angle,
    pub pitch: Angle,
}

impl Rotation {
    #[must_use]
    pub const fn absolute(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw: Angle {
                degrees: yaw,
                relative: false,
            },
            pitch: Angle {
                degrees: pitch,
                relative: false,
            },
        }
    }

    #[must_use]
    pub const fn relative(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw: Angle {
                degrees: yaw,
                relative: true,
            },
            pitch: Angle {
                degrees: pitch,
                relative: true,
            },
        }
    }
}

///
/// Swizzle
///
/// Non-empty axis set for `execute align`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Swizzle {
    x: bool,
    y: bool,
    z: bool,
}

impl Swizzle {
    pub const XYZ: Self = Self {
        x: true,
        y: true,
        z: true,
    };

    /// An axis set; at least one axis must be chosen.
    pub fn new(x: bool, y: bool, z: bool) -> Result<Self, ParseError> {
        if !(x || y || z) {
            return Err(ParseError::InvalidSwizzle(String::new()));
        }

        Ok(Self { x, y, z })
    }

    #[must_use]
    pub const fn x(self) -> bool {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> bool {
        self.y
    }

    #[must_use]
    pub const fn z(self) -> bool {
        self.z
    }
}

impl FromStr for Swizzle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::InvalidSwizzle(s.to_string());
        let mut out = Self {
            x: false,
            y: false,
            z: false,
        };

        for c in s.chars() {
            let axis = match c {
                'x' => &mut out.x,
                'y' => &mut out.y,
                'z' => &mut out.z,
                _ => return Err(err()),
            };
            if *axis {
                return Err(err());
            }
            *axis = true;
        }

        Self::new(out.x, out.y, out.z).map_err(|_| err())
    }
}

impl Display for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, axis) in [(self.x, "x"), (self.y, "y"), (self.z, "z")] {
            if set {
                f.write_str(axis)?;
            }
        }

        Ok(())
    }
}

///
/// Anchor
///
/// Which part of an entity `anchored`/`facing entity` refer to.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Anchor {
    #[display("eyes")]
    Eyes,
    #[default]
    #[display("feet")]
    Feet,
}

///
/// TESTS
///
