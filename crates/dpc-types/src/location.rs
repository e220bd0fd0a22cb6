//!
//! Namespaced identifiers (`namespace:path`) used for functions, advancements,
//! attributes, blocks, items, biomes and dimensions.
//!

use crate::ParseError;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

///
/// ResourceLocation
///
/// A `namespace:path` pair. Strings without a namespace fall back to
/// `minecraft`.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[display("{namespace}:{path}")]
#[serde(try_from = "String", into = "String")]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    pub fn new(namespace: &str, path: &str) -> Result<Self, ParseError> {
        let raw = format!("{namespace}:{path}");
        validate_namespace(namespace, &raw)?;
        validate_path(path, &raw)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// A location in the `minecraft` namespace.
    pub fn minecraft(path: &str) -> Result<Self, ParseError> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn is_vanilla(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }

    /// Last path segment, e.g. `run` for `tcev:raycasts/run`.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Directory part of the path, empty for top-level locations.
    #[must_use]
    pub fn parent_dir(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// Returns true if the raw string carries no namespace and should be
    /// resolved against an owning location.
    #[must_use]
    pub fn is_relative(raw: &str) -> bool {
        !raw.contains(':')
    }

    ///
    /// Resolve a relative path against the directory of this location.
    ///
    /// `.` segments stay in place and `..` climbs one directory, so
    /// `./name` and `name` land next to `self`. The last segment must be a
    /// name. Raw strings with a namespace are parsed as-is.
    ///
    pub fn resolve(&self, raw: &str) -> Result<Self, ParseError> {
        if !Self::is_relative(raw) {
            return raw.parse();
        }
        Self::validate_relative(raw)?;

        let mut segments: Vec<&str> = self
            .parent_dir()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        for segment in raw.split('/') {
            match segment {
                "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(ParseError::PathEscapesRoot(raw.to_string()));
                    }
                }
                name => segments.push(name),
            }
        }

        Self::new(&self.namespace, &segments.join("/"))
    }

    /// Check the shape of a relative path without resolving it.
    pub fn validate_relative(raw: &str) -> Result<(), ParseError> {
        if matches!(raw.rsplit('/').next(), Some("." | "..")) {
            return Err(ParseError::InvalidResourceLocation(
                raw.to_string(),
                "relative path must end in a name",
            ));
        }

        let names: Vec<&str> = raw
            .split('/')
            .filter(|s| !is_dot_segment(s))
            .collect();

        validate_path(&names.join("/"), raw)
    }
}

impl FromStr for ResourceLocation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::minecraft(s),
        }
    }
}

impl TryFrom<String> for ResourceLocation {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for ResourceLocation {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceLocation> for String {
    fn from(loc: ResourceLocation) -> Self {
        loc.to_string()
    }
}

fn validate_namespace(namespace: &str, raw: &str) -> Result<(), ParseError> {
    if namespace.is_empty() {
        return Err(ParseError::InvalidResourceLocation(
            raw.to_string(),
            "empty namespace",
        ));
    }
    if !namespace.chars().all(is_namespace_char) {
        return Err(ParseError::InvalidResourceLocation(
            raw.to_string(),
            "namespace allows only [a-z0-9_.-]",
        ));
    }

    Ok(())
}

fn validate_path(path: &str, raw: &str) -> Result<(), ParseError> {
    if path.is_empty() {
        return Err(ParseError::InvalidResourceLocation(
            raw.to_string(),
            "empty path",
        ));
    }
    if !path.chars().all(|c| is_namespace_char(c) || c == '/') {
        return Err(ParseError::InvalidResourceLocation(
            raw.to_string(),
            "path allows only [a-z0-9_.-/]",
        ));
    }
    if path.split('/').any(str::is_empty) {
        return Err(ParseError::InvalidResourceLocation(
            raw.to_string(),
            "empty path segment",
        ));
    }
    if path.split('/').any(is_dot_segment) {
        return Err(ParseError::InvalidResourceLocation(
            raw.to_string(),
            "'.' and '..' are not path segments",
        ));
    }

    Ok(())
}

/// Namespace validation, exposed for config checks.
#[must_use]
pub fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.chars().all(is_namespace_char)
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

const fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

///
/// Dimension
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, PartialEq)]
pub struct Dimension(pub ResourceLocation);

impl Dimension {
    #[must_use]
    pub fn overworld() -> Self {
        Self(vanilla("overworld"))
    }

    #[must_use]
    pub fn the_nether() -> Self {
        Self(vanilla("the_nether"))
    }

    #[must_use]
    pub fn the_end() -> Self {
        Self(vanilla("the_end"))
    }
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<ResourceLocation> for Dimension {
    fn from(loc: ResourceLocation) -> Self {
        Self(loc)
    }
}

///
/// Biome
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, PartialEq)]
pub struct Biome(pub ResourceLocation);

impl FromStr for Biome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

// known-good vanilla paths only
fn vanilla(path: &str) -> ResourceLocation {
    ResourceLocation {
        namespace: DEFAULT_NAMESPACE.to_string(),
        path: path.to_string(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_namespace() {
        let a: ResourceLocation = "stone".parse().unwrap();
        assert_eq!(a.to_string(), "minecraft:stone");
        assert!(a.is_vanilla());

        let b: ResourceLocation = "tcev:raycasts/run_at_block".parse().unwrap();
        assert_eq!(b.namespace(), "tcev");
        assert_eq!(b.path(), "raycasts/run_at_block");
        assert_eq!(b.file_name(), "run_at_block");
        assert_eq!(b.parent_dir(), "raycasts");
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!("".parse::<ResourceLocation>().is_err());
        assert!(":stone".parse::<ResourceLocation>().is_err());
        assert!("minecraft:".parse::<ResourceLocation>().is_err());
        assert!("Minecraft:Stone".parse::<ResourceLocation>().is_err());
        assert!("a:b:c".parse::<ResourceLocation>().is_err());
        assert!("a:b//c".parse::<ResourceLocation>().is_err());
        assert!("a:b/../c".parse::<ResourceLocation>().is_err());
        assert!("a:./c".parse::<ResourceLocation>().is_err());
        assert!("a:b/.hidden".parse::<ResourceLocation>().is_ok());
    }

    #[test]
    fn resolves_relative_paths() {
        let base: ResourceLocation = "pack:util/math/init".parse().unwrap();

        assert_eq!(base.resolve("./add").unwrap().to_string(), "pack:util/math/add");
        assert_eq!(base.resolve("add").unwrap().to_string(), "pack:util/math/add");
        assert_eq!(base.resolve("../tick").unwrap().to_string(), "pack:util/tick");
        assert_eq!(
            base.resolve("other:load").unwrap().to_string(),
            "other:load"
        );
    }

    #[test]
    fn resolves_dot_segments_anywhere() {
        let base: ResourceLocation = "pack:util/math/init".parse().unwrap();

        assert_eq!(base.resolve("./x/../y").unwrap().to_string(), "pack:util/math/y");
        assert_eq!(base.resolve("../shared/./z").unwrap().to_string(), "pack:util/shared/z");
    }

    #[test]
    fn relative_path_must_end_in_a_name() {
        let base: ResourceLocation = "pack:boss/main".parse().unwrap();

        for raw in [".", "..", "./", "../..", "x/.."] {
            assert!(base.resolve(raw).is_err(), "{raw} should fail");
            assert!(ResourceLocation::validate_relative(raw).is_err(), "{raw} should fail");
        }
        assert!(ResourceLocation::validate_relative("../x").is_ok());
    }

    #[test]
    fn resolve_cannot_escape_root() {
        let base: ResourceLocation = "pack:init".parse().unwrap();
        let err = base.resolve("../x").unwrap_err();
        assert_eq!(err, ParseError::PathEscapesRoot("../x".to_string()));
    }

    #[test]
    fn serde_uses_string_form() {
        let loc: ResourceLocation = "pack:load".parse().unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, "\"pack:load\"");

        let back: ResourceLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }

    #[test]
    fn dimensions_are_vanilla() {
        assert_eq!(Dimension::the_nether().to_string(), "minecraft:the_nether");
        let biome: Biome = "plains".parse().unwrap();
        assert_eq!(biome.to_string(), "minecraft:plains");
    }
}
