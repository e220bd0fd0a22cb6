//!
//! Entity selectors and command targets.
//!
//! A selector is a group (`@a`, `@e`, ...) plus an ordered list of
//! `key=value` conditions. Setting an existing key replaces its value in
//! place, so condition order follows first insertion.
//!

use crate::{ParseError, ResourceLocation, Uuid};
use derive_more::Display;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

///
/// SelectorGroup
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum SelectorGroup {
    /// Every loaded entity, players included.
    #[display("@e")]
    Everything,
    /// Every player.
    #[display("@a")]
    All,
    /// A random player.
    #[display("@r")]
    Random,
    /// The nearest player.
    #[display("@p")]
    Nearest,
    /// The executing entity.
    #[display("@s")]
    Current,
    /// The nearest entity.
    #[display("@n")]
    NearestEntity,
}

impl SelectorGroup {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(Self::Everything),
            'a' => Some(Self::All),
            'r' => Some(Self::Random),
            'p' => Some(Self::Nearest),
            's' => Some(Self::Current),
            'n' => Some(Self::NearestEntity),
            _ => None,
        }
    }

    ///
    /// Returns true if this group only ever selects players.
    ///
    /// `@s` counts as a player target unless `strong` is set, because the
    /// executor is usually, but not always, a player.
    ///
    #[must_use]
    pub const fn targets_player(self, strong: bool) -> bool {
        match self {
            Self::All | Self::Random | Self::Nearest => true,
            Self::Current => !strong,
            Self::Everything | Self::NearestEntity => false,
        }
    }
}

///
/// ConditionValue
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConditionValue {
    Single(String),
    List(Vec<String>),
}

impl Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => f.write_str(v),
            Self::List(vs) => write!(f, "{{{}}}", vs.join(",")),
        }
    }
}

///
/// ScoreBound
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScoreBound {
    /// `obj=v`
    #[default]
    Exact,
    /// `obj=..v`
    AtMost,
    /// `obj=v..`
    AtLeast,
}

///
/// Selector
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selector {
    pub group: SelectorGroup,
    conditions: Vec<(String, ConditionValue)>,
}

impl Selector {
    #[must_use]
    pub const fn new(group: SelectorGroup) -> Self {
        Self {
            group,
            conditions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn everything() -> Self {
        Self::new(SelectorGroup::Everything)
    }

    #[must_use]
    pub const fn all() -> Self {
        Self::new(SelectorGroup::All)
    }

    #[must_use]
    pub const fn random() -> Self {
        Self::new(SelectorGroup::Random)
    }

    #[must_use]
    pub const fn nearest() -> Self {
        Self::new(SelectorGroup::Nearest)
    }

    #[must_use]
    pub const fn current() -> Self {
        Self::new(SelectorGroup::Current)
    }

    #[must_use]
    pub const fn nearest_entity() -> Self {
        Self::new(SelectorGroup::NearestEntity)
    }

    /// Set a condition, replacing any earlier value for the same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set(key.into(), ConditionValue::Single(value.to_string()));
        self
    }

    #[must_use]
    pub fn with_type(self, entity: &ResourceLocation) -> Self {
        self.with("type", entity)
    }

    #[must_use]
    pub fn limit(self, n: u32) -> Self {
        self.with("limit", n)
    }

    #[must_use]
    pub fn tag(self, tag: &str) -> Self {
        self.with("tag", tag)
    }

    #[must_use]
    pub fn distance(self, range: &str) -> Self {
        self.with("distance", range)
    }

    /// Add a score condition to the `scores={...}` list. `objective` is the
    /// name exactly as it should appear.
    #[must_use]
    pub fn if_score(mut self, objective: impl Display, value: i32, bound: ScoreBound) -> Self {
        let entry = match bound {
            ScoreBound::Exact => format!("{objective}={value}"),
            ScoreBound::AtMost => format!("{objective}=..{value}"),
            ScoreBound::AtLeast => format!("{objective}={value}.."),
        };

        match self.conditions.iter_mut().find(|(k, _)| k == "scores") {
            Some((_, ConditionValue::List(list))) => list.push(entry),
            Some((_, slot)) => {
                // parsed selectors keep `scores={...}` as raw text
                let mut list: Vec<String> = slot
                    .to_string()
                    .trim_start_matches('{')
                    .trim_end_matches('}')
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                list.push(entry);
                *slot = ConditionValue::List(list);
            }
            None => self
                .conditions
                .push(("scores".to_string(), ConditionValue::List(vec![entry]))),
        }

        self
    }

    #[must_use]
    pub fn conditions(&self) -> &[(String, ConditionValue)] {
        &self.conditions
    }

    #[must_use]
    pub fn condition(&self, key: &str) -> Option<&ConditionValue> {
        self.conditions
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    ///
    /// Returns true if this selector only ever selects players.
    ///
    /// Any group narrowed with `type=minecraft:player` qualifies; under
    /// `strong` that is the only way `@s` does.
    ///
    #[must_use]
    pub fn targets_player(&self, strong: bool) -> bool {
        if self.group.targets_player(strong) {
            return true;
        }

        matches!(
            self.condition("type"),
            Some(ConditionValue::Single(t)) if t == "minecraft:player" || t == "player"
        )
    }

    fn set(&mut self, key: String, value: ConditionValue) {
        match self.conditions.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.conditions.push((key, value)),
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group)?;

        if !self.conditions.is_empty() {
            let body = self
                .conditions
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(",");
            write!(f, "[{body}]")?;
        }

        Ok(())
    }
}

impl From<SelectorGroup> for Selector {
    fn from(group: SelectorGroup) -> Self {
        Self::new(group)
    }
}

impl FromStr for Selector {
    type Err = ParseError;

    /// Accepts `@a`, `a` and `@e[type=pig,limit=1]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |why| ParseError::InvalidSelector(s.to_string(), why);
        let raw = s.trim().strip_prefix('@').unwrap_or_else(|| s.trim());

        let mut chars = raw.chars();
        let group = chars
            .next()
            .and_then(SelectorGroup::from_char)
            .ok_or_else(|| err("unknown selector group"))?;
        let rest = chars.as_str();

        let mut selector = Self::new(group);
        if rest.is_empty() {
            return Ok(selector);
        }

        let body = rest
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .ok_or_else(|| err("conditions must be wrapped in []"))?;

        for part in split_top_level(body).map_err(err)? {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| err("condition is missing '='"))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(err("condition key is empty"));
            }
            selector.set(key.to_string(), ConditionValue::Single(value.trim().to_string()));
        }

        Ok(selector)
    }
}

// split on commas that are not nested inside {} or []
fn split_top_level(body: &str) -> Result<Vec<&str>, &'static str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '{' | '[' => depth += 1,
            '}' | ']' => depth = depth.checked_sub(1).ok_or("unbalanced brackets")?,
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced brackets");
    }

    let tail = &body[start..];
    if !tail.trim().is_empty() || !parts.is_empty() {
        parts.push(tail);
    }

    Ok(parts)
}

///
/// Target
///
/// Anything a command can aim at: a selector, a player name or a UUID.
///

#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Target {
    Selector(Selector),
    Name(String),
    Uuid(Uuid),
}

impl Target {
    /// A target that names a single player.
    pub fn player(name: &str) -> Result<Self, ParseError> {
        let valid = !name.is_empty()
            && name.len() <= 16
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid {
            Ok(Self::Name(name.to_string()))
        } else {
            Err(ParseError::InvalidPlayerName(name.to_string()))
        }
    }

    #[must_use]
    pub fn targets_player(&self, strong: bool) -> bool {
        match self {
            Self::Selector(s) => s.targets_player(strong),
            Self::Name(_) => true,
            Self::Uuid(_) => false,
        }
    }
}

impl From<Selector> for Target {
    fn from(s: Selector) -> Self {
        Self::Selector(s)
    }
}

impl From<SelectorGroup> for Target {
    fn from(g: SelectorGroup) -> Self {
        Self::Selector(Selector::new(g))
    }
}

impl From<Uuid> for Target {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl FromStr for Target {
    type Err = ParseError;

    /// Tries a selector first, then a uuid, then a player name. A single
    /// group letter such as `a` is a selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Selector>() {
            Ok(selector) => return Ok(Self::Selector(selector)),
            Err(e) if s.starts_with('@') => return Err(e),
            Err(_) => {}
        }
        if let Ok(uuid) = s.parse::<Uuid>() {
            return Ok(Self::Uuid(uuid));
        }

        Self::player(s)
    }
}

///
/// TESTS
///
