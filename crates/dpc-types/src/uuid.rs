use crate::ParseError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// Uuid
///
/// Entity or modifier UUID in its hyphenated text form. Kept as text because
/// commands only ever format it.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid(String);

impl Uuid {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u128> for Uuid {
    fn from(v: u128) -> Self {
        let hex = format!("{v:032x}");

        Self(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }
}

impl FromStr for Uuid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.split('-').collect();
        let shape_ok = groups.len() == 5
            && groups
                .iter()
                .zip([8, 4, 4, 4, 12])
                .all(|(g, len)| g.len() == len && g.chars().all(|c| c.is_ascii_hexdigit()));

        if shape_ok {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(ParseError::InvalidUuid(s.to_string()))
        }
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Uuid> for String {
    fn from(u: Uuid) -> Self {
        u.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_u128_hyphenated() {
        let u = Uuid::from(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef_u128);
        assert_eq!(u.as_str(), "01234567-89ab-cdef-0123-456789abcdef");
    }

    #[test]
    fn parse_normalizes_case() {
        let u: Uuid = "F0000000-0000-0000-0000-00000000000A".parse().unwrap();
        assert_eq!(u.to_string(), "f0000000-0000-0000-0000-00000000000a");
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        assert!("not-a-uuid".parse::<Uuid>().is_err());
        assert!("0123456789abcdef0123456789abcdef".parse::<Uuid>().is_err());
        assert!("0123456g-89ab-cdef-0123-456789abcdef".parse::<Uuid>().is_err());
    }
}
