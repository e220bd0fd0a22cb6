//!
//! Case conversion for names that end up as resource-location paths.
//!

use convert_case::{Case, Casing};

/// Convert an arbitrary title ("Init Scores", "initScores") into the
/// snake_case form used for function and objective names.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Returns true if the string is already lower snake_case.
#[must_use]
pub fn is_snake_case(s: &str) -> bool {
    !s.is_empty() && to_snake_case(s) == s
}

///
/// TESTS
///
