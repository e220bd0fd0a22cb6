//!
//! Small formatting helpers shared by command rendering and logs.
//!

use std::fmt::Display;

///
/// Render an optional trailing argument.
///
/// Produces `" {value}"` when present and an empty string otherwise, so
/// optional arguments can be appended directly after a required one.
///
#[must_use]
pub fn opt_arg<T: Display>(value: Option<T>) -> String {
    value.map_or_else(String::new, |v| format!(" {v}"))
}

///
/// Join displayable arguments with single spaces.
///
#[must_use]
pub fn join_args<I, T>(args: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    args.into_iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

///
/// Ellipsize a string in the middle when it exceeds the `threshold`.
///
/// Produces: first `head` chars, a Unicode ellipsis '…', then last `tail` chars.
/// Returns the original string if it does not exceed the threshold, or if the
/// requested head/tail slice would not shorten it.
///
#[must_use]
pub fn ellipsize_middle(s: &str, threshold: usize, head: usize, tail: usize) -> String {
    let len = s.chars().count();
    if len > threshold && head + 1 + tail < len {
        let prefix: String = s.chars().take(head).collect();
        let suffix: String = s.chars().skip(len - tail).collect();

        format!("{prefix}…{suffix}")
    } else {
        s.to_string()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opt_arg_prefixes_a_space() {
        assert_eq!(opt_arg(Some(3)), " 3");
        assert_eq!(opt_arg(None::<u8>), "");
    }

    #[test]
    fn join_args_uses_single_spaces() {
        assert_eq!(join_args(["a", "b", "c"]), "a b c");
        assert_eq!(join_args(Vec::<String>::new()), "");
    }

    #[test]
    fn keeps_short_strings() {
        assert_eq!(ellipsize_middle("tick", 9, 4, 4), "tick");
        assert_eq!(ellipsize_middle("abcdefghi", 9, 4, 4), "abcdefghi");
    }

    #[test]
    fn ellipsizes_long_strings() {
        assert_eq!(ellipsize_middle("abcdefghijkl", 9, 4, 4), "abcd…ijkl");
        assert_eq!(
            ellipsize_middle("abcdefghijklmnopqrstuvwxyz", 9, 4, 4),
            "abcd…wxyz"
        );
    }
}
