// LogLoom - GPL-3.0-or-later
// This file is part of LogLoom.
//
// Copyright (C) 2026 LogLoom contributors
//
// LogLoom is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogLoom is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogLoom.  If not, see <https://www.gnu.org/licenses/>.

use fancy_regex::Regex;
use indexmap::IndexSet;
use std::sync::LazyLock;

// Correlation-like key=value tokens
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<k>src|dst|client|server|conn|session|sid)=(?P<v>[^\s\]]+)")
        .expect("valid regex literal")
});

// [ ... ] groups, typically structured metadata
static BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?P<body>[^\]]+)\]").expect("valid regex literal"));

/// Session label used when a line carries no correlation tokens
pub const NO_SESSION: &str = "(none)";

/// Maximum number of `key=value` entries kept in a session label
pub const MAX_SESSION_PARTS: usize = 3;

fn push_key_values(text: &str, parts: &mut Vec<String>) {
    for caps in KEY_VALUE.captures_iter(text).filter_map(Result::ok) {
        if let (Some(k), Some(v)) = (caps.name("k"), caps.name("v")) {
            parts.push(format!("{}={}", k.as_str(), v.as_str()));
        }
    }
}

/// Infer a short session label from `key=value` tokens in `text`.
///
/// Tokens inside `[...]` groups are collected first, then the whole text is
/// scanned again. The second pass sees the bracketed tokens a second time;
/// deduplication keeps their first (bracketed) position, so bracketed tokens
/// always lead the label.
#[must_use]
pub fn infer_session(text: &str) -> String {
    let mut parts = Vec::new();

    for caps in BRACKET.captures_iter(text).filter_map(Result::ok) {
        if let Some(body) = caps.name("body") {
            push_key_values(body.as_str(), &mut parts);
        }
    }
    push_key_values(text, &mut parts);

    if parts.is_empty() {
        return NO_SESSION.to_string();
    }

    let mut unique: IndexSet<String> = IndexSet::with_capacity(MAX_SESSION_PARTS);
    for part in parts {
        unique.insert(part);
        if unique.len() >= MAX_SESSION_PARTS {
            break;
        }
    }

    unique.into_iter().collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_before_inline() {
        assert_eq!(
            infer_session("[sid=abc] client=1.2.3.4 extra"),
            "sid=abc,client=1.2.3.4"
        );
    }

    #[test]
    fn test_bracketed_token_wins_over_earlier_inline() {
        assert_eq!(
            infer_session("client=1.1.1.1 connecting [conn=7]"),
            "conn=7,client=1.1.1.1"
        );
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(infer_session("nothing to see here"), NO_SESSION);
        assert_eq!(infer_session("[just brackets] user=bob"), NO_SESSION);
    }

    #[test]
    fn test_truncates_to_three() {
        assert_eq!(
            infer_session("src=a dst=b client=c server=d conn=e"),
            "src=a,dst=b,client=c"
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(infer_session("sid=1 sid=1 sid=2"), "sid=1,sid=2");
    }

    #[test]
    fn test_value_stops_at_bracket_and_whitespace() {
        assert_eq!(infer_session("[session=xyz]tail"), "session=xyz");
        assert_eq!(infer_session("(sid=42) done"), "sid=42)");
    }

    #[test]
    fn test_key_needs_word_boundary() {
        assert_eq!(infer_session("mysid=1 xclient=2"), NO_SESSION);
        assert_eq!(infer_session("Sid=1"), NO_SESSION);
    }

    #[test]
    fn test_multiple_bracket_groups() {
        assert_eq!(
            infer_session("[src=10.0.0.1 dst=10.0.0.2] [conn=5] server=s1"),
            "src=10.0.0.1,dst=10.0.0.2,conn=5"
        );
    }
}
