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
use std::fmt;
use std::sync::LazyLock;

// Whole-word, case-sensitive severity tokens
static LEVEL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(DEBUG|INFO|WARN|WARNING|ERROR|FATAL|TRACE)\b").expect("valid regex literal")
});

/// Severity inferred from a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Map an exact severity token to its level. `WARNING` folds into `Warn`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TRACE" => Some(Self::Trace),
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARN" | "WARNING" => Some(Self::Warn),
            "ERROR" => Some(Self::Error),
            "FATAL" => Some(Self::Fatal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specs apply
        f.pad(self.as_str())
    }
}

/// First severity token appearing in `text`
#[must_use]
pub fn classify_level(text: &str) -> Option<Level> {
    match LEVEL_TOKEN.find(text) {
        Ok(found) => found.and_then(|m| Level::from_token(m.as_str())),
        Err(e) => {
            tracing::trace!("level pattern failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_folds_to_warn() {
        assert_eq!(classify_level("disk WARNING low space"), Some(Level::Warn));
        assert_eq!(classify_level("WARN disk low"), Some(Level::Warn));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            classify_level("INFO retrying after ERROR"),
            Some(Level::Info)
        );
        assert_eq!(
            classify_level("[sid=1] ERROR then DEBUG"),
            Some(Level::Error)
        );
    }

    #[test]
    fn test_whole_word_and_case_sensitive() {
        assert_eq!(classify_level("INFORMATION only"), None);
        assert_eq!(classify_level("an error occurred"), None);
        assert_eq!(classify_level("MYERROR happened"), None);
        assert_eq!(classify_level("level=TRACE"), Some(Level::Trace));
    }

    #[test]
    fn test_display_is_token() {
        assert_eq!(Level::Fatal.to_string(), "FATAL");
        assert_eq!(format!("{:<5}|", Level::Warn), "WARN |");
    }
}
