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

use super::level::Level;
use super::timestamp::{Instant, TimestampMatch};
use chrono::NaiveDateTime;

/// One inferred timeline entry, produced for every input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Resolved point in time, when the line had (or was anchored to) a date
    instant: Option<Instant>,
    /// Timestamp text exactly as matched, kept for display
    raw_timestamp: Option<String>,
    /// Comma-joined `key=value` correlation tokens, or `(none)`
    session: String,
    level: Option<Level>,
    /// Line text after the timestamp, trimmed
    message: String,
    /// 1-based position in the input
    line_number: usize,
}

impl Event {
    #[must_use]
    pub fn assemble(
        timestamp: Option<TimestampMatch>,
        remainder: &str,
        level: Option<Level>,
        session: String,
        line_number: usize,
    ) -> Self {
        let (raw_timestamp, instant) =
            timestamp.map_or((None, None), |ts| (Some(ts.raw), ts.instant));

        Self {
            instant,
            raw_timestamp,
            session,
            level,
            message: remainder.trim().to_string(),
            line_number,
        }
    }

    #[must_use]
    pub const fn instant(&self) -> Option<Instant> {
        self.instant
    }

    #[must_use]
    pub fn raw_timestamp(&self) -> Option<&str> {
        self.raw_timestamp.as_deref()
    }

    #[must_use]
    pub fn session(&self) -> &str {
        &self.session
    }

    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        self.level
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Timestamp shown to readers: the raw text when available, otherwise the
    /// instant to second precision, otherwise empty.
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        match (&self.raw_timestamp, self.instant) {
            (Some(raw), _) => raw.clone(),
            (None, Some(instant)) => instant.to_iso_seconds(),
            (None, None) => String::new(),
        }
    }

    /// Composite ordering key: resolved events first, chronologically, then
    /// by original line.
    fn order_key(&self) -> (bool, NaiveDateTime, usize) {
        (
            self.instant.is_none(),
            self.instant
                .as_ref()
                .map_or(NaiveDateTime::MIN, Instant::timeline_key),
            self.line_number,
        )
    }
}

/// Stable in-place ordering of a parsed event sequence
pub fn order_events(events: &mut [Event]) {
    events.sort_by_key(Event::order_key);
}
