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

//! Leading-timestamp recognition and cross-line date anchoring.
//!
//! A line is tried against a fixed, ordered set of timestamp shapes. The first
//! shape that matches at the start of the line wins; its span (plus any
//! separator that follows it) is cut off and the rest of the line becomes the
//! remainder used for level and session inference.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fancy_regex::{Captures, Regex};
use std::sync::LazyLock;

// 2026-01-17T06:12:33Z
static ISO_COMBINED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ts>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?)(?P<z>Z)?\b")
        .expect("valid regex literal")
});

// 2026-01-17 06:12:33
static DATE_SPACE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<date>\d{4}-\d{2}-\d{2})[ T](?P<time>\d{2}:\d{2}:\d{2}(?:\.\d+)?)\b")
        .expect("valid regex literal")
});

// 06:12:33
static TIME_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<time>\d{2}:\d{2}:\d{2}(?:\.\d+)?)\b").expect("valid regex literal")
});

/// Characters stripped between a timestamp and the rest of the line
const SEPARATORS: [char; 3] = [' ', '-', '\t'];

/// A fully resolved point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instant {
    /// Explicit UTC instant (`...Z` ISO timestamps)
    Utc(DateTime<Utc>),
    /// Wall-clock time without zone information
    Naive(NaiveDateTime),
}

impl Instant {
    /// Calendar date of this instant
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Utc(dt) => dt.naive_utc().date(),
            Self::Naive(dt) => dt.date(),
        }
    }

    /// Position on the shared timeline used for ordering.
    ///
    /// Naive times carry no zone, so they are placed on the same axis as UTC.
    #[must_use]
    pub const fn timeline_key(&self) -> NaiveDateTime {
        match self {
            Self::Utc(dt) => dt.naive_utc(),
            Self::Naive(dt) => *dt,
        }
    }

    /// ISO 8601 rendering truncated to whole seconds
    #[must_use]
    pub fn to_iso_seconds(&self) -> String {
        match self {
            Self::Utc(dt) => dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            Self::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// The closed set of timestamp layouts recognized at the start of a line,
/// listed in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampShape {
    /// `YYYY-MM-DDTHH:MM:SS[.fraction][Z]`
    IsoCombined,
    /// `YYYY-MM-DD HH:MM:SS[.fraction]`
    DateSpaceTime,
    /// `HH:MM:SS[.fraction]`
    TimeOnly,
}

impl TimestampShape {
    pub const ALL: [Self; 3] = [Self::IsoCombined, Self::DateSpaceTime, Self::TimeOnly];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::IsoCombined => &ISO_COMBINED,
            Self::DateSpaceTime => &DATE_SPACE_TIME,
            Self::TimeOnly => &TIME_ONLY,
        }
    }

    /// Whether a resolved timestamp of this shape moves the date anchor
    #[must_use]
    pub const fn carries_date(self) -> bool {
        match self {
            Self::IsoCombined | Self::DateSpaceTime => true,
            Self::TimeOnly => false,
        }
    }

    /// Build the raw text and (when resolvable) the instant from a match
    fn resolve(self, caps: &Captures<'_>, anchor: DateAnchor) -> (String, Option<Instant>) {
        match self {
            Self::IsoCombined => {
                let ts = group(caps, "ts");
                let raw = if caps.name("z").is_some() {
                    format!("{ts}Z")
                } else {
                    ts.to_string()
                };
                let instant = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| Instant::Utc(naive.and_utc()));
                (raw, instant)
            }
            Self::DateSpaceTime => {
                let date = group(caps, "date");
                let time = group(caps, "time");
                let text = format!("{date}T{time}");
                let instant = NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(Instant::Naive);
                (format!("{date} {time}"), instant)
            }
            Self::TimeOnly => {
                let time = group(caps, "time");
                let instant = anchor.date().and_then(|date| {
                    NaiveTime::parse_from_str(time, "%H:%M:%S%.f")
                        .ok()
                        .map(|t| Instant::Naive(date.and_time(t)))
                });
                (time.to_string(), instant)
            }
        }
    }
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// A timestamp found at the start of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampMatch {
    pub shape: TimestampShape,
    /// Matched text as it should be displayed
    pub raw: String,
    /// `None` when the text matched but could not be pinned to a calendar date
    pub instant: Option<Instant>,
}

/// Result of splitting a line into its leading timestamp and the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamped<'a> {
    pub timestamp: Option<TimestampMatch>,
    pub remainder: &'a str,
}

/// Most recently seen calendar date, used to resolve time-only timestamps.
///
/// This is a plain value: callers thread it from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateAnchor(Option<NaiveDate>);

impl DateAnchor {
    #[must_use]
    pub const fn new(date: Option<NaiveDate>) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        self.0
    }

    /// Anchor to use for the next line after `timestamp` was seen
    #[must_use]
    pub fn observe(self, timestamp: Option<&TimestampMatch>) -> Self {
        match timestamp {
            Some(TimestampMatch {
                shape,
                instant: Some(instant),
                ..
            }) if shape.carries_date() => Self(Some(instant.date())),
            _ => self,
        }
    }
}

/// Match the leading timestamp of `line`, if any.
///
/// Leading whitespace is ignored. Without a match the remainder is the whole
/// line untouched.
#[must_use]
pub fn split_timestamp(line: &str, anchor: DateAnchor) -> Stamped<'_> {
    let text = line.trim_start();

    for shape in TimestampShape::ALL {
        let caps = match shape.pattern().captures(text) {
            Ok(Some(caps)) => caps,
            Ok(None) => continue,
            Err(e) => {
                tracing::trace!("timestamp pattern {shape:?} failed: {e}");
                continue;
            }
        };

        let end = caps.get(0).map_or(0, |m| m.end());
        let (raw, instant) = shape.resolve(&caps, anchor);
        return Stamped {
            timestamp: Some(TimestampMatch {
                shape,
                raw,
                instant,
            }),
            remainder: text[end..].trim_start_matches(SEPARATORS),
        };
    }

    Stamped {
        timestamp: None,
        remainder: line,
    }
}
