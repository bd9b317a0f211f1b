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

//! Line-to-event inference.
//!
//! Every input line becomes exactly one [`Event`]. Nothing in here can fail:
//! text that does not look like anything known simply yields an event with
//! empty optional fields.

pub mod event;
pub mod level;
pub mod session;
pub mod timestamp;

pub use event::{order_events, Event};
pub use level::{classify_level, Level};
pub use session::{infer_session, NO_SESSION};
pub use timestamp::{split_timestamp, DateAnchor, Instant, TimestampShape};

use chrono::NaiveDate;

/// Turn a single line into an event, returning the anchor for the next line
#[must_use]
pub fn parse_line(line: &str, line_number: usize, anchor: DateAnchor) -> (Event, DateAnchor) {
    let stamped = split_timestamp(line, anchor);
    let next_anchor = anchor.observe(stamped.timestamp.as_ref());

    let level = classify_level(stamped.remainder);
    let session = infer_session(stamped.remainder);

    let event = Event::assemble(
        stamped.timestamp,
        stamped.remainder,
        level,
        session,
        line_number,
    );
    (event, next_anchor)
}

/// Parse an ordered sequence of lines into a timeline.
///
/// `anchor` seeds the date used for time-only lines until a dated line is
/// seen. The result is ordered with [`order_events`].
#[must_use]
pub fn parse_events<I, S>(lines: I, anchor: Option<NaiveDate>) -> Vec<Event>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut anchor = DateAnchor::new(anchor);
    let mut events = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim_end_matches(['\n', '\r']);
        let (event, next_anchor) = parse_line(line, index + 1, anchor);
        anchor = next_anchor;
        events.push(event);
    }

    let resolved = events.iter().filter(|e| e.instant().is_some()).count();
    tracing::debug!(
        "Parsed {} lines, {resolved} with resolved timestamps",
        events.len()
    );

    order_events(&mut events);
    events
}

/// Split on `\n`, `\r\n` and a lone `\r`. A final terminator does not start
/// an extra empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        let Some(pos) = rest.find(['\n', '\r']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines
}

/// Parse a whole document, splitting it into lines first.
///
/// Old Mac style `\r` terminators count as line breaks too.
#[must_use]
pub fn parse_text(content: &str, anchor: Option<NaiveDate>) -> Vec<Event> {
    parse_events(split_lines(content), anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_one_event_per_line() {
        let lines = [
            "",
            "   ",
            "garbage",
            "10:00:00",
            "2026-01-01 00:00:00 INFO x",
        ];
        let events = parse_events(lines, None);
        assert_eq!(events.len(), lines.len());
    }

    #[test]
    fn test_iso_then_time_only_scenario() {
        let lines = [
            "2026-01-17T06:12:33Z [sid=9] ERROR boom",
            "06:12:34 client=1.1.1.1 INFO ok",
        ];
        let events = parse_events(lines, None);
        assert_eq!(events.len(), 2);

        let first = &events[0];
        assert_eq!(first.line_number(), 1);
        assert_eq!(first.raw_timestamp(), Some("2026-01-17T06:12:33Z"));
        assert!(matches!(first.instant(), Some(Instant::Utc(_))));
        assert_eq!(first.level(), Some(Level::Error));
        assert_eq!(first.session(), "sid=9");
        assert_eq!(first.message(), "[sid=9] ERROR boom");

        let second = &events[1];
        assert_eq!(second.line_number(), 2);
        assert_eq!(second.raw_timestamp(), Some("06:12:34"));
        let instant = second.instant().expect("anchored to the ISO date");
        assert_eq!(instant.to_iso_seconds(), "2026-01-17T06:12:34");
        assert_eq!(second.level(), Some(Level::Info));
        assert_eq!(second.session(), "client=1.1.1.1");
    }

    #[test]
    fn test_anchor_carries_across_unrelated_lines() {
        let lines = [
            "2025-03-04 23:00:00 start",
            "no timestamp here",
            "  also nothing",
            "01:02:03 later",
        ];
        let events = parse_events(lines, None);
        let later = events
            .iter()
            .find(|e| e.line_number() == 4)
            .and_then(Event::instant)
            .expect("anchored");
        let key = later.timeline_key();
        assert_eq!((key.year(), key.month(), key.day()), (2025, 3, 4));
        assert_eq!((key.hour(), key.minute(), key.second()), (1, 2, 3));
    }

    #[test]
    fn test_time_only_without_anchor_sorts_last() {
        let lines = ["09:00:00 early", "2026-01-01 10:00:00 dated"];
        let events = parse_events(lines, None);
        assert_eq!(events[0].line_number(), 2);
        assert_eq!(events[1].line_number(), 1);
        assert_eq!(events[1].instant(), None);
        assert_eq!(events[1].raw_timestamp(), Some("09:00:00"));
    }

    #[test]
    fn test_caller_supplied_anchor() {
        let anchor = NaiveDate::from_ymd_opt(2024, 2, 29);
        let events = parse_events(["12:00:00 noon"], anchor);
        let instant = events[0].instant().expect("anchored by caller");
        assert_eq!(
            instant.date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).expect("leap day")
        );
    }

    #[test]
    fn test_plain_line() {
        let events = parse_events(["  just some words\n"], None);
        let e = &events[0];
        assert_eq!(e.raw_timestamp(), None);
        assert_eq!(e.instant(), None);
        assert_eq!(e.level(), None);
        assert_eq!(e.session(), NO_SESSION);
        assert_eq!(e.message(), "just some words");
    }

    #[test]
    fn test_chronological_order_across_lines() {
        let text = "2026-01-02 00:00:00 second\n2026-01-01 00:00:00 first\nno time\n";
        let events = parse_text(text, None);
        let messages: Vec<&str> = events.iter().map(Event::message).collect();
        assert_eq!(messages, vec!["first", "second", "no time"]);
    }

    #[test]
    fn test_line_step_threads_anchor() {
        let (first, anchor) = parse_line("2026-05-05T05:05:05Z a", 1, DateAnchor::default());
        assert!(first.instant().is_some());
        let (second, next) = parse_line("06:06:06 b", 2, anchor);
        assert_eq!(next, anchor);
        assert_eq!(
            second.instant().map(|i| i.date()),
            NaiveDate::from_ymd_opt(2026, 5, 5)
        );
    }

    #[test]
    fn test_crlf_lines() {
        let events = parse_text("2026-01-17 06:12:33 WARNING slow\r\n", None);
        assert_eq!(events[0].raw_timestamp(), Some("2026-01-17 06:12:33"));
        assert_eq!(events[0].level(), Some(Level::Warn));
        assert_eq!(events[0].message(), "WARNING slow");
    }

    #[test]
    fn test_lone_carriage_return_splits_lines() {
        let events = parse_text("10:00:00 a\r10:00:01 b", None);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message(), "a");
        assert_eq!(events[1].message(), "b");
        assert_eq!(events[1].raw_timestamp(), Some("10:00:01"));
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\r"), vec!["a"]);
        assert_eq!(split_lines("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\r\r"), vec!["", ""]);
        assert!(split_lines("").is_empty());
    }
}
