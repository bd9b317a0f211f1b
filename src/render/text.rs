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

use crate::parser::{Event, Level};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Column widths of the plain-text timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLayout {
    /// Timestamp column, right-aligned
    pub timestamp_width: usize,
    /// Session column, left-aligned and cut to this width
    pub session_width: usize,
    /// Level column, left-aligned
    pub level_width: usize,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            timestamp_width: 24,
            session_width: 28,
            level_width: 5,
        }
    }
}

/// Format one event as a timeline row (without trailing newline)
#[must_use]
pub fn render_line(event: &Event, layout: &TextLayout) -> String {
    let ts = event.display_timestamp();
    let session = event.session();
    let level = event.level().map_or("", Level::as_str);
    let message = event.message();

    format!(
        "{ts:>tw$}  {session:<sw$.sw$}  {level:<lw$}  {message}",
        tw = layout.timestamp_width,
        sw = layout.session_width,
        lw = layout.level_width,
    )
}

/// Write the timeline, one row per event, in the given order
///
/// # Errors
///
/// Returns the first error reported by `out`.
pub fn write_timeline<W: Write>(
    out: &mut W,
    events: &[Event],
    layout: &TextLayout,
) -> io::Result<()> {
    for event in events {
        writeln!(out, "{}", render_line(event, layout))?;
    }
    Ok(())
}

/// Render the whole timeline into a string
#[must_use]
pub fn render_timeline(events: &[Event], layout: &TextLayout) -> String {
    events
        .iter()
        .map(|event| render_line(event, layout) + "\n")
        .collect()
}
