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
use chrono::{DateTime, Local};

/// Escape text for embedding in HTML element content or quoted attributes
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_row(event: &Event) -> String {
    let ts = escape_html(&event.display_timestamp());
    let session = escape_html(event.session());
    let level = escape_html(event.level().map_or("", Level::as_str));
    let message = escape_html(event.message());

    format!(
        "<tr>\
         <td class='muted mono'>{ts}</td>\
         <td class='pill mono'>{session}</td>\
         <td class='lvl mono'>{level}</td>\
         <td class='msg'><code>{message}</code></td>\
         </tr>"
    )
}

/// Render a self-contained HTML report with one table row per event.
///
/// `generated` is printed in the header; callers normally pass `Local::now()`.
#[must_use]
pub fn render_report(events: &[Event], title: &str, generated: DateTime<Local>) -> String {
    let title = escape_html(title);
    let generated = generated.format("%Y-%m-%dT%H:%M:%S");
    let count = events.len();

    let rows: String = events.iter().map(render_row).collect();

    format!(
        r#"<!doctype html>
<html lang='en'>
<head>
  <meta charset='utf-8' />
  <meta name='viewport' content='width=device-width,initial-scale=1' />
  <title>{title}</title>
  <style>
    :root{{ --bg:#070707; --panel:rgba(255,255,255,.06); --border:rgba(255,255,255,.12);
      --text:#f6f6f6; --muted:#b9b9c2; --pink:#ff78c8; --pink2:#ffb3e6; }}
    body{{ margin:0; font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; background:var(--bg); color:var(--text); }}
    .wrap{{ max-width:1120px; margin:0 auto; padding:24px; }}
    .card{{ background:var(--panel); border:1px solid var(--border); border-radius:14px; padding:16px; margin:14px 0; }}
    .muted{{ color:var(--muted); }}
    .mono{{ font-variant-ligatures:none; }}
    table{{ width:100%; border-collapse:collapse; }}
    th,td{{ padding:10px 10px; border-bottom:1px solid rgba(255,255,255,.08); vertical-align:top; }}
    th{{ text-align:left; color:var(--muted); font-weight:600; }}
    code{{ color:var(--pink2); }}
    .pill{{ color:var(--pink2); max-width:280px; overflow:hidden; text-overflow:ellipsis; white-space:nowrap; }}
    .lvl{{ width:90px; }}
    .msg{{ width:55%; }}
  </style>
</head>
<body>
  <div class='wrap'>
    <div class='card'>
      <h1 style='margin:0 0 8px'>{title}</h1>
      <div class='muted'>generated {generated} • events: {count}</div>
    </div>

    <div class='card'>
      <table>
        <thead>
          <tr><th>time</th><th>session</th><th>lvl</th><th>message</th></tr>
        </thead>
        <tbody>
          {rows}
        </tbody>
      </table>
    </div>
  </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_events;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 1, 17, 8, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_report_rows_in_order() {
        let events = parse_events(
            [
                "2026-01-17T06:12:33Z [sid=9] ERROR <boom>",
                "06:12:34 client=1.1.1.1 INFO ok & done",
            ],
            None,
        );
        let html = render_report(&events, "logloom • app.log", fixed_now());

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>logloom • app.log</title>"));
        assert!(html.contains("generated 2026-01-17T08:00:00 • events: 2"));
        assert_eq!(html.matches("<tr><td").count(), 2);

        let first = html.find("<code>[sid=9] ERROR &lt;boom&gt;</code>").expect("first row");
        let second = html
            .find("<code>client=1.1.1.1 INFO ok &amp; done</code>")
            .expect("second row");
        assert!(first < second);
        assert!(html.contains("<td class='lvl mono'>ERROR</td>"));
        assert!(html.contains("<td class='pill mono'>sid=9</td>"));
    }

    #[test]
    fn test_row_cells_are_escaped() {
        let events = parse_events(["12:00:00 [sid=<x>] INFO a & b"], None);
        let row = render_row(&events[0]);
        assert_eq!(
            row,
            "<tr>\
             <td class='muted mono'>12:00:00</td>\
             <td class='pill mono'>sid=&lt;x&gt;</td>\
             <td class='lvl mono'>INFO</td>\
             <td class='msg'><code>[sid=&lt;x&gt;] INFO a &amp; b</code></td>\
             </tr>"
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_report(&[], "<script>", fixed_now());
        assert!(html.contains("<title>&lt;script&gt;</title>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("events: 0"));
    }
}
