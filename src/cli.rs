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

use crate::config::GlobalConfig;
use crate::parser::parse_text;
use crate::render::{render_report, write_timeline};
use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Exit status when the input file does not exist
pub const EXIT_FILE_NOT_FOUND: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "logloom")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(about = "Log prettifier: parse timestamps and sessions into a timeline")]
#[command(long_about = None)]
pub struct Args {
    /// Input log file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Limit number of events printed
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Grouping strategy (reserved, only `auto` is implemented)
    #[arg(long, value_name = "STRATEGY", default_value = "auto")]
    pub group: String,

    /// Write a self-contained HTML report to this path
    #[arg(long, value_name = "OUT")]
    pub html: Option<PathBuf>,

    /// Date assumed for time-only lines before the first dated line (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub anchor_date: Option<NaiveDate>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Run the command line front end, writing the timeline to `out` and
/// diagnostics to `err`. Returns the process exit status.
///
/// # Errors
///
/// Fails when the input cannot be read or an output cannot be written.
pub fn run<O: Write, E: Write>(args: &Args, out: &mut O, err: &mut E) -> anyhow::Result<u8> {
    let config = args
        .config
        .as_deref()
        .map_or_else(GlobalConfig::load, GlobalConfig::load_from);

    if !args.path.exists() {
        writeln!(err, "logloom: file not found: {}", args.path.display())?;
        return Ok(EXIT_FILE_NOT_FOUND);
    }

    if args.group != "auto" {
        tracing::info!("Grouping strategy {:?} is reserved, using auto", args.group);
    }

    let read_start = std::time::Instant::now();
    let bytes =
        fs::read(&args.path).with_context(|| format!("Failed to read {}", args.path.display()))?;
    // Lossy conversion so stray non-UTF-8 bytes do not abort the run
    let content = String::from_utf8_lossy(&bytes);
    tracing::debug!(
        "Read {} bytes from {} in {:?}",
        bytes.len(),
        args.path.display(),
        read_start.elapsed()
    );

    let anchor = args.anchor_date.or(config.anchor_date);
    let mut events = parse_text(&content, anchor);

    if let Some(limit) = args.limit.or(config.limit) {
        events.truncate(limit);
    }

    write_timeline(out, &events, &config.layout).context("Failed to write timeline")?;

    if let Some(html_path) = &args.html {
        let name = args.path.file_name().map_or_else(
            || args.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        let report = render_report(&events, &format!("logloom • {name}"), Local::now());
        fs::write(html_path, report)
            .with_context(|| format!("Failed to write HTML report {}", html_path.display()))?;
        tracing::info!("Wrote HTML report with {} events", events.len());
        writeln!(out, "\nwrote html: {}", html_path.display())?;
    }

    Ok(0)
}
