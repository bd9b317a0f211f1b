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

use crate::render::TextLayout;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration stored in config directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default number of events printed when `--limit` is not given
    #[serde(default)]
    pub limit: Option<usize>,

    /// Date assumed for time-only lines before the first dated line
    #[serde(default)]
    pub anchor_date: Option<NaiveDate>,

    /// Column widths of the text timeline
    #[serde(default)]
    pub layout: TextLayout,
}

impl GlobalConfig {
    /// Get the path to the global config file
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("logloom").join("config.json"))
    }

    /// Load global config from disk, returning defaults if not found
    #[must_use]
    pub fn load() -> Self {
        Self::config_path().map_or_else(
            || {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            },
            |path| Self::load_from(&path),
        )
    }

    /// Load config from an explicit file. Missing or unreadable files fall
    /// back to defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return Self::default();
        }

        tracing::info!("Loading config from {}", path.display());
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {e}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
