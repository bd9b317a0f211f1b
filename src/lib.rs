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

//! `LogLoom` - best-effort timelines from unstructured log text
//!
//! The [`parser`] module turns raw lines into ordered [`parser::Event`]s,
//! [`render`] presents them as text or HTML, and [`cli`] wires both to the
//! `logloom` binary.

pub mod cli;
pub mod config;
pub mod parser;
pub mod render;
