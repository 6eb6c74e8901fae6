// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for the rule-check violation blacklist importer.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::num::ParseIntError;
use std::path::PathBuf;

use crate::model::ObjectId;

/// Result alias used throughout the import pipeline.
pub type ImportResult<T> = Result<T, ImportError>;

/// Every way a blacklist import can fail.
///
/// All of these abort the whole import. None of them are recovered from
/// inside the library.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The path does not name an existing regular file.
    #[error("blacklist file {path:?} not found")]
    InvalidPath { path: PathBuf },

    /// The file exists but its byte stream could not be opened or decoded.
    #[error("can't open blacklist file {path:?}: {reason}")]
    InvalidFileFormat {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The content is not well-formed XML.
    #[error("can't parse blacklist document: {reason}")]
    InvalidStructure {
        reason: String,
        #[source]
        source: Option<roxmltree::Error>,
    },

    /// A required numeric attribute is missing or not a valid number.
    #[error("record {record}: attribute `{attribute}` is not a valid number ({})", .value.as_deref().unwrap_or("missing"))]
    MalformedNumber {
        record: usize,
        attribute: &'static str,
        value: Option<String>,
        #[source]
        source: Option<ParseIntError>,
    },

    /// The severity label is not part of the severity scale.
    #[error("record {record}: unknown severity {label:?}")]
    UnknownSeverity { record: usize, label: String },

    /// The object id does not resolve to a live object in the model.
    #[error("record {record}: object {object_id} does not exist in the logic model")]
    DanglingReference { record: usize, object_id: ObjectId },
}

/// Fieldless classification of an [ImportError].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportErrorKind {
    InvalidPath,
    InvalidFileFormat,
    InvalidStructure,
    MalformedNumber,
    UnknownSeverity,
    DanglingReference,
}

impl ImportError {
    pub fn kind(&self) -> ImportErrorKind {
        match self {
            Self::InvalidPath { .. } => ImportErrorKind::InvalidPath,
            Self::InvalidFileFormat { .. } => ImportErrorKind::InvalidFileFormat,
            Self::InvalidStructure { .. } => ImportErrorKind::InvalidStructure,
            Self::MalformedNumber { .. } => ImportErrorKind::MalformedNumber,
            Self::UnknownSeverity { .. } => ImportErrorKind::UnknownSeverity,
            Self::DanglingReference { .. } => ImportErrorKind::DanglingReference,
        }
    }
}
