// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - File access and decoding for blacklist documents.
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

use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{ImportError, ImportResult};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Fails with [ImportError::InvalidPath] unless `path` names a regular file.
pub fn validate_path(path: &Path) -> ImportResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        tracing::debug!(path = %path.display(), "blacklist file not found");
        Err(ImportError::InvalidPath {
            path: path.to_path_buf(),
        })
    }
}

fn inflate(path: &Path, data: &[u8], limit: Option<u64>) -> ImportResult<Vec<u8>> {
    let decoder = GzDecoder::new(data);
    let mut buffer = Vec::with_capacity(data.len() * 4);
    let read = match limit {
        // One byte past the limit is enough to tell it was exceeded.
        Some(limit) => decoder.take(limit.saturating_add(1)).read_to_end(&mut buffer),
        None => {
            let mut decoder = decoder;
            decoder.read_to_end(&mut buffer)
        }
    };
    read.map_err(|e| ImportError::InvalidFileFormat {
        path: path.to_path_buf(),
        reason: "corrupt gzip stream".to_string(),
        source: Some(e),
    })?;
    Ok(buffer)
}

/// Reads the whole document at `path` and returns it as text.
///
/// Gzip-compressed files are inflated first. The file handle is closed
/// before this function returns, on every path.
///
/// # Errors
///
/// * [ImportError::InvalidFileFormat] if the file can't be opened or read,
///   the gzip stream is corrupt, or the document is larger than `limit`.
/// * [ImportError::InvalidStructure] if the decoded bytes are not UTF-8.
pub fn read_document(path: &Path, limit: Option<u64>) -> ImportResult<String> {
    let open_error = |reason: &str, e: std::io::Error| ImportError::InvalidFileFormat {
        path: path.to_path_buf(),
        reason: reason.to_string(),
        source: Some(e),
    };

    let mut raw = Vec::new();
    {
        let file = File::open(path).map_err(|e| open_error("can't open the file", e))?;
        let mut reader = BufReader::new(file);
        reader
            .read_to_end(&mut raw)
            .map_err(|e| open_error("can't read the file", e))?;
    }

    let data = if raw.starts_with(&GZIP_MAGIC) {
        tracing::debug!(path = %path.display(), compressed = raw.len(), "inflating gzip document");
        inflate(path, &raw, limit)?
    } else {
        raw
    };

    if let Some(limit) = limit {
        if data.len() as u64 > limit {
            return Err(ImportError::InvalidFileFormat {
                path: path.to_path_buf(),
                reason: format!("document exceeds the {limit} byte limit"),
                source: None,
            });
        }
    }

    String::from_utf8(data).map_err(|e| ImportError::InvalidStructure {
        reason: format!("document is not valid UTF-8: {e}"),
        source: None,
    })
}
