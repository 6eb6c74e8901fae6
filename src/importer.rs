// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/importer.rs - Importer for rule-check violation blacklist files.
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

/*!
 * # `importer` Module
 *
 * Loads a blacklist file and appends its records to a [Blacklist].
 *
 * The target is only touched once the whole document has been read,
 * parsed and every record resolved. A failed import leaves it as it was.
 *
 * ## Usage Example
 *
 * ```no_run
 * use rcblacklist::importer::BlacklistImporter;
 * use rcblacklist::model::{LogicModel, ObjectKind};
 * use rcblacklist::violation::Blacklist;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let mut model = LogicModel::new();
 *     model.insert(42, "nand2_0", ObjectKind::Gate);
 *
 *     let mut blacklist = Blacklist::new();
 *     BlacklistImporter::new(&model).import_into("rc_blacklist.xml", &mut blacklist)?;
 *
 *     for rcv in &blacklist {
 *         println!("{} {} {}", rcv.object().id(), rcv.violation_class(), rcv.severity());
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::path::Path;

use roxmltree::{Document, ParsingOptions};

use crate::decoder;
use crate::error::{ImportError, ImportResult};
use crate::model::ObjectResolver;
use crate::parser::{self, RECORD_TAG};
use crate::violation::Blacklist;

/// Knobs for a [BlacklistImporter].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Tag name of the record elements.
    pub record_tag: String,
    /// Upper bound on the decoded document size in bytes.
    pub max_document_size: Option<u64>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            record_tag: RECORD_TAG.to_string(),
            max_document_size: None,
        }
    }
}

/// Imports blacklist documents, resolving object ids against `R`.
#[derive(Debug)]
pub struct BlacklistImporter<'a, R> {
    resolver: &'a R,
    options: ImportOptions,
}

impl<'a, R: ObjectResolver> BlacklistImporter<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self::with_options(resolver, ImportOptions::default())
    }

    pub fn with_options(resolver: &'a R, options: ImportOptions) -> Self {
        Self { resolver, options }
    }

    pub fn record_tag(mut self, tag: impl Into<String>) -> Self {
        self.options.record_tag = tag.into();
        self
    }

    pub fn max_document_size(mut self, bytes: u64) -> Self {
        self.options.max_document_size = Some(bytes);
        self
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports the blacklist file at `path` into `blacklist`.
    ///
    /// # Arguments
    ///
    /// * `path` - The blacklist file, plain or gzip-compressed XML.
    /// * `blacklist` - The container to append to.
    ///
    /// # Returns
    ///
    /// `Ok(())` once every record has been appended, in document order.
    /// On error nothing is appended.
    pub fn import_into(
        &self,
        path: impl AsRef<Path>,
        blacklist: &mut Blacklist<R::Handle>,
    ) -> ImportResult<()> {
        let path = path.as_ref();
        self.load(path, blacklist).inspect_err(|e| {
            tracing::error!(
                path = %path.display(),
                kind = ?e.kind(),
                error = %e,
                "blacklist import failed"
            );
        })
    }

    /// Imports a blacklist document that is already in memory.
    pub fn import_str(&self, text: &str, blacklist: &mut Blacklist<R::Handle>) -> ImportResult<()> {
        self.load_str(text, blacklist).inspect_err(|e| {
            tracing::error!(kind = ?e.kind(), error = %e, "blacklist import failed");
        })
    }

    fn load(&self, path: &Path, blacklist: &mut Blacklist<R::Handle>) -> ImportResult<()> {
        decoder::validate_path(path)?;
        let text = decoder::read_document(path, self.options.max_document_size)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read blacklist document");
        self.load_str(&text, blacklist)
    }

    fn load_str(&self, text: &str, blacklist: &mut Blacklist<R::Handle>) -> ImportResult<()> {
        // Blacklists written by other tools may carry a DOCTYPE.
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options).map_err(|e| {
            ImportError::InvalidStructure {
                reason: e.to_string(),
                source: Some(e),
            }
        })?;

        // A parsed document always has a root element.
        let records = parser::parse_records(
            doc.root_element(),
            self.resolver,
            &self.options.record_tag,
        )?;

        let count = records.len();
        blacklist.extend(records);
        tracing::debug!(appended = count, total = blacklist.len(), "blacklist updated");

        Ok(())
    }
}

/// Imports `path` into `blacklist` with the default [ImportOptions].
pub fn import_blacklist<R: ObjectResolver>(
    path: impl AsRef<Path>,
    resolver: &R,
    blacklist: &mut Blacklist<R::Handle>,
) -> ImportResult<()> {
    BlacklistImporter::new(resolver).import_into(path, blacklist)
}
