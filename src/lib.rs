// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Importer library for rule-check violation blacklists.
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
 * # `rcblacklist` Crate
 *
 * A library for importing design-rule-check (DRC) violation blacklists into
 * an IC reverse engineering logic model.
 *
 * A blacklist holds violations that were already reviewed and should no
 * longer be reported. Each entry names a model object by its numeric id, so
 * importing means re-linking every entry to a live object:
 *
 * 1. [decoder]: Checks the path and reads the (optionally gzip-compressed)
 *    document.
 * 2. [parser]: Turns `rc-violation` elements into typed records and resolves
 *    their object ids through a [model::ObjectResolver].
 * 3. [importer]: Drives the above and publishes the records into a
 *    [violation::Blacklist] only when the whole file is valid.
 *
 * ## Usage Example
 *
 * ```no_run
 * use rcblacklist::import_blacklist;
 * use rcblacklist::model::{LogicModel, ObjectKind, ObjectResolver};
 * use rcblacklist::violation::{Blacklist, RcViolation, Severity};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let mut model = LogicModel::new();
 *     model.insert(42, "nand2_0", ObjectKind::Gate);
 *
 *     let mut blacklist = Blacklist::new();
 *     import_blacklist("rc_blacklist.xml", &model, &mut blacklist)?;
 *
 *     // Drop everything that was already reviewed
 *     let mut fresh = vec![RcViolation::new(
 *         model.resolve(42).unwrap(),
 *         "rc-open-ports",
 *         Severity::Error,
 *     )];
 *     blacklist.retain_unsuppressed(&mut fresh);
 *
 *     Ok(())
 * }
 * ```
 */

pub mod decoder;
pub mod error;
pub mod importer;
pub mod model;
pub mod parser;
pub mod violation;

pub use error::{ImportError, ImportErrorKind, ImportResult};
pub use importer::{BlacklistImporter, ImportOptions, import_blacklist};
