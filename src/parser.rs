// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/parser.rs - Record parser for rule-check violation blacklists.
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
 * # `parser` Module
 *
 * Turns the elements of a parsed blacklist document into typed
 * [RcViolation] records.
 *
 * A blacklist document looks like this:
 *
 * ```xml
 * <rc-blacklist>
 *   <rc-violation object-id="42" rc-violation-class="rc-open-ports" severity="error"/>
 *   <rc-violation object-id="1337" rc-violation-class="rc-unconnected-wire" severity="warning"/>
 * </rc-blacklist>
 * ```
 *
 * Records may appear at any depth below the root. Elements with other tags
 * are skipped.
 */

use std::str::FromStr;

use roxmltree::Node;

use crate::error::{ImportError, ImportResult};
use crate::model::{ObjectId, ObjectResolver};
use crate::violation::{RcViolation, Severity};

/// Tag name of a violation record element.
pub const RECORD_TAG: &str = "rc-violation";

const OBJECT_ID_ATTR: &str = "object-id";
const CLASS_ATTR: &str = "rc-violation-class";
const SEVERITY_ATTR: &str = "severity";

/// Parses a required integer attribute of the record at position `record`.
pub fn parse_number<T>(
    node: Node<'_, '_>,
    attribute: &'static str,
    record: usize,
) -> ImportResult<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let Some(value) = node.attribute(attribute) else {
        return Err(ImportError::MalformedNumber {
            record,
            attribute,
            value: None,
            source: None,
        });
    };
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ImportError::MalformedNumber {
            record,
            attribute,
            value: Some(value.to_string()),
            source: Some(e),
        })
}

fn parse_record<R: ObjectResolver>(
    node: Node<'_, '_>,
    record: usize,
    resolver: &R,
) -> ImportResult<RcViolation<R::Handle>> {
    let object_id: ObjectId = parse_number(node, OBJECT_ID_ATTR, record)?;

    // Both are optional. Other writers leave them out.
    let violation_class = node.attribute(CLASS_ATTR).unwrap_or_default();
    let severity_label = node.attribute(SEVERITY_ATTR).unwrap_or_default();

    let severity =
        Severity::from_label(severity_label).ok_or_else(|| ImportError::UnknownSeverity {
            record,
            label: severity_label.to_string(),
        })?;

    let object = resolver
        .resolve(object_id)
        .ok_or(ImportError::DanglingReference { record, object_id })?;

    Ok(RcViolation::new(object, violation_class, severity))
}

/// Collects every record element below `root`, in document order.
///
/// The result is a fresh buffer; the caller decides where to publish it.
/// The first bad record aborts the scan.
pub fn parse_records<R: ObjectResolver>(
    root: Node<'_, '_>,
    resolver: &R,
    record_tag: &str,
) -> ImportResult<Vec<RcViolation<R::Handle>>> {
    let mut records = Vec::new();

    // `descendants` starts with the root itself, which is never a record.
    let nodes = root
        .descendants()
        .skip(1)
        .filter(|n| n.is_element() && n.tag_name().name() == record_tag);

    for (record, node) in nodes.enumerate() {
        records.push(parse_record(node, record, resolver)?);
    }

    tracing::debug!(records = records.len(), tag = record_tag, "parsed blacklist records");

    Ok(records)
}
