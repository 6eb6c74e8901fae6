// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/violation.rs - Rule-check violation records and the blacklist container.
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

use std::fmt;
use std::str::FromStr;

/// How serious a rule-check violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    /// No severity was recorded.
    #[default]
    Undefined,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Maps a severity label to its scale value.
    ///
    /// Surrounding whitespace is ignored and an empty label means
    /// [Severity::Undefined]. Any other unknown label yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "" | "undefined" => Some(Self::Undefined),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// The label written to blacklist files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [Severity::from_str] for labels outside the scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity {0:?}")]
pub struct UnknownSeverityLabel(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverityLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownSeverityLabel(s.to_string()))
    }
}

/// A rule-check violation that was reviewed and acknowledged.
///
/// `H` is the handle type of the model the object was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub struct RcViolation<H> {
    object: H,
    violation_class: String,
    severity: Severity,
}

impl<H> RcViolation<H> {
    pub fn new(object: H, violation_class: impl Into<String>, severity: Severity) -> Self {
        Self {
            object,
            violation_class: violation_class.into(),
            severity,
        }
    }

    /// The model object the violation was raised for.
    pub fn object(&self) -> &H {
        &self.object
    }

    /// The rule-check category, e.g. `"rc-open-ports"`. May be empty.
    pub fn violation_class(&self) -> &str {
        &self.violation_class
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Ordered list of blacklisted violations.
///
/// Entries keep the order they were added in. Nothing is sorted or merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Blacklist<H> {
    entries: Vec<RcViolation<H>>,
}

impl<H> Default for Blacklist<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> Blacklist<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: RcViolation<H>) {
        self.entries.push(violation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[RcViolation<H>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RcViolation<H>> {
        self.entries.iter()
    }
}

impl<H: PartialEq> Blacklist<H> {
    /// Returns `true` if an identical violation has already been reviewed.
    pub fn is_suppressed(&self, violation: &RcViolation<H>) -> bool {
        self.entries.iter().any(|entry| entry == violation)
    }

    /// Drops every fresh violation that is on the blacklist.
    pub fn retain_unsuppressed(&self, violations: &mut Vec<RcViolation<H>>) {
        violations.retain(|v| !self.is_suppressed(v));
    }
}

impl<H> Extend<RcViolation<H>> for Blacklist<H> {
    fn extend<I: IntoIterator<Item = RcViolation<H>>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, H> IntoIterator for &'a Blacklist<H> {
    type Item = &'a RcViolation<H>;
    type IntoIter = std::slice::Iter<'a, RcViolation<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
