// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  tests/import.rs - Blacklist import tests against files on disk.
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

use std::io::Write;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

use rcblacklist::model::{LogicModel, ObjectKind, ObjectRef, ObjectResolver};
use rcblacklist::violation::{Blacklist, RcViolation, Severity};
use rcblacklist::{BlacklistImporter, ImportErrorKind, import_blacklist};

const BLACKLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rc-blacklist>
  <rc-violation object-id="42" rc-violation-class="rc-open-ports" severity="error"/>
  <rc-violation object-id="7" rc-violation-class="rc-unconnected-wire" severity="warning"/>
  <!-- reviewed 2026-03-02 -->
  <layer position="2">
    <rc-violation object-id="1337" rc-violation-class="rc-overlapping-gates" severity="critical"/>
  </layer>
  <rc-violation object-id="7" rc-violation-class="rc-unconnected-wire" severity="warning"/>
</rc-blacklist>
"#;

fn model() -> LogicModel {
    let mut model = LogicModel::new();
    model.insert(7, "wire_7", ObjectKind::Wire);
    model.insert(42, "nand2_0", ObjectKind::Gate);
    model.insert(1337, "dff_3", ObjectKind::Gate);
    model
}

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

fn seeded(model: &LogicModel) -> Blacklist<ObjectRef> {
    let mut blacklist = Blacklist::new();
    blacklist.push(RcViolation::new(
        model.resolve(42).unwrap(),
        "rc-seed",
        Severity::Warning,
    ));
    blacklist
}

#[test]
fn imports_all_records_in_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "rc_blacklist.xml", BLACKLIST.as_bytes());
    let model = model();

    let mut blacklist = Blacklist::new();
    import_blacklist(&path, &model, &mut blacklist).unwrap();

    let got: Vec<(u64, &str, Severity)> = blacklist
        .iter()
        .map(|r| (r.object().id(), r.violation_class(), r.severity()))
        .collect();
    assert_eq!(
        got,
        vec![
            (42, "rc-open-ports", Severity::Error),
            (7, "rc-unconnected-wire", Severity::Warning),
            (1337, "rc-overlapping-gates", Severity::Critical),
            (7, "rc-unconnected-wire", Severity::Warning),
        ]
    );
    assert_eq!(
        blacklist.as_slice()[2].object().upgrade().unwrap().name,
        "dff_3"
    );
}

#[test]
fn appends_after_existing_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "rc_blacklist.xml", BLACKLIST.as_bytes());
    let model = model();

    let mut blacklist = seeded(&model);
    import_blacklist(&path, &model, &mut blacklist).unwrap();

    assert_eq!(blacklist.len(), 5);
    assert_eq!(blacklist.as_slice()[0].violation_class(), "rc-seed");
}

#[test]
fn importing_twice_gives_identical_lists() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "rc_blacklist.xml", BLACKLIST.as_bytes());
    let model = model();

    let mut first = Blacklist::new();
    let mut second = Blacklist::new();
    import_blacklist(&path, &model, &mut first).unwrap();
    import_blacklist(&path, &model, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_blacklist() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "empty.xml", b"<rc-blacklist/>");
    let model = model();

    let mut blacklist = seeded(&model);
    import_blacklist(&path, &model, &mut blacklist).unwrap();
    assert_eq!(blacklist.len(), 1);
}

#[test]
fn gzip_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(BLACKLIST.as_bytes()).unwrap();
    let path = write_file(&dir, "rc_blacklist.xml.gz", &encoder.finish().unwrap());
    let model = model();

    let mut blacklist = Blacklist::new();
    import_blacklist(&path, &model, &mut blacklist).unwrap();
    assert_eq!(blacklist.len(), 4);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let model = model();

    let mut blacklist = seeded(&model);
    let before = blacklist.clone();
    let err = import_blacklist(dir.path().join("missing.xml"), &model, &mut blacklist).unwrap_err();

    assert_eq!(err.kind(), ImportErrorKind::InvalidPath);
    assert_eq!(blacklist, before);
}

#[test]
fn not_xml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "notes.txt", b"object 42 is fine, really");
    let model = model();

    let mut blacklist = seeded(&model);
    let before = blacklist.clone();
    let err = import_blacklist(&path, &model, &mut blacklist).unwrap_err();

    assert_eq!(err.kind(), ImportErrorKind::InvalidStructure);
    assert_eq!(blacklist, before);
}

#[test]
fn missing_object_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "rc_blacklist.xml",
        concat!(
            r#"<rc-blacklist>"#,
            r#"<rc-violation rc-violation-class="rc-open-ports" severity="error"/>"#,
            r#"</rc-blacklist>"#,
        )
        .as_bytes(),
    );
    let model = model();

    let mut blacklist = Blacklist::new();
    let err = import_blacklist(&path, &model, &mut blacklist).unwrap_err();

    assert_eq!(err.kind(), ImportErrorKind::MalformedNumber);
    assert!(blacklist.is_empty());
}

#[test]
fn unknown_severity() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "rc_blacklist.xml",
        br#"<rc-blacklist><rc-violation object-id="42" severity="meh"/></rc-blacklist>"#,
    );
    let model = model();

    let mut blacklist = Blacklist::new();
    let err = import_blacklist(&path, &model, &mut blacklist).unwrap_err();
    assert_eq!(err.kind(), ImportErrorKind::UnknownSeverity);
}

#[test]
fn stale_object_id_fails_whole_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "rc_blacklist.xml", BLACKLIST.as_bytes());
    let mut model = model();
    model.remove(1337);

    let mut blacklist = seeded(&model);
    let before = blacklist.clone();
    let err = import_blacklist(&path, &model, &mut blacklist).unwrap_err();

    assert_eq!(err.kind(), ImportErrorKind::DanglingReference);
    assert_eq!(blacklist, before);
}

#[test]
fn doctype_document() {
    let dir = tempfile::tempdir().unwrap();
    let text = BLACKLIST.replacen(
        "<rc-blacklist>",
        "<!DOCTYPE rc-blacklist SYSTEM \"rc_blacklist.dtd\">\n<rc-blacklist>",
        1,
    );
    let path = write_file(&dir, "rc_blacklist.xml", text.as_bytes());
    let model = model();

    let mut blacklist = Blacklist::new();
    import_blacklist(&path, &model, &mut blacklist).unwrap();
    assert_eq!(blacklist.len(), 4);
}

#[test]
fn size_cap() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "rc_blacklist.xml", BLACKLIST.as_bytes());
    let model = model();

    let mut blacklist = Blacklist::new();
    let err = BlacklistImporter::new(&model)
        .max_document_size(64)
        .import_into(&path, &mut blacklist)
        .unwrap_err();
    assert_eq!(err.kind(), ImportErrorKind::InvalidFileFormat);
    assert!(blacklist.is_empty());
}

#[test]
fn imported_entries_suppress_fresh_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "rc_blacklist.xml", BLACKLIST.as_bytes());
    let model = model();

    let mut blacklist = Blacklist::new();
    import_blacklist(&path, &model, &mut blacklist).unwrap();

    let mut fresh = vec![
        RcViolation::new(model.resolve(42).unwrap(), "rc-open-ports", Severity::Error),
        RcViolation::new(model.resolve(42).unwrap(), "rc-unconnected-wire", Severity::Warning),
        RcViolation::new(model.resolve(7).unwrap(), "rc-unconnected-wire", Severity::Warning),
    ];
    blacklist.retain_unsuppressed(&mut fresh);

    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].object().id(), 42);
    assert_eq!(fresh[0].violation_class(), "rc-unconnected-wire");
}
