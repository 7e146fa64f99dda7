// tests/export_files.rs
mod common;

use std::fs;

use common::{session_page, FakeRemote, LIST, LITE};
use serde_json::Value;
use shot_harvest::config::ExportOptions;
use shot_harvest::file::{export, ExportError};
use shot_harvest::flatten::field_names;
use shot_harvest::{harvest, Harvest};

fn harvested() -> Harvest {
    let remote = FakeRemote::new(|form| match common::method(form) {
        LIST => Ok(session_page(&[("A", "Range, \"A\""), ("B", "Range B")])),
        LITE if common::arg(form, "SessionID") == "A" => Ok(common::lite(&[1, 2])),
        LITE => Ok(common::lite(&[])),
        _ => Ok(common::shots(&[1, 2])),
    });
    harvest(&remote, &common::opts(), None).unwrap()
}

fn options(dir: &std::path::Path) -> ExportOptions {
    ExportOptions { out_dir: dir.join("out"), ..ExportOptions::default() }
}

#[test]
fn writes_catalog_raw_shots_and_table() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path());

    let written = export(&harvested(), &opts).unwrap();
    assert_eq!(written, [opts.sessions_path(), opts.raw_path(), opts.flat_path()]);

    let sessions: Value = serde_json::from_str(&fs::read_to_string(opts.sessions_path()).unwrap()).unwrap();
    let first = &sessions[0];
    assert_eq!(first["sessionID"], "A");
    assert_eq!(first["displayName"], "Range, \"A\"");
    assert_eq!(first["createDate"], "2024-05-01T10:00:00");
    assert_eq!(first["appVersion"], "FS Golf 4.2");
    assert_eq!(first["location"], "");
    assert_eq!(first["sessionTypeID"], "1");
    assert_eq!(sessions.as_array().unwrap().len(), 2);

    // Raw shots are written back untouched.
    let raw: Value = serde_json::from_str(&fs::read_to_string(opts.raw_path()).unwrap()).unwrap();
    assert_eq!(raw[0], common::shot(1));
    assert_eq!(raw[1], common::shot(2));
}

#[test]
fn table_has_fixed_header_and_one_row_per_shot() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path());
    export(&harvested(), &opts).unwrap();

    let mut reader = csv::Reader::from_path(opts.flat_path()).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(header, field_names().collect::<Vec<_>>());

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "A");
    assert_eq!(&rows[0][1], "Range, \"A\"");
    assert_eq!(&rows[1][5], "2");
}

#[test]
fn no_shots_means_no_table() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path());

    let written = export(&Harvest::default(), &opts).unwrap();
    assert_eq!(written.len(), 2);
    assert!(!opts.flat_path().exists());
    assert_eq!(fs::read_to_string(opts.raw_path()).unwrap().trim(), "[]");
}

#[test]
fn compact_output_on_request() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = ExportOptions { pretty: false, ..options(tmp.path()) };
    export(&harvested(), &opts).unwrap();

    let text = fs::read_to_string(opts.sessions_path()).unwrap();
    assert!(!text.contains('\n'));
}

#[test]
fn refuses_a_file_as_output_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("out");
    fs::write(&blocker, "not a directory").unwrap();

    let err = export(&Harvest::default(), &options(tmp.path())).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(p) if p == blocker));
}
