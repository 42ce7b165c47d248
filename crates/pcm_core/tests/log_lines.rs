//! Checks the diagnostic lines emitted while importing.
//!
//! The `log` facade accepts one global logger per process, so everything
//! runs in a single test against a capturing logger.

use std::path::PathBuf;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use pcm_core::{build_all, import_path, load_from_str, ImportOptions};

struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

fn take_lines() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.lines.lock().unwrap())
}

fn has_line(lines: &[(Level, String)], level: Level, needle: &str) -> bool {
    lines
        .iter()
        .any(|(l, text)| *l == level && text.contains(needle))
}

#[test]
fn test_import_log_lines() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // Loading a file reports its size and instance count
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/two_quads.json");
    let size = std::fs::metadata(&path).unwrap().len();
    let report = import_path(&path, &ImportOptions::default()).unwrap();
    assert_eq!(report.built_count(), 2);

    let lines = take_lines();
    assert!(
        has_line(&lines, Level::Info, &format!("({size} bytes, 3 mesh instances)")),
        "{lines:?}"
    );

    // Per-instance lines carry the instance position
    assert!(
        has_line(&lines, Level::Debug, "Built mesh instance 0 'Floor_Panel'"),
        "{lines:?}"
    );
    assert!(
        has_line(&lines, Level::Debug, "Built mesh instance 1 'Back_Wall'"),
        "{lines:?}"
    );
    assert!(
        has_line(&lines, Level::Warn, "Skipping mesh instance 2"),
        "{lines:?}"
    );

    // A keyed object where the instance list belongs is called out
    let document = load_from_str(r#"{ "model": { "meshInstances": {} } }"#).unwrap();
    let report = build_all(&document, "keyed.json");
    assert_eq!(report.built_count(), 0);
    assert_eq!(report.issues.len(), 1);

    let lines = take_lines();
    assert!(
        has_line(
            &lines,
            Level::Warn,
            "Document layout problem: model.meshInstances is not an array"
        ),
        "{lines:?}"
    );
}
