//! Hygiene checks over production sources.
//!
//! Scans `src/` (skipping `*_test.rs`) for patterns that either crash the
//! wasm module or swallow errors without logging. Every budget is zero; the
//! page must degrade through `ChromeError` and `log`, never through a panic.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Banned pattern and the reason it is banned.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics abort the wasm module"),
    (".expect(", "panics abort the wasm module"),
    ("panic!(", "panics abort the wasm module"),
    ("unreachable!(", "panics abort the wasm module"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("let _ =", "discards an error without logging it"),
    (".ok()", "discards an error without logging it"),
    ("println!(", "stdout is invisible in the browser; use log"),
    ("eprintln!(", "stderr is invisible in the browser; use log"),
    ("dbg!(", "debug leftovers"),
    ("#[allow(dead_code)]", "dead code should be deleted"),
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("controller.rs")),
        "hygiene scan found no sources; is CARGO_MANIFEST_DIR right?"
    );
}

#[test]
fn banned_patterns_stay_at_zero() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, reason) in BANNED {
        for (path, count) in hits(&files, pattern) {
            report.push(format!("  {pattern} x{count} in {path} ({reason})"));
        }
    }
    assert!(report.is_empty(), "banned patterns found:\n{}", report.join("\n"));
}

#[test]
fn browser_modules_are_feature_gated() {
    let files = source_files();
    let Some(lib) = files.iter().find(|f| f.path.ends_with("lib.rs")) else {
        panic!("lib.rs not found");
    };
    for module in ["pub mod boot;", "pub mod dom;"] {
        let gated = lib
            .content
            .lines()
            .collect::<Vec<_>>()
            .windows(2)
            .any(|pair| pair[0].trim() == "#[cfg(feature = \"hydrate\")]" && pair[1].trim() == module);
        assert!(gated, "{module} must be behind the hydrate feature");
    }
}
