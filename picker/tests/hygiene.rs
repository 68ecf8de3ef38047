//! Hygiene — production-source checks for the picker crate.
//!
//! Scans `src/` (excluding `*_test.rs`) for constructs that can crash the
//! widget or lose an error silently. Every budget is zero: the model reports
//! failures as values and logs through `tracing`, never by printing.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Lines containing any of `patterns`, grouped by file.
fn hits(files: &[SourceFile], patterns: &[&str]) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| patterns.iter().any(|p| line.contains(p)))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(label: &str, patterns: &[&str], max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the picker crate root");
    let found = hits(&files, patterns);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let detail = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{detail}");
}

#[test]
fn no_unwrap_or_expect() {
    assert_budget("unwrap/expect", &[".unwrap()", ".expect("], 0);
}

#[test]
fn no_panicking_macros() {
    assert_budget("panic", &["panic!(", "unreachable!(", "todo!(", "unimplemented!("], 0);
}

#[test]
fn no_silent_discards() {
    assert_budget("silent discard", &["let _ =", ".ok()"], 0);
}

#[test]
fn no_dead_code_allowances() {
    assert_budget("allow(dead_code)", &["#[allow(dead_code)]"], 0);
}

#[test]
fn no_printing() {
    assert_budget("print", &["println!(", "print!(", "dbg!("], 0);
}
