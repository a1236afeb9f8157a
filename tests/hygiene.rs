//! Hygiene: enforces coding standards at test time.
//!
//! Scans the widget's production sources for patterns that either crash the
//! WASM module or silently swallow errors. Every budget is zero; if one has to
//! grow, shrink another first.

use std::fs;
use std::path::{Path, PathBuf};

/// (label, needle, budget)
const BUDGETS: &[(&str, &str, usize)] = &[
    // Panics abort the whole page's WASM instance.
    ("unwrap", ".unwrap()", 0),
    ("expect", ".expect(", 0),
    ("panic", "panic!(", 0),
    ("unreachable", "unreachable!(", 0),
    ("todo", "todo!(", 0),
    ("unimplemented", "unimplemented!(", 0),
    // Silent loss.
    ("silent discard", "let _ =", 0),
    ("dot ok", ".ok()", 0),
    ("unwrap or default", ".unwrap_or_default()", 0),
    // Structure.
    ("allow dead code", "#[allow(dead_code)]", 0),
];

fn production_sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn hits(files: &[(PathBuf, String)], needle: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(needle)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("reactor.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for (label, needle, budget) in BUDGETS {
        let found = hits(&files, needle);
        let total: usize = found.iter().map(|(_, n)| n).sum();
        if total > *budget {
            let detail = found
                .iter()
                .map(|(path, n)| format!("    {path}: {n}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  {label} budget exceeded: found {total}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene violations:\n{}", failures.join("\n"));
}
