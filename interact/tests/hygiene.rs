//! Hygiene: enforces coding standards at test time
//!
//! Scans the production sources of the interact crate and of the wasm bridge
//! above it (everything under both `src/` trees except `*_test.rs`) for
//! patterns the hooks must never ship: panics in an event handler take down
//! the whole page's wasm instance, and discarded errors hide storage and cue
//! failures that should at least be logged.
//! Each pattern has a budget; budgets only ever go down.

use std::fs;
use std::path::Path;

/// (pattern, budget, hint)
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics.
    (".unwrap()", 0, "propagate or default instead"),
    (".expect(", 0, "propagate or default instead"),
    ("panic!(", 0, "return an empty action list instead"),
    ("unreachable!(", 0, "model the case in the type"),
    ("todo!(", 0, "finish the stub"),
    ("unimplemented!(", 0, "finish the stub"),
    // Silent loss.
    ("let _ =", 0, "log the error with log::warn!"),
    (".ok()", 0, "match on the error and log it"),
    // Structure and output.
    ("#[allow(dead_code)]", 0, "delete the dead code"),
    ("println!(", 0, "use log::debug!/log::warn!"),
    ("dbg!(", 0, "use log::debug!"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production roots, relative to this crate: the core and the wasm bridge.
const ROOTS: &[&str] = &["src", "../src"];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    for root in ROOTS {
        collect_rs_files(Path::new(root), &mut files);
    }
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
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn bridge_sources_are_scanned() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.replace('\\', "/").ends_with("hooks/grid_canvas.rs")),
        "bridge sources under ../src were not scanned"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, hint) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let listing = hits.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("`{pattern}`: found {count}, max {budget} ({hint})\n{listing}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
