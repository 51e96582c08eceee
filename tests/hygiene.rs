//! Hygiene — enforces coding standards at test time
//!
//! Scans the production sources under `src/` (test files excluded) for
//! patterns that can crash the host or swallow errors. The interaction core
//! is total, so the panic budgets are zero.

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

/// Lines containing `pattern`, as `path:line` strings.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, _)| format!("  {}:{}", file.path, n + 1))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    assert!(
        found.len() <= max,
        "{pattern} budget exceeded: found {}, max {max}.\n{}",
        found.len(),
        found.join("\n")
    );
}

macro_rules! budget {
    ($name:ident, $pattern:expr) => {
        budget!($name, $pattern, 0);
    };
    ($name:ident, $pattern:expr, $max:expr) => {
        #[test]
        fn $name() {
            assert_budget($pattern, $max);
        }
    };
}

// Panics.
budget!(unwrap_budget, ".unwrap()");
budget!(expect_budget, ".expect(");
budget!(panic_budget, "panic!(");
budget!(unreachable_budget, "unreachable!(");
budget!(todo_budget, "todo!(");
budget!(unimplemented_budget, "unimplemented!(");
budget!(index_by_id_budget, ".objects[");

// Silent loss.
budget!(silent_discard_budget, "let _ =");
// `EditorConfig::from_env`: an unset or non-unicode variable keeps the default.
budget!(dot_ok_budget, ".ok()", 1);

// Style.
budget!(allow_dead_code_budget, "#[allow(dead_code)]");
budget!(println_budget, "println!(");
