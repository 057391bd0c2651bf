//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files so the layering between domain,
//! application, infra and presentation cannot erode silently.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Track brace depth and report whether a line sits inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Production (non-test, non-comment) lines of every file under `src/<layer>`,
/// as `(relative path, line number, line)`.
fn production_lines(layer: &[&str]) -> Vec<(String, usize, String)> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let dir = layer.iter().fold(root.join("src"), |acc, part| acc.join(part));
    let mut out = Vec::new();
    for file in collect_rs_files(&dir) {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let rel = file
            .strip_prefix(root)
            .unwrap_or(&file)
            .display()
            .to_string();
        let mut tracker = CfgTestTracker::new();
        for (i, line) in content.lines().enumerate() {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            if in_test || trimmed.starts_with("//") || trimmed.starts_with('*') {
                continue;
            }
            out.push((rel.clone(), i + 1, line.to_string()));
        }
    }
    out
}

fn violations(layer: &[&str], forbidden: &[&str]) -> Vec<String> {
    production_lines(layer)
        .into_iter()
        .filter(|(_, _, line)| forbidden.iter().any(|f| line.contains(f)))
        .map(|(rel, n, line)| format!("{rel}:{n}: {line}"))
        .collect()
}

#[test]
fn test_domain_is_pure() {
    let found = violations(
        &["domain"],
        &[
            "crate::application",
            "crate::infra",
            "crate::commands",
            "crate::output",
            "tokio",
            "std::fs",
            "std::process",
            "std::net",
            "println!",
        ],
    );
    assert!(found.is_empty(), "domain/ must stay pure:\n{}", found.join("\n"));
}

#[test]
fn test_application_depends_only_on_domain() {
    let found = violations(
        &["application"],
        &["crate::infra", "crate::commands", "crate::output", "println!"],
    );
    assert!(
        found.is_empty(),
        "application/ must not reach into infra or presentation:\n{}",
        found.join("\n")
    );
}

#[test]
fn test_infra_has_no_imports_from_commands_or_output() {
    let found = violations(&["infra"], &["crate::commands", "crate::output"]);
    assert!(
        found.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        found.join("\n")
    );
}

#[test]
fn test_infra_has_no_print_macros_outside_tests() {
    let found = violations(&["infra"], &["println!", "eprintln!"]);
    assert!(
        found.is_empty(),
        "infra/ must not use println!/eprintln! outside #[cfg(test)]:\n{}",
        found.join("\n")
    );
}

#[test]
fn test_no_inline_json_branching_in_commands() {
    let found = violations(&["commands"], &["json: bool", "if json", "if !json"]);
    assert!(
        found.is_empty(),
        "Found inline JSON branching incommands/; use app.renderer() instead:\n{}",
        found.join("\n")
    );
}

#[test]
fn test_ssh_process_spawned_only_in_infra() {
    let mut found = Vec::new();
    for layer in ["domain", "application", "commands", "output"] {
        found.extend(violations(&[layer], &["TokioCommandRunner::new", "\"sshpass\""]));
    }
    assert!(
        found.is_empty(),
        "process spawning belongs in infra/ (or app.rs wiring):\n{}",
        found.join("\n")
    );
}
