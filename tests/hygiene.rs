//! Hygiene: coding standards for `src/`, enforced at test time.
//!
//! Every pattern has a budget. Budgets only go down: a new hit means fixing
//! the code, not raising the number.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`. Sibling `_test.rs` files are skipped,
/// and so is the in-memory API double, which is compiled only for tests.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files.retain(|f| !f.path.ends_with("_test.rs") && !f.path.ends_with("fake_api.rs"));
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path.to_string_lossy().into_owned(), content });
            }
        }
    }
}

/// `(path, line number)` of every line containing `pattern`.
fn hits<'a>(files: &'a [SourceFile], pattern: &str) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(move |(_, line)| line.contains(pattern))
                .map(move |(n, _)| (file.path.as_str(), n + 1))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize, reason: &str) {
    let files = source_files();
    let found = hits(&files, pattern);
    let listing: Vec<String> = found.iter().map(|(path, line)| format!("  {path}:{line}")).collect();
    assert!(
        found.len() <= max,
        "`{pattern}` budget exceeded ({reason}): found {}, max {max}.\n{}",
        found.len(),
        listing.join("\n")
    );
}

/// Like [`assert_budget`] with a budget of zero, except inside `home`.
fn assert_confined(pattern: &str, home: &str) {
    let files = source_files();
    let strays: Vec<String> = hits(&files, pattern)
        .into_iter()
        .filter(|(path, _)| !path.replace('\\', "/").ends_with(home))
        .map(|(path, line)| format!("  {path}:{line}"))
        .collect();
    assert!(strays.is_empty(), "`{pattern}` must only appear in {home}:\n{}", strays.join("\n"));
}

#[test]
fn scan_sees_the_crate() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "no lib.rs found under src/");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn no_panicking_shortcuts() {
    // A panic aborts the WASM module and blanks the page.
    for pattern in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_budget(pattern, 0, "panics in the browser");
    }
}

#[test]
fn no_silently_dropped_results() {
    // A dropped API error means the user never sees a toast.
    assert_budget("let _ =", 0, "silent discard");
    assert_budget(".ok()", 0, "silent discard");
    assert_budget("#[allow(dead_code)]", 0, "dead code");
}

#[test]
fn logging_goes_through_the_log_facade() {
    for pattern in ["println!(", "eprintln!(", "dbg!("] {
        assert_budget(pattern, 0, "use log:: macros");
    }
}

#[test]
fn expect_context_is_limited_to_the_toast_queue() {
    // `App` always provides the toast queue; anything else uses `use_context`
    // with a fallback. DriverForm, TruckForm and Toaster read the queue.
    assert_budget("expect_context::<RwSignal<ToastState>>", 3, "toast queue consumers");
    assert_budget("expect_context", 3, "only the toast queue may be required context");
}

#[test]
fn http_stays_behind_the_api_seam() {
    assert_confined("gloo_net", "net/api.rs");
}

#[test]
fn timers_stay_in_the_toaster() {
    assert_confined("gloo_timers", "components/toaster.rs");
}
