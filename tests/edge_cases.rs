//! Edge case and error handling tests for drift


use harness::{TestTree, report_lines, run_drift};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[cfg(unix)]
#[test]
fn test_equal_links() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_symlink("link", "target");
    old.add_symlink("link", "target");

    let (stdout, _stderr, success) = run_drift(&new, &old, &["--showequal"]);
    assert!(success);
    assert_eq!(report_lines(&stdout), vec!["Equal links       : link"]);
}

#[cfg(unix)]
#[test]
fn test_differing_links() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_symlink("link", "target1");
    old.add_symlink("link", "target2");

    let (stdout, _stderr, success) = run_drift(&new, &old, &[]);
    assert!(success);
    assert_eq!(report_lines(&stdout), vec!["Differing links   : link"]);
}

#[cfg(unix)]
#[test]
fn test_file_became_link() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_file("entry", b"plain file");
    old.add_symlink("entry", "somewhere");

    let (stdout, _stderr, success) = run_drift(&new, &old, &[]);
    assert!(success);
    assert_eq!(report_lines(&stdout), vec!["File became link  : entry"]);
}

#[cfg(unix)]
#[test]
fn test_link_became_file() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_symlink("entry", "somewhere");
    old.add_file("entry", b"plain file");

    let (stdout, _stderr, success) = run_drift(&new, &old, &[]);
    assert!(success);
    assert_eq!(report_lines(&stdout), vec!["Link became file  : entry"]);
}

#[cfg(unix)]
#[test]
fn test_broken_links_compare_by_target_text() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_symlink("dangling", "does-not-exist");
    old.add_symlink("dangling", "does-not-exist");

    let (stdout, _stderr, success) = run_drift(&new, &old, &["--showequal"]);
    assert!(success, "broken symlinks are compared, not errors");
    assert_eq!(report_lines(&stdout), vec!["Equal links       : dangling"]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_folder_is_not_recursed() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_file("real/inner.txt", b"x");
    new.add_symlink("alias", "real");
    old.add_file("real/inner.txt", b"x");
    old.add_dir("alias");

    let (stdout, _stderr, success) = run_drift(&new, &old, &[]);
    assert!(success);
    // The symlinked side never counts as a folder, so this pairs as a
    // type mismatch rather than a folder walk (which could cycle).
    assert_eq!(report_lines(&stdout), vec!["Folder became file: alias"]);
}

#[cfg(unix)]
#[test]
fn test_link_to_identical_content_still_differs_from_file() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_file("target.txt", b"payload");
    new.add_symlink("entry", "target.txt");
    old.add_file("target.txt", b"payload");
    old.add_file("entry", b"payload");

    let (stdout, _stderr, success) = run_drift(&new, &old, &[]);
    assert!(success);
    // Link state is checked before size or content, so equal bytes
    // behind the link do not make the pair equal.
    assert_eq!(report_lines(&stdout), vec!["Link became file  : entry"]);
}

// ============================================================================
// Filesystem Errors
// ============================================================================

#[test]
fn test_missing_root_folder_is_a_fatal_error() {
    let old = TestTree::new();
    old.add_file("f.txt", b"x");

    let binary = env!("CARGO_BIN_EXE_drift");
    let missing = old.path().join("no-such-subdir");
    let output = std::process::Command::new(binary)
        .arg(&missing)
        .arg(old.path())
        .output()
        .expect("failed to run drift");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot access"),
        "stderr should name the failure: {}",
        stderr
    );
}

// ============================================================================
// Special Names and Contents
// ============================================================================

#[test]
fn test_names_with_spaces() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_file("file with spaces.txt", b"x");

    let (stdout, _stderr, success) = run_drift(&new, &old, &[]);
    assert!(success);
    assert_eq!(
        report_lines(&stdout),
        vec!["Created           : file with spaces.txt"]
    );
}

#[test]
fn test_empty_files_are_equal() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_file("empty", b"");
    old.add_file("empty", b"");

    let (stdout, _stderr, success) = run_drift(&new, &old, &["--showequal"]);
    assert!(success);
    assert_eq!(report_lines(&stdout), vec!["Equal             : empty"]);
}

#[test]
fn test_deeply_nested_difference() {
    let new = TestTree::new();
    let old = TestTree::new();
    new.add_file("a/b/c/d/e.txt", b"new");
    old.add_file("a/b/c/d/e.txt", b"old");

    let (stdout, _stderr, success) = run_drift(&new, &old, &[]);
    assert!(success);
    assert_eq!(
        report_lines(&stdout),
        vec!["Modified          : a/b/c/d/e.txt"]
    );
}

#[test]
fn test_comparing_a_tree_with_itself_is_silent() {
    let tree = TestTree::new();
    tree.add_file("a.txt", b"x");
    tree.add_file("sub/b.txt", b"y");

    let (stdout, _stderr, success) = run_drift(&tree, &tree, &[]);
    assert!(success);
    assert_eq!(stdout, "");
}
