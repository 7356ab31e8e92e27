//! Edge case and error handling tests for dirsankey


use harness::{TestTree, graph_json, labeled_links, run_dirsankey};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn arg(path: &std::path::Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_not_counted() {
    let work = TestTree::new();
    let data = TestTree::new();
    data.add_file("target.bin", 40);
    symlink(data.path().join("target.bin"), data.path().join("link.bin"))
        .expect("Failed to create symlink");

    let graph = graph_json(work.path(), &[arg(data.path())]);

    assert_eq!(graph["total_bytes"], 40);
    let links = labeled_links(&graph);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].1, "target.bin");
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let work = TestTree::new();
    let data = TestTree::new();
    data.add_file("subdir/file.bin", 8);
    symlink("..", data.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let graph = graph_json(work.path(), &[arg(data.path())]);

    assert_eq!(graph["total_bytes"], 8);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 3);
}

#[test]
fn test_broken_symlink() {
    let work = TestTree::new();
    let data = TestTree::new();
    data.add_file("real.bin", 3);
    symlink("nonexistent.bin", data.path().join("broken.bin"))
        .expect("Failed to create broken symlink");

    let graph = graph_json(work.path(), &[arg(data.path())]);

    assert_eq!(graph["total_bytes"], 3);
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

/// Make `dir` unreadable; returns false when the process can read it anyway (root).
fn lock_dir(dir: &std::path::Path) -> bool {
    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
    fs::read_dir(dir).is_err()
}

fn unlock_dir(dir: &std::path::Path) {
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_unreadable_directory_aborts_by_default() {
    let work = TestTree::new();
    let data = TestTree::new();
    data.add_file("open/a.bin", 1);
    let locked = data.add_dir("locked");
    data.add_file("locked/hidden.bin", 1);
    if !lock_dir(&locked) {
        unlock_dir(&locked);
        return;
    }

    let (_stdout, stderr, success) = run_dirsankey(work.path(), &[arg(data.path())]);
    unlock_dir(&locked);

    assert!(!success, "unreadable directory should abort the run");
    assert!(stderr.contains("cannot access"), "stderr: {}", stderr);
    assert!(!work.path().join("output.html").exists());
}

#[test]
fn test_skip_unreadable_treats_directory_as_empty() {
    let work = TestTree::new();
    let data = TestTree::new();
    data.add_file("open/a.bin", 4);
    let locked = data.add_dir("locked");
    data.add_file("locked/hidden.bin", 100);
    if !lock_dir(&locked) {
        unlock_dir(&locked);
        return;
    }

    let (stdout, stderr, success) =
        run_dirsankey(work.path(), &[arg(data.path()), "--skip-unreadable", "--json"]);
    unlock_dir(&locked);

    assert!(success, "stderr: {}", stderr);
    assert!(stderr.contains("skipping unreadable entry"), "stderr: {}", stderr);
    let graph: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(graph["total_bytes"], 4);
    let links = labeled_links(&graph);
    assert!(links.iter().any(|l| l.1 == "locked" && l.2 == 0));
}

// ============================================================================
// Path and Name Edge Cases
// ============================================================================

#[test]
fn test_root_is_a_file() {
    let work = TestTree::new();
    let data = TestTree::new();
    let file = data.add_file("plain.txt", 1);

    let (_stdout, stderr, success) = run_dirsankey(work.path(), &[arg(&file)]);

    assert!(!success);
    assert!(stderr.contains("is not a directory"), "stderr: {}", stderr);
}

#[test]
fn test_relative_root_labeled_by_real_name() {
    let work = TestTree::new();
    work.add_file("project/src/main.rs", 12);

    let graph = graph_json(&work.path().join("project"), &["."]);

    assert_eq!(graph["nodes"][0]["label"], "project");
    assert_eq!(graph["nodes"][1]["label"], "src");
}

#[test]
fn test_unicode_and_markup_names() {
    let work = TestTree::new();
    let data = TestTree::new();
    data.add_file("日本語/ファイル.txt", 9);
    data.add_file("<b>&co.txt", 1);

    let (_stdout, stderr, success) =
        run_dirsankey(work.path(), &[arg(data.path()), "--imgOut", "d.svg", "--htmlOut", "d.html"]);

    assert!(success, "stderr: {}", stderr);
    let svg = fs::read_to_string(work.path().join("d.svg")).unwrap();
    assert!(svg.contains("ファイル.txt"));
    assert!(svg.contains("&lt;b&gt;&amp;co.txt"));
    assert!(!svg.contains("<b>&co"));
    let html = fs::read_to_string(work.path().join("d.html")).unwrap();
    assert!(html.contains("ファイル.txt"));
}

#[test]
fn test_empty_files_and_directories() {
    let work = TestTree::new();
    let data = TestTree::new();
    data.add_file("empty.txt", 0);
    data.add_dir("a/b/c");

    let graph = graph_json(work.path(), &[arg(data.path())]);
    let links = labeled_links(&graph);

    assert_eq!(links.len(), 4);
    assert!(links.iter().all(|l| l.2 == 0));
}

#[test]
fn test_output_into_missing_directory_fails() {
    let work = TestTree::new();
    let data = TestTree::new();

    let (_stdout, stderr, success) =
        run_dirsankey(work.path(), &[arg(data.path()), "--htmlOut", "nope/out.html"]);

    assert!(!success);
    assert!(stderr.contains("cannot write"), "stderr: {}", stderr);
}
