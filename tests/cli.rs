use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn fcd(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fcd"));
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for var in ["FCD_MAX_DEPTH", "FCD_IGNORE", "FCD_SOURCE", "FCD_LOG"] {
        cmd.env_remove(var);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run fcd")
}

fn tree(dirs: &[&str]) -> TempDir {
    let root = TempDir::new().unwrap();
    for dir in dirs {
        fs::create_dir_all(root.path().join(dir)).unwrap();
    }
    root
}

fn stdout_path(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn expected(root: &Path, rel: &str) -> String {
    root.join(rel).display().to_string()
}

#[test]
fn prints_best_match_when_not_a_terminal() {
    let root = tree(&["apple", "app", "api", "docs"]);
    let root_arg = root.path().to_str().unwrap();
    for source in ["walk", "find"] {
        if source == "find" && !cfg!(unix) {
            continue;
        }
        let out = fcd(&["ap", root_arg, "--source", source], &[]);
        assert!(out.status.success(), "source {source}: {out:?}");
        assert_eq!(stdout_path(&out), expected(root.path(), "api"));
    }
}

#[test]
fn matching_ignores_case() {
    let root = tree(&["ApiGateway", "docs"]);
    let out = fcd(&["apg", root.path().to_str().unwrap(), "--source", "walk"], &[]);
    assert!(out.status.success());
    assert_eq!(stdout_path(&out), expected(root.path(), "ApiGateway"));
}

#[test]
fn no_matches_is_reported_on_stderr() {
    let root = tree(&["docs"]);
    let out = fcd(&["zzz", root.path().to_str().unwrap(), "--source", "walk"], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("No directories matched \"zzz\"."));
}

#[test]
fn invalid_root_is_a_usage_error() {
    let root = tree(&[]);
    let missing = root.path().join("missing");
    let out = fcd(&["api", missing.to_str().unwrap()], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Search root is not a directory"));
}

#[test]
fn blank_pattern_is_a_usage_error() {
    let root = tree(&["api"]);
    let out = fcd(&["   ", root.path().to_str().unwrap()], &[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("A search pattern is required."));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn depth_comes_from_the_environment() {
    let root = tree(&["one/two/apiary"]);
    let root_arg = root.path().to_str().unwrap();

    let shallow = fcd(&["apiary", root_arg, "--source", "walk"], &[]);
    assert_eq!(shallow.status.code(), Some(1));

    let deep = fcd(
        &["apiary", root_arg, "--source", "walk"],
        &[("FCD_MAX_DEPTH", "3")],
    );
    assert!(deep.status.success());
    assert_eq!(stdout_path(&deep), expected(root.path(), "one/two/apiary"));
}

#[test]
fn bad_depth_values_fall_back_to_one() {
    let root = tree(&["api", "one/api2"]);
    let root_arg = root.path().to_str().unwrap();
    for depth in ["0", "-2", "lots"] {
        let out = fcd(
            &["api2", root_arg, "--source", "walk"],
            &[("FCD_MAX_DEPTH", depth)],
        );
        assert_eq!(out.status.code(), Some(1), "depth {depth}");
    }
}

#[test]
fn pruned_directories_are_skipped() {
    let root = tree(&["node_modules/apix", "src/apiy"]);
    let root_arg = root.path().to_str().unwrap();
    let out = fcd(
        &["api", root_arg, "--source", "walk", "--max-depth", "2"],
        &[],
    );
    assert!(out.status.success());
    assert_eq!(stdout_path(&out), expected(root.path(), "src/apiy"));
}

#[test]
fn shallower_match_wins_a_tie() {
    let root = tree(&["api", "nested/api"]);
    let out = fcd(
        &["api", root.path().to_str().unwrap(), "--source", "walk"],
        &[("FCD_MAX_DEPTH", "2")],
    );
    assert!(out.status.success());
    assert_eq!(stdout_path(&out), expected(root.path(), "api"));
}

#[cfg(unix)]
#[test]
fn find_source_honors_prune_list() {
    let root = tree(&[".git/apiz", "lib/apiq"]);
    let out = fcd(
        &["api", root.path().to_str().unwrap(), "--source", "find", "--max-depth", "2"],
        &[],
    );
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout_path(&out), expected(root.path(), "lib/apiq"));
}
