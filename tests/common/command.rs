use assert_cmd::Command;
use std::path::Path;

/// Build a curt invocation rooted at `dir`, with paging and color pinned off
pub fn run_curt(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("curt").expect("Failed to find curt binary");
    cmd.env("NO_PAGER", "1");
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(dir);
    cmd.args(args);
    cmd
}

/// Build a real git invocation rooted at `dir`
pub fn run_git(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.args(args);
    with_fixed_identity(&mut cmd);
    cmd
}

/// Commit through curt with the author and committer pinned
pub fn curt_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_curt(dir, &["git", "commit", "-m", message]);
    with_fixed_identity(&mut cmd);
    cmd
}

fn with_fixed_identity(cmd: &mut Command) {
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ]);
}
