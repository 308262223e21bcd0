use crate::common::command::run_git;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const DEFAULT_BRANCH: &str = "main";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Empty repository on `main`
#[fixture]
pub fn git_repository(repository_dir: TempDir) -> TempDir {
    run_git(repository_dir.path(), &["init", "-b", DEFAULT_BRANCH])
        .assert()
        .success();

    repository_dir
}

/// Repository with `1.txt` committed
#[fixture]
pub fn committed_repository(git_repository: TempDir) -> TempDir {
    write_file(&git_repository.path().join("1.txt"), "one\n");
    run_git(git_repository.path(), &["add", "."]).assert().success();
    run_git(git_repository.path(), &["commit", "-m", "first commit"])
        .assert()
        .success();

    git_repository
}

/// A bare origin plus one working clone
pub struct RemoteSetup {
    pub root: TempDir,
    pub origin: PathBuf,
    pub clone: PathBuf,
}

#[fixture]
pub fn remote_setup(repository_dir: TempDir) -> RemoteSetup {
    let root = repository_dir;

    let seed = root.path().join("seed");
    std::fs::create_dir_all(&seed).expect("Failed to create seed dir");
    run_git(&seed, &["init", "-b", DEFAULT_BRANCH]).assert().success();
    write_file(&seed.join("1.txt"), "one\n");
    run_git(&seed, &["add", "."]).assert().success();
    run_git(&seed, &["commit", "-m", "first commit"]).assert().success();

    run_git(root.path(), &["clone", "--bare", "seed", "origin"])
        .assert()
        .success();
    run_git(root.path(), &["clone", "origin", "clone"])
        .assert()
        .success();

    RemoteSetup {
        origin: root.path().join("origin"),
        clone: root.path().join("clone"),
        root,
    }
}

/// Check out another working copy of the same origin
pub fn clone_repository(setup: &RemoteSetup, name: &str) -> PathBuf {
    run_git(setup.root.path(), &["clone", "origin", name])
        .assert()
        .success();

    setup.root.path().join(name)
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

/// Drop a lorem-ipsum file into `dir` and return its path
pub fn write_generated_file(dir: &Path) -> PathBuf {
    use fake::Fake;
    use fake::faker::lorem::en::{Word, Words};

    let name = format!("{}.txt", Word().fake::<String>());
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    let path = dir.join(name);
    write_file(&path, &content);

    path
}
