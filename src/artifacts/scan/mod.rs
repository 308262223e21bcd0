//! Scanners over captured git output
//!
//! Porcelain output is free-form text, so these functions mine it with plain
//! substring search. They are pure and never touch the outside world.

/// Branch reported by `git push`
///
/// git writes the ref update summary to stderr, one line per ref, e.g.
/// `   abc1234..def5678  main -> main`. The branch is the trimmed text after
/// the first ` -> ` on the first line carrying one.
pub fn pushed_branch(stderr: &str) -> Option<&str> {
    stderr.lines().find_map(|line| {
        line.trim()
            .split_once(" -> ")
            .map(|(_, branch)| branch.trim())
    })
}

/// Compact summary mined from `git pull` stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullSummary<'a> {
    /// The output contained "Already up to date"
    UpToDate,
    /// The diffstat trailer line, e.g. `2 files changed, 3 insertions(+)`
    Stat(&'a str),
    /// Nothing recognizable; callers fall back to a bare confirmation
    Unknown,
}

pub fn pull_summary(stdout: &str) -> PullSummary<'_> {
    if stdout.contains("Already up to date") {
        return PullSummary::UpToDate;
    }

    stdout
        .lines()
        .map(str::trim)
        .find(|line| line.contains("file changed") || line.contains("files changed"))
        .map_or(PullSummary::Unknown, PullSummary::Stat)
}

/// Short hash from the `[branch abc1234] message` head line of `git commit`
///
/// The hash is the last whitespace-separated token between the first `[` and
/// the first `]`, provided at least two tokens sit there; "(root-commit)"
/// and "detached HEAD" prefixes push the hash to the end.
pub fn commit_hash(stdout: &str) -> Option<&str> {
    let line = stdout.lines().next()?;
    let start = line.find('[')?;
    let end = line.find(']')?;
    if end <= start {
        return None;
    }

    let fields = line[start + 1..end].split_whitespace().collect::<Vec<_>>();
    match fields.as_slice() {
        &[_, .., hash] => Some(hash),
        _ => None,
    }
}
