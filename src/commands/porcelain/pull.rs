use crate::areas::shim::Shim;
use crate::artifacts::core::confirmation;
use crate::artifacts::scan::{self, PullSummary};
use std::io::Write;

impl Shim {
    /// `git pull`, condensed to an up-to-date marker or the diffstat trailer
    pub fn pull(&self, args: &[String]) -> anyhow::Result<i32> {
        let run = self.capture_git("pull", &[], args)?;
        if !run.success() {
            return self.relay_failure(&run, false);
        }

        let line = match scan::pull_summary(run.stdout()) {
            PullSummary::UpToDate => confirmation(Some("up to date")),
            PullSummary::Stat(stat) => confirmation(Some(stat)),
            PullSummary::Unknown => confirmation(None),
        };
        writeln!(self.writer(), "{line}")?;
        Ok(0)
    }
}
