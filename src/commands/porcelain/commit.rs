use crate::areas::shim::Shim;
use crate::artifacts::core::confirmation;
use crate::artifacts::scan;
use std::io::Write;

impl Shim {
    /// `git commit`, confirming with the short hash of the new commit
    pub fn commit(&self, args: &[String]) -> anyhow::Result<i32> {
        let run = self.capture_git("commit", &[], args)?;
        if !run.success() {
            // git commit explains "nothing to commit" on stdout
            return self.relay_failure(&run, true);
        }

        writeln!(
            self.writer(),
            "{}",
            confirmation(scan::commit_hash(run.stdout()))
        )?;
        Ok(0)
    }
}
