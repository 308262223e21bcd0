use crate::areas::shim::Shim;
use crate::artifacts::core::confirmation;
use crate::artifacts::scan;
use std::io::Write;

impl Shim {
    /// `git push`, confirming with the updated branch when one is reported
    pub fn push(&self, args: &[String]) -> anyhow::Result<i32> {
        let run = self.capture_git("push", &[], args)?;
        if !run.success() {
            return self.relay_failure(&run, false);
        }

        // the ref update summary lands on stderr
        writeln!(
            self.writer(),
            "{}",
            confirmation(scan::pushed_branch(run.stderr()))
        )?;
        Ok(0)
    }
}
