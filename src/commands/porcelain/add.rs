use crate::areas::shim::Shim;
use crate::artifacts::core::confirmation;
use std::io::Write;

impl Shim {
    /// `git add`, acknowledged with a bare confirmation
    pub fn add(&self, args: &[String]) -> anyhow::Result<i32> {
        let run = self.capture_git("add", &[], args)?;
        if !run.success() {
            return self.relay_failure(&run, false);
        }

        writeln!(self.writer(), "{}", confirmation(None))?;
        Ok(0)
    }
}
