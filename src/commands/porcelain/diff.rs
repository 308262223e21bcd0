use crate::areas::shim::Shim;
use crate::artifacts::core::Listing;
use std::io::Write;

impl Shim {
    /// `git diff --stat`: per-file change bars plus the summary trailer
    pub fn diff(&self, args: &[String]) -> anyhow::Result<i32> {
        let run = self.capture_git("diff", &["--stat"], args)?;
        if !run.success() {
            return self.relay_failure(&run, false);
        }

        let mut listing = Listing::open();
        write!(listing, "{}", run.stdout())?;
        listing.close()?;

        Ok(0)
    }
}
