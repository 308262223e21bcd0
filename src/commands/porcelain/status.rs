use crate::areas::shim::Shim;
use crate::artifacts::core::Listing;
use std::io::Write;

impl Shim {
    /// `git status -sb`: compact branch line plus changed files
    pub fn status(&self, args: &[String]) -> anyhow::Result<i32> {
        let run = self.capture_git("status", &["-sb"], args)?;
        if !run.success() {
            return self.relay_failure(&run, false);
        }

        let mut listing = Listing::open();
        write!(listing, "{}", run.stdout())?;
        listing.close()?;

        Ok(0)
    }
}
