use crate::areas::runner;
use crate::areas::shim::Shim;
use crate::artifacts::core::Listing;
use std::io::Write;

impl Shim {
    /// `git log --oneline -10` by default
    ///
    /// Any caller-supplied arguments bypass the curated view entirely and
    /// stream `git log <args...>` with inherited streams.
    pub fn log(&self, args: &[String]) -> anyhow::Result<i32> {
        if !args.is_empty() {
            let mut argv = Vec::with_capacity(1 + args.len());
            argv.push("log".to_string());
            argv.extend(args.iter().cloned());
            return runner::stream(self.runner().program(), &argv);
        }

        let run = self.capture_git("log", &["--oneline", "-10"], args)?;
        if !run.success() {
            return self.relay_failure(&run, false);
        }

        let mut listing = Listing::open();
        write!(listing, "{}", run.stdout())?;
        listing.close()?;

        Ok(0)
    }
}
