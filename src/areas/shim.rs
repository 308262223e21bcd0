use crate::areas::runner::{Execution, Runner};
use std::cell::{RefCell, RefMut};
use std::io::Write;

const GIT_PROGRAM: &str = "git";

/// The wrapper around the real git binary
///
/// Owns the captured-mode runner and the writer confirmations go to, so
/// handlers stay free of any direct stdout plumbing.
pub struct Shim {
    runner: Runner,
    writer: RefCell<Box<dyn Write>>,
}

impl Shim {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Shim {
            runner: Runner::new(GIT_PROGRAM),
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    /// Assemble `<subcommand> <defaults...> <extra...>` and run it captured
    pub(crate) fn capture_git(
        &self,
        subcommand: &str,
        defaults: &[&str],
        extra: &[String],
    ) -> anyhow::Result<Execution> {
        let mut argv = Vec::with_capacity(1 + defaults.len() + extra.len());
        argv.push(subcommand.to_string());
        argv.extend(defaults.iter().map(ToString::to_string));
        argv.extend(extra.iter().cloned());

        self.runner.capture(&argv)
    }

    /// Relay a failed run: captured stderr verbatim, the exit code unchanged
    ///
    /// `relay_stdout` also forwards the captured stdout; git commit explains
    /// "nothing to commit" there.
    pub(crate) fn relay_failure(&self, run: &Execution, relay_stdout: bool) -> anyhow::Result<i32> {
        eprint!("{}", run.stderr());
        if relay_stdout && !run.stdout().is_empty() {
            write!(self.writer(), "{}", run.stdout())?;
        }

        Ok(run.code())
    }
}
