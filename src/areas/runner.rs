use anyhow::Context;
use derive_new::new;
use std::ffi::OsStr;
use std::process::Command;

/// Captured outcome of a single subprocess run
///
/// Created per invocation, read once by the calling handler, discarded.
#[derive(Debug, Clone, new)]
pub struct Execution {
    stdout: String,
    stderr: String,
    code: i32,
}

impl Execution {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

/// Runs a fixed program in captured mode, buffering both output streams
pub struct Runner {
    program: String,
}

impl Runner {
    pub fn new(program: &str) -> Self {
        Runner {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run to completion with both streams buffered in memory
    ///
    /// A child that dies without reporting an exit code counts as 1.
    pub fn capture(&self, args: &[String]) -> anyhow::Result<Execution> {
        trace_exec(&self.program, args);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .with_context(|| format!("failed to start {}", self.program))?;

        Ok(Execution::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.code().unwrap_or(1),
        ))
    }
}

/// Run a program with the caller's standard streams, relaying its exit code
pub fn stream<P, S>(program: P, args: &[S]) -> anyhow::Result<i32>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    trace_exec(&program.as_ref().to_string_lossy(), args);

    let status = Command::new(program.as_ref())
        .args(args)
        .status()
        .with_context(|| format!("failed to start {}", program.as_ref().to_string_lossy()))?;

    Ok(status.code().unwrap_or(1))
}

#[cfg(feature = "debug_exec")]
fn trace_exec<S: AsRef<OsStr>>(program: &str, args: &[S]) {
    let rendered = args
        .iter()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    eprintln!("exec: {program} {rendered}");
}

#[cfg(not(feature = "debug_exec"))]
fn trace_exec<S: AsRef<OsStr>>(_program: &str, _args: &[S]) {}
