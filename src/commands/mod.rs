//! Wrapped git subcommands
//!
//! The eight supported porcelain words get dedicated handlers that reshape
//! git's output; everything else is handed to the real binary untouched.

pub mod porcelain;

use crate::areas::runner;
use crate::areas::shim::Shim;
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Porcelain {
    Status,
    Log,
    Diff,
    Add,
    Fetch,
    Push,
    Pull,
    Commit,
}

static PORCELAIN: phf::Map<&'static str, Porcelain> = phf_map! {
    "status" => Porcelain::Status,
    "log" => Porcelain::Log,
    "diff" => Porcelain::Diff,
    "add" => Porcelain::Add,
    "fetch" => Porcelain::Fetch,
    "push" => Porcelain::Push,
    "pull" => Porcelain::Pull,
    "commit" => Porcelain::Commit,
};

/// Route `git <sub> [args...]` to a handler, or stream it through untouched
pub fn dispatch(shim: &Shim, args: &[String]) -> anyhow::Result<i32> {
    let Some((subcommand, rest)) = args.split_first() else {
        // bare `git` prints its own usage
        return runner::stream(shim.runner().program(), args);
    };

    match PORCELAIN.get(subcommand.as_str()) {
        Some(Porcelain::Status) => shim.status(rest),
        Some(Porcelain::Log) => shim.log(rest),
        Some(Porcelain::Diff) => shim.diff(rest),
        Some(Porcelain::Add) => shim.add(rest),
        Some(Porcelain::Fetch) => shim.fetch(rest),
        Some(Porcelain::Push) => shim.push(rest),
        Some(Porcelain::Pull) => shim.pull(rest),
        Some(Porcelain::Commit) => shim.commit(rest),
        None => runner::stream(shim.runner().program(), args),
    }
}
