//! curt — a compact-output git wrapper
//!
//! Runs the command it is given and keeps out of the way. A handful of git
//! subcommands get curated flags and a one-line confirmation instead of
//! git's usual chatter; everything else is executed untouched with the
//! caller's standard streams.

pub mod areas;
pub mod artifacts;
pub mod commands;
