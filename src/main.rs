use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use curt::areas::runner;
use curt::areas::shim::Shim;
use curt::commands;
use std::ffi::OsString;
use std::process::ExitCode;

const USAGE: &str = "usage: curt <command> [args...]";

#[derive(Parser)]
#[command(
    name = "curt",
    version = "0.1.0",
    about = "A compact-output git wrapper",
    long_about = "curt runs the command you give it and keeps out of the way. \
    A handful of git subcommands get curated flags and a one-line confirmation \
    instead of git's usual chatter; every other command is executed untouched \
    with your terminal's streams.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "git",
        about = "Run a git subcommand, compacting the output of common ones",
        long_about = "Runs git with the given arguments. status, log, diff, add, \
        fetch, push, pull and commit get curated default flags and a compact \
        one-line confirmation; any other subcommand is passed through as-is."
    )]
    Git {
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "The git subcommand and its arguments"
        )]
        args: Vec<String>,
    },
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(code) => to_exit_code(code),
        Err(err) => {
            eprintln!("curt: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Git { args } => {
            let shim = Shim::new(Box::new(std::io::stdout()));
            commands::dispatch(&shim, args)
        }
        Commands::External(argv) => {
            let (program, args) = argv.split_first().context("no command given")?;
            runner::stream(program, args)
        }
    }
}

/// Children that exit outside u8 range count as plain failure
fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
