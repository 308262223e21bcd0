//! Shared output utilities

use colored::Colorize;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Destination for captured listings (status, log, diff)
///
/// Long output goes through the `minus` pager when stdout is a terminal and
/// `NO_PAGER` is unset; otherwise it is written straight to stdout. The
/// bytes are identical either way.
pub enum Listing {
    Paged(Pager),
    Direct(io::Stdout),
}

impl Listing {
    pub fn open() -> Self {
        if std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal() {
            Listing::Paged(Pager::new())
        } else {
            Listing::Direct(io::stdout())
        }
    }

    /// Flush the listing, handing a paged one over to the pager
    pub fn close(self) -> anyhow::Result<()> {
        match self {
            Listing::Paged(pager) => minus::page_all(pager)?,
            Listing::Direct(mut out) => out.flush()?,
        }

        Ok(())
    }
}

impl Write for Listing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Listing::Paged(pager) => {
                let text = std::str::from_utf8(buf)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                pager.push_str(text).map_err(io::Error::other)?;
                Ok(buf.len())
            }
            Listing::Direct(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Listing::Paged(_) => Ok(()),
            Listing::Direct(out) => out.flush(),
        }
    }
}

/// One-line confirmation, e.g. `ok ✓ main`
pub fn confirmation(detail: Option<&str>) -> String {
    let mark = "✓".green();
    match detail {
        Some(detail) => format!("ok {mark} {detail}"),
        None => format!("ok {mark}"),
    }
}
