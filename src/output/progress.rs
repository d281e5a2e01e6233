//! Transient scan progress on the console

use std::io::{self, Write};

use crate::tree::ScanProgress;

/// Writes a single, continually overwritten progress line to stdout.
///
/// Once the scan finishes the line is terminated and followed by a blank line
/// so the report starts on a clean line.
pub struct ConsoleProgress<W: Write = io::Stdout> {
    out: W,
    emitted: bool,
}

impl ConsoleProgress {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            emitted: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// Progress output is best effort; a failed write must not abort the scan.
impl<W: Write> ScanProgress for ConsoleProgress<W> {
    fn entries_processed(&mut self, count: u64) {
        self.emitted = true;
        let _ = write!(self.out, "\rScanning... {} entries processed", count);
        let _ = self.out.flush();
    }

    fn finish(&mut self, _total: u64) {
        if self.emitted {
            let _ = writeln!(self.out);
        }
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
