//! Shared utilities

use minus::Pager;
use std::io::{self, Write};

/// `std::io::Write` adapter for the minus pager, so the side-by-side view
/// can target either the pager or plain stdout through the same writer.
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter { pager }
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
