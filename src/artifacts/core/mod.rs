//! Terminal output plumbing
//!
//! Commands write their output through a `Box<dyn Write>`: stdout, or the
//! minus pager through [`PagerWriter`] when the output goes to a terminal.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adaptor feeding the minus pager
///
/// The pager only accepts text, so bytes are forwarded once they form whole
/// UTF-8 characters. A character split across two writes is held back until
/// its remaining bytes arrive.
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "* abc1234 Initial commit")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
    #[new(default)]
    pending: Vec<u8>,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let complete = complete_utf8_prefix(&self.pending)?;
        if complete > 0 {
            let text = std::str::from_utf8(&self.pending[..complete])
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            self.pager.push_str(text).map_err(io::Error::other)?;
            self.pending.drain(..complete);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "incomplete UTF-8 sequence at the end of the output",
            ))
        }
    }
}

/// Length of the longest prefix of `bytes` made of whole UTF-8 characters
///
/// A truncated character at the end is not an error; any other invalid byte is.
fn complete_utf8_prefix(bytes: &[u8]) -> io::Result<usize> {
    match std::str::from_utf8(bytes) {
        Ok(_) => Ok(bytes.len()),
        Err(e) if e.error_len().is_none() => Ok(e.valid_up_to()),
        Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
    }
}

/// Whether stdout is attached to an interactive terminal
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Page only interactive output the user did not opt out of paging
pub fn should_page(no_pager: bool) -> bool {
    !no_pager && stdout_is_terminal()
}
