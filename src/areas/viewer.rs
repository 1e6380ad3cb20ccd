use crate::areas::history::History;
use std::cell::{RefCell, RefMut};

/// Entry point of every command
///
/// Couples a loaded history with the writer the command output goes to
/// (stdout, the pager, or an in-memory buffer in tests).
pub struct GraphViewer {
    history: History,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl GraphViewer {
    pub fn new(history: History, writer: Box<dyn std::io::Write>) -> Self {
        GraphViewer {
            history,
            writer: RefCell::new(writer),
        }
    }

    /// Load the history from a file (or `-` for stdin) and attach a writer
    pub fn open(source: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        Ok(Self::new(History::load(source)?, writer))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
