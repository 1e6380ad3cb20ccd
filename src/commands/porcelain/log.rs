use crate::areas::viewer::GraphViewer;
use crate::artifacts::graph::layout::layout;
use crate::artifacts::render::text::TextGraph;
use derive_new::new;
use std::io::Write;

/// Text rows all have the same height
const TEXT_ROW_HEIGHT: f64 = 1.0;

#[derive(Debug, Clone, new)]
pub struct LogOptions {
    pub abbrev_commit: bool,
    pub colorize: bool,
}

impl GraphViewer {
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let commits = self.history().commits();
        let nodes = layout(commits, |_| TEXT_ROW_HEIGHT)?;
        let lines = TextGraph::new(opts.colorize, opts.abbrev_commit).render(commits, &nodes)?;

        for line in lines {
            writeln!(self.writer(), "{}", line)?;
        }
        self.writer().flush()?;

        Ok(())
    }
}
