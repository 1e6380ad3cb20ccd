use crate::areas::viewer::GraphViewer;
use crate::artifacts::graph::layout::layout;
use crate::artifacts::render::row_height::RowHeights;
use crate::artifacts::render::svg::SvgRenderer;
use anyhow::Context;
use derive_new::new;
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, new)]
pub struct SvgOptions {
    pub row_height: f64,
    pub expanded_height: f64,
    pub column_width: f64,
    /// Commits (full or abbreviated ids) drawn with the expanded row height
    pub expand: Vec<String>,
    /// Destination file; the document goes to the writer when absent
    pub output: Option<PathBuf>,
}

impl GraphViewer {
    pub fn svg(&self, opts: &SvgOptions) -> anyhow::Result<()> {
        for (name, value) in [
            ("column width", opts.column_width),
            ("row height", opts.row_height),
            ("expanded row height", opts.expanded_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("invalid {}: {}", name, value);
            }
        }

        let expanded = opts
            .expand
            .iter()
            .map(|prefix| self.history().resolve_prefix(prefix))
            .collect::<anyhow::Result<HashSet<_>>>()?;
        let row_heights = RowHeights::new(opts.row_height, opts.expanded_height, expanded);

        let commits = self.history().commits();
        let nodes = layout(commits, |oid| row_heights.height(oid))?;
        let trailing_row_height = commits
            .last()
            .map(|commit| row_heights.height(commit.oid()))
            .unwrap_or(opts.row_height);
        let document = SvgRenderer::new(opts.column_width, trailing_row_height)
            .render(commits, &nodes)?;

        match &opts.output {
            Some(path) => std::fs::write(path, document)
                .with_context(|| format!("failed to write SVG graph to {}", path.display()))?,
            None => {
                write!(self.writer(), "{}", document)?;
                self.writer().flush()?;
            }
        }

        Ok(())
    }
}
