use crate::areas::viewer::GraphViewer;
use crate::artifacts::graph::layout::{LayoutNode, layout};
use crate::artifacts::render::row_height::RowHeights;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, new)]
pub struct LayoutDumpOptions {
    pub row_height: f64,
}

impl GraphViewer {
    /// Print one line per commit:
    ///
    /// ```text
    /// <oid> column=<c> lane=<l> y=<y> routes=<from>-><to>@<lane>,...
    /// ```
    ///
    /// `routes=-` marks a row without routes.
    pub fn dump_layout(&self, opts: &LayoutDumpOptions) -> anyhow::Result<()> {
        let row_heights = RowHeights::uniform(opts.row_height);
        let nodes = layout(self.history().commits(), |oid| row_heights.height(oid))?;

        for node in &nodes {
            writeln!(self.writer(), "{}", Self::format_node(node))?;
        }
        self.writer().flush()?;

        Ok(())
    }

    fn format_node(node: &LayoutNode) -> String {
        let routes = if node.routes.is_empty() {
            "-".to_string()
        } else {
            node.routes
                .iter()
                .map(|route| format!("{}->{}@{}", route.from, route.to, route.branch))
                .collect::<Vec<_>>()
                .join(",")
        };

        format!(
            "{} column={} lane={} y={} routes={}",
            node.oid, node.dot.lateral_offset, node.dot.branch, node.y_offset, routes
        )
    }
}
