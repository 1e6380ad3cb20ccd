//! SVG renderer
//!
//! Draws a laid-out history as a standalone SVG document:
//! - a circle per commit at `(lateral_offset * column_width, y_offset)`, filled
//!   with its lane colour and titled with the abbreviated id and subject
//! - a path per route from `(from, y_offset)` to `(to, next y_offset)`,
//!   straight when the column does not change, a cubic curve otherwise
//! - a text label (abbreviated id and subject) right of the graph
//!
//! Routes of the last row have no next row to reach; they extend by the
//! trailing row height instead.

use crate::artifacts::graph::layout::LayoutNode;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::render::palette::svg_color;
use crate::artifacts::render::svg_path::SvgPath;
use derive_new::new;
use std::fmt::Write;

const PADDING: f64 = 16.0;
const DOT_RADIUS: f64 = 4.0;
const STROKE_WIDTH: f64 = 2.0;
const LABEL_GAP: f64 = 12.0;
const FONT_SIZE: f64 = 12.0;
const FONT_FAMILY: &str = "monospace";
/// Approximate advance of one monospace character, relative to the font size
const CHAR_WIDTH_RATIO: f64 = 0.6;

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Debug, Clone, new)]
pub struct SvgRenderer {
    column_width: f64,
    trailing_row_height: f64,
}

impl SvgRenderer {
    /// Render the nodes produced for `commits` (same length, same order)
    pub fn render(&self, commits: &[Commit], nodes: &[LayoutNode]) -> anyhow::Result<String> {
        if commits.len() != nodes.len() {
            anyhow::bail!(
                "layout has {} rows but the history has {} commits",
                nodes.len(),
                commits.len()
            );
        }

        let labels = commits
            .iter()
            .map(|commit| {
                let short_oid = commit.oid().to_short_oid();
                if commit.subject().is_empty() {
                    short_oid
                } else {
                    format!("{} {}", short_oid, commit.subject())
                }
            })
            .collect::<Vec<_>>();

        let columns = nodes
            .iter()
            .flat_map(|node| {
                std::iter::once(node.dot.lateral_offset)
                    .chain(node.routes.iter().flat_map(|route| [route.from, route.to]))
            })
            .max()
            .unwrap_or(0);
        let label_x = self.x(columns) + PADDING + LABEL_GAP;
        let longest_label = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let width = label_x + longest_label as f64 * FONT_SIZE * CHAR_WIDTH_RATIO + PADDING;
        let height = nodes
            .last()
            .map(|node| node.y_offset + self.trailing_row_height)
            .unwrap_or(PADDING * 2.0);

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;

        writeln!(
            svg,
            r#"  <g class="routes" fill="none" stroke-width="{STROKE_WIDTH}">"#
        )?;
        for (row, node) in nodes.iter().enumerate() {
            let next_y = nodes
                .get(row + 1)
                .map(|next| next.y_offset)
                .unwrap_or(node.y_offset + self.trailing_row_height);

            for route in &node.routes {
                let path = self.route_path(route.from, route.to, node.y_offset, next_y);
                writeln!(
                    svg,
                    r#"    <path d="{}" stroke="{}"/>"#,
                    path,
                    svg_color(route.branch)
                )?;
            }
        }
        writeln!(svg, "  </g>")?;

        writeln!(svg, r#"  <g class="commits">"#)?;
        for (node, label) in nodes.iter().zip(&labels) {
            writeln!(
                svg,
                r#"    <circle cx="{}" cy="{}" r="{DOT_RADIUS}" fill="{}"><title>{}</title></circle>"#,
                self.x(node.dot.lateral_offset),
                node.y_offset,
                svg_color(node.dot.branch),
                escape(label)
            )?;
        }
        writeln!(svg, "  </g>")?;

        writeln!(
            svg,
            r#"  <g class="labels" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}">"#
        )?;
        for (node, label) in nodes.iter().zip(&labels) {
            writeln!(
                svg,
                r#"    <text x="{label_x}" y="{}" dominant-baseline="middle">{}</text>"#,
                node.y_offset,
                escape(label)
            )?;
        }
        writeln!(svg, "  </g>")?;
        writeln!(svg, "</svg>")?;

        Ok(svg)
    }

    /// Horizontal position of a column
    fn x(&self, column: usize) -> f64 {
        PADDING + column as f64 * self.column_width
    }

    fn route_path(&self, from: usize, to: usize, y: f64, next_y: f64) -> SvgPath {
        let (x1, x2) = (self.x(from), self.x(to));
        let path = SvgPath::new().move_to(x1, y);

        if from == to {
            path.line_to(x2, next_y)
        } else {
            let middle = (y + next_y) / 2.0;
            path.bezier_curve_to(x1, middle, x2, middle, x2, next_y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::graph::layout::layout;
    use crate::artifacts::objects::object_id::ObjectId;
    use rstest::{fixture, rstest};

    fn commit(id: &str, parents: &[&str], subject: &str) -> Commit {
        let oid = |id: &str| ObjectId::try_parse(id.to_string()).unwrap();
        Commit::new(
            oid(id),
            parents.iter().map(|parent| oid(parent)).collect(),
            subject.to_string(),
        )
    }

    #[fixture]
    fn history() -> Vec<Commit> {
        vec![
            commit("cccc", &["bbbb", "aaa1"], "Merge <feature> & fix"),
            commit("bbbb", &["aaaa"], "Second"),
            commit("aaa1", &["aaaa"], ""),
            commit("aaaa", &[], "Root"),
        ]
    }

    #[fixture]
    fn renderer() -> SvgRenderer {
        SvgRenderer::new(16.0, 24.0)
    }

    #[rstest]
    fn test_render_draws_dots_routes_and_labels(history: Vec<Commit>, renderer: SvgRenderer) {
        let nodes = layout(&history, |_| 24.0).unwrap();
        let svg = renderer.render(&history, &nodes).unwrap();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        pretty_assertions::assert_eq!(svg.matches("<circle").count(), history.len());

        let route_count = nodes.iter().map(|node| node.routes.len()).sum::<usize>();
        pretty_assertions::assert_eq!(svg.matches("<path").count(), route_count);
    }

    #[rstest]
    fn test_merge_route_is_a_curve(history: Vec<Commit>, renderer: SvgRenderer) {
        let nodes = layout(&history, |_| 24.0).unwrap();
        let svg = renderer.render(&history, &nodes).unwrap();

        // straight continuation of the first lane, then the curve into column 1
        assert!(svg.contains(r##"<path d="M 16 25 L 16 49" stroke="#1f77b4"/>"##));
        assert!(svg.contains(r##"<path d="M 16 25 C 16 37 32 37 32 49" stroke="#ff7f0e"/>"##));
    }

    #[rstest]
    fn test_dots_sit_on_their_column(history: Vec<Commit>, renderer: SvgRenderer) {
        let nodes = layout(&history, |_| 24.0).unwrap();
        let svg = renderer.render(&history, &nodes).unwrap();

        assert!(svg.contains(r##"<circle cx="16" cy="25" r="4" fill="#1f77b4">"##));
        assert!(svg.contains(r##"<circle cx="32" cy="73" r="4" fill="#ff7f0e">"##));
    }

    #[rstest]
    fn test_labels_are_escaped(history: Vec<Commit>, renderer: SvgRenderer) {
        let nodes = layout(&history, |_| 24.0).unwrap();
        let svg = renderer.render(&history, &nodes).unwrap();

        assert!(svg.contains("cccc Merge &lt;feature&gt; &amp; fix"));
        assert!(!svg.contains("<feature>"));
        assert!(svg.contains("<title>aaa1</title>"));
    }

    #[rstest]
    fn test_mismatched_rows_are_rejected(history: Vec<Commit>, renderer: SvgRenderer) {
        let nodes = layout(&history, |_| 24.0).unwrap();

        assert!(renderer.render(&history[..2], &nodes).is_err());
    }

    #[rstest]
    fn test_empty_history_renders_empty_document(renderer: SvgRenderer) {
        let svg = renderer.render(&[], &[]).unwrap();

        assert!(svg.contains(r#"height="32""#));
        pretty_assertions::assert_eq!(svg.matches("<circle").count(), 0);
    }
}
