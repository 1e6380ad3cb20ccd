//! Terminal renderer in the style of `git log --graph`
//!
//! Each commit gets one line: `*` in the commit's column and `|` in every
//! column arriving from the previous row, followed by the commit id and
//! subject. When a route changes column a connector line is inserted below:
//!
//! ```text
//! *   3f2a1b0 Merge branch 'feature'
//! |\
//! * | 9c1d2e3 Update docs
//! | * 77ab012 Add feature
//! * | 5e6f7a8 Fix build
//! |/
//! *   0a1b2c3 Initial commit
//! ```
//!
//! Columns are two characters wide. A connector draws `\` (moving right) or
//! `/` (moving left) next to the destination column and fills wider jumps
//! with `-`. Two routes crossing in the same cell draw `X`.

use crate::artifacts::graph::lane::LaneId;
use crate::artifacts::graph::layout::{LayoutNode, Route};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::render::palette::terminal_color;
use colored::Colorize;
use derive_new::new;

const COMMIT_GLYPH: char = '*';
const LANE_GLYPH: char = '|';
const RIGHT_GLYPH: char = '\\';
const LEFT_GLYPH: char = '/';
const JUMP_GLYPH: char = '-';
const CROSS_GLYPH: char = 'X';

type Cell = Option<(char, LaneId)>;

#[derive(Debug, Clone, new)]
pub struct TextGraph {
    colorize: bool,
    abbrev_commit: bool,
}

impl TextGraph {
    /// Render the nodes produced for `commits` (same length, same order)
    pub fn render(&self, commits: &[Commit], nodes: &[LayoutNode]) -> anyhow::Result<Vec<String>> {
        if commits.len() != nodes.len() {
            anyhow::bail!(
                "layout has {} rows but the history has {} commits",
                nodes.len(),
                commits.len()
            );
        }

        let columns = nodes
            .iter()
            .flat_map(|node| {
                std::iter::once(node.dot.lateral_offset)
                    .chain(node.routes.iter().flat_map(|route| [route.from, route.to]))
            })
            .max()
            .map_or(0, |column| column + 1);
        let width = (columns * 2).saturating_sub(1);

        let mut lines = Vec::with_capacity(nodes.len());
        let mut incoming: &[Route] = &[];

        for (commit, node) in commits.iter().zip(nodes) {
            let mut cells = vec![None; width];
            for route in incoming {
                cells[route.to * 2] = Some((LANE_GLYPH, route.branch));
            }
            cells[node.dot.lateral_offset * 2] = Some((COMMIT_GLYPH, node.dot.branch));

            lines.push(format!("{} {}", self.paint(&cells), self.label(commit)));

            if node.routes.iter().any(|route| !route.is_straight()) {
                lines.push(self.connector(&node.routes, width));
            }
            incoming = &node.routes;
        }

        Ok(lines)
    }

    fn connector(&self, routes: &[Route], width: usize) -> String {
        let mut cells: Vec<Cell> = vec![None; width];

        for route in routes.iter().filter(|route| route.is_straight()) {
            cells[route.from * 2] = Some((LANE_GLYPH, route.branch));
        }

        for route in routes.iter().filter(|route| !route.is_straight()) {
            let (glyph_at, jump) = if route.to > route.from {
                (route.to * 2 - 1, route.from * 2 + 1..route.to * 2 - 1)
            } else {
                (route.to * 2 + 1, route.to * 2 + 2..route.from * 2)
            };

            let glyph = if route.to > route.from {
                RIGHT_GLYPH
            } else {
                LEFT_GLYPH
            };
            // a lane closing to the right crosses the lane shifting left
            let glyph = match cells[glyph_at] {
                Some((drawn, _)) if drawn != glyph && drawn != JUMP_GLYPH => CROSS_GLYPH,
                _ => glyph,
            };
            cells[glyph_at] = Some((glyph, route.branch));
            for position in jump {
                if cells[position].is_none() {
                    cells[position] = Some((JUMP_GLYPH, route.branch));
                }
            }
        }

        self.paint(&cells).trim_end().to_string()
    }

    fn paint(&self, cells: &[Cell]) -> String {
        cells
            .iter()
            .map(|cell| match cell {
                Some((glyph, lane)) if self.colorize => glyph
                    .to_string()
                    .color(terminal_color(*lane))
                    .to_string(),
                Some((glyph, _)) => glyph.to_string(),
                None => " ".to_string(),
            })
            .collect()
    }

    fn label(&self, commit: &Commit) -> String {
        let oid = if self.abbrev_commit {
            commit.oid().to_short_oid()
        } else {
            commit.oid().to_string()
        };
        let oid = if self.colorize {
            oid.yellow().to_string()
        } else {
            oid
        };

        if commit.subject().is_empty() {
            oid
        } else {
            format!("{} {}", oid, commit.subject())
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

    fn render(history: &[Commit]) -> Vec<String> {
        let nodes = layout(history, |_| 1.0).unwrap();
        TextGraph::new(false, true).render(history, &nodes).unwrap()
    }

    #[fixture]
    fn branch_and_merge() -> Vec<Commit> {
        vec![
            commit("c3c3c3c", &["c2c2c2c", "c1b1b1b"], "Merge feature"),
            commit("c2c2c2c", &["c1a1a1a"], "Update docs"),
            commit("c1b1b1b", &["c0c0c0c"], "Add feature"),
            commit("c1a1a1a", &["c0c0c0c"], "Fix build"),
            commit("c0c0c0c", &[], "Initial commit"),
        ]
    }

    #[test]
    fn test_linear_history_has_no_connectors() {
        let history = vec![
            commit("bbbbbbb", &["aaaaaaa"], "Second"),
            commit("aaaaaaa", &[], "First"),
        ];

        pretty_assertions::assert_eq!(
            render(&history),
            vec!["* bbbbbbb Second", "* aaaaaaa First"]
        );
    }

    #[rstest]
    fn test_branch_and_merge(branch_and_merge: Vec<Commit>) {
        pretty_assertions::assert_eq!(
            render(&branch_and_merge),
            vec![
                "*   c3c3c3c Merge feature",
                "|\\",
                "* | c2c2c2c Update docs",
                "| * c1b1b1b Add feature",
                "* | c1a1a1a Fix build",
                "|/",
                "*   c0c0c0c Initial commit",
            ]
        );
    }

    #[test]
    fn test_wide_jumps_are_filled() {
        let history = vec![
            commit("a1a1", &["d4d4"], ""),
            commit("b2b2", &["f6f6"], ""),
            commit("c3c3", &["e5e5"], ""),
            commit("d4d4", &["0707", "e5e5"], ""),
            commit("e5e5", &["0808", "0707"], ""),
        ];

        pretty_assertions::assert_eq!(
            render(&history),
            vec![
                "*     a1a1",
                "| *   b2b2",
                "| | * c3c3",
                "* | | d4d4",
                "|-|\\|",
                "| | * e5e5",
                "|/|-|",
            ]
        );
    }

    #[test]
    fn test_lane_closing_right_crosses_shifting_lane() {
        let history = vec![
            commit("a1a1", &["0808"], ""),
            commit("b2b2", &["0909"], ""),
            commit("c3c3", &["f6f6"], ""),
            commit("0808", &["f6f6"], ""),
        ];

        pretty_assertions::assert_eq!(
            render(&history),
            vec!["*     a1a1", "| *   b2b2", "| | * c3c3", "* | | 0808", " X /"]
        );
    }

    #[test]
    fn test_full_ids_without_abbreviation() {
        let oid = "0123456789abcdef0123456789abcdef01234567";
        let history = vec![commit(oid, &[], "Root")];
        let nodes = layout(&history, |_| 1.0).unwrap();

        let lines = TextGraph::new(false, false).render(&history, &nodes).unwrap();

        pretty_assertions::assert_eq!(lines, vec![format!("* {oid} Root")]);
    }

    #[test]
    fn test_colorized_output_contains_escape_codes() {
        colored::control::set_override(true);
        let history = vec![commit("aaaa", &[], "Root")];
        let nodes = layout(&history, |_| 1.0).unwrap();

        let lines = TextGraph::new(true, true).render(&history, &nodes).unwrap();

        assert!(lines[0].contains("\u{1b}["));
    }
}
