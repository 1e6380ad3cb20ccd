//! Commit graph layout engine
//!
//! Lays out an ordered, most-recent-first commit list as one [`LayoutNode`]
//! per commit. A node places the commit's dot in a column, lists the routes
//! connecting this row to the next one, and carries the row's cumulative
//! vertical offset.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let nodes = layout(history.commits(), |_| 24.0)?;
//! for node in &nodes {
//!     println!("{} at column {}", node.oid, node.dot.lateral_offset);
//! }
//! ```
//!
//! ## Routes
//!
//! A route connects column `from` of the current row to column `to` of the
//! next row and is coloured by its `branch` lane:
//! - regular commits and merges draw a straight route for every open lane
//! - a merge adds one route bringing its second parent's lane into the
//!   commit's column
//! - a commit whose (first) parent is already expected by another lane closes
//!   its own lane: lanes to its right shift one column left, lanes to its left
//!   go straight down, and a final route curves into the parent's lane
//! - root commits draw nothing and leave their lane registered
//!
//! Lanes waiting for a parent that never shows up in the history stay open
//! until the end of the pass.

use crate::artifacts::graph::error::LayoutError;
use crate::artifacts::graph::lane::{LaneId, LaneRegistry};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::HashSet;

/// Vertical offset of the first row
pub const BASE_Y_OFFSET: f64 = 25.0;

/// Commit marker position
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Dot {
    /// Column of the commit's own lane
    pub lateral_offset: usize,
    /// Lane the commit sits on
    pub branch: LaneId,
}

/// Connector between column `from` of one row and column `to` of the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Route {
    pub from: usize,
    pub to: usize,
    pub branch: LaneId,
}

impl Route {
    pub fn straight(column: usize, branch: LaneId) -> Self {
        Self::new(column, column, branch)
    }

    pub fn is_straight(&self) -> bool {
        self.from == self.to
    }
}

/// Layout of a single commit row
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub oid: ObjectId,
    pub dot: Dot,
    pub routes: Vec<Route>,
    pub y_offset: f64,
}

/// Layout engine
///
/// # Type Parameters
///
/// * `RowHeightFn` - Returns the height of a commit's row. It is queried once
///   per row transition, never for the last row, and must return a positive,
///   finite height.
pub struct GraphLayout<RowHeightFn>
where
    RowHeightFn: FnMut(&ObjectId) -> f64,
{
    row_height: RowHeightFn,
}

impl<RowHeightFn> GraphLayout<RowHeightFn>
where
    RowHeightFn: FnMut(&ObjectId) -> f64,
{
    pub fn new(row_height: RowHeightFn) -> Self {
        Self { row_height }
    }

    /// Lay out a most-recent-first commit list
    ///
    /// # Returns
    ///
    /// One node per commit, in input order, or the first malformation found
    /// in the history
    pub fn layout(&mut self, commits: &[Commit]) -> Result<Vec<LayoutNode>, LayoutError> {
        let mut pass = LayoutPass::default();
        let mut nodes = Vec::with_capacity(commits.len());
        let mut y_offset = BASE_Y_OFFSET;

        for (row, commit) in commits.iter().enumerate() {
            if row > 0 {
                y_offset += self.row_height_of(&commits[row - 1])?;
            }

            let (dot, routes) = pass.place(commit)?;

            debug_log!(
                "Row {}: {} on lane {} at column {} with {} route(s)",
                row,
                commit.oid(),
                dot.branch,
                dot.lateral_offset,
                routes.len()
            );

            nodes.push(LayoutNode {
                oid: commit.oid().clone(),
                dot,
                routes,
                y_offset,
            });
        }

        Ok(nodes)
    }

    fn row_height_of(&mut self, commit: &Commit) -> Result<f64, LayoutError> {
        let height = (self.row_height)(commit.oid());
        if !height.is_finite() || height <= 0.0 {
            return Err(LayoutError::InvalidRowHeight {
                oid: commit.oid().clone(),
                height,
            });
        }

        Ok(height)
    }
}

/// Lay out a most-recent-first commit list with the given row heights
pub fn layout<RowHeightFn>(
    commits: &[Commit],
    row_height: RowHeightFn,
) -> Result<Vec<LayoutNode>, LayoutError>
where
    RowHeightFn: FnMut(&ObjectId) -> f64,
{
    GraphLayout::new(row_height).layout(commits)
}

/// State of a single layout call
#[derive(Debug, Default)]
struct LayoutPass {
    registry: LaneRegistry,
    visited: HashSet<ObjectId>,
}

impl LayoutPass {
    fn place(&mut self, commit: &Commit) -> Result<(Dot, Vec<Route>), LayoutError> {
        self.validate(commit)?;

        let lane = self.registry.resolve(commit.oid());
        let column = self.column_of(commit, lane)?;

        let routes = match commit.parents() {
            [] => Vec::new(),
            [parent] => self.follow(commit, lane, column, parent)?,
            [first, second] => self.merge(commit, lane, column, first, second)?,
            parents => {
                return Err(LayoutError::OctopusMerge {
                    oid: commit.oid().clone(),
                    parents: parents.len(),
                });
            }
        };

        Ok((Dot::new(column, lane), routes))
    }

    fn validate(&mut self, commit: &Commit) -> Result<(), LayoutError> {
        if !self.visited.insert(commit.oid().clone()) {
            return Err(LayoutError::DuplicateCommit {
                oid: commit.oid().clone(),
            });
        }

        let mut parents = HashSet::new();
        for parent in commit.parents() {
            if self.visited.contains(parent) {
                return Err(LayoutError::ParentBeforeChild {
                    oid: commit.oid().clone(),
                    parent: parent.clone(),
                });
            }
            if !parents.insert(parent) {
                return Err(LayoutError::DuplicateParent {
                    oid: commit.oid().clone(),
                    parent: parent.clone(),
                });
            }
        }

        Ok(())
    }

    /// Single parent: continue the lane, or close it into the lane that
    /// already expects the parent
    fn follow(
        &mut self,
        commit: &Commit,
        lane: LaneId,
        column: usize,
        parent: &ObjectId,
    ) -> Result<Vec<Route>, LayoutError> {
        match self.registry.expected_lane(parent) {
            Some(target) if target != lane => self.converge(commit, lane, column, target),
            _ => {
                let routes = self.straight_routes();
                self.registry.reserve(parent.clone(), lane);
                Ok(routes)
            }
        }
    }

    /// Two parents: the first continues the lane (or closes it into the lane
    /// already expecting it), the second's lane is drawn into the commit's
    /// column
    fn merge(
        &mut self,
        commit: &Commit,
        lane: LaneId,
        column: usize,
        first: &ObjectId,
        second: &ObjectId,
    ) -> Result<Vec<Route>, LayoutError> {
        let mut routes = match self.registry.expected_lane(first) {
            Some(target) if target != lane => self.converge(commit, lane, column, target)?,
            _ => {
                self.registry.reserve(first.clone(), lane);
                self.straight_routes()
            }
        };

        let other = self.registry.resolve(second);
        let other_column = self.column_of(commit, other)?;
        routes.push(Route::new(column, other_column, other));

        Ok(routes)
    }

    /// Close `lane` into `target`: lanes on the right shift one column left,
    /// lanes on the left go straight down, then `lane` curves into `target`
    fn converge(
        &mut self,
        commit: &Commit,
        lane: LaneId,
        column: usize,
        target: LaneId,
    ) -> Result<Vec<Route>, LayoutError> {
        let open_lanes = self.registry.open_lanes();
        let mut routes = open_lanes
            .iter()
            .enumerate()
            .skip(column + 1)
            .map(|(position, open)| Route::new(position, position - 1, *open))
            .collect::<Vec<_>>();
        routes.extend(
            open_lanes
                .iter()
                .enumerate()
                .take(column)
                .map(|(position, open)| Route::straight(position, *open)),
        );

        self.registry
            .close(lane)
            .ok_or_else(|| LayoutError::LaneNotOpen {
                oid: commit.oid().clone(),
                lane,
            })?;
        let target_column = self.column_of(commit, target)?;
        routes.push(Route::new(column, target_column, lane));

        Ok(routes)
    }

    fn straight_routes(&self) -> Vec<Route> {
        self.registry
            .open_lanes()
            .iter()
            .enumerate()
            .map(|(position, open)| Route::straight(position, *open))
            .collect()
    }

    fn column_of(&self, commit: &Commit, lane: LaneId) -> Result<usize, LayoutError> {
        self.registry
            .column_of(lane)
            .ok_or_else(|| LayoutError::LaneNotOpen {
                oid: commit.oid().clone(),
                lane,
            })
    }
}
