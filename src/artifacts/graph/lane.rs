//! Lanes and the lane registry
//!
//! A lane is the vertical "swimlane" a line of descent occupies in the graph.
//! Lane ids are allocated from a monotonically increasing counter and never
//! reused. The *column* a lane is drawn in is its index among the currently
//! open lanes, so it can shift left as lanes to its left close.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a lane (a line of descent, not a Git branch name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneId(usize);

impl LaneId {
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Position of this lane's colour in a palette of `palette_len` colours
    ///
    /// Lane ids wrap around once the palette is exhausted.
    pub fn color_index(&self, palette_len: usize) -> usize {
        self.0 % palette_len.max(1)
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Working state of one layout pass
///
/// - `next_lane`: id handed out by the next allocation
/// - `open_lanes`: open lanes in insertion order; a lane's index here is its
///   current column
/// - `expected`: which lane a commit not visited yet is expected to continue
///
/// Every lane in `open_lanes` was allocated by this registry and has not been
/// closed since.
#[derive(Debug, Clone, Default)]
pub struct LaneRegistry {
    next_lane: usize,
    open_lanes: Vec<LaneId>,
    expected: HashMap<ObjectId, LaneId>,
}

impl LaneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_lanes(&self) -> &[LaneId] {
        &self.open_lanes
    }

    pub fn expected_lane(&self, oid: &ObjectId) -> Option<LaneId> {
        self.expected.get(oid).copied()
    }

    /// Allocate a fresh lane and append it as the rightmost open column
    pub fn open_lane(&mut self) -> LaneId {
        let lane = LaneId(self.next_lane);
        self.next_lane += 1;
        self.open_lanes.push(lane);

        debug_log!("Opened lane {} at column {}", lane, self.open_lanes.len() - 1);

        lane
    }

    /// Lane the given commit continues
    ///
    /// Reuses the lane a more recent commit reserved for it, otherwise opens a
    /// new lane and reserves it for the commit.
    pub fn resolve(&mut self, oid: &ObjectId) -> LaneId {
        if let Some(lane) = self.expected_lane(oid) {
            return lane;
        }

        let lane = self.open_lane();
        self.reserve(oid.clone(), lane);
        lane
    }

    /// Record that the not-yet-visited commit `oid` continues `lane`
    pub fn reserve(&mut self, oid: ObjectId, lane: LaneId) {
        debug_log!("Reserved lane {} for {}", lane, oid);

        self.expected.insert(oid, lane);
    }

    /// Current column of an open lane
    pub fn column_of(&self, lane: LaneId) -> Option<usize> {
        self.open_lanes.iter().position(|open| *open == lane)
    }

    /// Remove a lane from the open lanes, returning the column it occupied
    ///
    /// Every lane to its right moves one column left.
    pub fn close(&mut self, lane: LaneId) -> Option<usize> {
        let column = self.column_of(lane)?;
        self.open_lanes.remove(column);

        debug_log!("Closed lane {} at column {}", lane, column);

        Some(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn oid(id: &str) -> ObjectId {
        ObjectId::try_parse(id.to_string()).unwrap()
    }

    #[fixture]
    fn registry() -> LaneRegistry {
        LaneRegistry::new()
    }

    #[rstest]
    fn test_lanes_are_allocated_in_increasing_order(mut registry: LaneRegistry) {
        let lanes = (0..4).map(|_| registry.open_lane()).collect::<Vec<_>>();

        pretty_assertions::assert_eq!(
            lanes,
            vec![LaneId(0), LaneId(1), LaneId(2), LaneId(3)]
        );
        pretty_assertions::assert_eq!(registry.open_lanes(), lanes.as_slice());
    }

    #[rstest]
    fn test_resolve_reuses_reserved_lane(mut registry: LaneRegistry) {
        let head = registry.resolve(&oid("aaaa"));
        registry.reserve(oid("bbbb"), head);

        pretty_assertions::assert_eq!(registry.resolve(&oid("bbbb")), head);
        pretty_assertions::assert_eq!(registry.open_lanes(), &[head]);
    }

    #[rstest]
    fn test_resolve_opens_lane_for_unknown_commit(mut registry: LaneRegistry) {
        let first = registry.resolve(&oid("aaaa"));
        let second = registry.resolve(&oid("bbbb"));

        pretty_assertions::assert_eq!(first, LaneId(0));
        pretty_assertions::assert_eq!(second, LaneId(1));
        pretty_assertions::assert_eq!(registry.expected_lane(&oid("bbbb")), Some(second));
    }

    #[rstest]
    fn test_closing_a_lane_shifts_columns_left(mut registry: LaneRegistry) {
        let a = registry.open_lane();
        let b = registry.open_lane();
        let c = registry.open_lane();

        pretty_assertions::assert_eq!(registry.close(b), Some(1));
        pretty_assertions::assert_eq!(registry.column_of(a), Some(0));
        pretty_assertions::assert_eq!(registry.column_of(c), Some(1));
        pretty_assertions::assert_eq!(registry.column_of(b), None);
    }

    #[rstest]
    fn test_closed_lane_ids_are_never_reused(mut registry: LaneRegistry) {
        let a = registry.open_lane();
        registry.close(a);

        pretty_assertions::assert_eq!(registry.open_lane(), LaneId(1));
        pretty_assertions::assert_eq!(registry.close(a), None);
    }

    #[rstest]
    #[case(0, 8, 0)]
    #[case(7, 8, 7)]
    #[case(8, 8, 0)]
    #[case(11, 8, 3)]
    #[case(5, 0, 0)]
    fn test_color_index_wraps_around_palette(
        #[case] id: usize,
        #[case] palette_len: usize,
        #[case] expected: usize,
    ) {
        pretty_assertions::assert_eq!(LaneId::new(id).color_index(palette_len), expected);
    }
}
