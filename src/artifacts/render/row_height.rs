use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::HashSet;

/// Default height of a graph row, in layout units
pub const DEFAULT_ROW_HEIGHT: f64 = 24.0;

/// Default height of an expanded row (a commit shown with its details)
pub const DEFAULT_EXPANDED_ROW_HEIGHT: f64 = 72.0;

/// Default distance between two graph columns, in layout units
pub const DEFAULT_COLUMN_WIDTH: f64 = 16.0;

/// Row height lookup handed to the layout engine
///
/// Expanded commits get the taller height; every other row uses the regular
/// one.
#[derive(Debug, Clone, new)]
pub struct RowHeights {
    regular: f64,
    expanded_height: f64,
    expanded: HashSet<ObjectId>,
}

impl RowHeights {
    pub fn uniform(height: f64) -> Self {
        Self::new(height, height, HashSet::new())
    }

    pub fn height(&self, oid: &ObjectId) -> f64 {
        if self.expanded.contains(oid) {
            self.expanded_height
        } else {
            self.regular
        }
    }
}
