//! Predecessor bookkeeping for [DfsSolver](crate::solver::dfs::DfsSolver) and
//! [BfsSolver](crate::solver::bfs::BfsSolver), and the walk back from goal to start.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Marks the start cell, which has no parent.
const NO_PARENT: usize = usize::MAX;

/// Maps every discovered cell to the index of the cell it was first discovered from.
/// Cells are stored in discovery order, so a parent always precedes its children and
/// the chain from any cell back to the root is acyclic.
pub struct ParentMap {
    parents: FxIndexMap<Point, usize>,
}

impl ParentMap {
    pub fn new(root: Point) -> ParentMap {
        let mut parents = FxIndexMap::default();
        parents.insert(root, NO_PARENT);
        ParentMap { parents }
    }

    /// Records `parent` as the parent of `child` unless `child` already has one.
    /// Returns whether the record was made. Parents must already be recorded.
    pub fn record(&mut self, child: Point, parent: &Point) -> bool {
        let parent_ix = match self.parents.get_index_of(parent) {
            Some(ix) => ix,
            None => return false,
        };
        match self.parents.entry(child) {
            Vacant(e) => {
                e.insert(parent_ix);
                true
            }
            Occupied(_) => false,
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.parents.contains_key(point)
    }

    pub fn parent(&self, point: &Point) -> Option<Point> {
        self.parents
            .get(point)
            .and_then(|&ix| self.parents.get_index(ix))
            .map(|(parent, _)| *parent)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Follows parents from `goal` back to the root and returns the cells in root-to-goal
    /// order. Empty if `goal` was never recorded.
    pub fn reconstruct_path(&self, goal: &Point) -> Vec<Point> {
        let start = match self.parents.get_index_of(goal) {
            Some(ix) => ix,
            None => return Vec::new(),
        };
        let mut path: Vec<Point> = std::iter::successors(Some(start), |&ix| {
            self.parents
                .get_index(ix)
                .map(|(_, &parent)| parent)
                .filter(|&parent| parent != NO_PARENT)
        })
        .filter_map(|ix| self.parents.get_index(ix).map(|(node, _)| *node))
        .collect();
        path.reverse();
        path
    }
}
