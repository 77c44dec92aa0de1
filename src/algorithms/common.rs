use crate::grid::{Grid, Position};
use rustc_hash::FxHashMap;

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    /// Ordered route from `start` to `goal`, both inclusive, or `None` when
    /// the endpoints are invalid or no route exists.
    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>>;

    /// Whether `pos` can be used as a route endpoint by this solver.
    fn accepts_endpoint(&self, grid: &Grid, pos: Position) -> bool {
        grid.cost_at(pos).is_some()
    }

    /// Positions expanded by the most recent `find_path` call.
    fn nodes_expanded(&self) -> usize {
        0 // Default: not tracked
    }
}

/// Walks parent links from `goal` back to the root (the entry mapped to
/// `None`) and returns the route in start-to-goal order.
pub fn reconstruct_path(
    parents: &FxHashMap<Position, Option<Position>>,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
