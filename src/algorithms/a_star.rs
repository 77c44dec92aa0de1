use crate::algorithms::common::PathfindingAlgorithm;
use crate::grid::{Grid, Position};
use log::debug;
use pathfinding::prelude::astar;

/// Weighted A* using the `pathfinding` crate.
///
/// Finds routes of the same cost as [`Dijkstra`](super::dijkstra::Dijkstra),
/// though it may pick a different route among equal-cost ones.
#[derive(Default)]
pub struct AStar {
    expanded: usize,
}

impl AStar {
    pub fn new() -> Self {
        AStar { expanded: 0 }
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    /// Finds a path from start to goal.
    ///
    /// The heuristic is the Manhattan distance times the cheapest cell cost,
    /// which never overestimates, so the returned route is optimal.
    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
        self.expanded = 0;

        if grid.cost_at(start).is_none() || grid.cost_at(goal).is_none() {
            debug!("[AStar] invalid endpoint: start={} goal={}", start, goal);
            return None;
        }

        let cheapest = grid.costs().path.min(grid.costs().water) as u64;
        let mut expanded = 0usize;

        let result = astar(
            &start,
            |p| {
                expanded += 1;
                // Successors are in-bounds neighbors with a finite cost.
                grid.neighbors(p)
                    .into_iter()
                    .filter_map(|neighbor| grid.cost_at(neighbor).map(|c| (neighbor, c as u64)))
                    .collect::<Vec<_>>()
            },
            |p| p.distance(&goal) as u64 * cheapest,
            |p| *p == goal,
        );

        self.expanded = expanded;
        match result {
            Some((path, cost)) => {
                debug!(
                    "[AStar] route found: {} steps, cost {}, {} expanded",
                    path.len() - 1,
                    cost,
                    self.expanded
                );
                Some(path)
            }
            None => {
                debug!("[AStar] no route after {} expansions", self.expanded);
                None
            }
        }
    }

    fn nodes_expanded(&self) -> usize {
        self.expanded
    }
}
