use crate::algorithms::common::{reconstruct_path, PathfindingAlgorithm};
use crate::grid::{Grid, Position};
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct QueueEntry {
    cost: u64,
    seq: u64,
    pos: Position,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap behavior; equal costs pop in push order
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            other => other,
        }
    }
}

/// Weighted shortest path over the grid's cost table.
///
/// Entering a cell costs that cell's traversal cost. Stale frontier entries
/// are skipped on pop, so each position is expanded at most once.
#[derive(Default)]
pub struct Dijkstra {
    expanded: usize,
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra { expanded: 0 }
    }
}

impl PathfindingAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
        self.expanded = 0;

        if grid.cost_at(start).is_none() || grid.cost_at(goal).is_none() {
            debug!("[Dijkstra] invalid endpoint: start={} goal={}", start, goal);
            return None;
        }
        if start == goal {
            return Some(vec![start]);
        }

        let infinity = grid.costs().infinity_for(grid.rows(), grid.cols());
        let mut distances: FxHashMap<Position, u64> = FxHashMap::default();
        let mut parents: FxHashMap<Position, Option<Position>> = FxHashMap::default();
        let mut open_queue = BinaryHeap::new();
        let mut seq = 0u64;

        let get_distance = |distances: &FxHashMap<Position, u64>, pos: Position| -> u64 {
            distances.get(&pos).copied().unwrap_or(infinity)
        };

        distances.insert(start, 0);
        parents.insert(start, None);
        open_queue.push(QueueEntry {
            cost: 0,
            seq,
            pos: start,
        });

        while let Some(QueueEntry { cost, pos, .. }) = open_queue.pop() {
            if cost > get_distance(&distances, pos) {
                continue;
            }
            self.expanded += 1;

            if pos == goal {
                let path = reconstruct_path(&parents, goal);
                debug!(
                    "[Dijkstra] route found: {} steps, cost {}, {} expanded",
                    path.len() - 1,
                    cost,
                    self.expanded
                );
                return Some(path);
            }

            for neighbor in grid.neighbors(&pos) {
                let Some(step) = grid.cost_at(neighbor) else {
                    continue;
                };
                let candidate = cost + step as u64;
                if candidate < get_distance(&distances, neighbor) {
                    trace!("[Dijkstra] {} -> {} at {}", pos, neighbor, candidate);
                    distances.insert(neighbor, candidate);
                    parents.insert(neighbor, Some(pos));
                    seq += 1;
                    open_queue.push(QueueEntry {
                        cost: candidate,
                        seq,
                        pos: neighbor,
                    });
                }
            }
        }

        debug!("[Dijkstra] frontier exhausted after {} expansions", self.expanded);
        None
    }

    fn nodes_expanded(&self) -> usize {
        self.expanded
    }
}
