use crate::algorithms::common::{reconstruct_path, PathfindingAlgorithm};
use crate::grid::{Grid, Position};
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Breadth-first search over PATH cells only.
///
/// Every step costs the same, so the first time the goal is dequeued its
/// parent chain is a minimum-edge-count route. Water is treated as a wall;
/// use [`Dijkstra`](super::dijkstra::Dijkstra) for weighted terrain.
#[derive(Default)]
pub struct Bfs {
    expanded: usize,
}

impl Bfs {
    pub fn new() -> Self {
        Bfs { expanded: 0 }
    }
}

impl PathfindingAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn find_path(&mut self, grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
        self.expanded = 0;

        if !grid.is_traversable(start) || !grid.is_traversable(goal) {
            debug!("[BFS] invalid endpoint: start={} goal={}", start, goal);
            return None;
        }

        let mut visited: FxHashSet<Position> = FxHashSet::default();
        let mut parents: FxHashMap<Position, Option<Position>> = FxHashMap::default();
        let mut queue = VecDeque::new();

        visited.insert(start);
        parents.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            self.expanded += 1;

            if current == goal {
                let path = reconstruct_path(&parents, goal);
                debug!(
                    "[BFS] route found: {} steps, {} expanded",
                    path.len() - 1,
                    self.expanded
                );
                return Some(path);
            }

            for neighbor in grid.neighbors(&current) {
                if grid.is_traversable(neighbor) && visited.insert(neighbor) {
                    trace!("[BFS] {} -> {}", current, neighbor);
                    parents.insert(neighbor, Some(current));
                    queue.push_back(neighbor);
                }
            }
        }

        debug!("[BFS] frontier exhausted after {} expansions", self.expanded);
        None
    }

    fn accepts_endpoint(&self, grid: &Grid, pos: Position) -> bool {
        grid.is_traversable(pos)
    }

    fn nodes_expanded(&self) -> usize {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellType;

    #[test]
    fn open_grid_shortest_edge_count() {
        let grid = Grid::new(5, 5);
        let path = Bfs::new()
            .find_path(&grid, Position::new(0, 0), Position::new(4, 4))
            .unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Position::new(0, 0));
        assert_eq!(path[8], Position::new(4, 4));
    }

    #[test]
    fn water_is_a_wall_for_bfs() {
        let mut grid = Grid::new(3, 1);
        grid.set_cell(Position::new(1, 0), CellType::Water).unwrap();
        let mut bfs = Bfs::new();
        assert_eq!(bfs.find_path(&grid, Position::new(0, 0), Position::new(2, 0)), None);
        assert!(bfs.nodes_expanded() > 0);
    }

    #[test]
    fn endpoint_on_water_is_rejected_without_search() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(Position::new(2, 2), CellType::Water).unwrap();
        let mut bfs = Bfs::new();
        assert_eq!(bfs.find_path(&grid, Position::new(0, 0), Position::new(2, 2)), None);
        assert_eq!(bfs.nodes_expanded(), 0);
    }

    #[test]
    fn detours_around_walls() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(Position::new(0, 1), CellType::Building).unwrap();
        grid.set_cell(Position::new(1, 1), CellType::Building).unwrap();
        let path = Bfs::new()
            .find_path(&grid, Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.contains(&Position::new(2, 1)));
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(2, 2);
        let pos = Position::new(1, 1);
        assert_eq!(Bfs::new().find_path(&grid, pos, pos), Some(vec![pos]));
    }
}
