pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dijkstra;

use crate::error::ConfigError;
use crate::grid::{Grid, Position};
use a_star::AStar;
use bfs::Bfs;
use common::PathfindingAlgorithm;
use dijkstra::Dijkstra;

pub const ALGORITHM_NAMES: [&str; 3] = ["bfs", "dijkstra", "a_star"];

/// Unweighted solve over PATH cells.
pub fn solve_bfs(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    Bfs::new().find_path(grid, start, goal)
}

/// Weighted solve using the grid's cost table.
pub fn solve_dijkstra(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    Dijkstra::new().find_path(grid, start, goal)
}

pub fn by_name(name: &str) -> Result<Box<dyn PathfindingAlgorithm>, ConfigError> {
    match name {
        "bfs" => Ok(Box::new(Bfs::new())),
        "dijkstra" => Ok(Box::new(Dijkstra::new())),
        "a_star" => Ok(Box::new(AStar::new())),
        other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
    }
}
