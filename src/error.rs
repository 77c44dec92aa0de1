//! Error types for grid_routes
//!
//! A missing route is never an error: solvers return `None` for that.

use crate::grid::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Position, rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid must have at least one row and one column")]
    Empty,
}

/// Rejections from the obstacle mutator. The grid is unchanged in both cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("cannot place an obstacle on the route endpoint {0}")]
    EndpointBlocked(Position),

    #[error("obstacle position {0} is out of bounds")]
    OutOfBounds(Position),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("{which} {pos} is out of bounds")]
    EndpointOutOfBounds { which: &'static str, pos: Position },

    #[error("{which} {pos} is not traversable for the {algorithm} solver")]
    EndpointNotTraversable {
        which: &'static str,
        pos: Position,
        algorithm: &'static str,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown algorithm '{0}', expected one of: bfs, dijkstra, a_star")]
    UnknownAlgorithm(String),

    #[error("invalid position '{0}', expected 'row,col'")]
    InvalidPosition(String),

    #[error("unknown cell type '{0}', expected building, water, blocked or path")]
    UnknownCellType(String),

    #[error("invalid obstacle '{0}', expected 'row,col,kind'")]
    InvalidObstacle(String),

    #[error("{0}")]
    Invalid(String),
}
