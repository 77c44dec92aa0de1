use crate::error::{ConfigError, MutationError};
use crate::grid::{CellType, Grid, Position};
use log::info;
use std::str::FromStr;

/// Sets a single cell unless it is a route endpoint or out of bounds.
///
/// The grid is left unchanged on rejection. Callers re-solve after `Ok`.
pub fn apply_obstacle(
    grid: &mut Grid,
    pos: Position,
    cell: CellType,
    start: Position,
    goal: Position,
) -> Result<(), MutationError> {
    if pos == start || pos == goal {
        return Err(MutationError::EndpointBlocked(pos));
    }
    grid.set_cell(pos, cell)
        .map_err(|_| MutationError::OutOfBounds(pos))?;
    info!("placed {} at {}", cell, pos);
    Ok(())
}

/// An obstacle request of the form `row,col,kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleSpec {
    pub pos: Position,
    pub cell: CellType,
}

impl FromStr for ObstacleSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let [row, col, kind] = parts.as_slice() else {
            return Err(ConfigError::InvalidObstacle(s.to_string()));
        };
        let pos = format!("{},{}", row, col)
            .parse()
            .map_err(|_| ConfigError::InvalidObstacle(s.to_string()))?;
        let cell = kind.parse()?;
        Ok(ObstacleSpec { pos, cell })
    }
}
