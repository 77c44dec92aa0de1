use crate::cost::CostModel;
use crate::error::{ConfigError, GridError};
use log::warn;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance, used as the A* heuristic.
    pub fn distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = ConfigError;

    /// Parses `"row,col"`; surrounding parentheses and spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed.split(',').map(str::trim);
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ConfigError::InvalidPosition(s.to_string()));
        };
        let row = row
            .parse()
            .map_err(|_| ConfigError::InvalidPosition(s.to_string()))?;
        let col = col
            .parse()
            .map_err(|_| ConfigError::InvalidPosition(s.to_string()))?;
        Ok(Position { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Path,
    Building,
    Water,
    Blocked,
}

impl CellType {
    /// Numeric map code: 0 free path, 1 building, 2 water, 3 temporarily blocked.
    pub fn code(self) -> u8 {
        match self {
            CellType::Path => 0,
            CellType::Building => 1,
            CellType::Water => 2,
            CellType::Blocked => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<CellType> {
        match code {
            0 => Some(CellType::Path),
            1 => Some(CellType::Building),
            2 => Some(CellType::Water),
            3 => Some(CellType::Blocked),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellType::Path => '.',
            CellType::Building => '#',
            CellType::Water => '~',
            CellType::Blocked => 'X',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellType::Path => "path",
            CellType::Building => "building",
            CellType::Water => "water",
            CellType::Blocked => "blocked",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" | "clear" | "0" => Ok(CellType::Path),
            "building" | "1" => Ok(CellType::Building),
            "water" | "2" => Ok(CellType::Water),
            "blocked" | "3" => Ok(CellType::Blocked),
            _ => Err(ConfigError::UnknownCellType(s.to_string())),
        }
    }
}

/// Row-major matrix of cell types with the cost table that prices them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<CellType>>,
    costs: CostModel,
}

impl Grid {
    /// All cells start as PATH.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_costs(rows, cols, CostModel::default())
    }

    pub fn with_costs(rows: usize, cols: usize, costs: CostModel) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![vec![CellType::Path; cols]; rows],
            costs,
        }
    }

    /// Builds a grid from numeric map codes. Unknown codes become BLOCKED.
    pub fn from_codes(codes: &[Vec<u8>], costs: CostModel) -> Result<Self, GridError> {
        let cols = codes.first().map(Vec::len).ok_or(GridError::Empty)?;
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(codes.len());
        for (row, line) in codes.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            let parsed = line
                .iter()
                .enumerate()
                .map(|(col, &code)| {
                    CellType::from_code(code).unwrap_or_else(|| {
                        warn!("unknown cell code {} at ({}, {}), treating as blocked", code, row, col);
                        CellType::Blocked
                    })
                })
                .collect();
            cells.push(parsed);
        }

        Ok(Grid {
            rows: codes.len(),
            cols,
            cells,
            costs,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<CellType> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.row][pos.col])
        } else {
            None
        }
    }

    pub fn set_cell(&mut self, pos: Position, cell: CellType) -> Result<(), GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[pos.row][pos.col] = cell;
        Ok(())
    }

    /// Cost of entering `pos`; `None` when out of bounds or impassable.
    pub fn cost_at(&self, pos: Position) -> Option<u32> {
        self.get(pos).and_then(|cell| self.costs.cost_of(cell))
    }

    /// Unweighted rule: only PATH cells can be walked.
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellType::Path)
    }

    /// In-bounds 4-neighbors in the fixed order up, down, left, right.
    /// Cell types are not checked here.
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as i64, pos.col as i64);

        for (dr, dc) in &[(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let nr = row + dr;
            let nc = col + dc;

            if nr >= 0 && nr < self.rows as i64 && nc >= 0 && nc < self.cols as i64 {
                neighbors.push(Position {
                    row: nr as usize,
                    col: nc as usize,
                });
            }
        }
        neighbors
    }

    /// Sum of the entered cells' costs, excluding the first position.
    /// `None` if any step lands on an impassable or out-of-bounds cell.
    pub fn route_cost(&self, route: &[Position]) -> Option<u64> {
        route
            .iter()
            .skip(1)
            .try_fold(0u64, |total, &pos| self.cost_at(pos).map(|c| total + c as u64))
    }

    pub fn count(&self, cell: CellType) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_checks() {
        let grid = Grid::new(3, 4);
        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(2, 3)));
        assert!(!grid.in_bounds(Position::new(3, 0)));
        assert!(!grid.in_bounds(Position::new(0, 4)));
        assert_eq!(grid.get(Position::new(5, 5)), None);
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let grid = Grid::new(3, 3);
        let center = grid.neighbors(&Position::new(1, 1));
        assert_eq!(
            center,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );

        let corner = grid.neighbors(&Position::new(0, 0));
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn traversable_is_path_only() {
        let mut grid = Grid::new(2, 2);
        grid.set_cell(Position::new(0, 1), CellType::Water).unwrap();
        grid.set_cell(Position::new(1, 0), CellType::Building).unwrap();

        assert!(grid.is_traversable(Position::new(0, 0)));
        assert!(!grid.is_traversable(Position::new(0, 1)));
        assert!(!grid.is_traversable(Position::new(1, 0)));
        assert!(!grid.is_traversable(Position::new(9, 9)));
        assert_eq!(grid.cost_at(Position::new(0, 1)), Some(3));
        assert_eq!(grid.cost_at(Position::new(1, 0)), None);
    }

    #[test]
    fn set_cell_out_of_bounds() {
        let mut grid = Grid::new(2, 2);
        let before = grid.clone();
        let err = grid.set_cell(Position::new(2, 0), CellType::Blocked).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert_eq!(grid, before);
    }

    #[test]
    fn from_codes_rejects_ragged_rows() {
        let codes = vec![vec![0, 0, 0], vec![0, 1]];
        let err = Grid::from_codes(&codes, CostModel::default()).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Grid::from_codes(&[], CostModel::default()), Err(GridError::Empty));
    }

    #[test]
    fn from_codes_blocks_unknown_values() {
        let codes = vec![vec![0, 2], vec![1, 9]];
        let grid = Grid::from_codes(&codes, CostModel::default()).unwrap();
        assert_eq!(grid.get(Position::new(0, 1)), Some(CellType::Water));
        assert_eq!(grid.get(Position::new(1, 0)), Some(CellType::Building));
        assert_eq!(grid.get(Position::new(1, 1)), Some(CellType::Blocked));
    }

    #[test]
    fn route_cost_skips_start() {
        let mut grid = Grid::new(1, 3);
        grid.set_cell(Position::new(0, 1), CellType::Water).unwrap();
        let route = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(grid.route_cost(&route), Some(4));
        assert_eq!(grid.route_cost(&route[..1]), Some(0));
    }

    #[test]
    fn parses_positions_and_cell_types() {
        assert_eq!("2,3".parse::<Position>().unwrap(), Position::new(2, 3));
        assert_eq!("(4, 0)".parse::<Position>().unwrap(), Position::new(4, 0));
        assert!("2".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
        assert!("1,2,3".parse::<Position>().is_err());
        assert_eq!("Water".parse::<CellType>().unwrap(), CellType::Water);
        assert!("lava".parse::<CellType>().is_err());
    }
}
