use crate::grid::{CellType, Grid, Position};
use rustc_hash::FxHashSet;
use std::fmt::Write;

pub const LEGEND: &str =
    "Legend: S=Start, D=Destination, *=Route, .=Path, #=Building, ~=Water, X=Blocked";

/// Text view of the grid with the route and endpoints drawn over it.
pub fn render_grid(
    grid: &Grid,
    route: Option<&[Position]>,
    start: Position,
    goal: Position,
) -> String {
    let on_route: FxHashSet<Position> = route.unwrap_or_default().iter().copied().collect();
    let mut out = String::new();

    out.push_str(LEGEND);
    out.push('\n');

    // Column numbers header
    out.push_str("   ");
    for col in 0..grid.cols() {
        let _ = write!(out, "{:2}", col % 10);
    }
    out.push('\n');

    for row in 0..grid.rows() {
        let _ = write!(out, "{:2} ", row);
        for col in 0..grid.cols() {
            let pos = Position { row, col };
            let symbol = if pos == start {
                'S'
            } else if pos == goal {
                'D'
            } else if on_route.contains(&pos) {
                '*'
            } else {
                grid.get(pos).map_or(' ', CellType::symbol)
            };
            let _ = write!(out, " {}", symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_route_and_endpoints() {
        let mut grid = Grid::new(2, 3);
        grid.set_cell(Position::new(1, 1), CellType::Building).unwrap();
        grid.set_cell(Position::new(1, 2), CellType::Water).unwrap();
        let route = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];

        let text = render_grid(&grid, Some(&route), Position::new(0, 0), Position::new(0, 2));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], LEGEND);
        assert_eq!(lines[1], "    0 1 2");
        assert_eq!(lines[2], " 0  S * D");
        assert_eq!(lines[3], " 1  . # ~");
    }

    #[test]
    fn renders_without_route() {
        let grid = Grid::new(1, 2);
        let text = render_grid(&grid, None, Position::new(0, 0), Position::new(0, 1));
        assert_eq!(text.lines().last(), Some(" 0  S D"));
    }
}
