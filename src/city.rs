//! Procedural city layout: a street lattice with building blocks in between,
//! some of them flooded as water.

use crate::cost::CostModel;
use crate::grid::{CellType, Grid, Position};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Streets run along every row and column divisible by this.
pub const BLOCK_PITCH: usize = 3;

/// Chance that a block is water instead of buildings.
pub const WATER_BLOCK_CHANCE: f64 = 0.2;

pub fn generate(rows: usize, cols: usize, costs: CostModel, seed: Option<u64>) -> Grid {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut grid = Grid::with_costs(rows, cols, costs);
    let mut water_blocks = 0;

    for block_row in (1..rows).step_by(BLOCK_PITCH) {
        for block_col in (1..cols).step_by(BLOCK_PITCH) {
            let fill = if rng.gen_bool(WATER_BLOCK_CHANCE) {
                water_blocks += 1;
                CellType::Water
            } else {
                CellType::Building
            };

            for row in block_row..(block_row + BLOCK_PITCH - 1).min(rows) {
                for col in block_col..(block_col + BLOCK_PITCH - 1).min(cols) {
                    let _ = grid.set_cell(Position { row, col }, fill);
                }
            }
        }
    }

    debug!(
        "generated {}x{} city: {} buildings, {} water cells in {} water blocks",
        rows,
        cols,
        grid.count(CellType::Building),
        grid.count(CellType::Water),
        water_blocks
    );
    grid
}

pub fn is_street(pos: Position) -> bool {
    pos.row % BLOCK_PITCH == 0 || pos.col % BLOCK_PITCH == 0
}
