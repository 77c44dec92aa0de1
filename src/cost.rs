use crate::grid::CellType;

/// Traversal cost table for the four cell types.
///
/// Buildings and blocked cells never have a cost; only PATH and WATER are
/// configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    pub path: u32,
    pub water: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel { path: 1, water: 3 }
    }
}

impl CostModel {
    pub fn new(path: u32, water: u32) -> Self {
        CostModel { path, water }
    }

    /// Cost of entering a cell of the given type, `None` when impassable.
    pub fn cost_of(&self, cell: CellType) -> Option<u32> {
        match cell {
            CellType::Path => Some(self.path),
            CellType::Water => Some(self.water),
            CellType::Building | CellType::Blocked => None,
        }
    }

    /// Lookup by raw map code. Unknown codes are impassable.
    pub fn cost_of_code(&self, code: u8) -> Option<u32> {
        CellType::from_code(code).and_then(|cell| self.cost_of(cell))
    }

    pub fn max_cell_cost(&self) -> u32 {
        self.path.max(self.water)
    }

    /// Smallest value strictly greater than any simple route cost on a
    /// `rows` x `cols` grid.
    pub fn infinity_for(&self, rows: usize, cols: usize) -> u64 {
        (rows as u64 * cols as u64 * self.max_cell_cost() as u64).saturating_add(1)
    }
}
