use crate::cost::CostModel;
use crate::error::ConfigError;
use crate::grid::Position;
use crate::obstacles::ObstacleSpec;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Shortest routes across a city grid", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    #[arg(long, default_value_t = 10)]
    pub cols: usize,

    /// Start cell as "row,col"
    #[arg(long, default_value = "0,0")]
    pub start: Position,

    /// Destination cell as "row,col" (defaults to the bottom-right corner)
    #[arg(long)]
    pub goal: Option<Position>,

    #[arg(long, default_value = "dijkstra")]
    pub algorithm: String,

    #[arg(long, default_value_t = 3)]
    pub water_cost: u32,

    /// Generate a city layout instead of an open grid
    #[arg(long, default_value_t = false)]
    pub city: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Obstacle to place before the first solve, as "row,col,kind" (repeatable)
    #[arg(long = "obstacle")]
    pub obstacles: Vec<ObstacleSpec>,

    /// Run every solver and print a comparison table
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    #[arg(long, default_value_t = false)]
    pub no_interactive: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.water_cost == 0 {
            return Err(ConfigError::Invalid("--water-cost must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn goal(&self) -> Position {
        self.goal.unwrap_or(Position {
            row: self.rows.saturating_sub(1),
            col: self.cols.saturating_sub(1),
        })
    }

    pub fn costs(&self) -> CostModel {
        CostModel {
            water: self.water_cost,
            ..CostModel::default()
        }
    }
}
