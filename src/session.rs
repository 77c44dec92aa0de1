use crate::algorithms::common::PathfindingAlgorithm;
use crate::algorithms::{by_name, ALGORITHM_NAMES};
use crate::error::{MutationError, SessionError};
use crate::grid::{CellType, Grid, Position};
use crate::obstacles::apply_obstacle;
use crate::render::render_grid;
use crate::statistics::{RouteStats, SessionStats};
use log::{info, warn};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub stats: RouteStats,
    pub route: Option<Vec<Position>>,
}

/// One routing session: a grid mutated in place between solves, fixed
/// endpoints and the solver chosen at startup.
pub struct Session {
    grid: Grid,
    start: Position,
    goal: Position,
    algorithm: Box<dyn PathfindingAlgorithm>,
    route: Option<Vec<Position>>,
    stats: SessionStats,
}

impl Session {
    pub fn new(
        grid: Grid,
        start: Position,
        goal: Position,
        algorithm: Box<dyn PathfindingAlgorithm>,
    ) -> Result<Self, SessionError> {
        for (which, pos) in [("start", start), ("goal", goal)] {
            if !grid.in_bounds(pos) {
                return Err(SessionError::EndpointOutOfBounds { which, pos });
            }
            if !algorithm.accepts_endpoint(&grid, pos) {
                return Err(SessionError::EndpointNotTraversable {
                    which,
                    pos,
                    algorithm: algorithm.name(),
                });
            }
        }

        Ok(Session {
            grid,
            start,
            goal,
            algorithm,
            route: None,
            stats: SessionStats::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn route(&self) -> Option<&[Position]> {
        self.route.as_deref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Solves from scratch on the current grid; the previous route is discarded.
    pub fn solve(&mut self) -> RouteStats {
        let solve_start = Instant::now();
        let route = self.algorithm.find_path(&self.grid, self.start, self.goal);
        let solve_time = solve_start.elapsed();

        let mut stats = RouteStats::new(self.algorithm.name(), route.as_deref(), &self.grid);
        stats.nodes_expanded = self.algorithm.nodes_expanded();
        stats.solve_time = solve_time;

        if stats.found {
            info!(
                "{} route {} -> {}: {} steps, cost {}",
                stats.algorithm, self.start, self.goal, stats.steps, stats.cost
            );
        } else {
            info!("{} found no route {} -> {}", stats.algorithm, self.start, self.goal);
        }

        self.stats.record_solve(&stats);
        self.route = route;
        stats
    }

    /// Applies an obstacle and re-solves. On rejection the grid and the
    /// current route are untouched.
    pub fn place_obstacle(
        &mut self,
        pos: Position,
        cell: CellType,
    ) -> Result<RouteStats, MutationError> {
        if let Err(e) = apply_obstacle(&mut self.grid, pos, cell, self.start, self.goal) {
            warn!("obstacle rejected: {}", e);
            self.stats.rejected_mutations += 1;
            return Err(e);
        }
        self.stats.obstacles_placed += 1;
        Ok(self.solve())
    }

    pub fn render(&self) -> String {
        render_grid(&self.grid, self.route(), self.start, self.goal)
    }

    /// Runs every solver on the current grid without touching session state.
    pub fn compare_algorithms(&self) -> Vec<AlgorithmResult> {
        let mut results = Vec::new();

        for name in ALGORITHM_NAMES {
            let Ok(mut algorithm) = by_name(name) else {
                continue;
            };

            let solve_start = Instant::now();
            let route = algorithm.find_path(&self.grid, self.start, self.goal);
            let solve_time = solve_start.elapsed();

            let mut stats = RouteStats::new(algorithm.name(), route.as_deref(), &self.grid);
            stats.nodes_expanded = algorithm.nodes_expanded();
            stats.solve_time = solve_time;

            results.push(AlgorithmResult { stats, route });
        }

        results
    }
}

/// Print comparison results in a table
pub fn print_comparison_results(results: &[AlgorithmResult]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<10} {:<7} {:<7} {:<7} {:<10} {:<12}",
        "Algorithm", "Found", "Steps", "Cost", "Expanded", "Solve Time"
    );
    println!("{}", "-".repeat(58));

    for result in results {
        let found_str = if result.stats.found { "yes" } else { "no" };
        let steps_str = if result.stats.found {
            result.stats.steps.to_string()
        } else {
            "-".to_string()
        };
        let cost_str = if result.stats.found {
            result.stats.cost.to_string()
        } else {
            "-".to_string()
        };
        let time_str = format!("{:.2?}", result.stats.solve_time);

        println!(
            "{:<10} {:<7} {:<7} {:<7} {:<10} {:<12}",
            result.stats.algorithm, found_str, steps_str, cost_str, result.stats.nodes_expanded, time_str
        );
    }

    let cheapest = results
        .iter()
        .filter(|r| r.stats.found)
        .min_by_key(|r| r.stats.cost);
    println!();
    match cheapest {
        Some(best) => println!("Cheapest route: {} (cost {})", best.stats.algorithm, best.stats.cost),
        None => println!("No solver found a route."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::Bfs;
    use crate::algorithms::dijkstra::Dijkstra;

    fn session(rows: usize, cols: usize) -> Session {
        Session::new(
            Grid::new(rows, cols),
            Position::new(0, 0),
            Position::new(rows - 1, cols - 1),
            Box::new(Dijkstra::new()),
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_endpoints() {
        let err = Session::new(
            Grid::new(3, 3),
            Position::new(0, 0),
            Position::new(3, 3),
            Box::new(Dijkstra::new()),
        )
        .err();
        assert!(matches!(
            err,
            Some(SessionError::EndpointOutOfBounds { which: "goal", .. })
        ));

        let mut grid = Grid::new(3, 3);
        grid.set_cell(Position::new(0, 0), CellType::Water).unwrap();
        let err = Session::new(
            grid.clone(),
            Position::new(0, 0),
            Position::new(2, 2),
            Box::new(Bfs::new()),
        )
        .err();
        assert!(matches!(
            err,
            Some(SessionError::EndpointNotTraversable { which: "start", algorithm: "bfs", .. })
        ));

        // Water is a valid endpoint for the weighted solver
        assert!(Session::new(grid, Position::new(0, 0), Position::new(2, 2), Box::new(Dijkstra::new())).is_ok());
    }

    #[test]
    fn obstacle_triggers_resolve() {
        let mut session = session(3, 3);
        let first = session.solve();
        assert_eq!(first.cost, 4);

        let blocked = session.route().unwrap()[1];
        let second = session.place_obstacle(blocked, CellType::Building).unwrap();
        assert!(second.found);
        assert_eq!(second.cost, 4);
        assert!(!session.route().unwrap().contains(&blocked));
        assert_eq!(session.stats().solves, 2);
        assert_eq!(session.stats().obstacles_placed, 1);
    }

    #[test]
    fn rejected_obstacle_keeps_route() {
        let mut session = session(3, 3);
        session.solve();
        let route_before = session.route().map(<[Position]>::to_vec);
        let grid_before = session.grid().clone();

        let err = session.place_obstacle(Position::new(0, 0), CellType::Blocked);
        assert_eq!(err.unwrap_err(), MutationError::EndpointBlocked(Position::new(0, 0)));
        assert_eq!(session.grid(), &grid_before);
        assert_eq!(session.route().map(<[Position]>::to_vec), route_before);
        assert_eq!(session.stats().rejected_mutations, 1);
        assert_eq!(session.stats().solves, 1);
    }

    #[test]
    fn walling_off_goal_leaves_no_route() {
        let mut session = session(3, 3);
        session.place_obstacle(Position::new(1, 2), CellType::Blocked).unwrap();
        let stats = session.place_obstacle(Position::new(2, 1), CellType::Blocked).unwrap();
        assert!(!stats.found);
        assert!(session.route().is_none());
    }

    #[test]
    fn comparison_runs_every_solver() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(Position::new(1, 1), CellType::Water).unwrap();
        let session = Session::new(grid, Position::new(0, 1), Position::new(2, 1), Box::new(Dijkstra::new())).unwrap();

        let results = session.compare_algorithms();
        let names: Vec<_> = results.iter().map(|r| r.stats.algorithm).collect();
        assert_eq!(names, ALGORITHM_NAMES.to_vec());
        assert!(results.iter().all(|r| r.stats.found));
        assert!(results.iter().all(|r| r.stats.cost == 4));
    }
}
