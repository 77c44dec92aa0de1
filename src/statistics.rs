use crate::grid::{Grid, Position};
use std::fmt;
use std::time::Duration;

/// Outcome of a single solve.
#[derive(Debug, Clone)]
pub struct RouteStats {
    pub algorithm: &'static str,
    pub found: bool,
    pub steps: usize,
    pub cost: u64,
    pub nodes_expanded: usize,
    pub solve_time: Duration,
}

impl RouteStats {
    pub fn new(algorithm: &'static str, route: Option<&[Position]>, grid: &Grid) -> Self {
        let (found, steps, cost) = match route {
            Some(route) => (
                true,
                route.len().saturating_sub(1),
                grid.route_cost(route).unwrap_or(0),
            ),
            None => (false, 0, 0),
        };
        RouteStats {
            algorithm,
            found,
            steps,
            cost,
            nodes_expanded: 0,
            solve_time: Duration::ZERO,
        }
    }
}

impl fmt::Display for RouteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        if self.found {
            writeln!(f, "Route Steps: {}", self.steps)?;
            writeln!(f, "Route Cost: {}", self.cost)?;
        } else {
            writeln!(f, "Route: none")?;
        }
        writeln!(f, "Nodes Expanded: {}", self.nodes_expanded)?;
        writeln!(f, "Solve Time: {:.2?}", self.solve_time)?;
        Ok(())
    }
}

/// Running totals for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub solves: usize,
    pub routes_found: usize,
    pub obstacles_placed: usize,
    pub rejected_mutations: usize,
    pub solve_times: Vec<Duration>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_solve(&mut self, stats: &RouteStats) {
        self.solves += 1;
        if stats.found {
            self.routes_found += 1;
        }
        self.solve_times.push(stats.solve_time);
    }

    pub fn average_solve_time(&self) -> Duration {
        if self.solve_times.is_empty() {
            Duration::from_nanos(0)
        } else {
            let total: Duration = self.solve_times.iter().sum();
            total / self.solve_times.len() as u32
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Solves: {}", self.solves)?;
        writeln!(f, "Routes Found: {}", self.routes_found)?;
        writeln!(f, "Obstacles Placed: {}", self.obstacles_placed)?;
        writeln!(f, "Rejected Placements: {}", self.rejected_mutations)?;
        writeln!(f, "Average Solve Time: {:.2?}", self.average_solve_time())?;
        Ok(())
    }
}
