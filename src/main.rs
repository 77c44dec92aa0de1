use clap::Parser;

use grid_routes::algorithms::by_name;
use grid_routes::city;
use grid_routes::config::Config;
use grid_routes::grid::Grid;
use grid_routes::obstacles::{apply_obstacle, ObstacleSpec};
use grid_routes::session::{print_comparison_results, Session};
use grid_routes::statistics::RouteStats;
use std::io::{self, BufRead, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    let start = config.start;
    let goal = config.goal();

    println!("Grid size: {}x{}", config.rows, config.cols);
    println!("Algorithm: {}", config.algorithm);
    println!("Start: {} | Destination: {}", start, goal);
    println!();

    let mut grid = if config.city {
        city::generate(config.rows, config.cols, config.costs(), config.seed)
    } else {
        Grid::with_costs(config.rows, config.cols, config.costs())
    };

    for spec in &config.obstacles {
        if let Err(e) = apply_obstacle(&mut grid, spec.pos, spec.cell, start, goal) {
            eprintln!("Skipping obstacle {}: {}", spec.pos, e);
        }
    }

    let algorithm = match by_name(&config.algorithm) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let mut session = match Session::new(grid, start, goal, algorithm) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Cannot start session: {}", e);
            eprintln!("Pick endpoints on open street cells or try another --seed");
            std::process::exit(1);
        }
    };

    let stats = session.solve();
    print_result(&session, &stats);

    if config.compare {
        print_comparison_results(&session.compare_algorithms());
    }

    if !config.no_interactive {
        if let Err(e) = run_interactive(&mut session) {
            eprintln!("Input error: {}", e);
            std::process::exit(1);
        }
    }

    println!("\n=== SESSION SUMMARY ===");
    println!("{}", session.stats());
}

fn print_result(session: &Session, stats: &RouteStats) {
    if stats.found {
        println!("Route found");
    } else {
        println!("No route possible");
    }
    println!("{}", session.render());
    println!("{}", stats);
}

fn run_interactive(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Add obstacle as 'row,col,kind' (building, water, blocked, path), or: show, compare, stats, quit");
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "q" | "quit" | "exit" => return Ok(()),
            "show" => println!("{}", session.render()),
            "compare" => print_comparison_results(&session.compare_algorithms()),
            "stats" => println!("{}", session.stats()),
            _ => match command.parse::<ObstacleSpec>() {
                Ok(spec) => match session.place_obstacle(spec.pos, spec.cell) {
                    Ok(stats) => print_result(session, &stats),
                    Err(e) => println!("Rejected: {}", e),
                },
                Err(e) => println!("{}", e),
            },
        }
    }
}
