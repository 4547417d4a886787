use gridsolver::{run_search, Config, Grid, SearchOptions, SearchStatus};
use rand::thread_rng;
use std::env;
use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = Config::load(&config_path);
    config.validate()?;

    let grid = build_grid(&config)?;
    let mut reference = Grid::hazard_free(grid.size, grid.start, grid.goal)?;

    let cancel = Arc::new(AtomicBool::new(false));
    spawn_cancel_watcher(Arc::clone(&cancel));

    let show_progress = config.output.progress;
    let options = SearchOptions {
        exploit_probability: config.search.exploit_probability,
        reset_budget: config.search.reset_budget,
    };

    let report = run_search(
        &grid,
        &mut reference,
        &options,
        &mut thread_rng(),
        &cancel,
        |update| {
            if show_progress {
                println!(
                    "Searching...    (enter Ctrl-D to terminate)\n{}",
                    update.map
                );
            }
        },
    )?;

    println!("Hidden grid:\n{}", grid.render());
    match report.status {
        SearchStatus::Success => {
            // Success always carries a solution
            if let Some(solution) = &report.solution {
                println!(
                    "Goal reached after {:.4} seconds and {} resets (cost {}, optimal {}):",
                    report.elapsed_seconds, report.resets, solution.cost, report.optimal_cost
                );
                println!("{}", solution.snapshot);
            }
        }
        SearchStatus::Failure => {
            println!(
                "No path found after {:.0} seconds.\nResets: {}",
                report.elapsed_seconds, report.resets
            );
            println!("Agent's map:\n{}", reference.render());
        }
        SearchStatus::Terminated => {
            println!("Search terminated after {} resets.", report.resets);
            match &report.solution {
                Some(solution) => {
                    println!("Best path found so far (cost {}):", solution.cost);
                    println!("{}", solution.snapshot);
                }
                None => println!("Agent's map:\n{}", reference.render()),
            }
        }
    }

    if let Some(path) = &config.output.report_file {
        report.save_to_file(path)?;
        println!("Report written to {}", path);
    }

    Ok(())
}

/// Build the hidden grid from the configured layout file, or generate one
/// with randomly placed hazards
fn build_grid(config: &Config) -> Result<Grid, String> {
    match &config.grid.layout_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read layout file {}: {}", path, e))?;
            Grid::from_layout(&text)
        }
        None => Grid::with_hazards(
            config.grid.size,
            config.grid.hazards,
            config.start(),
            config.goal(),
            &mut thread_rng(),
        ),
    }
}

/// Raise the cancel flag when stdin reaches end of input (Ctrl-D). Only
/// armed when stdin is a terminal, so piped runs are unaffected.
fn spawn_cancel_watcher(cancel: Arc<AtomicBool>) {
    if !io::stdin().is_terminal() {
        return;
    }
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    cancel.store(true, Ordering::Relaxed);
                    break;
                }
                Ok(_) => {}
            }
        }
    });
}
