use crate::agent::Agent;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::policy;
use crate::report::{SearchReport, SearchStatus, Solution};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Overlay marker for cells walked earlier in the current episode
pub const TRAIL_MARKER: char = '1';

/// Overlay marker for the agent's current position
pub const HEAD_MARKER: char = 'H';

/// Tunable knobs of the search loop
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Probability of taking the greedy (minimum-Manhattan) move
    pub exploit_probability: f64,
    /// Number of episode resets allowed before giving up
    pub reset_budget: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            exploit_probability: 0.9,
            reset_budget: 30_000,
        }
    }
}

/// Snapshot handed to the progress callback, at most once per step
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Current reference-map render
    pub map: String,
    /// Visited-cell count of the current episode
    pub path_len: usize,
    pub resets: u32,
    pub elapsed_seconds: f64,
}

/// Run the episodic search on `grid`, accumulating what the agent learns
/// in `reference`.
///
/// The loop advances one cell per step. An episode ends when the agent
/// reaches the goal, steps on a hazard, or runs out of unexplored moves;
/// hazard and dead-end cells are learned permanently before the episode
/// resets. The search as a whole ends when a recorded solution matches the
/// optimal cost, when the reset budget runs out, when every neighbour of
/// the start cell has been learned unsafe (no reset can help then), or
/// when `cancel` is raised.
///
/// `progress` is invoked whenever the episode path grows past the longest
/// seen this run, and at least once per second otherwise. The engine does
/// no I/O of its own.
pub fn run_search(
    grid: &Grid,
    reference: &mut Grid,
    options: &SearchOptions,
    rng: &mut impl Rng,
    cancel: &AtomicBool,
    mut progress: impl FnMut(&ProgressUpdate),
) -> Result<SearchReport, String> {
    if !(0.0..=1.0).contains(&options.exploit_probability) {
        return Err(format!(
            "exploit probability must be within [0, 1], got {}",
            options.exploit_probability
        ));
    }
    if reference.size != grid.size || reference.start != grid.start || reference.goal != grid.goal {
        return Err(format!(
            "reference map geometry ({}x{}) does not match the grid ({}x{})",
            reference.size, reference.size, grid.size, grid.size
        ));
    }

    let optimal_cost = (grid.start.manhattan(&grid.goal) + 1) as usize;

    // Degenerate search: already standing on the goal
    if grid.start == grid.goal {
        return Ok(SearchReport {
            status: SearchStatus::Success,
            solution: Some(Solution {
                snapshot: reference.render(),
                cost: 0,
                resets: 0,
            }),
            resets: 0,
            elapsed_seconds: 0.0,
            longest_path: 0,
            optimal_cost: 0,
        });
    }

    let started = Instant::now();
    let mut last_update = Instant::now();
    let mut agent = Agent::new(grid.start);
    let mut best: Option<Solution> = None;
    let mut resets: u32 = 0;
    let mut longest_path: usize = 0;
    let mut cancelled = false;

    loop {
        if cancel.load(Ordering::Relaxed) {
            cancelled = true;
            break;
        }
        if resets >= options.reset_budget {
            break;
        }

        reference.mark(agent.position, HEAD_MARKER);
        agent.visit();

        let moves = agent.unexplored_moves(grid);
        if moves.is_empty() && agent.position == grid.start {
            // Every neighbour of the start cell is known unsafe. Resets
            // cannot change that, so the search ends here.
            break;
        }

        if moves.is_empty() {
            // Dead end mid-episode: the pocket the agent walked into is
            // learned as a blocker just like a real hazard.
            let trapped = agent.position;
            agent.mark_unsafe(trapped);
            reference.add_hazard(trapped);
            resets += 1;
            reset_episode(&mut agent, reference, grid.start);
        } else {
            let next = policy::select_move(&moves, grid.goal, options.exploit_probability, rng);
            reference.mark(agent.position, TRAIL_MARKER);
            agent.advance(next);

            if agent.reached_goal(grid) {
                reference.mark(agent.position, TRAIL_MARKER);
                let cost = reference.count_marker(TRAIL_MARKER);
                if best.as_ref().map_or(true, |b| cost < b.cost) {
                    best = Some(Solution {
                        snapshot: reference.render(),
                        cost,
                        resets,
                    });
                }
                if cost == optimal_cost {
                    break;
                }
                resets += 1;
                reset_episode(&mut agent, reference, grid.start);
            } else if agent.hit_hazard(grid) {
                agent.mark_unsafe(next);
                reference.add_hazard(next);
                resets += 1;
                reset_episode(&mut agent, reference, grid.start);
            }
        }

        let path_len = reference.count_marker(TRAIL_MARKER);
        if path_len > longest_path || last_update.elapsed().as_secs_f64() >= 1.0 {
            if path_len > longest_path {
                longest_path = path_len;
            }
            last_update = Instant::now();
            progress(&ProgressUpdate {
                map: reference.render(),
                path_len,
                resets,
                elapsed_seconds: started.elapsed().as_secs_f64(),
            });
        }
    }

    let status = if cancelled {
        SearchStatus::Terminated
    } else if best.is_some() {
        SearchStatus::Success
    } else {
        SearchStatus::Failure
    };

    Ok(SearchReport {
        status,
        solution: best,
        resets,
        elapsed_seconds: started.elapsed().as_secs_f64(),
        longest_path,
        optimal_cost,
    })
}

/// Clear episode-scoped state: overlay marks and the agent's path. Learned
/// hazards and unsafe cells survive; they are the point of the exercise.
fn reset_episode(agent: &mut Agent, reference: &mut Grid, start: Cell) {
    reference.clear_marks();
    agent.reset(start);
}
