use gridsolver::{run_search, Grid, SearchOptions, SearchReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicBool;

/// Fresh reference map matching a grid's geometry
pub fn reference_for(grid: &Grid) -> Grid {
    Grid::hazard_free(grid.size, grid.start, grid.goal).unwrap()
}

/// Run a search with a seeded RNG, no cancellation and no progress output
pub fn run_seeded(
    grid: &Grid,
    reference: &mut Grid,
    exploit_probability: f64,
    reset_budget: u32,
    seed: u64,
) -> SearchReport {
    let options = SearchOptions {
        exploit_probability,
        reset_budget,
    };
    let cancel = AtomicBool::new(false);
    let mut rng = StdRng::seed_from_u64(seed);
    run_search(grid, reference, &options, &mut rng, &cancel, |_| {}).unwrap()
}
