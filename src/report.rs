use serde::Serialize;
use std::fs;

/// Final outcome of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    /// At least one path to the goal was recorded
    Success,
    /// The reset budget ran out (or the start was fenced in) with no path found
    Failure,
    /// The caller asked the search to stop early
    Terminated,
}

/// A recorded path to the goal: the reference-map render at the moment the
/// goal was reached, its cost, and how many resets it took to get there.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub snapshot: String,
    pub cost: usize,
    pub resets: u32,
}

/// Everything a caller needs to know about a finished search
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub status: SearchStatus,
    /// Best (cheapest) solution found, if any
    pub solution: Option<Solution>,
    pub resets: u32,
    pub elapsed_seconds: f64,
    /// Longest in-episode visited-cell count seen during the run
    pub longest_path: usize,
    /// Cheapest cost this grid admits: Manhattan distance plus the start cell
    pub optimal_cost: usize,
}

impl SearchReport {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize search report: {}", e))
    }

    /// Write the report as pretty-printed JSON
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = self.to_json()?;

        fs::write(path, json)
            .map_err(|e| format!("Failed to write report file: {}", e))?;

        Ok(())
    }
}
