use crate::cell::Cell;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_size")]
    pub size: i32,
    #[serde(default = "default_hazards")]
    pub hazards: usize,
    #[serde(default = "default_start")]
    pub start: [i32; 2],
    #[serde(default = "default_goal")]
    pub goal: [i32; 2],
    /// When set, the grid is read from this layout file instead of being
    /// generated randomly
    #[serde(default)]
    pub layout_file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_exploit_probability")]
    pub exploit_probability: f64,
    #[serde(default = "default_reset_budget")]
    pub reset_budget: u32,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_progress")]
    pub progress: bool,
    /// When set, the final search report is written here as JSON
    #[serde(default)]
    pub report_file: Option<String>,
}

// Default values
fn default_size() -> i32 { 10 }
fn default_hazards() -> usize { 20 }
fn default_start() -> [i32; 2] { [0, 0] }
fn default_goal() -> [i32; 2] { [9, 9] }
fn default_exploit_probability() -> f64 { 0.9 }
fn default_reset_budget() -> u32 { 30_000 }
fn default_progress() -> bool { true }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            hazards: default_hazards(),
            start: default_start(),
            goal: default_goal(),
            layout_file: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploit_probability: default_exploit_probability(),
            reset_budget: default_reset_budget(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            progress: default_progress(),
            report_file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            search: SearchConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from {}", path);
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path, e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No {} found, using default configuration", path);
                Config::default()
            }
        }
    }

    pub fn start(&self) -> Cell {
        Cell::new(self.grid.start[0], self.grid.start[1])
    }

    pub fn goal(&self) -> Cell {
        Cell::new(self.grid.goal[0], self.grid.goal[1])
    }

    /// Reject configurations the search cannot run on
    pub fn validate(&self) -> Result<(), String> {
        if self.grid.size < 1 {
            return Err(format!("grid size must be at least 1, got {}", self.grid.size));
        }
        let in_bounds =
            |cell: &Cell| cell.row >= 0 && cell.row < self.grid.size && cell.col >= 0 && cell.col < self.grid.size;
        let start = self.start();
        let goal = self.goal();
        if !in_bounds(&start) {
            return Err(format!(
                "start ({}, {}) is outside the {}x{} grid",
                start.row, start.col, self.grid.size, self.grid.size
            ));
        }
        if !in_bounds(&goal) {
            return Err(format!(
                "goal ({}, {}) is outside the grid",
                goal.row, goal.col
            ));
        }
        let reserved = if start == goal { 1 } else { 2 };
        let capacity = (self.grid.size as usize) * (self.grid.size as usize) - reserved;
        if self.grid.layout_file.is_none() && self.grid.hazards > capacity {
            return Err(format!(
                "{} hazards do not fit on a {}x{} grid",
                self.grid.hazards, self.grid.size, self.grid.size
            ));
        }
        if !(0.0..=1.0).contains(&self.search.exploit_probability) {
            return Err(format!(
                "exploit probability must be within [0, 1], got {}",
                self.search.exploit_probability
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            "[grid]\nsize = 4\n\n[search]\nexploit_probability = 1.0\n",
        )
        .unwrap();
        assert_eq!(config.grid.size, 4);
        assert_eq!(config.grid.hazards, 20);
        assert_eq!(config.search.exploit_probability, 1.0);
        assert_eq!(config.search.reset_budget, 30_000);
        assert!(config.output.progress);
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_goal() {
        let config: Config = toml::from_str("[grid]\nsize = 5\ngoal = [5, 0]\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_probability() {
        let config: Config =
            toml::from_str("[search]\nexploit_probability = 1.5\n").unwrap();
        assert!(config.validate().is_err());
    }
}
