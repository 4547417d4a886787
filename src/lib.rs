pub mod agent;
pub mod cell;
pub mod config;
pub mod engine;
pub mod grid;
pub mod policy;
pub mod report;

pub use agent::Agent;
pub use cell::{Cell, Direction};
pub use config::Config;
pub use engine::{run_search, ProgressUpdate, SearchOptions};
pub use grid::Grid;
pub use report::{SearchReport, SearchStatus, Solution};
