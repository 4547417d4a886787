mod common;

use common::{reference_for, run_seeded};
use gridsolver::{Cell, Grid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

#[test]
fn report_serializes_to_json() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = Grid::with_hazards(4, 0, Cell::new(0, 0), Cell::new(3, 3), &mut rng).unwrap();
    let mut reference = reference_for(&grid);
    let report = run_seeded(&grid, &mut reference, 1.0, 100, 1);

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "Success");
    assert_eq!(value["resets"], 0);
    assert_eq!(value["optimal_cost"], 7);
    assert_eq!(value["solution"]["cost"], 7);
    assert!(value["solution"]["snapshot"].as_str().unwrap().contains('S'));
}

#[test]
fn report_saves_to_file() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = Grid::with_hazards(4, 0, Cell::new(0, 0), Cell::new(3, 3), &mut rng).unwrap();
    let mut reference = reference_for(&grid);
    let report = run_seeded(&grid, &mut reference, 1.0, 100, 2);

    let path = std::env::temp_dir().join("gridsolver_report_test.json");
    let path = path.to_str().unwrap().to_string();
    report.save_to_file(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["status"], "Success");
    fs::remove_file(&path).ok();
}
