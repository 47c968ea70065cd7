//! End-to-end runs of the CLI commands against a temporary directory.

use clap::Parser;
use gridcollide::{
    adapters::CsvRepository,
    cli::commands::{
        generate::{self, GenerateArgs},
        inspect::{self, InspectArgs},
        visualize::{self, VisualizeArgs},
    },
    ports::DatasetRepository,
};
use tempfile::TempDir;

#[test]
fn generate_inspect_and_visualize() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("grid_dataset.csv");
    let manifest = dir.path().join("manifest.json");
    let frames = dir.path().join("frames");

    let args = GenerateArgs::parse_from([
        "generate",
        "--samples",
        "6",
        "--seed",
        "11",
        "--no-progress",
        "--output",
        dataset.to_str().unwrap(),
        "--manifest",
        manifest.to_str().unwrap(),
    ]);
    generate::execute(args).unwrap();

    let rows = CsvRepository::new().load(&dataset).unwrap();
    assert_eq!(rows.len(), 6);

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(manifest["config"]["seed"], 11);
    assert_eq!(manifest["summary"]["collisions"], 3);

    inspect::execute(InspectArgs::parse_from([
        "inspect",
        dataset.to_str().unwrap(),
        "--json",
        "--row",
        "0",
    ]))
    .unwrap();

    visualize::execute(VisualizeArgs::parse_from([
        "visualize",
        dataset.to_str().unwrap(),
        "--output-dir",
        frames.to_str().unwrap(),
        "--cell-px",
        "4",
        "--no-progress",
    ]))
    .unwrap();

    // Row 0 is a pursuit row, so it is rendered even with the collision filter.
    assert!(frames.join("sample1_frame0.png").exists());
    assert!(!frames.join("sample2_frame0.png").exists());
}

#[test]
fn visualize_can_include_non_collision_rows() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("rows.msgpack");
    let frames = dir.path().join("all_frames");

    generate::execute(GenerateArgs::parse_from([
        "generate",
        "-n",
        "2",
        "-s",
        "4",
        "--no-progress",
        "-o",
        dataset.to_str().unwrap(),
    ]))
    .unwrap();

    visualize::execute(VisualizeArgs::parse_from([
        "visualize",
        dataset.to_str().unwrap(),
        "-o",
        frames.to_str().unwrap(),
        "--collision-only",
        "false",
        "--cell-px",
        "2",
        "--no-progress",
    ]))
    .unwrap();

    assert!(frames.join("sample2_frame0.png").exists());
}

#[test]
fn generate_rejects_infeasible_settings() {
    let dir = TempDir::new().unwrap();
    let args = GenerateArgs::parse_from([
        "generate",
        "--grid-size",
        "3",
        "--min-distance",
        "10",
        "--no-progress",
        "-o",
        dir.path().join("never.csv").to_str().unwrap(),
    ]);
    let err = generate::execute(args).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid generator configuration"));
}

#[test]
fn inspect_reports_missing_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");
    let err = inspect::execute(InspectArgs::parse_from(["inspect", missing.to_str().unwrap()]))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to load dataset"));
}
