//! Dataset generation: determinism, label balance and persistence round trips.

mod common;

use common::assert_row_well_formed;
use gridcollide::{
    adapters::{CsvRepository, DatasetFormat, MsgPackRepository},
    app::App,
    dataset::{DatasetGenerator, DatasetKind, DatasetSummary, GeneratorConfig},
    ports::DatasetRepository,
};
use tempfile::TempDir;

fn random_walk(samples: usize, seed: u64) -> GeneratorConfig {
    GeneratorConfig::default()
        .with_num_samples(samples)
        .with_seed(seed)
}

#[test]
fn parallel_generation_matches_row_by_row_generation() {
    let generator = DatasetGenerator::new(random_walk(64, 1234)).unwrap();
    let parallel = generator.generate().unwrap();
    let sequential: Vec<_> = (0..64)
        .map(|index| generator.generate_row(index).unwrap())
        .collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn different_seeds_give_different_datasets() {
    let a = DatasetGenerator::new(random_walk(10, 1)).unwrap().generate().unwrap();
    let b = DatasetGenerator::new(random_walk(10, 2)).unwrap().generate().unwrap();
    assert_ne!(a, b);
}

#[test]
fn random_walk_dataset_is_balanced_and_consistent() {
    let rows = DatasetGenerator::new(random_walk(101, 77))
        .unwrap()
        .generate()
        .unwrap();
    rows.iter().for_each(assert_row_well_formed);

    let summary = DatasetSummary::from_rows(&rows);
    assert_eq!(summary.rows, 101);
    assert_eq!(summary.collisions, 51);
    assert_eq!(summary.non_collisions, 50);
    assert_eq!(summary.mislabeled, 0);
    assert!(summary.grid_sizes.contains(&10));

    // Placement keeps starting cells apart.
    for row in &rows {
        let start = row.trajectory.first();
        assert!(start.blue.euclidean_distance(start.red) >= 3.0);
    }
}

#[test]
fn fixed_direction_dataset_is_consistent() {
    let config = GeneratorConfig::default()
        .with_kind(DatasetKind::FixedDirection)
        .with_grid_size(7)
        .with_num_samples(80)
        .with_seed(5);
    let rows = DatasetGenerator::new(config).unwrap().generate().unwrap();
    for row in &rows {
        assert_row_well_formed(row);
        assert!(row.trajectory.len() <= 8);
    }
}

#[test]
fn csv_and_msgpack_store_the_same_rows() {
    let dir = TempDir::new().unwrap();
    let rows = DatasetGenerator::new(random_walk(20, 9)).unwrap().generate().unwrap();

    let csv_path = dir.path().join("rows.csv");
    let msgpack_path = dir.path().join("rows.msgpack");
    CsvRepository::new().save(&rows, &csv_path).unwrap();
    MsgPackRepository::new().save(&rows, &msgpack_path).unwrap();

    assert_eq!(CsvRepository::new().load(&csv_path).unwrap(), rows);
    assert_eq!(MsgPackRepository::new().load(&msgpack_path).unwrap(), rows);
}

#[test]
fn app_dispatches_on_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.bin");
    let app = App::with_format(DatasetFormat::MsgPack);

    let rows = app
        .create_generator(random_walk(6, 3))
        .unwrap()
        .generate()
        .unwrap();
    app.save_dataset(&rows, &path).unwrap();

    assert_eq!(app.load_dataset(&path).unwrap(), rows);
    // Binary output, not the CSV header.
    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.starts_with(b"grid_size"));
}
