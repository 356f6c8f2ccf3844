use std::collections::BTreeSet;

use crate::error::{CpvError, Result};
use crate::model::record::Record;
use crate::model::report::Dimension;
use crate::render::to_pretty_text;
use crate::repository::{CsvFileSource, RecordSource};
use crate::service::dimension_service::{calc_cpv, filter_sum};
use crate::service::rotation_service::RotationService;
use crate::service::spot_service::SpotService;
use crate::usecase::report::CpvReportUseCase;
use crate::{run, Settings};

const ROTATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/rotations.csv");
const SPOTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/spots.csv");

struct MockSource {
    records: Vec<Record>,
}

impl MockSource {
    fn new(rows: &[&[&str]]) -> Self {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, r)| Record::new(i as u64 + 2, r.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { records }
    }
}

impl RecordSource for MockSource {
    fn read_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

fn fixture_run() -> crate::usecase::report::ReportRun {
    run(&Settings::new(ROTATIONS, SPOTS)).unwrap()
}

#[test]
fn test_fixture_loading() {
    let rotations = RotationService::new(CsvFileSource::new(ROTATIONS)).load().unwrap();
    assert_eq!(rotations.index.len(), 14);
    assert_eq!(rotations.names.len(), 3);

    let loaded = SpotService::new(CsvFileSource::new(SPOTS))
        .load(&rotations.index, rotations.names.clone())
        .unwrap();
    assert_eq!(loaded.spots.len(), 10);
    assert_eq!(loaded.metadata.spot_days.len(), 2);
    assert_eq!(loaded.metadata.creative_names.len(), 2);
    assert!(loaded.rejected.is_empty());

    let (spend, views) = filter_sum(|s| s.creative.len() > 3, &loaded.spots);
    assert_eq!(spend, 4361.0);
    assert_eq!(views, 1270);
    assert_eq!(calc_cpv(spend, views), 3.43);

    assert_eq!(filter_sum(|s| s.creative.is_empty(), &loaded.spots), (0.0, 0));
}

#[test]
fn test_fixture_report_group_sizes() {
    let outcome = fixture_run();
    let report = &outcome.report;

    assert_eq!(report.dimensions().count(), 5);
    assert_eq!(report.group(Dimension::Creative).map(|g| g.len()), Some(2));
    assert_eq!(report.group(Dimension::Rotation).map(|g| g.len()), Some(3));
    assert_eq!(report.group(Dimension::Day).map(|g| g.len()), Some(2));
    assert_eq!(report.group(Dimension::RotationByDay).map(|g| g.len()), Some(5));
    assert_eq!(report.group(Dimension::RotationByCreativeByDay).map(|g| g.len()), Some(7));
    assert_eq!(outcome.spot_count, 10);
}

#[test]
fn test_fixture_report_values() {
    let report = fixture_run().report;

    assert_eq!(report.get(Dimension::Creative, "TEST001H"), Some(2.89));
    assert_eq!(report.get(Dimension::Creative, "TEST002H"), Some(3.94));

    assert_eq!(report.get(Dimension::Rotation, "Morning"), Some(2.57));
    assert_eq!(report.get(Dimension::Rotation, "Afternoon"), Some(3.51));
    assert_eq!(report.get(Dimension::Rotation, "Prime"), Some(4.17));
    // Spots outside every window only count toward creative and day.
    assert_eq!(report.get(Dimension::Rotation, "Other"), None);

    assert_eq!(report.get(Dimension::Day, "2016-01-02"), Some(2.89));
    assert_eq!(report.get(Dimension::Day, "2016-01-03"), Some(4.17));

    assert_eq!(report.get(Dimension::RotationByDay, "Morning - 2016-01-02"), Some(1.48));
    assert_eq!(report.get(Dimension::RotationByDay, "Morning - 2016-01-03"), Some(3.93));
    assert_eq!(report.get(Dimension::RotationByDay, "Afternoon - 2016-01-03"), Some(3.57));
    assert_eq!(report.get(Dimension::RotationByDay, "Prime - 2016-01-03"), None);

    assert_eq!(
        report.get(Dimension::RotationByCreativeByDay, "Afternoon - TEST002H - 2016-01-03"),
        Some(4.29)
    );
    assert_eq!(
        report.get(Dimension::RotationByCreativeByDay, "Morning - TEST002H - 2016-01-02"),
        Some(1.67)
    );
    assert_eq!(
        report.get(Dimension::RotationByCreativeByDay, "Prime - TEST001H - 2016-01-02"),
        None
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let first = to_pretty_text(&fixture_run().report).unwrap();
    let second = to_pretty_text(&fixture_run().report).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_overlapping_rotations_double_count() {
    let rotations = MockSource::new(&[
        &["12:00 PM", "4:00 PM", "Afternoon"],
        &["3:00 PM", "8:00 PM", "Prime"],
    ]);
    let spots = MockSource::new(&[
        &["01/02/2016", "3:15 PM", "TEST001H", "300.00", "100"],
        &["01/02/2016", "1:00 PM", "TEST001H", "100.00", "100"],
    ]);

    let outcome = CpvReportUseCase::new(&rotations, &spots).run().unwrap();
    let report = &outcome.report;

    assert_eq!(outcome.spot_count, 3);
    assert_eq!(report.get(Dimension::Rotation, "Afternoon"), Some(2.0));
    assert_eq!(report.get(Dimension::Rotation, "Prime"), Some(3.0));
    // The overlapping spot is counted once per rotation.
    assert_eq!(report.get(Dimension::Creative, "TEST001H"), Some(2.33));
}

#[test]
fn test_bad_lines_are_reported_not_fatal() {
    let rotations = MockSource::new(&[&["8:00 AM", "11:00 AM", "Morning"], &["", "1:00 PM", "Lunch"]]);
    let spots = MockSource::new(&[
        &["01/02/2016", "8:30 AM", "TEST001H", "120.50", "100"],
        &["01/02/2016", "9:30 AM", "", "250.00", "150"],
    ]);

    let outcome = CpvReportUseCase::new(&rotations, &spots).run().unwrap();

    assert_eq!(outcome.rejected_rotations.len(), 1);
    assert_eq!(outcome.rejected_spots.len(), 1);
    assert_eq!(outcome.rejected_spots[0].line, 3);
    assert_eq!(outcome.spot_count, 1);
    assert_eq!(
        outcome.metadata.rotation_names,
        ["Morning".to_string()].into_iter().collect::<BTreeSet<_>>()
    );
    assert_eq!(outcome.report.get(Dimension::Creative, "TEST001H"), Some(1.21));
}

#[test]
fn test_unparseable_value_aborts_run() {
    let rotations = MockSource::new(&[&["8:00 AM", "11:00 AM", "Morning"]]);
    let spots = MockSource::new(&[&["01/02/2016", "8:30 AM", "TEST001H", "12O.50", "100"]]);

    let err = CpvReportUseCase::new(&rotations, &spots).run().unwrap_err();
    assert!(matches!(err, CpvError::Parse { field: "spend", .. }));
    assert!(err.to_string().contains("12O.50"));
}

#[test]
fn test_missing_input_file() {
    let err = run(&Settings::new(ROTATIONS, "no/such/spots.csv")).unwrap_err();
    assert!(matches!(err, CpvError::Io { .. }));
}
