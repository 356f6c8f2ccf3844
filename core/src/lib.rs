pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Settings;
pub use error::{CpvError, Result};
pub use model::metadata::Metadata;
pub use model::record::{Record, RejectedRecord};
pub use model::report::{Dimension, Report};
pub use model::rotation::{RotationIndex, RotationWindow, OTHER_ROTATION};
pub use model::spot::Spot;
pub use repository::{CsvFileSource, RecordSource};
pub use service::dimension_service::{calc_cpv, calculate, filter_sum};
pub use usecase::report::{CpvReportUseCase, ReportRun};

/// Runs the whole pipeline against the CSV files named in `settings`.
pub fn run(settings: &Settings) -> Result<ReportRun> {
    let rotations = CsvFileSource::new(&settings.rotations_path);
    let spots = CsvFileSource::new(&settings.spots_path);
    CpvReportUseCase::new(&rotations, &spots).run()
}
