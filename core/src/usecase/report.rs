use tracing::{info, warn};

use crate::error::Result;
use crate::model::metadata::Metadata;
use crate::model::record::RejectedRecord;
use crate::model::report::Report;
use crate::repository::RecordSource;
use crate::service::dimension_service::calculate;
use crate::service::rotation_service::RotationService;
use crate::service::spot_service::SpotService;

#[derive(Debug, Clone)]
pub struct ReportRun {
    pub report: Report,
    pub metadata: Metadata,
    pub spot_count: usize,
    pub rejected_rotations: Vec<RejectedRecord>,
    pub rejected_spots: Vec<RejectedRecord>,
}

pub struct CpvReportUseCase<'a, R: RecordSource, S: RecordSource> {
    rotations: &'a R,
    spots: &'a S,
}

impl<'a, R: RecordSource, S: RecordSource> CpvReportUseCase<'a, R, S> {
    pub fn new(rotations: &'a R, spots: &'a S) -> Self {
        Self { rotations, spots }
    }

    pub fn run(&self) -> Result<ReportRun> {
        let rotations = RotationService::new(self.rotations).load()?;
        info!(
            rotations = rotations.names.len(),
            hours = rotations.index.len(),
            "rotations loaded"
        );

        let loaded = SpotService::new(self.spots).load(&rotations.index, rotations.names)?;
        info!(
            spots = loaded.spots.len(),
            creatives = loaded.metadata.creative_names.len(),
            days = loaded.metadata.spot_days.len(),
            "spots loaded"
        );

        let skipped = rotations.rejected.len() + loaded.rejected.len();
        if skipped > 0 {
            warn!(skipped, "some input lines were skipped");
        }

        let report = calculate(&loaded.spots, &loaded.metadata);

        Ok(ReportRun {
            report,
            metadata: loaded.metadata,
            spot_count: loaded.spots.len(),
            rejected_rotations: rotations.rejected,
            rejected_spots: loaded.rejected,
        })
    }
}
