use std::collections::BTreeSet;

use chrono::Timelike;
use tracing::{debug, error};

use crate::error::{CpvError, Result};
use crate::model::metadata::Metadata;
use crate::model::record::{Record, RejectedRecord};
use crate::model::rotation::RotationIndex;
use crate::model::spot::Spot;
use crate::repository::RecordSource;
use crate::time::parse_aired_at;

// date, time, creative_id, spend, views
const SPOT_FIELDS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct SpotLoad {
    pub spots: Vec<Spot>,
    pub metadata: Metadata,
    pub rejected: Vec<RejectedRecord>,
}

pub struct SpotService<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> SpotService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn load(&self, index: &RotationIndex, rotation_names: BTreeSet<String>) -> Result<SpotLoad> {
        let records = self.source.read_records()?;
        load_spots(&records, index, rotation_names)
    }
}

fn parse_spend(record: &Record) -> Result<f64> {
    let raw = record.field(3);
    let spend: f64 = raw
        .parse()
        .map_err(|e| CpvError::parse(record.line, "spend", raw, e))?;
    if !spend.is_finite() || spend < 0.0 {
        return Err(CpvError::parse(
            record.line,
            "spend",
            raw,
            "expected a non-negative amount",
        ));
    }
    Ok(spend)
}

fn parse_views(record: &Record) -> Result<u64> {
    let raw = record.field(4);
    raw.parse()
        .map_err(|e| CpvError::parse(record.line, "views", raw, e))
}

pub fn parse_spots(record: &Record, index: &RotationIndex) -> Result<Vec<Spot>> {
    let aired_at = parse_aired_at(record.field(0), record.field(1), record.line)?;
    let spend = parse_spend(record)?;
    let views = parse_views(record)?;

    let rotations = index.lookup(aired_at.hour());
    Ok(Spot::fan_out(aired_at, record.field(2), spend, views, &rotations))
}

pub fn load_spots(
    records: &[Record],
    index: &RotationIndex,
    rotation_names: BTreeSet<String>,
) -> Result<SpotLoad> {
    let mut load = SpotLoad {
        metadata: Metadata::with_rotations(rotation_names),
        ..Default::default()
    };

    for record in records {
        if !record.is_complete(SPOT_FIELDS) {
            error!(line = record.line, fields = ?record.fields, "Bad line");
            load.rejected.push(RejectedRecord::incomplete(record, SPOT_FIELDS));
            continue;
        }

        let spots = parse_spots(record, index)?;
        if let Some(first) = spots.first() {
            load.metadata.creative_names.insert(first.creative.clone());
            load.metadata.spot_days.insert(first.date);
        }
        load.spots.extend(spots);
    }

    debug!(
        spots = load.spots.len(),
        creatives = load.metadata.creative_names.len(),
        days = load.metadata.spot_days.len(),
        rejected = load.rejected.len(),
        "spots loaded"
    );
    Ok(load)
}
