use std::collections::BTreeSet;

use tracing::{debug, error};

use crate::error::Result;
use crate::model::record::{Record, RejectedRecord};
use crate::model::rotation::{RotationIndex, RotationWindow};
use crate::repository::RecordSource;
use crate::time::parse_clock_time;

// start_time, end_time, rotation_name
const ROTATION_FIELDS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct RotationLoad {
    pub index: RotationIndex,
    pub names: BTreeSet<String>,
    pub rejected: Vec<RejectedRecord>,
}

pub struct RotationService<R: RecordSource> {
    source: R,
}

impl<R: RecordSource> RotationService<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn load(&self) -> Result<RotationLoad> {
        let records = self.source.read_records()?;
        build_rotation_index(&records)
    }
}

pub fn parse_window(record: &Record) -> Result<RotationWindow> {
    let start = parse_clock_time(record.field(0), record.line, "start time")?;
    let end = parse_clock_time(record.field(1), record.line, "end time")?;
    Ok(RotationWindow::new(start, end, record.field(2)))
}

pub fn build_rotation_index(records: &[Record]) -> Result<RotationLoad> {
    let mut load = RotationLoad::default();

    for record in records {
        if !record.is_complete(ROTATION_FIELDS) {
            error!(line = record.line, fields = ?record.fields, "Bad line");
            load.rejected.push(RejectedRecord::incomplete(record, ROTATION_FIELDS));
            continue;
        }

        let window = parse_window(record)?;
        load.index.insert_window(&window);
        load.names.insert(window.name);
    }

    debug!(
        hours = load.index.len(),
        rotations = load.names.len(),
        rejected = load.rejected.len(),
        "rotation index built"
    );
    Ok(load)
}
