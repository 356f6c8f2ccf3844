use std::collections::BTreeSet;

use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub rotation_names: BTreeSet<String>,
    pub creative_names: BTreeSet<String>,
    pub spot_days: BTreeSet<NaiveDate>,
}

impl Metadata {
    pub fn with_rotations(rotation_names: BTreeSet<String>) -> Self {
        Self {
            rotation_names,
            ..Default::default()
        }
    }
}
