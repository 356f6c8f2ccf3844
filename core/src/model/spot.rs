use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Spot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub creative: String,
    pub spend: f64,
    pub views: u64,
    pub rotation: String,
}

impl Spot {
    // Every copy carries the full spend and views.
    pub fn fan_out(
        aired_at: NaiveDateTime,
        creative: &str,
        spend: f64,
        views: u64,
        rotations: &[&str],
    ) -> Vec<Spot> {
        rotations
            .iter()
            .map(|rotation| Spot {
                date: aired_at.date(),
                time: aired_at.time(),
                creative: creative.to_string(),
                spend,
                views,
                rotation: rotation.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
