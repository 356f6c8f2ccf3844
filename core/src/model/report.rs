use std::collections::BTreeMap;

use serde::Serialize;

pub const KEY_SEPARATOR: &str = " - ";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Creative,
    Rotation,
    Day,
    RotationByDay,
    RotationByCreativeByDay,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Creative,
        Dimension::Rotation,
        Dimension::Day,
        Dimension::RotationByDay,
        Dimension::RotationByCreativeByDay,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Creative => "creative",
            Dimension::Rotation => "rotation",
            Dimension::Day => "day",
            Dimension::RotationByDay => "rotation_by_day",
            Dimension::RotationByCreativeByDay => "rotation_by_creative_by_day",
        }
    }
}

pub fn compound_key(parts: &[&str]) -> String {
    parts.join(KEY_SEPARATOR)
}

/// Renders as `{"cpv": {"creative": {...}, ...}}` with every group present.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    cpv: BTreeMap<Dimension, BTreeMap<String, f64>>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    pub fn new() -> Self {
        Self {
            cpv: Dimension::ALL
                .iter()
                .map(|dim| (*dim, BTreeMap::new()))
                .collect(),
        }
    }

    pub fn insert(&mut self, dimension: Dimension, key: impl Into<String>, cpv: f64) {
        self.cpv.entry(dimension).or_default().insert(key.into(), cpv);
    }

    pub fn group(&self, dimension: Dimension) -> Option<&BTreeMap<String, f64>> {
        self.cpv.get(&dimension)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.cpv.keys().copied()
    }

    pub fn get(&self, dimension: Dimension, key: &str) -> Option<f64> {
        self.cpv.get(&dimension).and_then(|g| g.get(key)).copied()
    }

    // (dimension, key, cpv) in report order
    pub fn rows(&self) -> impl Iterator<Item = (Dimension, &str, f64)> + '_ {
        self.cpv.iter().flat_map(|(dim, group)| {
            group.iter().map(move |(key, cpv)| (*dim, key.as_str(), *cpv))
        })
    }
}
