use chrono::NaiveTime;

use crate::time::hour_span;

pub const OTHER_ROTATION: &str = "Other";

const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct RotationWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub name: String,
}

impl RotationWindow {
    pub fn new(start: NaiveTime, end: NaiveTime, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }

    pub fn hours(&self) -> Vec<u32> {
        hour_span(self.start, self.end)
    }
}

/// Hour of day -> rotation names, overlaps kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationIndex {
    buckets: [Vec<String>; HOURS_PER_DAY],
}

impl RotationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_windows<'a>(windows: impl IntoIterator<Item = &'a RotationWindow>) -> Self {
        let mut index = Self::new();
        for window in windows {
            index.insert_window(window);
        }
        index
    }

    pub fn insert_window(&mut self, window: &RotationWindow) {
        for hour in window.hours() {
            self.buckets[hour as usize].push(window.name.clone());
        }
    }

    pub fn get(&self, hour: u32) -> Option<&[String]> {
        self.buckets
            .get(hour as usize)
            .filter(|names| !names.is_empty())
            .map(Vec::as_slice)
    }

    pub fn lookup(&self, hour: u32) -> Vec<&str> {
        match self.get(hour) {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => vec![OTHER_ROTATION],
        }
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, names)| !names.is_empty())
            .map(|(hour, _)| hour as u32)
    }

    pub fn len(&self) -> usize {
        self.hours().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
