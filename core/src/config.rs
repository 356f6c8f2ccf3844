use std::env;
use std::path::PathBuf;

pub const ROTATIONS_ENV: &str = "CPV_ROTATIONS";
pub const SPOTS_ENV: &str = "CPV_SPOTS";

pub const DEFAULT_ROTATIONS_PATH: &str = "data/rotations.csv";
pub const DEFAULT_SPOTS_PATH: &str = "data/spots.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rotations_path: PathBuf,
    pub spots_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotations_path: PathBuf::from(DEFAULT_ROTATIONS_PATH),
            spots_path: PathBuf::from(DEFAULT_SPOTS_PATH),
        }
    }
}

impl Settings {
    pub fn new(rotations_path: impl Into<PathBuf>, spots_path: impl Into<PathBuf>) -> Self {
        Self {
            rotations_path: rotations_path.into(),
            spots_path: spots_path.into(),
        }
    }

    pub fn from_env(rotations: Option<PathBuf>, spots: Option<PathBuf>) -> Self {
        Self::resolve(rotations, spots, |key| env::var(key).ok())
    }

    // flag > env > default
    pub fn resolve<F>(rotations: Option<PathBuf>, spots: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |explicit: Option<PathBuf>, key: &str, fallback: PathBuf| {
            explicit
                .or_else(|| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from))
                .unwrap_or(fallback)
        };

        Self {
            rotations_path: pick(rotations, ROTATIONS_ENV, defaults.rotations_path),
            spots_path: pick(spots, SPOTS_ENV, defaults.spots_path),
        }
    }
}
