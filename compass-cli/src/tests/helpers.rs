//! Test helpers for laying out plan requests and catalogues on disk.

use camino::{Utf8Path, Utf8PathBuf};
use compass_core::test_support::{istanbul_sights, poi};
use compass_core::{Preferences, WeatherCondition, WeatherState};
use serde::Serialize;
use tempfile::TempDir;

use crate::plan::PlanRequest;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn write_json<T: Serialize>(path: &Utf8Path, value: &T) {
    let payload = serde_json::to_string_pretty(value).expect("serialize test payload");
    write_utf8(path, payload.as_bytes());
}

/// Temporary directory holding the files of one CLI invocation.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_catalogue(&self) -> Utf8PathBuf {
        let path = self.path("catalogue.json");
        write_json(&path, &istanbul_sights());
        path
    }
}

/// A day without breaks so stop indices stay predictable.
pub(super) fn quiet_day(start: &str, end: &str) -> Preferences {
    Preferences::try_new(start, end)
        .expect("valid day window")
        .with_breaks(false, false)
}

/// Two sights roughly 1.1 km apart, both open through the morning.
pub(super) fn nearby_sights_request() -> PlanRequest {
    PlanRequest {
        candidates: vec![
            poi(1, 41.0, 28.0, ("09:00", "17:00"), 120).with_rating(4.8),
            poi(2, 41.01, 28.0, ("08:30", "18:30"), 60).with_rating(4.5),
        ],
        preferences: quiet_day("09:00", "18:00"),
        ..PlanRequest::default()
    }
}

/// Every catalogue sight selected by id on a rainy day.
pub(super) fn rainy_selection_request() -> PlanRequest {
    PlanRequest {
        selected: istanbul_sights().iter().map(|sight| sight.id).collect(),
        preferences: quiet_day("08:30", "20:00"),
        weather: WeatherState::new(WeatherCondition::Rainy, 13.0),
        ..PlanRequest::default()
    }
}
