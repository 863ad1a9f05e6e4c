//! Assistant configuration.

use std::path::{Component, Path, PathBuf};

use crate::{CampusError, CampusResult};

/// Where the assistant keeps its flat data files.
///
/// Typically built in code with the `with_*` setters, or deserialized from a
/// TOML/JSON file by the application when the `serde` feature is on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssistantConfig {
    /// Directory holding every data file.  Created on open if missing.
    pub data_dir: PathBuf,

    /// File name of the activity schedule inside `data_dir`.
    pub schedule_file: String,

    /// File name of the route map inside `data_dir`.
    pub navigation_file: String,

    /// File name of the place records inside `data_dir`.
    pub locations_file: String,

    /// File name of the shuttle queues inside `data_dir`.
    pub shuttle_file: String,
}

impl AssistantConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Self::default() }
    }

    pub fn with_schedule_file(mut self, name: impl Into<String>) -> Self {
        self.schedule_file = name.into();
        self
    }

    pub fn with_navigation_file(mut self, name: impl Into<String>) -> Self {
        self.navigation_file = name.into();
        self
    }

    pub fn with_locations_file(mut self, name: impl Into<String>) -> Self {
        self.locations_file = name.into();
        self
    }

    pub fn with_shuttle_file(mut self, name: impl Into<String>) -> Self {
        self.shuttle_file = name.into();
        self
    }

    pub fn schedule_path(&self) -> PathBuf {
        self.data_dir.join(&self.schedule_file)
    }

    pub fn navigation_path(&self) -> PathBuf {
        self.data_dir.join(&self.navigation_file)
    }

    pub fn locations_path(&self) -> PathBuf {
        self.data_dir.join(&self.locations_file)
    }

    pub fn shuttle_path(&self) -> PathBuf {
        self.data_dir.join(&self.shuttle_file)
    }

    fn file_names(&self) -> [&String; 4] {
        [&self.schedule_file, &self.navigation_file, &self.locations_file, &self.shuttle_file]
    }

    /// Reject file names that would escape `data_dir` or are empty.
    pub fn validate(&self) -> CampusResult<()> {
        let names = self.file_names();
        for name in names {
            let mut parts = Path::new(name).components();
            let bare = matches!(parts.next(), Some(Component::Normal(_))) && parts.next().is_none();
            if !bare {
                return Err(CampusError::Config(format!(
                    "data file name {name:?} must be a bare file name"
                )));
            }
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CampusError::Config(format!(
                    "data file name {name:?} is used twice"
                )));
            }
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            data_dir:        PathBuf::from("data"),
            schedule_file:   "schedule.txt".to_owned(),
            navigation_file: "navigation.txt".to_owned(),
            locations_file:  "locations.txt".to_owned(),
            shuttle_file:    "shuttle.txt".to_owned(),
        }
    }
}
