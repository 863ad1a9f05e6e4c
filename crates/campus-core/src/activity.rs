//! The scheduled event record shared by the schedule engine and its codec.

use crate::{check_field, ActivityId, CampusResult, TimeKey};

/// One scheduled campus event.
///
/// `start_time` is kept verbatim so that persisted files round-trip exactly;
/// the ordering key is derived on demand with [`Activity::time_key`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    /// Name of the place the activity happens at (a route-graph node name).
    pub location: String,
    /// `YYYY-MM-DD HH:MM`.
    pub start_time: String,
    pub description: String,
}

impl Activity {
    pub fn new(
        id: impl Into<ActivityId>,
        title: impl Into<String>,
        location: impl Into<String>,
        start_time: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            start_time: start_time.into(),
            description: description.into(),
        }
    }

    /// Ordering key of `start_time`.
    pub fn time_key(&self) -> CampusResult<TimeKey> {
        TimeKey::parse(&self.start_time)
    }

    /// Check that every text field can be written to one schedule line.
    pub fn check_storable(&self) -> CampusResult<()> {
        check_field("title", &self.title, &[])?;
        check_field("location", &self.location, &[])?;
        check_field("start time", &self.start_time, &[])?;
        check_field("description", &self.description, &[])
    }
}
