//! The place record.

use campus_core::{check_field, check_name, CampusResult, LocationId};

/// One named place on campus: a building, a room, a landmark.
///
/// `name` doubles as the route-graph node name, so it must be non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// Free-form category, e.g. `"library"` or `"canteen"`.
    pub kind: String,
    pub description: String,
    /// Visit count or rating; higher ranks first.
    pub popularity: i32,
}

impl Location {
    pub fn new(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
        popularity: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            popularity,
        }
    }

    /// Check that every text field can be written to one locations line.
    pub fn check_storable(&self) -> CampusResult<()> {
        check_name("name", &self.name, &[])?;
        check_field("kind", &self.kind, &[])?;
        check_field("description", &self.description, &[])
    }
}
