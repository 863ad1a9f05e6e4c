//! `PlaceStore` — the place records, with search and ranking views.
//!
//! Records are kept in insertion order in a plain `Vec`.  Campus place lists
//! are small (tens to hundreds), so lookups by id scan linearly.

use log::debug;

use campus_core::LocationId;

use crate::{Location, PlaceError, PlaceResult};

/// Place records keyed by a unique [`LocationId`].
#[derive(Clone, Debug, Default)]
pub struct PlaceStore {
    locations: Vec<Location>,
}

impl PlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by adding `locations` in order.
    pub fn from_locations<I>(locations: I) -> PlaceResult<Self>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut store = Self::new();
        for location in locations {
            store.add(location)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── CRUD ──────────────────────────────────────────────────────────────

    /// Append a new place.
    ///
    /// # Errors
    ///
    /// [`PlaceError::DuplicateId`] if the id is taken, or
    /// [`PlaceError::Unstorable`] if a text field cannot be persisted.  The
    /// store is left untouched either way.
    pub fn add(&mut self, location: Location) -> PlaceResult<()> {
        check(&location)?;
        if self.position(location.id).is_some() {
            return Err(PlaceError::DuplicateId(location.id));
        }
        self.locations.push(location);
        Ok(())
    }

    /// Remove and return the place with `id`.
    pub fn remove(&mut self, id: LocationId) -> PlaceResult<Location> {
        let at = self.position(id).ok_or(PlaceError::NotFound(id))?;
        Ok(self.locations.remove(at))
    }

    /// Replace every field of the place with `id` by `replacement`'s.
    ///
    /// The id itself never changes: `replacement.id` is ignored.
    pub fn update(&mut self, id: LocationId, mut replacement: Location) -> PlaceResult<()> {
        replacement.id = id;
        check(&replacement)?;
        let at = self.position(id).ok_or(PlaceError::NotFound(id))?;
        self.locations[at] = replacement;
        Ok(())
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.locations.clear();
    }

    /// Replace the contents with `locations`, added in order.
    ///
    /// Stops at the first record that [`add`](Self::add) rejects; the ones
    /// before it stay.
    pub fn reload<I>(&mut self, locations: I) -> PlaceResult<()>
    where
        I: IntoIterator<Item = Location>,
    {
        self.clear();
        for location in locations {
            self.add(location)?;
        }
        debug!("place store reloaded with {} places", self.len());
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// All places in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }

    /// Place names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.locations.iter().map(|l| l.name.as_str())
    }

    /// Places whose name contains `keyword`, ignoring case, in insertion
    /// order.  An empty keyword matches every place.
    pub fn search_by_name(&self, keyword: &str) -> Vec<&Location> {
        let needle = keyword.to_lowercase();
        self.locations
            .iter()
            .filter(|l| needle.is_empty() || l.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Every place, most popular first.  Equal popularity keeps insertion
    /// order.
    pub fn rank_by_popularity(&self) -> Vec<&Location> {
        let mut ranked: Vec<&Location> = self.locations.iter().collect();
        ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        ranked
    }

    fn position(&self, id: LocationId) -> Option<usize> {
        self.locations.iter().position(|l| l.id == id)
    }
}

impl<'a> IntoIterator for &'a PlaceStore {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check(location: &Location) -> PlaceResult<()> {
    location
        .check_storable()
        .map_err(|source| PlaceError::Unstorable { id: location.id, source })
}
