//! The `CampusAssistant` and its load/save cycle.

use std::fs;

use log::{debug, info};

use campus_core::{check_name, Activity, AssistantConfig, LocationId};
use campus_nav::{load_graph, save_graph, Route, RouteGraph};
use campus_places::{load_locations, save_locations, Location, PlaceStore};
use campus_schedule::{load_activities, save_activities, TemporalIndex};
use campus_shuttle::{load_shuttle, save_shuttle, ShuttleService};

use crate::{AssistantError, AssistantResult};

// ── LoadSummary ───────────────────────────────────────────────────────────────

/// What [`CampusAssistant::load`] found on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub places:             usize,
    pub skipped_places:     usize,
    pub stations:           usize,
    pub skipped_shuttle:    usize,
    pub activities:         usize,
    pub skipped_activities: usize,
    pub route_nodes:        usize,
    pub directed_edges:     usize,
    pub skipped_routes:     usize,
}

// ── CampusAssistant ───────────────────────────────────────────────────────────

/// Owns the place store, the shuttle service, the schedule index and the
/// route graph, and moves all four to and from flat files under
/// [`AssistantConfig::data_dir`].
///
/// Every stored place is a route-graph node: places are added to the graph
/// as they are added to the store, and the graph is re-seeded from the store
/// on every [`load`](Self::load).
///
/// Nothing is written implicitly: call [`save`](Self::save) before dropping
/// to persist changes.
///
/// # Example
///
/// ```no_run
/// use campus_core::{Activity, AssistantConfig};
/// use campus_places::Location;
/// use campus_assistant::CampusAssistant;
///
/// let mut assistant = CampusAssistant::open(AssistantConfig::new("data"))?;
/// assistant.add_place(Location::new(1, "Library", "study", "", 120))?;
/// assistant.add_place(Location::new(2, "Gym", "sport", "", 80))?;
/// assistant.connect("Library", "Gym", 5.0)?;
/// assistant.add_activity(Activity::new(1, "Yoga", "Gym", "2024-01-10 09:00", ""))?;
/// assistant.save()?;
/// # Ok::<(), campus_assistant::AssistantError>(())
/// ```
pub struct CampusAssistant {
    config:   AssistantConfig,
    places:   PlaceStore,
    shuttle:  ShuttleService,
    schedule: TemporalIndex,
    routes:   RouteGraph,
}

impl CampusAssistant {
    /// Validate `config`, create the data directory if needed, and load
    /// whatever data files exist.  Missing files load as empty.
    pub fn open(config: AssistantConfig) -> AssistantResult<Self> {
        config.validate()?;
        ensure_dir(&config)?;

        let mut assistant = Self {
            config,
            places:   PlaceStore::new(),
            shuttle:  ShuttleService::new(),
            schedule: TemporalIndex::new(),
            routes:   RouteGraph::new(),
        };
        let summary = assistant.load()?;
        info!(
            "opened {}: {} places, {} stations, {} activities, {} directed edges",
            assistant.config.data_dir.display(),
            summary.places,
            summary.stations,
            summary.activities,
            summary.directed_edges
        );
        Ok(assistant)
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Replace in-memory state with the contents of the data files.
    ///
    /// Malformed lines are skipped (and counted), never fatal.
    pub fn load(&mut self) -> AssistantResult<LoadSummary> {
        let places = load_locations(&self.config.locations_path())?;
        let shuttle = load_shuttle(&self.config.shuttle_path())?;
        let schedule = load_activities(&self.config.schedule_path())?;

        let mut summary = LoadSummary {
            places: places.locations.len(),
            skipped_places: places.skipped,
            stations: shuttle.state.queues.len(),
            skipped_shuttle: shuttle.skipped,
            activities: schedule.activities.len(),
            skipped_activities: schedule.skipped,
            ..LoadSummary::default()
        };

        // Each codec already dropped the lines its store would reject, so
        // none of these stop part way.
        self.places.reload(places.locations)?;
        self.shuttle.load_state(shuttle.state)?;
        self.schedule.reload(schedule.activities)?;

        self.routes.clear();
        for name in self.places.names() {
            self.routes.add_node(name)?;
        }
        summary.skipped_routes = load_graph(&self.config.navigation_path(), &mut self.routes)?;
        summary.route_nodes = self.routes.node_count();
        summary.directed_edges = self.routes.edge_count();

        debug!("load summary: {summary:?}");
        Ok(summary)
    }

    /// Write places, shuttle queues, the schedule (time order) and the route
    /// map to the data files.
    pub fn save(&self) -> AssistantResult<()> {
        ensure_dir(&self.config)?;
        save_locations(&self.config.locations_path(), self.places.as_slice())?;
        save_shuttle(&self.config.shuttle_path(), &self.shuttle.export_state())?;
        save_activities(&self.config.schedule_path(), &self.schedule.ordered_sequence())?;
        save_graph(&self.config.navigation_path(), &self.routes)?;
        debug!("saved data to {}", self.config.data_dir.display());
        Ok(())
    }

    // ── Places ────────────────────────────────────────────────────────────

    /// Store a new place and make it a route-graph node.
    pub fn add_place(&mut self, location: Location) -> AssistantResult<()> {
        let name = location.name.clone();
        self.places.add(location)?;
        self.routes.add_node(&name)?;
        Ok(())
    }

    /// Remove a place record.  Its graph node and walkways stay: the graph
    /// is append-only.
    pub fn remove_place(&mut self, id: LocationId) -> AssistantResult<Location> {
        Ok(self.places.remove(id)?)
    }

    /// Replace a place's fields.  A new name becomes a graph node too.
    pub fn update_place(&mut self, id: LocationId, replacement: Location) -> AssistantResult<()> {
        let name = replacement.name.clone();
        self.places.update(id, replacement)?;
        self.routes.add_node(&name)?;
        Ok(())
    }

    pub fn place(&self, id: LocationId) -> Option<&Location> {
        self.places.get(id)
    }

    /// Places whose name contains `keyword`, ignoring case.
    pub fn search_places(&self, keyword: &str) -> Vec<&Location> {
        self.places.search_by_name(keyword)
    }

    /// Every place, most popular first.
    pub fn rank_places(&self) -> Vec<&Location> {
        self.places.rank_by_popularity()
    }

    // ── Shuttle ───────────────────────────────────────────────────────────

    pub fn join_queue(&mut self, station: &str, passenger: &str) -> AssistantResult<()> {
        self.shuttle.join_queue(station, passenger)?;
        Ok(())
    }

    /// Board the next passenger waiting at `station`; returns their name.
    pub fn board(&mut self, station: &str) -> AssistantResult<String> {
        Ok(self.shuttle.board(station)?)
    }

    pub fn drop_off(&mut self, passenger: &str) -> AssistantResult<()> {
        self.shuttle.drop_off(passenger)?;
        Ok(())
    }

    // ── Schedule ──────────────────────────────────────────────────────────

    /// Insert `activity` into the schedule.
    ///
    /// Activities whose text could not be saved are refused up front, so a
    /// later [`save`](Self::save) never drops them.
    pub fn add_activity(&mut self, activity: Activity) -> AssistantResult<()> {
        activity.check_storable()?;
        self.schedule.insert(activity)?;
        Ok(())
    }

    /// All activities in start-time order.
    pub fn upcoming(&self) -> Vec<Activity> {
        self.schedule.ordered_sequence()
    }

    /// Drop activities starting before `cutoff`; returns how many went.
    pub fn expire_before(&mut self, cutoff: &str) -> AssistantResult<usize> {
        Ok(self.schedule.remove_expired(cutoff)?)
    }

    /// Shape-preserving pre-order copy of the schedule.
    pub fn backup(&self) -> Vec<Activity> {
        self.schedule.snapshot_pre_order()
    }

    // ── Navigation ────────────────────────────────────────────────────────

    /// Add a two-way walkway between `a` and `b`, creating either end as a
    /// graph node if needed.
    pub fn connect(&mut self, a: &str, b: &str, distance: f64) -> AssistantResult<()> {
        check_name("place name", a, &[])?;
        check_name("place name", b, &[])?;
        self.routes.add_road(a, b, distance)?;
        Ok(())
    }

    pub fn route(&self, from: &str, to: &str) -> Route {
        self.routes.shortest_path(from, to)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn places(&self) -> &PlaceStore {
        &self.places
    }

    pub fn places_mut(&mut self) -> &mut PlaceStore {
        &mut self.places
    }

    pub fn shuttle(&self) -> &ShuttleService {
        &self.shuttle
    }

    pub fn shuttle_mut(&mut self) -> &mut ShuttleService {
        &mut self.shuttle
    }

    pub fn schedule(&self) -> &TemporalIndex {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut TemporalIndex {
        &mut self.schedule
    }

    pub fn routes(&self) -> &RouteGraph {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut RouteGraph {
        &mut self.routes
    }
}

fn ensure_dir(config: &AssistantConfig) -> AssistantResult<()> {
    fs::create_dir_all(&config.data_dir).map_err(|source| AssistantError::Io {
        path: config.data_dir.clone(),
        source,
    })
}
