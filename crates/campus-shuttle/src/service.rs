//! `ShuttleService` — FIFO boarding queues per station.
//!
//! # Passenger flow
//!
//! ```text
//! join_queue(station, p)   p waits at the back of station's queue
//! board(station)           front of the queue moves on board
//! drop_off(p)              p leaves the shuttle and is appended to history
//! ```
//!
//! Stations are kept in a `BTreeMap`, so snapshots and saved files list them
//! in name order.
//!
//! # Names
//!
//! Station and passenger names go straight into the shuttle file, which
//! separates fields with `|` and passengers with `,`.  Names must be
//! non-empty, passenger names may not contain `,`, and neither may contain
//! `|` or a line break.  Offending names are rejected on entry.

use std::collections::{BTreeMap, VecDeque};

use log::debug;

use campus_core::check_name;

use crate::{ShuttleError, ShuttleResult};

/// Separator between passengers in one shuttle-file field.
pub const PASSENGER_SEPARATOR: char = ',';

// ── ShuttleState ──────────────────────────────────────────────────────────────

/// Plain-data copy of a [`ShuttleService`], for persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShuttleState {
    /// Waiting passengers per station, front of the queue first.
    pub queues: BTreeMap<String, Vec<String>>,
    /// Passengers on board, in boarding order.
    pub onboard: Vec<String>,
    /// Dropped-off passengers, oldest first.
    pub history: Vec<String>,
}

// ── ShuttleService ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct ShuttleService {
    queues:  BTreeMap<String, VecDeque<String>>,
    onboard: Vec<String>,
    history: Vec<String>,
}

impl ShuttleService {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Stations & queues ─────────────────────────────────────────────────

    /// Open `station` with an empty queue.  An existing station is kept as
    /// is.
    pub fn add_station(&mut self, station: &str) -> ShuttleResult<()> {
        check_station(station)?;
        self.queues.entry(station.to_owned()).or_default();
        Ok(())
    }

    /// Put `passenger` at the back of `station`'s queue, opening the
    /// station if needed.
    pub fn join_queue(&mut self, station: &str, passenger: &str) -> ShuttleResult<()> {
        check_station(station)?;
        check_passenger(passenger)?;
        self.queues
            .entry(station.to_owned())
            .or_default()
            .push_back(passenger.to_owned());
        Ok(())
    }

    /// Move the passenger at the front of `station`'s queue on board and
    /// return their name.
    ///
    /// # Errors
    ///
    /// [`ShuttleError::EmptyQueue`] if the station is unknown or nobody is
    /// waiting there.
    pub fn board(&mut self, station: &str) -> ShuttleResult<String> {
        let passenger = self
            .queues
            .get_mut(station)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| ShuttleError::EmptyQueue { station: station.to_owned() })?;
        self.onboard.push(passenger.clone());
        debug!("{passenger} boarded at {station}");
        Ok(passenger)
    }

    /// Take `passenger` off the shuttle and record the drop-off.
    ///
    /// With duplicate names on board, the one who boarded first leaves.
    pub fn drop_off(&mut self, passenger: &str) -> ShuttleResult<()> {
        let at = self
            .onboard
            .iter()
            .position(|p| p == passenger)
            .ok_or_else(|| ShuttleError::NotOnBoard { passenger: passenger.to_owned() })?;
        let passenger = self.onboard.remove(at);
        self.history.push(passenger);
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// Number of passengers waiting at `station`; 0 for unknown stations.
    pub fn queue_size(&self, station: &str) -> usize {
        self.queues.get(station).map_or(0, VecDeque::len)
    }

    /// Passengers waiting at `station`, front first.
    pub fn waiting(&self, station: &str) -> impl Iterator<Item = &str> + '_ {
        self.queues
            .get(station)
            .into_iter()
            .flat_map(|q| q.iter().map(String::as_str))
    }

    /// `(station, queue size)` for every station, by station name.
    pub fn snapshot(&self) -> Vec<(String, usize)> {
        self.queues.iter().map(|(s, q)| (s.clone(), q.len())).collect()
    }

    pub fn station_count(&self) -> usize {
        self.queues.len()
    }

    pub fn onboard(&self) -> &[String] {
        &self.onboard
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    // ── State transfer ────────────────────────────────────────────────────

    pub fn export_state(&self) -> ShuttleState {
        ShuttleState {
            queues: self
                .queues
                .iter()
                .map(|(s, q)| (s.clone(), q.iter().cloned().collect()))
                .collect(),
            onboard: self.onboard.clone(),
            history: self.history.clone(),
        }
    }

    /// Replace everything with `state`.
    ///
    /// Names are checked first; on error the service is left untouched.
    pub fn load_state(&mut self, state: ShuttleState) -> ShuttleResult<()> {
        check_state(&state)?;

        self.queues = state
            .queues
            .into_iter()
            .map(|(s, q)| (s, VecDeque::from(q)))
            .collect();
        self.onboard = state.onboard;
        self.history = state.history;
        Ok(())
    }

    /// Drop every station, passenger and history entry.
    pub fn clear(&mut self) {
        self.queues.clear();
        self.onboard.clear();
        self.history.clear();
    }
}

/// Check every name in `state`.
pub(crate) fn check_state(state: &ShuttleState) -> ShuttleResult<()> {
    for (station, passengers) in &state.queues {
        check_station(station)?;
        passengers.iter().try_for_each(|p| check_passenger(p))?;
    }
    state.onboard.iter().try_for_each(|p| check_passenger(p))?;
    state.history.iter().try_for_each(|p| check_passenger(p))
}

pub(crate) fn check_station(station: &str) -> ShuttleResult<()> {
    check_name("station", station, &[]).map_err(ShuttleError::Unstorable)
}

pub(crate) fn check_passenger(passenger: &str) -> ShuttleResult<()> {
    check_name("passenger", passenger, &[PASSENGER_SEPARATOR]).map_err(ShuttleError::Unstorable)
}
