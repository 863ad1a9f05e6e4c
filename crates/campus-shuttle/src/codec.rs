//! Shuttle file codec.
//!
//! # Line format
//!
//! ```text
//! Q|North Gate|Ann,Bob      queue at a station, front first
//! Q|Library|                station with nobody waiting
//! O|Cara                    passengers on board
//! D|Dan,Eve                 drop-off history, oldest first
//! ```
//!
//! Writers emit one `Q` line per station in name order, then exactly one `O`
//! and one `D` line.  Readers also accept an untagged `station|a,b` line as
//! a queue.
//!
//! # Leniency
//!
//! Lines that fit no record type, and `Q` lines without a station or a
//! passenger field, are logged at `warn` and counted.  Empty passenger
//! entries (`a,,b`) are dropped.  Blank lines, `\r\n` endings, and a leading
//! UTF-8 BOM are accepted.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, warn};

use crate::service::{check_state, PASSENGER_SEPARATOR};
use crate::{ShuttleResult, ShuttleState};

const BOM: char = '\u{feff}';

// ── Read ──────────────────────────────────────────────────────────────────────

/// Outcome of reading a shuttle file.
#[derive(Debug, Default)]
pub struct ShuttleLoad {
    pub state:   ShuttleState,
    /// Lines that were dropped as malformed.
    pub skipped: usize,
}

/// Parse a shuttle state from any `Read` source.
pub fn read_shuttle<R: Read>(reader: R) -> ShuttleResult<ShuttleLoad> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut load = ShuttleLoad::default();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        if let Err(reason) = apply_record(&record, &mut load.state) {
            warn!("shuttle line {line}: {reason}; skipping");
            load.skipped += 1;
        }
    }
    Ok(load)
}

/// Read a shuttle file.  A missing file reads as an empty service.
pub fn load_shuttle(path: &Path) -> ShuttleResult<ShuttleLoad> {
    match File::open(path) {
        Ok(file) => {
            let load = read_shuttle(file)?;
            debug!(
                "loaded {} stations from {} ({} skipped)",
                load.state.queues.len(),
                path.display(),
                load.skipped
            );
            Ok(load)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ShuttleLoad::default()),
        Err(e) => Err(e.into()),
    }
}

// ── Write ─────────────────────────────────────────────────────────────────────

/// Serialize `state` as `Q` lines followed by one `O` and one `D` line.
///
/// Every name is checked before the first byte is written.
pub fn write_shuttle<W: Write>(writer: W, state: &ShuttleState) -> ShuttleResult<()> {
    check_state(state)?;

    let mut wtr = WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for (station, passengers) in &state.queues {
        wtr.write_record(["Q", station.as_str(), join(passengers).as_str()])?;
    }
    wtr.write_record(["O", join(&state.onboard).as_str()])?;
    wtr.write_record(["D", join(&state.history).as_str()])?;
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `state` to it.
pub fn save_shuttle(path: &Path, state: &ShuttleState) -> ShuttleResult<()> {
    check_state(state)?;
    let file = File::create(path)?;
    write_shuttle(file, state)?;
    debug!("saved {} stations to {}", state.queues.len(), path.display());
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn join(passengers: &[String]) -> String {
    let separator = PASSENGER_SEPARATOR.to_string();
    passengers.join(separator.as_str())
}

fn split(field: &str) -> Vec<String> {
    field
        .split(PASSENGER_SEPARATOR)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

fn apply_record(record: &StringRecord, state: &mut ShuttleState) -> Result<(), String> {
    let tag = record.get(0).unwrap_or("").trim_start_matches(BOM);
    match tag {
        "Q" => {
            let (Some(station), Some(passengers)) = (record.get(1), record.get(2)) else {
                return Err(format!("queue record needs 3 fields, found {}", record.len()));
            };
            if station.is_empty() {
                return Err("queue record without a station".to_owned());
            }
            state.queues.insert(station.to_owned(), split(passengers));
        }
        "O" => state.onboard = split(record.get(1).unwrap_or("")),
        "D" => state.history = split(record.get(1).unwrap_or("")),
        station => {
            let Some(passengers) = record.get(1) else {
                return Err(format!("unknown record {station:?}"));
            };
            if station.is_empty() {
                return Err("queue record without a station".to_owned());
            }
            state.queues.insert(station.to_owned(), split(passengers));
        }
    }
    Ok(())
}
