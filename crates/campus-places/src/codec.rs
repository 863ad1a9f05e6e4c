//! Locations file codec.
//!
//! # Line format
//!
//! One place per line, `|`-separated, no header, no quoting:
//!
//! ```text
//! id|name|kind|description|popularity
//! 1|Library|study|Main library, open 8-22|120
//! 2|Cafeteria|canteen|Ground floor|95
//! ```
//!
//! # Leniency
//!
//! Lines with fewer than four fields, a non-integer id, an empty name, or an
//! id already seen earlier in the file are logged at `warn` and counted in
//! [`LocationLoad::skipped`].  A missing, empty or unparsable popularity
//! reads as `0`.  Blank lines, `\r\n` endings, and a leading UTF-8 BOM are
//! accepted.
//!
//! # Writing
//!
//! All five fields are always written.  A place whose text cannot be stored
//! on one line is refused before anything is written.

use std::collections::HashSet;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, warn};

use campus_core::LocationId;

use crate::{Location, PlaceError, PlaceResult};

const MIN_FIELDS: usize = 4;
const BOM: char = '\u{feff}';

// ── Read ──────────────────────────────────────────────────────────────────────

/// Outcome of reading a locations file.
#[derive(Debug, Default)]
pub struct LocationLoad {
    /// Well-formed places with distinct ids, in file order.
    pub locations: Vec<Location>,
    /// Lines that were dropped.
    pub skipped: usize,
}

/// Parse places from any `Read` source.
pub fn read_locations<R: Read>(reader: R) -> PlaceResult<LocationLoad> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut load = LocationLoad::default();
    let mut seen: HashSet<LocationId> = HashSet::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        let parsed = parse_record(&record).and_then(|l| {
            if seen.insert(l.id) {
                Ok(l)
            } else {
                Err(format!("duplicate {}", l.id))
            }
        });
        match parsed {
            Ok(location) => load.locations.push(location),
            Err(reason) => {
                warn!("locations line {line}: {reason}; skipping");
                load.skipped += 1;
            }
        }
    }
    Ok(load)
}

/// Read a locations file.  A missing file reads as no places.
pub fn load_locations(path: &Path) -> PlaceResult<LocationLoad> {
    match File::open(path) {
        Ok(file) => {
            let load = read_locations(file)?;
            debug!(
                "loaded {} places from {} ({} skipped)",
                load.locations.len(),
                path.display(),
                load.skipped
            );
            Ok(load)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(LocationLoad::default()),
        Err(e) => Err(e.into()),
    }
}

// ── Write ─────────────────────────────────────────────────────────────────────

/// Write `locations` one per line, in the order given.
pub fn write_locations<'a, W, I>(writer: W, locations: I) -> PlaceResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Location>,
{
    let locations: Vec<&Location> = locations.into_iter().collect();
    check_locations(&locations)?;

    let mut wtr = WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for l in locations {
        let id = l.id.0.to_string();
        let popularity = l.popularity.to_string();
        wtr.write_record([
            id.as_str(),
            l.name.as_str(),
            l.kind.as_str(),
            l.description.as_str(),
            popularity.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `locations` to it.
///
/// An unstorable place fails the save before `path` is touched.
pub fn save_locations(path: &Path, locations: &[Location]) -> PlaceResult<()> {
    check_locations(&locations.iter().collect::<Vec<_>>())?;
    let file = File::create(path)?;
    write_locations(file, locations)?;
    debug!("saved {} places to {}", locations.len(), path.display());
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_locations(locations: &[&Location]) -> PlaceResult<()> {
    for l in locations {
        l.check_storable()
            .map_err(|source| PlaceError::Unstorable { id: l.id, source })?;
    }
    Ok(())
}

fn parse_record(record: &StringRecord) -> Result<Location, String> {
    if record.len() < MIN_FIELDS {
        return Err(format!("expected at least {MIN_FIELDS} fields, found {}", record.len()));
    }
    let raw_id = record[0].trim_start_matches(BOM).trim();
    let id = raw_id
        .parse::<i32>()
        .map_err(|_| format!("invalid id {raw_id:?}"))?;
    if record[1].is_empty() {
        return Err("empty name".to_owned());
    }
    let popularity = record
        .get(4)
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .unwrap_or(0);

    Ok(Location::new(id, &record[1], &record[2], &record[3], popularity))
}
