//! Schedule file codec.
//!
//! # Line format
//!
//! One activity per line, five `|`-separated fields, no header, no quoting:
//!
//! ```text
//! id|title|location|start_time|description
//! 1|Orientation|Library|2024-01-10 09:00|Welcome session for new students
//! 2|Career fair|Gym|2024-01-12 13:30|Bring a CV
//! ```
//!
//! # Leniency
//!
//! Reading never fails on a bad line.  Lines with fewer than five fields, a
//! non-integer id, or an unparsable start time are logged at `warn` and
//! counted in [`ActivityLoad::skipped`].  Fields after the fifth are ignored.
//! Blank lines, `\r\n` endings, and a leading UTF-8 BOM are accepted.
//!
//! # Writing
//!
//! Nothing is quoted, so a text field holding `|` or a line break would not
//! survive a reload.  Writers refuse such activities up front instead.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, warn};

use campus_core::{Activity, ActivityId, TimeKey};

use crate::{ScheduleError, ScheduleResult};

const FIELDS: usize = 5;
const BOM: char = '\u{feff}';

// ── Read ──────────────────────────────────────────────────────────────────────

/// Outcome of reading a schedule file.
#[derive(Debug, Default)]
pub struct ActivityLoad {
    /// Well-formed activities, in file order.
    pub activities: Vec<Activity>,
    /// Lines that were dropped as malformed.
    pub skipped: usize,
}

/// Parse activities from any `Read` source.
pub fn read_activities<R: Read>(reader: R) -> ScheduleResult<ActivityLoad> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut load = ActivityLoad::default();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        match parse_record(&record) {
            Ok(activity) => load.activities.push(activity),
            Err(reason) => {
                warn!("schedule line {line}: {reason}; skipping");
                load.skipped += 1;
            }
        }
    }
    Ok(load)
}

/// Read a schedule file.  A missing file reads as an empty schedule.
pub fn load_activities(path: &Path) -> ScheduleResult<ActivityLoad> {
    match File::open(path) {
        Ok(file) => {
            let load = read_activities(file)?;
            debug!(
                "loaded {} activities from {} ({} skipped)",
                load.activities.len(),
                path.display(),
                load.skipped
            );
            Ok(load)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ActivityLoad::default()),
        Err(e) => Err(e.into()),
    }
}

// ── Write ─────────────────────────────────────────────────────────────────────

/// Write `activities` one per line, in the order given.
///
/// # Errors
///
/// [`ScheduleError::Unstorable`] if any text field holds `|` or a line
/// break.  Every activity is checked before the first byte is written.
pub fn write_activities<W: Write>(writer: W, activities: &[Activity]) -> ScheduleResult<()> {
    check_activities(activities)?;
    let mut wtr = WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for a in activities {
        let id = a.id.0.to_string();
        wtr.write_record([
            id.as_str(),
            a.title.as_str(),
            a.location.as_str(),
            a.start_time.as_str(),
            a.description.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `activities` to it.
///
/// An unstorable activity fails the save before `path` is touched.
pub fn save_activities(path: &Path, activities: &[Activity]) -> ScheduleResult<()> {
    check_activities(activities)?;
    let file = File::create(path)?;
    write_activities(file, activities)?;
    debug!("saved {} activities to {}", activities.len(), path.display());
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_activities(activities: &[Activity]) -> ScheduleResult<()> {
    for a in activities {
        a.check_storable()
            .map_err(|source| ScheduleError::Unstorable { id: a.id, source })?;
    }
    Ok(())
}

fn parse_record(record: &StringRecord) -> Result<Activity, String> {
    if record.len() < FIELDS {
        return Err(format!("expected {FIELDS} fields, found {}", record.len()));
    }
    let raw_id = record[0].trim_start_matches(BOM).trim();
    let id = raw_id
        .parse::<i32>()
        .map_err(|_| format!("invalid id {raw_id:?}"))?;
    let start_time = &record[3];
    TimeKey::parse(start_time).map_err(|e| e.to_string())?;

    Ok(Activity {
        id:          ActivityId(id),
        title:       record[1].to_owned(),
        location:    record[2].to_owned(),
        start_time:  start_time.to_owned(),
        description: record[4].to_owned(),
    })
}
