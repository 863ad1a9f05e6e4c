//! walkthrough — end-to-end tour of the campus assistant.
//!
//! Builds a small campus in `output/walkthrough`: stores places, ranks and
//! searches them, runs a shuttle queue, schedules a week of activities,
//! routes between places, expires the past, and saves.  Run it twice to see
//! the data files reloaded.
//!
//! Set `RUST_LOG=debug` to see load/save and expiry logging.

use anyhow::Result;
use log::info;

use campus_assistant::CampusAssistant;
use campus_core::{Activity, AssistantConfig};
use campus_places::Location;

// ── Constants ─────────────────────────────────────────────────────────────────

const DATA_DIR: &str = "output/walkthrough";

/// Pretend "now" used for expiry.
const NOW: &str = "2024-01-11 00:00";

// (id, name, type, description, popularity)
const PLACES: [(i32, &str, &str, &str, i32); 5] = [
    (1, "Library", "study", "Main library, open 8-22", 120),
    (2, "Gym", "sport", "Indoor courts and weights", 80),
    (3, "Cafeteria", "food", "Hot meals at noon", 95),
    (4, "Dorm", "housing", "North residence hall", 40),
    (5, "Observatory", "science", "Roof dome", 300),
];

// (a, b, metres)
const WALKWAYS: [(&str, &str, f64); 5] = [
    ("Library", "Gym", 5.0),
    ("Gym", "Cafeteria", 3.0),
    ("Library", "Cafeteria", 10.0),
    ("Dorm", "Cafeteria", 4.0),
    ("Dorm", "Library", 12.0),
];

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample_activities() -> Vec<Activity> {
    vec![
        Activity::new(1, "Morning run", "Gym", "2024-01-10 07:00", "Meet at the track"),
        Activity::new(2, "Study group", "Library", "2024-01-12 14:00", "Room 3B"),
        Activity::new(3, "Lunch", "Cafeteria", "2024-01-10 12:00", ""),
        Activity::new(4, "Stargazing", "Observatory", "2024-01-13 21:30", "Clear skies only"),
        Activity::new(5, "Yoga", "Gym", "2024-01-12 09:00", "Bring mat"),
    ]
}

fn print_activities(heading: &str, activities: &[Activity]) {
    println!("{heading}");
    println!("{:<4} {:<18} {:<14} {:<12}", "Id", "Start", "Title", "Location");
    println!("{}", "-".repeat(50));
    for a in activities {
        println!("{:<4} {:<18} {:<14} {:<12}", a.id.0, a.start_time, a.title, a.location);
    }
    println!();
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== walkthrough — campus assistant ===");
    println!("Data dir: {DATA_DIR}  |  Now: {NOW}");
    println!();

    let mut assistant = CampusAssistant::open(AssistantConfig::new(DATA_DIR))?;

    if assistant.places().is_empty() {
        info!("no saved places; seeding sample data");
        for (id, name, kind, description, popularity) in PLACES {
            assistant.add_place(Location::new(id, name, kind, description, popularity))?;
        }
    }
    if assistant.schedule().is_empty() {
        info!("no saved schedule; seeding sample data");
        for activity in sample_activities() {
            assistant.add_activity(activity)?;
        }
    }
    if assistant.routes().edge_count() == 0 {
        for (a, b, metres) in WALKWAYS {
            assistant.connect(a, b, metres)?;
        }
    }

    // ── Places ────────────────────────────────────────────────────────────

    println!("Most popular:");
    for (rank, place) in assistant.rank_places().iter().enumerate() {
        println!("  {}. {:<12} {:>4}  {}", rank + 1, place.name, place.popularity, place.kind);
    }
    let hits: Vec<&str> = assistant.search_places("or").iter().map(|p| p.name.as_str()).collect();
    println!("Search \"or\": {}", hits.join(", "));
    println!();

    // ── Shuttle ───────────────────────────────────────────────────────────

    for passenger in ["Ann", "Bob", "Cara"] {
        assistant.join_queue("North Gate", passenger)?;
    }
    let first = assistant.board("North Gate")?;
    assistant.drop_off(&first)?;
    let shuttle = assistant.shuttle();
    println!(
        "Shuttle: {first} rode and got off; waiting at North Gate: {}; {} dropped off so far",
        shuttle.waiting("North Gate").collect::<Vec<_>>().join(", "),
        shuttle.history().len()
    );
    println!();

    print_activities("Upcoming:", &assistant.upcoming());

    // ── Routing ───────────────────────────────────────────────────────────

    for (from, to) in [("Library", "Cafeteria"), ("Dorm", "Gym"), ("Gym", "Observatory")] {
        let route = assistant.route(from, to);
        if route.is_empty() {
            println!("{from} → {to}: no route");
        } else {
            println!(
                "{from} → {to}: {} ({} m, {} hops)",
                route.nodes.join(" → "),
                route.total,
                route.hops()
            );
        }
    }
    let route = assistant.route("Dorm", "Gym");
    println!("as JSON: {}", serde_json::to_string(&route)?);
    println!();

    // ── Expiry and backup ─────────────────────────────────────────────────

    let removed = assistant.expire_before(NOW)?;
    println!("Expired {removed} activities before {NOW}");
    print_activities("Remaining:", &assistant.upcoming());

    let backup = assistant.backup();
    println!("Backup (pre-order, {} entries):", backup.len());
    println!("{}", serde_json::to_string_pretty(&backup)?);
    println!();

    assistant.save()?;
    println!("Saved to {}", assistant.config().data_dir.display());
    Ok(())
}
