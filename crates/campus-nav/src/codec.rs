//! Navigation file codec.
//!
//! # Line format
//!
//! Two `|`-separated record types, no header, no quoting:
//!
//! ```text
//! N|Library                 isolated (or any) node
//! E|Gym|Library|5           bidirectional edge with weight 5
//! ```
//!
//! # Writing
//!
//! Every node is written once as `N|name`, sorted by name.  Every undirected
//! edge is then written once as `E|a|b|w`, with `(a, b)` canonicalised by
//! sorting the endpoint pair.  The two directed entries of a bidirectional
//! edge therefore collapse into one line, and so do parallel edges: the first
//! weight seen (sources in name order, then adjacency order) wins.  Self-loops
//! are kept as `E|a|a|w`, last weight seen.
//!
//! Names are written unquoted, so a name holding `|` or a line break (or an
//! empty name) is refused before anything is written.
//!
//! # Reading
//!
//! Never fails on a bad line.  Unknown record types, node names holding `|`,
//! edges with missing fields, empty names, and unparsable or non-finite
//! weights are logged at `warn` and counted.  Blank lines, `\r\n` endings,
//! and a leading UTF-8 BOM are accepted.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, warn};

use campus_core::check_name;

use crate::{NavError, NavResult, Neighbor, RouteGraph};

const BOM: char = '\u{feff}';

// ── Read ──────────────────────────────────────────────────────────────────────

/// Add every well-formed record in `reader` to `graph`.
///
/// Existing nodes and edges are kept.  Returns the number of skipped lines.
pub fn read_graph<R: Read>(reader: R, graph: &mut RouteGraph) -> NavResult<usize> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut skipped = 0;
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        if let Err(reason) = apply_record(&record, graph) {
            warn!("navigation line {line}: {reason}; skipping");
            skipped += 1;
        }
    }
    Ok(skipped)
}

/// Read a navigation file into `graph`.  A missing file adds nothing.
pub fn load_graph(path: &Path, graph: &mut RouteGraph) -> NavResult<usize> {
    match File::open(path) {
        Ok(file) => {
            let skipped = read_graph(file, graph)?;
            debug!(
                "loaded {} nodes / {} directed edges from {} ({skipped} skipped)",
                graph.node_count(),
                graph.edge_count(),
                path.display()
            );
            Ok(skipped)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}

// ── Write ─────────────────────────────────────────────────────────────────────

/// Serialize `graph` as sorted `N` lines followed by canonical `E` lines.
///
/// # Errors
///
/// [`NavError::Unstorable`] if a node name holds `|` or a line break.  All
/// names are checked before the first byte is written.
pub fn write_graph<W: Write>(writer: W, graph: &RouteGraph) -> NavResult<()> {
    check_names(graph)?;
    let mut wtr = WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let adjacency = graph.export_graph();

    for name in adjacency.keys() {
        wtr.write_record(["N", name.as_str()])?;
    }
    for ((a, b), weight) in canonical_edges(&adjacency) {
        let weight = weight.to_string();
        wtr.write_record(["E", a, b, weight.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `graph` to it.
///
/// An unstorable name fails the save before `path` is touched.
pub fn save_graph(path: &Path, graph: &RouteGraph) -> NavResult<()> {
    check_names(graph)?;
    let file = File::create(path)?;
    write_graph(file, graph)?;
    debug!("saved {} nodes to {}", graph.node_count(), path.display());
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_names(graph: &RouteGraph) -> NavResult<()> {
    for name in graph.node_names() {
        check_name("place name", name, &[]).map_err(NavError::Unstorable)?;
    }
    Ok(())
}

fn apply_record(record: &StringRecord, graph: &mut RouteGraph) -> Result<(), String> {
    let tag = record.get(0).unwrap_or("").trim_start_matches(BOM);
    match tag {
        "N" => {
            let name = record.get(1).unwrap_or("");
            if name.is_empty() {
                return Err("node record without a name".to_owned());
            }
            if record.len() > 2 {
                return Err("node name contains '|'".to_owned());
            }
            graph.add_node(name).map(|_| ()).map_err(|e| e.to_string())
        }
        "E" => {
            let (Some(from), Some(to), Some(raw)) = (record.get(1), record.get(2), record.get(3))
            else {
                return Err(format!("edge record needs 4 fields, found {}", record.len()));
            };
            if from.is_empty() || to.is_empty() {
                return Err("edge record with an empty endpoint".to_owned());
            }
            let weight: f64 = raw
                .trim()
                .parse()
                .map_err(|_| format!("invalid weight {raw:?}"))?;
            graph.add_road(from, to, weight).map_err(|e| e.to_string())
        }
        other => Err(format!("unknown record type {other:?}")),
    }
}

/// Collapse directed adjacency into one weight per canonical endpoint pair.
fn canonical_edges(
    adjacency: &BTreeMap<String, Vec<Neighbor>>,
) -> BTreeMap<(&str, &str), f64> {
    let mut edges: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for (from, neighbors) in adjacency {
        for n in neighbors {
            let (from, to) = (from.as_str(), n.name.as_str());
            if from == to {
                edges.insert((from, to), n.weight);
                continue;
            }
            let key = if from < to { (from, to) } else { (to, from) };
            if let Entry::Vacant(slot) = edges.entry(key) {
                slot.insert(n.weight);
            }
        }
    }
    edges
}
