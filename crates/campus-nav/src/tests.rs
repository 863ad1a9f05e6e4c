//! Unit tests for campus-nav.
//!
//! All tests use hand-built graphs; codec tests read from in-memory buffers
//! or a temp dir.

#[cfg(test)]
mod helpers {
    use crate::RouteGraph;

    /// Library, Gym, Cafeteria triangle plus a detached Observatory.
    ///
    /// ```text
    /// Library --5-- Gym --3-- Cafeteria
    ///     \____________10_______/
    ///
    /// Observatory   (no edges)
    /// ```
    ///
    /// Shortest Library → Cafeteria is via Gym (8), not direct (10).
    pub fn campus() -> RouteGraph {
        let mut g = RouteGraph::new();
        g.add_road("Library", "Gym", 5.0).unwrap();
        g.add_road("Gym", "Cafeteria", 3.0).unwrap();
        g.add_road("Library", "Cafeteria", 10.0).unwrap();
        g.add_node("Observatory").unwrap();
        g
    }

    pub fn names(route: &crate::Route) -> Vec<&str> {
        route.nodes.iter().map(String::as_str).collect()
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use campus_core::NodeId;

    use crate::{NavError, Neighbor, RouteGraph};

    fn nb(name: &str, weight: f64) -> Neighbor {
        Neighbor { name: name.to_owned(), weight }
    }

    #[test]
    fn empty_graph() {
        let g = RouteGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.export_graph().is_empty());
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = RouteGraph::new();
        let a = g.add_node("Library").unwrap();
        let b = g.add_node("Library").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, NodeId(0));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn add_node_keeps_existing_edges() {
        let mut g = super::helpers::campus();
        g.add_node("Gym").unwrap();
        assert_eq!(g.neighbors("Gym").len(), 2);
    }

    #[test]
    fn bidirectional_edge_visible_from_both_ends() {
        let mut g = RouteGraph::new();
        g.add_edge("A", "B", 4.5, true).unwrap();
        assert_eq!(g.neighbors("A"), vec![nb("B", 4.5)]);
        assert_eq!(g.neighbors("B"), vec![nb("A", 4.5)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn directed_edge_only_one_way() {
        let mut g = RouteGraph::new();
        g.add_directed_edge("A", "B", 1.0).unwrap();
        assert_eq!(g.neighbors("A"), vec![nb("B", 1.0)]);
        assert!(g.neighbors("B").is_empty());
        assert!(g.has_node("B"));
    }

    #[test]
    fn edge_auto_creates_endpoints() {
        let mut g = RouteGraph::new();
        g.add_road("Dorm", "Lab", 2.0).unwrap();
        assert!(g.has_node("Dorm"));
        assert!(g.has_node("Lab"));
        assert_eq!(g.node_names().collect::<Vec<_>>(), ["Dorm", "Lab"]);
    }

    #[test]
    fn reinsertion_appends_parallel_edges() {
        let mut g = RouteGraph::new();
        g.add_road("A", "B", 4.0).unwrap();
        g.add_road("A", "B", 2.0).unwrap();
        assert_eq!(g.neighbors("A"), vec![nb("B", 4.0), nb("B", 2.0)]);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn neighbors_of_unknown_node_is_empty() {
        let g = super::helpers::campus();
        assert!(g.neighbors("Mars").is_empty());
    }

    #[test]
    fn non_finite_weight_rejected_without_side_effects() {
        let mut g = RouteGraph::new();
        let err = g.add_road("A", "B", f64::NAN).unwrap_err();
        assert!(matches!(err, NavError::NonFiniteWeight { .. }));
        assert!(g.add_road("A", "B", f64::INFINITY).is_err());
        assert!(g.is_empty());
    }

    #[test]
    fn export_lists_every_node() {
        let g = super::helpers::campus();
        let export = g.export_graph();
        let keys: Vec<_> = export.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Cafeteria", "Gym", "Library", "Observatory"]);
        assert_eq!(export["Library"], vec![nb("Gym", 5.0), nb("Cafeteria", 10.0)]);
        assert!(export["Observatory"].is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut g = super::helpers::campus();
        g.clear();
        assert!(g.is_empty());
        assert!(!g.has_node("Library"));
        assert_eq!(g.edge_count(), 0);
        // Handles restart from zero.
        assert_eq!(g.add_node("X").unwrap(), NodeId(0));
    }

    #[test]
    fn handles_map_back_to_names() {
        let g = super::helpers::campus();
        let gym = g.node_id("Gym").unwrap();
        assert_eq!(g.name(gym), "Gym");
        assert_eq!(g.out_edges(gym).len(), 2);
        assert!(g.node_id("Mars").is_none());
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use super::helpers::{campus, names};
    use crate::{DijkstraRouter, Route, RouteGraph, Router};

    #[test]
    fn prefers_cheaper_two_hop_path() {
        let g = campus();
        let route = g.shortest_path("Library", "Cafeteria");
        assert_eq!(names(&route), ["Library", "Gym", "Cafeteria"]);
        assert_eq!(route.total, 8.0);
        assert_eq!(route.hops(), 2);
    }

    #[test]
    fn same_node_is_trivial() {
        let g = campus();
        let route = g.shortest_path("Observatory", "Observatory");
        assert_eq!(names(&route), ["Observatory"]);
        assert_eq!(route.total, 0.0);
        assert_eq!(route.hops(), 0);
    }

    #[test]
    fn disconnected_pair_has_no_route() {
        let g = campus();
        let route = g.shortest_path("Library", "Observatory");
        assert_eq!(route, Route::unreachable());
        assert!(route.is_empty());
        assert_eq!(route.total, 0.0);
    }

    #[test]
    fn unknown_endpoint_has_no_route() {
        let g = campus();
        assert!(g.shortest_path("Library", "Mars").is_empty());
        assert!(g.shortest_path("Mars", "Library").is_empty());
        assert!(g.shortest_path("Mars", "Mars").is_empty());
    }

    #[test]
    fn one_way_edge_blocks_return() {
        let mut g = RouteGraph::new();
        g.add_directed_edge("A", "B", 1.0).unwrap();
        assert_eq!(names(&g.shortest_path("A", "B")), ["A", "B"]);
        assert!(g.shortest_path("B", "A").is_empty());
    }

    #[test]
    fn parallel_edges_use_the_cheapest() {
        let mut g = RouteGraph::new();
        g.add_road("A", "B", 9.0).unwrap();
        g.add_road("A", "B", 2.0).unwrap();
        assert_eq!(g.shortest_path("A", "B").total, 2.0);
    }

    #[test]
    fn stale_entries_do_not_corrupt_result() {
        // C is first queued at 10 via A→C, then improved to 3 via B.  The
        // stale (10, C) entry pops before D and must be ignored.
        let mut g = RouteGraph::new();
        g.add_directed_edge("A", "C", 10.0).unwrap();
        g.add_directed_edge("A", "B", 1.0).unwrap();
        g.add_directed_edge("B", "C", 2.0).unwrap();
        g.add_directed_edge("C", "D", 20.0).unwrap();
        let route = g.shortest_path("A", "D");
        assert_eq!(names(&route), ["A", "B", "C", "D"]);
        assert_eq!(route.total, 23.0);
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = RouteGraph::new();
        g.add_road("A", "B", 0.0).unwrap();
        g.add_road("B", "C", 0.0).unwrap();
        let route = g.shortest_path("A", "C");
        assert_eq!(names(&route), ["A", "B", "C"]);
        assert_eq!(route.total, 0.0);
        assert!(!route.is_empty());
    }

    #[test]
    fn equal_cost_routes_return_one_of_them() {
        let mut g = RouteGraph::new();
        g.add_road("S", "L", 1.0).unwrap();
        g.add_road("S", "R", 1.0).unwrap();
        g.add_road("L", "T", 1.0).unwrap();
        g.add_road("R", "T", 1.0).unwrap();
        let route = g.shortest_path("S", "T");
        assert_eq!(route.total, 2.0);
        assert!(names(&route) == ["S", "L", "T"] || names(&route) == ["S", "R", "T"]);
    }

    #[test]
    fn longer_chain_totals_accumulate() {
        let mut g = RouteGraph::new();
        for i in 0..100 {
            g.add_road(&format!("n{i}"), &format!("n{}", i + 1), 0.5).unwrap();
        }
        let route = g.shortest_path("n0", "n100");
        assert_eq!(route.nodes.len(), 101);
        assert_eq!(route.total, 50.0);
    }

    #[test]
    fn router_trait_matches_convenience_method() {
        let g = campus();
        assert_eq!(
            DijkstraRouter.route(&g, "Cafeteria", "Library"),
            g.shortest_path("Cafeteria", "Library"),
        );
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod codec {
    use std::io::Cursor;

    use std::fs;

    use crate::{load_graph, read_graph, save_graph, write_graph, NavError, RouteGraph};

    fn render(g: &RouteGraph) -> String {
        let mut buf = Vec::new();
        write_graph(&mut buf, g).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn write_sorts_nodes_and_collapses_edges() {
        let g = super::helpers::campus();
        assert_eq!(
            render(&g),
            "N|Cafeteria\nN|Gym\nN|Library\nN|Observatory\n\
             E|Cafeteria|Gym|3\nE|Cafeteria|Library|10\nE|Gym|Library|5\n"
        );
    }

    #[test]
    fn write_keeps_self_loops_and_first_parallel_weight() {
        let mut g = RouteGraph::new();
        g.add_road("B", "A", 4.0).unwrap();
        g.add_road("A", "B", 2.5).unwrap();
        g.add_directed_edge("C", "C", 1.0).unwrap();
        // Source "A" is visited first: its entries are (B, 4.0), (B, 2.5).
        assert_eq!(render(&g), "N|A\nN|B\nN|C\nE|A|B|4\nE|C|C|1\n");
    }

    #[test]
    fn write_emits_one_way_edges_once() {
        let mut g = RouteGraph::new();
        g.add_directed_edge("Z", "Y", 7.25).unwrap();
        assert_eq!(render(&g), "N|Y\nN|Z\nE|Y|Z|7.25\n");
    }

    #[test]
    fn read_builds_bidirectional_edges() {
        let mut g = RouteGraph::new();
        let text = "N|Observatory\nE|Library|Gym|5\nE|Gym|Cafeteria|3.5\n";
        let skipped = read_graph(Cursor::new(text), &mut g).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.shortest_path("Library", "Cafeteria").total, 8.5);
    }

    #[test]
    fn read_skips_malformed_lines() {
        let mut g = RouteGraph::new();
        let text = "\u{feff}N|Library\r\n\
                    \r\n\
                    X|what\n\
                    E|Library|Gym\n\
                    E|Library|Gym|far\n\
                    E|Library|Gym|inf\n\
                    E||Gym|3\n\
                    N|\n\
                    E|Library|Gym|5|extra\n";
        let skipped = read_graph(Cursor::new(text), &mut g).unwrap();
        assert_eq!(skipped, 6);
        assert_eq!(g.node_names().collect::<Vec<_>>(), ["Library", "Gym"]);
        assert_eq!(g.shortest_path("Gym", "Library").total, 5.0);
    }

    #[test]
    fn node_name_with_separator_is_skipped_on_read() {
        let mut g = RouteGraph::new();
        let skipped = read_graph(Cursor::new("N|Hall|East\nN|Hall\n"), &mut g).unwrap();
        assert_eq!(skipped, 1);
        assert_eq!(g.node_names().collect::<Vec<_>>(), ["Hall"]);
    }

    #[test]
    fn unstorable_names_are_refused_on_write() {
        for bad in ["Q|A hall", "North\nGate", ""] {
            let mut g = RouteGraph::new();
            g.add_road("Library", bad, 1.0).unwrap();
            let mut buf = Vec::new();
            let err = write_graph(&mut buf, &g).unwrap_err();
            assert!(matches!(err, NavError::Unstorable(_)), "{bad:?}");
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn refused_save_leaves_existing_file_alone() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("navigation.txt");
        save_graph(&path, &super::helpers::campus()).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let mut bad = super::helpers::campus();
        bad.add_node("Gym|Pool").unwrap();
        assert!(save_graph(&path, &bad).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn read_keeps_existing_contents() {
        let mut g = super::helpers::campus();
        read_graph(Cursor::new("E|Gym|Pool|1\n"), &mut g).unwrap();
        assert!(g.has_node("Library"));
        assert_eq!(g.shortest_path("Library", "Pool").total, 6.0);
    }

    #[test]
    fn written_graph_reads_back_equivalent() {
        let g = super::helpers::campus();
        let mut back = RouteGraph::new();
        read_graph(Cursor::new(render(&g)), &mut back).unwrap();
        assert_eq!(back.node_count(), g.node_count());
        assert_eq!(back.edge_count(), g.edge_count());
        assert_eq!(render(&back), render(&g));
    }

    #[test]
    fn file_helpers_and_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("navigation.txt");

        let mut empty = RouteGraph::new();
        assert_eq!(load_graph(&path, &mut empty).unwrap(), 0);
        assert!(empty.is_empty());

        save_graph(&path, &super::helpers::campus()).unwrap();
        let mut loaded = RouteGraph::new();
        load_graph(&path, &mut loaded).unwrap();
        assert_eq!(loaded.shortest_path("Library", "Cafeteria").total, 8.0);
        assert!(loaded.has_node("Observatory"));
    }
}
