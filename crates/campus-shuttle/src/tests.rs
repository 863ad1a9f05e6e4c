//! Unit tests for campus-shuttle.

#[cfg(test)]
mod helpers {
    use crate::ShuttleService;

    /// North Gate: Ann, Bob waiting.  Library: open, nobody waiting.
    pub fn service() -> ShuttleService {
        let mut s = ShuttleService::new();
        s.join_queue("North Gate", "Ann").unwrap();
        s.join_queue("North Gate", "Bob").unwrap();
        s.add_station("Library").unwrap();
        s
    }
}

// ── Queues ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queues {
    use super::helpers::service;
    use crate::{ShuttleError, ShuttleService};

    #[test]
    fn boarding_is_first_in_first_out() {
        let mut s = service();
        assert_eq!(s.board("North Gate").unwrap(), "Ann");
        assert_eq!(s.board("North Gate").unwrap(), "Bob");
        assert_eq!(s.onboard(), ["Ann", "Bob"]);
        assert_eq!(s.queue_size("North Gate"), 0);
    }

    #[test]
    fn joining_opens_unknown_station() {
        let mut s = ShuttleService::new();
        s.join_queue("Gym", "Cara").unwrap();
        assert_eq!(s.station_count(), 1);
        assert_eq!(s.waiting("Gym").collect::<Vec<_>>(), ["Cara"]);
    }

    #[test]
    fn add_station_keeps_existing_queue() {
        let mut s = service();
        s.add_station("North Gate").unwrap();
        assert_eq!(s.queue_size("North Gate"), 2);
    }

    #[test]
    fn boarding_from_empty_or_unknown_station_fails() {
        let mut s = service();
        assert!(matches!(s.board("Library"), Err(ShuttleError::EmptyQueue { .. })));
        assert!(matches!(s.board("Nowhere"), Err(ShuttleError::EmptyQueue { .. })));
        assert!(s.onboard().is_empty());
    }

    #[test]
    fn snapshot_lists_stations_by_name() {
        let s = service();
        assert_eq!(
            s.snapshot(),
            vec![("Library".to_owned(), 0), ("North Gate".to_owned(), 2)]
        );
        assert_eq!(s.queue_size("Nowhere"), 0);
    }

    #[test]
    fn unstorable_names_are_rejected() {
        let mut s = ShuttleService::new();
        assert!(matches!(s.add_station("Gate|1"), Err(ShuttleError::Unstorable(_))));
        assert!(matches!(s.add_station(""), Err(ShuttleError::Unstorable(_))));
        assert!(matches!(s.join_queue("Gate", "Ann,Bob"), Err(ShuttleError::Unstorable(_))));
        assert!(matches!(s.join_queue("Gate", "Ann\n"), Err(ShuttleError::Unstorable(_))));
        assert!(matches!(s.join_queue("Gate", ""), Err(ShuttleError::Unstorable(_))));
        assert_eq!(s.station_count(), 0);
    }
}

// ── Drop-off ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod drop_off {
    use super::helpers::service;
    use crate::ShuttleError;

    #[test]
    fn drop_off_moves_passenger_to_history() {
        let mut s = service();
        s.board("North Gate").unwrap();
        s.board("North Gate").unwrap();
        s.drop_off("Bob").unwrap();
        assert_eq!(s.onboard(), ["Ann"]);
        assert_eq!(s.history(), ["Bob"]);
    }

    #[test]
    fn dropping_off_someone_not_on_board_fails() {
        let mut s = service();
        let err = s.drop_off("Ann").unwrap_err();
        assert!(matches!(err, ShuttleError::NotOnBoard { passenger } if passenger == "Ann"));
        assert!(s.history().is_empty());
    }

    #[test]
    fn duplicate_names_leave_in_boarding_order() {
        let mut s = service();
        s.join_queue("Library", "Ann").unwrap();
        s.board("North Gate").unwrap();
        s.board("North Gate").unwrap();
        s.board("Library").unwrap();
        s.drop_off("Ann").unwrap();
        assert_eq!(s.onboard(), ["Bob", "Ann"]);
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use super::helpers::service;
    use crate::{ShuttleService, ShuttleState};

    #[test]
    fn export_then_load_restores_everything() {
        let mut s = service();
        s.board("North Gate").unwrap();
        let state = s.export_state();

        let mut restored = ShuttleService::new();
        restored.load_state(state.clone()).unwrap();
        assert_eq!(restored.export_state(), state);
        assert_eq!(restored.board("North Gate").unwrap(), "Bob");
    }

    #[test]
    fn bad_state_is_refused_without_changes() {
        let mut s = service();
        let mut bad = ShuttleState::default();
        bad.onboard.push("Ann,Bob".to_owned());
        assert!(s.load_state(bad).is_err());
        assert_eq!(s.queue_size("North Gate"), 2);
    }

    #[test]
    fn clear_empties_the_service() {
        let mut s = service();
        s.board("North Gate").unwrap();
        s.clear();
        assert_eq!(s.export_state(), ShuttleState::default());
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod codec {
    use tempfile::TempDir;

    use super::helpers::service;
    use crate::{load_shuttle, read_shuttle, save_shuttle, write_shuttle, ShuttleState};

    fn render(state: &ShuttleState) -> String {
        let mut buf = Vec::new();
        write_shuttle(&mut buf, state).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_queues_then_onboard_then_history() {
        let mut s = service();
        s.board("North Gate").unwrap();
        s.join_queue("North Gate", "Cara").unwrap();
        assert_eq!(render(&s.export_state()), "Q|Library|\nQ|North Gate|Bob,Cara\nO|Ann\nD|\n");
    }

    #[test]
    fn empty_service_writes_empty_o_and_d_lines() {
        assert_eq!(render(&ShuttleState::default()), "O|\nD|\n");
    }

    #[test]
    fn reads_tagged_and_untagged_lines() {
        let text = "\u{feff}Q|North Gate|Ann,,Bob\r\n\
                    Library|Cara\n\
                    O|Dan\n\
                    D|Eve,Finn\n";
        let load = read_shuttle(text.as_bytes()).unwrap();
        assert_eq!(load.skipped, 0);
        let state = load.state;
        assert_eq!(state.queues["North Gate"], ["Ann", "Bob"]);
        assert_eq!(state.queues["Library"], ["Cara"]);
        assert_eq!(state.onboard, ["Dan"]);
        assert_eq!(state.history, ["Eve", "Finn"]);
    }

    #[test]
    fn empty_o_and_d_lines_are_not_stations() {
        let load = read_shuttle("O|\nD|\n".as_bytes()).unwrap();
        assert_eq!(load.skipped, 0);
        assert_eq!(load.state, ShuttleState::default());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "Q|North Gate\nQ||Ann\nlonely\n|Ann\nQ|Gym|Bob\n";
        let load = read_shuttle(text.as_bytes()).unwrap();
        assert_eq!(load.skipped, 4);
        assert_eq!(load.state.queues.len(), 1);
        assert_eq!(load.state.queues["Gym"], ["Bob"]);
    }

    #[test]
    fn unstorable_state_is_refused_on_write() {
        let mut state = ShuttleState::default();
        state.history.push("Eve\nFinn".to_owned());
        let mut buf = Vec::new();
        assert!(write_shuttle(&mut buf, &state).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shuttle.txt");
        let mut s = service();
        s.board("North Gate").unwrap();
        s.drop_off("Ann").unwrap();

        save_shuttle(&path, &s.export_state()).unwrap();
        let load = load_shuttle(&path).unwrap();
        assert_eq!(load.skipped, 0);
        assert_eq!(load.state, s.export_state());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let load = load_shuttle(&dir.path().join("absent.txt")).unwrap();
        assert_eq!(load.state, ShuttleState::default());
    }
}
