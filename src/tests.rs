#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use crate::config::GameConfig;
    use crate::frontend::{Frontend, Input};
    use crate::game::game_loop::{run_game_loop, SessionOutcome};
    use crate::game::grid::Board;
    use crate::game::state::GameState;
    use crate::game::systems::*;
    use crate::game::types::{Direction, Phase, SpawnPolicy};

    /// Frontend that replays canned answers and records what it was shown.
    struct ScriptedFrontend {
        start: bool,
        inputs: VecDeque<Input>,
        frames: Vec<(Vec<Vec<u32>>, u64)>,
        game_over_shown: bool,
    }

    impl ScriptedFrontend {
        fn new(start: bool, inputs: Vec<Input>) -> Self {
            Self { start, inputs: inputs.into(), frames: Vec::new(), game_over_shown: false }
        }
    }

    impl Frontend for ScriptedFrontend {
        fn show_welcome(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn confirm_start(&mut self) -> io::Result<bool> {
            Ok(self.start)
        }

        fn render(&mut self, state: &GameState) -> io::Result<()> {
            self.frames.push((state.board.rows().to_vec(), state.score));
            Ok(())
        }

        fn read_input(&mut self) -> io::Result<Input> {
            Ok(self.inputs.pop_front().unwrap_or(Input::Quit))
        }

        fn show_game_over(&mut self, _state: &GameState) -> io::Result<()> {
            self.game_over_shown = true;
            Ok(())
        }
    }

    fn config() -> GameConfig {
        GameConfig { seed: Some(42), ..GameConfig::default() }
    }

    /// Deterministic family of 4x4 boards with gaps, pairs and runs.
    fn sample_boards() -> Vec<Board> {
        let values = [0, 2, 2, 4, 0, 8, 2, 0, 4, 4, 16, 0, 2];
        (0..40)
            .map(|seed: usize| {
                let rows = (0..4)
                    .map(|r| (0..4).map(|c| values[(seed * 7 + r * 5 + c * 3 + r * c) % values.len()]).collect())
                    .collect();
                Board::from_rows(rows).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_declined_start_ends_session() {
        let mut frontend = ScriptedFrontend::new(false, vec![]);
        let summary = run_game_loop(&mut frontend, &config()).unwrap();
        assert_eq!(summary.outcome, SessionOutcome::Declined);
        assert_eq!(summary.snapshot.phase, Phase::AwaitingStart);
        assert!(frontend.frames.is_empty());
    }

    #[test]
    fn test_quit_after_moves() {
        let inputs = vec![Input::Move(Direction::Left), Input::Move(Direction::Up), Input::Quit];
        let mut frontend = ScriptedFrontend::new(true, inputs);
        let summary = run_game_loop(&mut frontend, &config()).unwrap();

        assert_eq!(summary.outcome, SessionOutcome::Quit);
        assert_eq!(frontend.frames.len(), 3);
        assert_eq!(summary.snapshot.turn, 3);
        assert!(!frontend.game_over_shown);
    }

    #[test]
    fn test_row_parity_session_is_reproducible() {
        // First turn fills (3, 3) with a 2; moving left brings it to (3, 0),
        // then the next spawn lands on (3, 3) again.
        let mut frontend = ScriptedFrontend::new(true, vec![Input::Move(Direction::Left)]);
        run_game_loop(&mut frontend, &config()).unwrap();

        let (first, _) = &frontend.frames[0];
        assert_eq!(first[3], vec![0, 0, 0, 2]);
        let (second, _) = &frontend.frames[1];
        assert_eq!(second[3], vec![2, 0, 0, 2]);
    }

    #[test]
    fn test_repeated_moves_reach_game_over() {
        // Cycling directions on a 2x2 board with deterministic spawns
        // fills it up; the loop must end by itself.
        let inputs: Vec<Input> = Direction::ALL.iter().cycle().take(400).map(|&d| Input::Move(d)).collect();
        let mut frontend = ScriptedFrontend::new(true, inputs);
        let cfg = GameConfig { grid_size: 2, ..config() };
        let summary = run_game_loop(&mut frontend, &cfg).unwrap();

        assert_eq!(summary.outcome, SessionOutcome::GameOver);
        assert!(frontend.game_over_shown);
        let board = Board::from_rows(summary.snapshot.board.clone()).unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_weighted_session_keeps_tile_invariant() {
        let inputs: Vec<Input> = Direction::ALL.iter().cycle().take(60).map(|&d| Input::Move(d)).collect();
        let mut frontend = ScriptedFrontend::new(true, inputs);
        let cfg = GameConfig { spawn_policy: SpawnPolicy::Weighted, ..config() };
        run_game_loop(&mut frontend, &cfg).unwrap();

        for (rows, _) in &frontend.frames {
            for &value in rows.iter().flatten() {
                assert!(value == 0 || (value >= 2 && value.is_power_of_two()));
            }
        }
    }

    #[test]
    fn test_score_never_decreases_across_frames() {
        let inputs: Vec<Input> = Direction::ALL.iter().cycle().take(80).map(|&d| Input::Move(d)).collect();
        let mut frontend = ScriptedFrontend::new(true, inputs);
        run_game_loop(&mut frontend, &config()).unwrap();

        let scores: Vec<u64> = frontend.frames.iter().map(|(_, score)| *score).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_shift_is_idempotent() {
        for board in sample_boards() {
            for direction in Direction::ALL {
                let mut once = board.clone();
                shift(&mut once, direction);
                let mut twice = once.clone();
                assert!(!shift(&mut twice, direction));
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_tile_count_only_drops_by_merges() {
        for board in sample_boards() {
            for direction in Direction::ALL {
                let mut b = board.clone();
                let before = b.tile_count();
                shift(&mut b, direction);
                assert_eq!(b.tile_count(), before);

                let outcome = merge(&mut b, direction);
                assert_eq!(b.tile_count(), before - outcome.merges);
            }
        }
    }

    #[test]
    fn test_merge_points_match_doubled_tiles() {
        for board in sample_boards() {
            for direction in Direction::ALL {
                let mut b = board.clone();
                shift(&mut b, direction);
                let before = b.clone();
                let outcome = merge(&mut b, direction);

                // A surviving cell is one whose value grew; it must hold
                // exactly twice its old tile, and the score delta is the
                // sum of those new values.
                let mut grown = 0;
                let mut written: u64 = 0;
                for (old_row, new_row) in before.rows().iter().zip(b.rows()) {
                    for (&old, &new) in old_row.iter().zip(new_row) {
                        if new > old {
                            assert_eq!(new, old * 2);
                            grown += 1;
                            written += u64::from(new);
                        }
                    }
                }
                assert_eq!(grown, outcome.merges);
                assert_eq!(outcome.points, written);
            }
        }
    }

    #[test]
    fn test_terminal_detector_matches_definition() {
        for board in sample_boards() {
            let rows = board.rows();
            let full = rows.iter().flatten().all(|&v| v != 0);
            let mut adjacent_equal = false;
            for r in 0..4 {
                for c in 0..4 {
                    if c + 1 < 4 && rows[r][c] == rows[r][c + 1] {
                        adjacent_equal = true;
                    }
                    if r + 1 < 4 && rows[r][c] == rows[r + 1][c] {
                        adjacent_equal = true;
                    }
                }
            }
            assert_eq!(has_possible_move(&board), !(full && !adjacent_equal));
        }
    }

    #[test]
    fn test_snapshot_serializes_board_rows() {
        let mut state = GameState::new(&config()).unwrap();
        state.start();
        state.begin_turn().unwrap();

        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["board"][3][3], 2);
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["turn"], 1);
    }
}
