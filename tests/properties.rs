use gamma::config::GameConfig;
use gamma::game::Game;
use gamma::player::{Player, PlayerStats};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Op = (bool, u32, u32, u32);

/// Observable state of a game, for no-op comparisons.
#[derive(Debug, PartialEq)]
struct Observed {
    board: gamma::board::Board,
    stats: Vec<PlayerStats>,
    free_fields: u64,
}

fn observe(game: &Game) -> Observed {
    Observed {
        board: game.board().clone(),
        stats: (1..=game.players())
            .filter_map(|p| game.stats(p).copied())
            .collect(),
        free_fields: game.free_fields(),
    }
}

fn recount_areas(game: &Game, player: Player) -> u64 {
    let board = game.board();
    let mut seen = vec![false; board.len()];
    let mut areas = 0;
    for start in 0..board.len() {
        if seen[start] || board.get_at(start) != Some(player) {
            continue;
        }
        areas += 1;
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(idx) = stack.pop() {
            for n in board.neighbors(board.position(idx)) {
                let n_idx = board.index(&n);
                if !seen[n_idx] && board.get_at(n_idx) == Some(player) {
                    seen[n_idx] = true;
                    stack.push(n_idx);
                }
            }
        }
    }
    areas
}

fn recount_free_adjacent(game: &Game, player: Player) -> u64 {
    let board = game.board();
    board
        .cells()
        .filter(|(idx, owner)| owner.is_none() && board.touches(board.position(*idx), player))
        .count() as u64
}

fn check_counters(game: &Game) -> Result<(), TestCaseError> {
    let board = game.board();
    let empty = board.cells().filter(|(_, c)| c.is_none()).count() as u64;
    prop_assert_eq!(game.free_fields(), empty);

    for id in 1..=game.players() {
        let player = game.player(id).unwrap();
        let fields = board.cells().filter(|(_, c)| *c == Some(player)).count() as u64;
        prop_assert_eq!(game.fields_owned(id), fields);
        prop_assert_eq!(game.areas_owned(id), recount_areas(game, player));
        prop_assert!(game.areas_owned(id) <= u64::from(game.max_areas()));
        prop_assert_eq!(game.free_adjacent(id), recount_free_adjacent(game, player));
    }
    Ok(())
}

fn game_and_ops() -> impl Strategy<Value = (GameConfig, Vec<Op>)> {
    (1u32..6, 1u32..6, 1u32..4, 1u32..4).prop_flat_map(|(w, h, players, areas)| {
        let op = (prop::bool::weighted(0.25), 0..=players + 1, 0..=w, 0..=h);
        (
            Just(GameConfig::new(w, h, players, areas)),
            prop::collection::vec(op, 0..80),
        )
    })
}

proptest! {
    #[test]
    fn counters_match_recount((config, ops) in game_and_ops()) {
        let mut game = Game::with_config(config).unwrap();
        check_counters(&game)?;

        for (golden, player, x, y) in ops {
            let before = observe(&game);
            let ok = if golden {
                game.capture(player, x, y)
            } else {
                game.place(player, x, y)
            };

            if ok {
                if golden {
                    prop_assert!(game.golden_used(player));
                    prop_assert_eq!(game.free_fields(), before.free_fields);
                } else {
                    prop_assert_eq!(game.free_fields() + 1, before.free_fields);
                    let idx = game.player(player).unwrap().index();
                    prop_assert_eq!(game.fields_owned(player), before.stats[idx].fields + 1);
                }
            } else {
                prop_assert_eq!(&observe(&game), &before);
            }
            check_counters(&game)?;
        }
    }

    #[test]
    fn probe_agrees_with_capture((config, ops) in game_and_ops()) {
        let mut game = Game::with_config(config).unwrap();
        for (golden, player, x, y) in ops {
            if golden {
                game.capture(player, x, y);
            } else {
                game.place(player, x, y);
            }
        }

        for id in 0..=game.players() + 1 {
            let before = observe(&game);
            let possible = game.golden_move_possible(id);
            prop_assert_eq!(&observe(&game), &before);

            let exists = (0..game.height()).any(|y| {
                (0..game.width()).any(|x| game.clone().capture(id, x, y))
            });
            prop_assert_eq!(possible, exists);
        }
    }

    #[test]
    fn golden_move_succeeds_at_most_once((config, ops) in game_and_ops()) {
        let mut game = Game::with_config(config).unwrap();
        let mut successes = vec![0u32; config.players as usize + 2];
        for (golden, player, x, y) in ops {
            if golden {
                if game.capture(player, x, y) {
                    successes[player as usize] += 1;
                }
            } else {
                game.place(player, x, y);
            }
        }
        prop_assert!(successes.iter().all(|&n| n <= 1));
    }
}

#[test]
fn fresh_game_counts() {
    for (w, h, players, areas) in [(1, 1, 1, 1), (3, 7, 4, 2), (10, 10, 12, 5)] {
        let game = Game::new(w, h, players, areas).unwrap();
        for p in 1..=players {
            assert_eq!(game.free_cells_for(p), u64::from(w * h));
            assert_eq!(game.fields_owned(p), 0);
        }
    }
}

#[test]
fn scenario_disconnected_move_rejected_at_limit() {
    let mut game = Game::new(3, 3, 2, 1).unwrap();
    assert!(game.place(1, 0, 0));
    assert!(game.place(1, 0, 1));
    assert_eq!(game.areas_owned(1), 1);
    assert!(!game.place(1, 2, 2));
}

#[test]
fn scenario_capture_splitting_area_rejected() {
    // . 1 .
    // 2 2 2
    let mut game = Game::new(3, 2, 2, 1).unwrap();
    assert!(game.place(2, 0, 0));
    assert!(game.place(2, 1, 0));
    assert!(game.place(2, 2, 0));
    assert!(game.place(1, 1, 1));
    assert_eq!(game.areas_owned(2), 1);

    assert!(!game.capture(1, 1, 0));
    assert_eq!(game.owner(1, 0), game.player(2));
    assert_eq!(game.areas_owned(2), 1);
    assert_eq!(game.fields_owned(2), 3);
}

#[test]
fn scenario_render_empty_board() {
    let game = Game::new(2, 2, 1, 1).unwrap();
    let text = game.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["..", ".."]);
    assert!(text.ends_with('\n'));
}

#[test]
fn random_games_keep_counters_consistent() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(6, 5, 3, 2).unwrap();
        let mut stuck = 0;
        let mut player = 1;
        while stuck < game.players() {
            let moves = game.legal_moves(player);
            match moves.choose(&mut rng) {
                Some(mv) => {
                    assert!(game.make_move(player, mv), "seed {}: {} failed", seed, mv);
                    stuck = 0;
                }
                None => {
                    assert!(!game.can_move(player));
                    stuck += 1;
                }
            }
            player = player % game.players() + 1;
            check_counters(&game).unwrap();
        }
        assert!(game.is_over());
    }
}
