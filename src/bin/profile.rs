use gamma::game::Game;
use gamma::render::render_standings;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

const GAMES: u64 = 50;
const WIDTH: u32 = 16;
const HEIGHT: u32 = 16;
const PLAYERS: u32 = 4;
const AREAS: u32 = 3;

/// Plays one game with uniformly random legal moves. Returns the number of
/// moves made.
fn random_game(seed: u64) -> (Game, u64) {
    let mut game = match Game::new(WIDTH, HEIGHT, PLAYERS, AREAS) {
        Ok(game) => game,
        Err(err) => panic!("invalid profile configuration: {}", err),
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut moves_made = 0;
    let mut stuck_in_a_row = 0;
    let mut player = 1;

    while stuck_in_a_row < PLAYERS {
        let moves = game.legal_moves(player);
        match moves.choose(&mut rng) {
            Some(mv) => {
                assert!(game.make_move(player, mv), "legal move {} failed", mv);
                moves_made += 1;
                stuck_in_a_row = 0;
            }
            None => stuck_in_a_row += 1,
        }
        player = player % PLAYERS + 1;
    }

    (game, moves_made)
}

#[hotpath::main]
fn main() {
    let mut total_moves = 0;
    let mut last = None;

    for seed in 0..GAMES {
        let (game, moves) = random_game(seed);
        total_moves += moves;
        last = Some(game);
    }

    println!(
        "Gamma self-play: {} games on {}x{}, {} players, {} areas, {} moves",
        GAMES, WIDTH, HEIGHT, PLAYERS, AREAS, total_moves
    );
    if let Some(game) = last {
        print!("{}", game);
        print!("{}", render_standings(&game));
    }
}
