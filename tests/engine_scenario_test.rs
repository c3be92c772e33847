//! Integration test: engine scenarios
//!
//! Drives `SnakeGame` directly through scripted boards: feeding, growth,
//! collisions and a long random game checking board invariants.

use gridsnake::game::{
    Cell, Collision, Difficulty, Direction, GridSize, SessionState, SnakeGame, TickOutcome,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn started(difficulty: Difficulty, seed: u64) -> (SnakeGame, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = SnakeGame::default();
    game.start(difficulty, &mut rng);
    (game, rng)
}

/// Lay a snake out from `cells` (head first) with no food on the board.
fn with_body(game: &mut SnakeGame, cells: &[(i16, i16)], direction: Direction) {
    game.snake = cells.iter().map(|&(r, c)| Cell::new(r, c)).collect();
    game.direction = direction;
    game.pending_direction = direction;
    game.food.clear();
}

#[test]
fn test_start_positions_and_food() {
    for difficulty in Difficulty::ALL {
        let (game, _) = started(difficulty, 11);
        assert_eq!(game.state, SessionState::Running);
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.head(), Some(Cell::new(20, 1)));
        assert_eq!(game.food.len(), difficulty.profile().food_count);
        for food in &game.food {
            assert!(game.grid.contains(*food));
            assert!(!game.snake.contains(food));
        }
    }
}

#[test]
fn test_eating_grows_and_scores() {
    let (mut game, mut rng) = started(Difficulty::Easy, 3);
    with_body(&mut game, &[(20, 1)], Direction::Right);
    game.food = vec![Cell::new(20, 5), Cell::new(1, 1)];

    for _ in 0..3 {
        assert_eq!(game.tick(&mut rng), TickOutcome::Moved { ate: false });
    }
    assert_eq!(game.tick(&mut rng), TickOutcome::Moved { ate: true });

    assert_eq!(game.score, 10);
    assert_eq!(game.snake.len(), 2);
    assert_eq!(game.head(), Some(Cell::new(20, 5)));
    assert_eq!(game.tick_count, 4);
    // Eaten food is replaced; the other item stays put
    assert_eq!(game.food.len(), 2);
    assert!(game.food.contains(&Cell::new(1, 1)));
    assert!(!game.food.contains(&Cell::new(20, 5)));
}

#[test]
fn test_reversal_rejected_then_turn_accepted() {
    let (mut game, mut rng) = started(Difficulty::Medium, 5);
    with_body(&mut game, &[(20, 3), (20, 2), (20, 1)], Direction::Right);

    assert!(!game.set_pending_direction(Direction::Left));
    assert!(game.set_pending_direction(Direction::Down));
    game.tick(&mut rng);

    assert_eq!(game.head(), Some(Cell::new(21, 3)));
    assert_eq!(game.direction, Direction::Down);
}

#[test]
fn test_wall_collision_ends_session() {
    let (mut game, mut rng) = started(Difficulty::Hard, 9);
    with_body(&mut game, &[(1, 10)], Direction::Up);
    game.score = 40;

    assert_eq!(
        game.tick(&mut rng),
        TickOutcome::GameOver {
            collision: Collision::Wall,
            score: 40
        }
    );
    assert_eq!(game.state, SessionState::Ended);
    // The board is left as it was at the moment of the crash
    assert_eq!(game.head(), Some(Cell::new(1, 10)));
    assert_eq!(game.tick_count, 0);
    assert_eq!(game.tick(&mut rng), TickOutcome::Skipped);

    // A new session starts counting from zero again
    game.start(Difficulty::Hard, &mut rng);
    assert_eq!(game.tick_count, 0);
}

#[test]
fn test_turning_into_body_is_self_collision() {
    let (mut game, mut rng) = started(Difficulty::Easy, 1);
    // A U-shape: turning down from (10,12) lands on (11,12)
    with_body(
        &mut game,
        &[(10, 12), (10, 11), (11, 11), (11, 12), (11, 13)],
        Direction::Right,
    );
    game.set_pending_direction(Direction::Down);

    assert_eq!(
        game.tick(&mut rng),
        TickOutcome::GameOver {
            collision: Collision::SelfBite,
            score: 0
        }
    );
}

#[test]
fn test_random_game_keeps_board_consistent() {
    let (mut game, mut rng) = started(Difficulty::Medium, 2024);
    let mut ticks = 0;

    while game.state == SessionState::Running && ticks < 5_000 {
        if rng.gen_bool(0.2) {
            let direction = Direction::ALL[rng.gen_range(0..4)];
            game.set_pending_direction(direction);
        }
        let before = game.snake.len();
        let outcome = game.tick(&mut rng);
        ticks += 1;

        if let TickOutcome::Moved { ate } = outcome {
            let expected = if ate { before + 1 } else { before };
            assert_eq!(game.snake.len(), expected);
            assert_eq!(game.score as usize, (game.snake.len() - 1) * 10);

            let body: HashSet<Cell> = game.snake.iter().copied().collect();
            assert_eq!(body.len(), game.snake.len(), "snake overlaps itself");
            assert!(game.snake.iter().all(|c| game.grid.contains(*c)));
            for food in &game.food {
                assert!(game.grid.contains(*food));
                assert!(!body.contains(food));
            }
            let food: HashSet<Cell> = game.food.iter().copied().collect();
            assert_eq!(food.len(), game.food.len(), "food stacked on one cell");
        }
    }
    assert!(ticks > 0);
}

#[test]
fn test_tiny_board_shortfall_is_not_an_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut game = SnakeGame::new(GridSize::new(1, 2));
    game.start(Difficulty::Easy, &mut rng);

    // One free cell for two requested food items
    assert_eq!(game.food, vec![Cell::new(1, 2)]);
    assert_eq!(game.tick(&mut rng), TickOutcome::Moved { ate: true });
    assert!(game.food.is_empty());
    assert_eq!(game.score, 10);
}

#[test]
fn test_short_food_set_is_only_refilled_by_eating() {
    let (mut game, mut rng) = started(Difficulty::Hard, 17);
    with_body(&mut game, &[(20, 1)], Direction::Right);

    for _ in 0..10 {
        assert_eq!(game.tick(&mut rng), TickOutcome::Moved { ate: false });
    }
    assert!(game.food.is_empty());
    assert_eq!(game.tick_count, 10);

    // Eating makes one placement attempt for the item consumed
    game.food = vec![Cell::new(20, 12)];
    assert_eq!(game.tick(&mut rng), TickOutcome::Moved { ate: true });
    assert_eq!(game.food.len(), 1);
    assert_ne!(game.food[0], Cell::new(20, 12));
}
