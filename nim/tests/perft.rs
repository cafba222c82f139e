use nim::*;

fn perf_count(game: &Game, depth: usize) -> usize {
    if depth == 0 || game.is_over() {
        1
    } else if depth == 1 {
        game.available_actions().len()
    } else {
        game.available_actions()
            .into_iter()
            .map(|action| {
                let mut clone = game.clone();
                clone.play(action).unwrap();
                perf_count(&clone, depth - 1)
            })
            .sum()
    }
}

/// Number of distinct complete games from this position.
fn game_count(game: &Game) -> usize {
    if game.is_over() {
        return 1;
    }
    game.available_actions()
        .into_iter()
        .map(|action| {
            let mut clone = game.clone();
            clone.play(action).unwrap();
            game_count(&clone)
        })
        .sum()
}

#[test]
fn perft_default() {
    let game = Game::default();
    assert_eq!(perf_count(&game, 0), 1);
    assert_eq!(perf_count(&game, 1), 16);
    assert_eq!(perf_count(&game, 2), 206);
    assert_eq!(perf_count(&game, 3), 2_116);
    assert_eq!(perf_count(&game, 4), 17_338);
}

#[test]
fn complete_games() -> Result<(), ParseError> {
    assert_eq!(game_count(&new_game(&[3])?), 4);
    assert_eq!(game_count(&new_game(&[1, 1])?), 2);
    assert_eq!(game_count(&new_game(&[1, 2, 3])?), 182);
    assert_eq!(game_count(&new_game(&[1, 3, 5])?), 5_220);
    Ok(())
}

#[test]
fn actions_respect_pile_sizes() -> Result<(), ParseError> {
    let cases: [&[u32]; 5] = [&[1, 3, 5, 7], &[0, 2, 0], &[4], &[0, 0, 0, 0], &[]];
    for counts in cases {
        let piles = Piles::new(counts)?;
        let actions = available_actions(&piles);
        assert_eq!(actions.len() as u64, piles.total());
        assert_eq!(actions.is_empty(), piles.is_terminal());
        for action in actions {
            assert!(action.count() >= 1);
            assert!(action.count() <= piles[action.pile()]);
        }
    }
    Ok(())
}

#[test]
fn actions_are_ordered() -> Result<(), ReplayError> {
    let game = new_game(&[2, 0, 1])?;
    let actions = game
        .available_actions()
        .into_iter()
        .map(|action| action.to_string())
        .collect::<Vec<_>>();
    assert_eq!(actions, ["0:1", "0:2", "2:1"]);
    Ok(())
}

#[test]
fn lazy_actions_match_the_list() -> Result<(), ParseError> {
    let piles = Piles::new(&[3, 0, 2, 1])?;
    assert_eq!(actions(&piles).collect::<Vec<_>>(), available_actions(&piles));

    // only the requested actions are generated
    let huge = Piles::new(&[u32::MAX, u32::MAX])?;
    let first = actions(&huge).take(2).collect::<Vec<_>>();
    assert_eq!(first, [Action::new(0, 1)?, Action::new(0, 2)?]);
    Ok(())
}

fn single_pile_changes(seed: usize) -> Result<(), IllegalMoveError> {
    let mut game = Game::default();
    while !game.is_over() {
        let actions = game.available_actions();
        let action = actions[seed.wrapping_mul(game.ply() as usize + 7) % actions.len()];

        let before = game.piles().clone();
        game.play(action)?;
        let after = game.piles();

        assert_eq!(before.total() - after.total(), u64::from(action.count()));
        let changed = before.iter().zip(after.iter()).filter(|(b, a)| b != a).count();
        assert_eq!(changed, 1);
    }
    assert!(game.winner().is_some());
    Ok(())
}

#[test]
fn one_pile_changes_per_move() -> Result<(), IllegalMoveError> {
    for seed in 0..200 {
        single_pile_changes(seed)?;
    }
    Ok(())
}
