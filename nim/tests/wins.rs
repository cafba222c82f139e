use nim::*;

#[test]
fn taking_the_last_object_loses() -> Result<(), ReplayError> {
    let game = Game::from_moves(&[1], &["0:1"])?;
    assert_eq!(game.winner(), Some(Player::One));
    assert_eq!(game.result(), GameResult::Winner(Player::One));
    Ok(())
}

#[test]
fn second_player_empties_the_board() -> Result<(), ReplayError> {
    let game = Game::from_moves(&[1, 3, 5, 7], &["3:7", "2:5", "1:3", "0:1"])?;
    assert_eq!(game.winner(), Some(Player::Zero));
    assert_eq!(game.to_move(), Player::Zero);
    assert_eq!(game.ply(), 4);
    Ok(())
}

#[test]
fn no_winner_while_objects_remain() -> Result<(), ReplayError> {
    let game = Game::from_moves(&[1, 3, 5, 7], &["1:3"])?;
    assert_eq!(game.piles().as_slice(), &[1, 0, 5, 7]);
    assert_eq!(game.winner(), None);
    assert_eq!(game.to_move(), Player::One);
    Ok(())
}

#[test]
fn terminal_configuration_rejects_moves() -> Result<(), ParseError> {
    let cases: [&[u32]; 2] = [&[0], &[0, 0, 0, 0]];
    for counts in cases {
        let mut game = new_game(counts)?;
        assert!(game.available_actions().is_empty());
        assert_eq!(game.play(Action::new(0, 1)?), Err(IllegalMoveError::GameOver));
    }
    Ok(())
}

#[test]
fn replay_reports_illegal_move() {
    assert_eq!(
        Game::from_moves(&[1, 3], &["1:2", "1:2"]),
        Err(ReplayError::IllegalMove(IllegalMoveError::NotEnough {
            pile: 1,
            count: 2,
            available: 1
        }))
    );
    assert_eq!(
        Game::from_moves(&[1, 3], &["5:1"]),
        Err(ReplayError::IllegalMove(IllegalMoveError::PileOutOfRange { pile: 5, piles: 2 }))
    );
}
