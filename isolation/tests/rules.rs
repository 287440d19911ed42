use isolation::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn play(state: BoardState, moves: &[(usize, usize)]) -> Result<BoardState, PlayError> {
    moves
        .iter()
        .try_fold(state, |state, &(x, y)| state.result(Cell::new(x, y)))
}

#[test]
fn empty_board() -> Result<(), PlayError> {
    let state = BoardState::new(3, 2)?;
    assert_eq!((state.width(), state.height()), (3, 2));
    assert_eq!(state.to_move(), Player::First);
    assert_eq!(state.ply(), 0);
    assert!(!state.terminal_test());

    let liberties = state.liberties(None);
    assert_eq!(liberties.len(), 5);
    assert!(!liberties.contains(&Cell::new(2, 1)));
    assert_eq!(state.actions(), liberties);
    Ok(())
}

#[test]
fn second_player_first_move() -> Result<(), PlayError> {
    let state = BoardState::new(3, 2)?;
    let first = state.actions()[0];
    assert_eq!(first, Cell::new(0, 0));

    let state = state.result(first)?;
    assert_eq!(state.to_move(), Player::Second);
    assert_eq!(state.location(Player::First), Some(first));
    assert_eq!(state.location(Player::Second), None);
    assert_eq!(state.actions(), vec![
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(0, 1),
        Cell::new(1, 1)
    ]);
    Ok(())
}

#[test]
fn first_action_game_ends() -> Result<(), PlayError> {
    let mut state = BoardState::new(3, 2)?;
    for _ in 0..5 {
        if state.terminal_test() {
            break;
        }
        state = state.result(state.actions()[0])?;
    }
    assert!(state.terminal_test());
    assert!(state.actions().is_empty());
    assert_eq!(state.utility(Player::First)?, 1);
    assert_eq!(state.utility(Player::Second)?, -1);
    Ok(())
}

#[test]
fn slides_follow_direction_order() -> Result<(), PlayError> {
    let state = play(BoardState::new(5, 5)?, &[(2, 2)])?;
    let expected = [
        (3, 2),
        (4, 2),
        (3, 1),
        (4, 0),
        (2, 1),
        (2, 0),
        (1, 1),
        (0, 0),
        (1, 2),
        (0, 2),
        (1, 3),
        (0, 4),
        (2, 3),
        (2, 4),
        (3, 3),
    ]
    .map(|(x, y)| Cell::new(x, y));
    assert_eq!(state.liberties(Some(Cell::new(2, 2))), expected);
    assert_eq!(state.liberty_count(Some(Cell::new(2, 2))), expected.len());
    Ok(())
}

#[test]
fn blocked_cells_stop_slides() -> Result<(), PlayError> {
    let state = play(BoardState::new(3, 2)?, &[(0, 0), (1, 1)])?;
    assert_eq!(state.liberties(Some(Cell::new(0, 0))), vec![
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(0, 1)
    ]);

    let state = play(BoardState::new(5, 5)?, &[(0, 0), (1, 0)])?;
    assert!(!state.is_legal(Cell::new(2, 0)));
    assert!(state.is_legal(Cell::new(0, 1)));
    assert_eq!(
        state.result(Cell::new(2, 0)),
        Err(PlayError::IllegalMove(Cell::new(2, 0)))
    );
    Ok(())
}

#[test]
fn illegal_moves() -> Result<(), PlayError> {
    let state = BoardState::new(3, 2)?;
    // reserved corner
    assert_eq!(
        state.result(Cell::new(2, 1)),
        Err(PlayError::IllegalMove(Cell::new(2, 1)))
    );
    assert_eq!(
        state.result(Cell::new(3, 0)),
        Err(PlayError::IllegalMove(Cell::new(3, 0)))
    );

    let state = play(BoardState::new(5, 5)?, &[(0, 0), (4, 0)])?;
    // not on a row, column or diagonal
    assert!(!state.is_legal(Cell::new(1, 2)));
    // cannot stay in place
    assert!(!state.is_legal(Cell::new(0, 0)));
    // occupied by the opponent
    assert!(!state.is_legal(Cell::new(4, 0)));
    Ok(())
}

#[test]
fn utility_needs_terminal_state() -> Result<(), PlayError> {
    let state = BoardState::new(3, 2)?;
    assert_eq!(state.utility(Player::First), Err(PlayError::UndefinedUtility));
    Ok(())
}

#[test]
fn inactive_player_stuck_is_terminal() -> Result<(), PlayError> {
    // First player walls itself into the corner while the second still has room.
    let state = play(BoardState::new(4, 3)?, &[(1, 0), (2, 0), (1, 1), (2, 2), (0, 1), (0, 2), (0, 0)])?;
    assert_eq!(state.to_move(), Player::Second);
    assert!(!state.actions().is_empty());
    assert!(state.terminal_test());
    assert_eq!(state.utility(Player::Second)?, 1);
    assert_eq!(state.utility(Player::First)?, -1);
    Ok(())
}

#[test]
fn invalid_dimensions() {
    assert_eq!(
        BoardState::new(0, 3),
        Err(PlayError::InvalidDimensions { width: 0, height: 3 })
    );
    assert_eq!(
        BoardState::new(12, 11),
        Err(PlayError::InvalidDimensions { width: 12, height: 11 })
    );
    assert!(BoardState::new(11, 9).is_ok());
    assert!(BoardState::new(16, 8).is_ok());
}

#[test]
fn display() -> Result<(), PlayError> {
    let state = play(BoardState::new(3, 2)?, &[(0, 0), (1, 1)])?;
    assert_eq!(state.to_string(), "1..\n.2X\n");
    Ok(())
}

fn random_game(width: usize, height: usize, seed: u64) -> Result<(), PlayError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = BoardState::new(width, height)?;
    while !state.terminal_test() {
        let actions = state.actions();
        assert_eq!(actions, state.actions());
        assert!(!actions.is_empty());

        // actions are exactly the legal cells
        for y in 0..height {
            for x in 0..width {
                let cell = Cell::new(x, y);
                assert_eq!(state.is_legal(cell), actions.contains(&cell));
            }
        }

        let action = *actions.choose(&mut rng).unwrap();
        let before = state;
        let next = state.result(action)?;
        assert_eq!(state, before);
        assert_eq!(state.actions(), actions);
        assert!(!next.is_open(action));
        assert_eq!(next.ply(), state.ply() + 1);
        assert_eq!(next.to_move(), state.to_move().next());
        state = next;
    }
    assert_eq!(
        state.utility(Player::First)?,
        -state.utility(Player::Second)?
    );
    if state.actions().is_empty() {
        assert_eq!(state.utility(state.to_move())?, -1);
    }
    Ok(())
}

#[test]
fn random_games_keep_invariants() -> Result<(), PlayError> {
    for seed in 0..20 {
        random_game(5, 5, seed)?;
        random_game(4, 3, seed)?;
        random_game(7, 7, seed)?;
        random_game(11, 9, seed)?;
    }
    Ok(())
}
