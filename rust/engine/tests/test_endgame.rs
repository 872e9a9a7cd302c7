use hanabi_engine::board::{Board, Outcome};
use hanabi_engine::cards::{full_deck, Card, Color, Rank, DECK_SIZE};
use hanabi_engine::errors::GameError;

fn card(color: Color, rank: Rank) -> Card {
    Card { color, rank }
}

fn deck_with_hands(h0: &[Card], h1: &[Card]) -> Vec<Card> {
    let mut rest = full_deck();
    for c in h0.iter().chain(h1) {
        let i = rest.iter().position(|x| x == c).expect("card available");
        rest.remove(i);
    }
    let mut deck = h0.to_vec();
    deck.extend_from_slice(h1);
    deck.extend(rest);
    deck
}

fn ascending(color: Color) -> Vec<Card> {
    [Rank::One, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
        .iter()
        .map(|&r| card(color, r))
        .collect()
}

fn descending(color: Color) -> Vec<Card> {
    let mut v = ascending(color);
    v.reverse();
    v
}

fn cards_in_play(board: &Board) -> usize {
    let in_hands: usize = board.players().iter().map(|p| p.hand_len()).sum();
    let on_piles: usize = board.piles().iter().map(|&h| h as usize).sum();
    board.deck_remaining() + board.discard_pile().len() + in_hands + on_piles
}

#[test]
fn third_mismatch_loses_but_the_play_stands() {
    let deck = deck_with_hands(&descending(Color::Blue), &descending(Color::Green));
    let mut board = Board::with_deck_for_test(deck, 2).unwrap();

    board.play(0, 0).expect("first bomb only"); // blue five, mismatch
    board.play(1, 0).expect("second bomb only"); // green five, mismatch
    assert_eq!(board.bombs(), 1);

    // blue four onto an empty pile: third mismatch, game lost
    assert_eq!(board.play(0, 0), Err(GameError::OutOfBombs));
    assert_eq!(board.bombs(), 0);
    assert_eq!(board.outcome(), Some(Outcome::Lost));
    // the triggering play's effects are applied, not rolled back
    assert_eq!(
        board.discard_pile(),
        &[
            card(Color::Blue, Rank::Five),
            card(Color::Green, Rank::Five),
            card(Color::Blue, Rank::Four),
        ]
    );
    assert_eq!(board.players()[0].hand_len(), 5);
    assert_eq!(cards_in_play(&board), DECK_SIZE);

    // a finished board rejects everything
    assert_eq!(board.play(0, 0), Err(GameError::GameOver));
    assert_eq!(board.discard(1, 0), Err(GameError::GameOver));
    assert_eq!(board.give_hint(1, 0, true), Err(GameError::GameOver));
}

#[test]
fn completed_five_refunds_a_hint_token_when_below_maximum() {
    let deck = deck_with_hands(&ascending(Color::Blue), &ascending(Color::Green));
    let mut board = Board::with_deck_for_test(deck, 2).unwrap();

    // walk the blue pile to four; player 1 burns tokens by hinting
    for _ in 0..4 {
        board.play(0, 0).expect("blue card in sequence");
        board.give_hint(0, 0, true).expect("tokens available");
    }
    assert_eq!(board.hints(), 4);
    assert_eq!(board.pile(Color::Blue), 4);

    board.play(0, 0).expect("blue five completes the pile");
    assert_eq!(board.pile(Color::Blue), 5);
    assert_eq!(board.hints(), 5, "completing a five refunds one token");
}

#[test]
fn completed_five_refund_caps_at_maximum() {
    // scripted full win: p0 holds blue, p1 holds green, then red, white and
    // yellow arrive rank by rank while the turns alternate
    let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    deck.extend(ascending(Color::Blue));
    deck.extend(ascending(Color::Green));
    deck.extend(ascending(Color::Red));
    deck.extend(ascending(Color::White));
    deck.extend(ascending(Color::Yellow));
    let mut rest = full_deck();
    for c in &deck {
        let i = rest.iter().position(|x| x == c).expect("card available");
        rest.remove(i);
    }
    deck.extend(rest);

    let mut board = Board::with_deck_for_test(deck, 2).unwrap();
    for _ in 0..9 {
        let p = board.current_player();
        let idx = playable_index(&board, p).expect("script guarantees a playable card");
        board.play(p, idx).expect("scripted play");
    }
    // ninth play was the blue five with the pool untouched at 8
    assert_eq!(board.pile(Color::Blue), 5);
    assert_eq!(board.hints(), 8, "refund never exceeds the cap");
}

fn playable_index(board: &Board, player: usize) -> Option<usize> {
    board.players()[player]
        .hand()
        .iter()
        .position(|h| board.pile(h.card.color) + 1 == h.card.rank.value())
}

#[test]
fn playing_out_every_pile_wins_the_game() {
    let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    deck.extend(ascending(Color::Blue));
    deck.extend(ascending(Color::Green));
    deck.extend(ascending(Color::Red));
    deck.extend(ascending(Color::White));
    deck.extend(ascending(Color::Yellow));
    let mut rest = full_deck();
    for c in &deck {
        let i = rest.iter().position(|x| x == c).expect("card available");
        rest.remove(i);
    }
    deck.extend(rest);

    let mut board = Board::with_deck_for_test(deck, 2).unwrap();
    for _ in 0..25 {
        let p = board.current_player();
        let idx = playable_index(&board, p).expect("script guarantees a playable card");
        board.play(p, idx).expect("scripted plays all match");
    }

    assert_eq!(board.outcome(), Some(Outcome::Won));
    assert_eq!(board.score(), 25);
    assert!(board.piles().iter().all(|&h| h == 5));
    assert_eq!(board.play(0, 0), Err(GameError::GameOver));
}

#[test]
fn deck_exhaustion_grants_one_final_turn_per_player() {
    let mut board = Board::new(2, Some(61)).unwrap();

    // alternate hint and discard; only the discards consume deck cards
    while board.deck_remaining() > 0 {
        let hinter = board.current_player();
        board
            .give_hint(1 - hinter, 0, true)
            .expect("pool cycles between 7 and 8");
        let discarder = board.current_player();
        board.discard(discarder, 0).expect("pool is below maximum");
    }

    // drawing the last card armed the countdown without consuming from it
    assert_eq!(board.final_turns_remaining(), Some(2));
    assert!(board.outcome().is_none());

    board
        .give_hint(0, 0, true)
        .expect("first final turn is a normal turn");
    assert_eq!(board.final_turns_remaining(), Some(1));
    assert!(board.outcome().is_none());

    // last final turn: discard with an empty deck, the hand shrinks
    let discarder = board.current_player();
    let hand_before = board.players()[discarder].hand_len();
    board.discard(discarder, 0).expect("last final turn");
    assert_eq!(board.players()[discarder].hand_len(), hand_before - 1);

    assert_eq!(board.final_turns_remaining(), Some(0));
    assert_eq!(board.outcome(), Some(Outcome::DeckExhausted));
    assert_eq!(board.score(), 0);
    assert_eq!(cards_in_play(&board), DECK_SIZE);

    assert_eq!(board.play(0, 0), Err(GameError::GameOver));
    assert_eq!(board.give_hint(0, 0, false), Err(GameError::GameOver));
}
