//! Game integration tests.

use rummy::{
    Card, DECK_SIZE, DeckExhaustion, DiscardError, DrawError, Game, GameOptions, HAND_SIZE, Hand,
    IntegrityError, Rank, Suit, TurnPhase,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Replaces the table with the given piles. Slices list the top card last.
fn set_table(game: &Game, deck: &[Card], pile: &[Card], hand: &[Card], phase: TurnPhase) {
    *game.deck.lock() = deck.to_vec();
    *game.discard_pile.lock() = pile.to_vec();
    *game.hand.lock() = Hand::from(hand.to_vec());
    *game.phase.lock() = phase;
}

fn started(seed: u64) -> Game {
    let game = Game::new(GameOptions::default(), seed);
    game.start_game();
    game
}

#[test]
fn start_game_deals_hand_and_discard() {
    let game = started(42);

    assert_eq!(game.player_hand().len(), HAND_SIZE);
    assert_eq!(game.discard_pile().len(), 1);
    assert_eq!(game.cards_remaining(), DECK_SIZE - HAND_SIZE - 1);
    assert_eq!(game.turn_phase(), TurnPhase::Draw);
    assert!(!game.is_winner());
    assert_eq!(game.verify_cards(), Ok(()));
}

#[test]
fn new_game_has_nothing_to_draw() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.turn_phase(), TurnPhase::Draw);
    assert_eq!(game.draw_from_deck().unwrap_err(), DrawError::EmptySource);
    assert_eq!(game.draw_from_discard().unwrap_err(), DrawError::EmptySource);
    assert_eq!(game.verify_cards(), Err(IntegrityError::Missing(DECK_SIZE)));
}

#[test]
fn same_seed_deals_same_game() {
    let a = started(7);
    let b = started(7);
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.player_hand(), b.player_hand());
    assert_eq!(a.discard_pile(), b.discard_pile());

    let c = started(8);
    assert_ne!(a.deck(), c.deck());
}

#[test]
fn start_game_abandons_game_in_progress() {
    let game = started(3);
    let first_hand = game.player_hand();
    game.draw_from_deck().unwrap();

    game.start_game();
    assert_eq!(game.turn_phase(), TurnPhase::Draw);
    assert_eq!(game.player_hand().len(), HAND_SIZE);
    assert_ne!(game.player_hand(), first_hand);
    assert_eq!(game.verify_cards(), Ok(()));
}

#[test]
fn draw_from_deck_moves_top_card_to_hand() {
    let game = started(11);
    let top = *game.deck().last().unwrap();

    let drawn = game.draw_from_deck().unwrap();
    assert_eq!(drawn, top);
    assert_eq!(game.player_hand().len(), HAND_SIZE + 1);
    assert_eq!(game.player_hand().last(), Some(&top));
    assert_eq!(game.cards_remaining(), DECK_SIZE - HAND_SIZE - 2);
    assert_eq!(game.turn_phase(), TurnPhase::Discard);
    assert_eq!(game.verify_cards(), Ok(()));
}

#[test]
fn draw_in_discard_phase_is_rejected() {
    let game = started(12);
    game.draw_from_deck().unwrap();
    let before = game.snapshot();

    assert_eq!(game.draw_from_deck().unwrap_err(), DrawError::MustDiscard);
    assert_eq!(game.draw_from_discard().unwrap_err(), DrawError::MustDiscard);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn draw_from_empty_deck_is_rejected() {
    let game = Game::new(GameOptions::default(), 13);
    let pile = [card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Clubs)];
    set_table(&game, &[], &pile, &[card(Rank::Ace, Suit::Hearts)], TurnPhase::Draw);
    let before = game.snapshot();

    assert_eq!(game.draw_from_deck().unwrap_err(), DrawError::EmptySource);
    assert!(!game.can_draw_from_deck());
    assert_eq!(game.snapshot(), before);

    // The discard pile is still available.
    assert_eq!(game.draw_from_discard(), Ok(card(Rank::Three, Suit::Clubs)));
}

#[test]
fn empty_deck_is_restocked_from_discards_when_enabled() {
    let options = GameOptions::default().with_exhaustion(DeckExhaustion::ReshuffleDiscards);
    let game = Game::new(options, 14);
    let pile = [
        card(Rank::Four, Suit::Spades),
        card(Rank::Five, Suit::Spades),
        card(Rank::Six, Suit::Spades),
    ];
    set_table(&game, &[], &pile, &[], TurnPhase::Draw);
    assert!(game.can_draw_from_deck());

    let drawn = game.draw_from_deck().unwrap();
    assert!(pile[..2].contains(&drawn));
    assert_eq!(game.discard_pile(), vec![card(Rank::Six, Suit::Spades)]);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.player_hand(), vec![drawn]);
}

#[test]
fn restock_keeps_single_discard() {
    let options = GameOptions::default().with_exhaustion(DeckExhaustion::ReshuffleDiscards);
    let game = Game::new(options, 15);
    let top = card(Rank::Nine, Suit::Diamonds);
    set_table(&game, &[], &[top], &[], TurnPhase::Draw);

    assert!(!game.can_draw_from_deck());
    assert_eq!(game.draw_from_deck().unwrap_err(), DrawError::EmptySource);
    assert_eq!(game.discard_pile(), vec![top]);
}

#[test]
fn draw_from_discard_takes_top_card() {
    let game = started(16);
    let top = game.top_discard().unwrap();

    assert_eq!(game.draw_from_discard(), Ok(top));
    assert!(game.discard_pile().is_empty());
    assert_eq!(game.player_hand().len(), HAND_SIZE + 1);
    assert_eq!(game.turn_phase(), TurnPhase::Discard);
    assert_eq!(game.verify_cards(), Ok(()));
}

#[test]
fn discard_in_draw_phase_is_rejected() {
    let game = started(17);
    let held = game.player_hand()[0];
    let before = game.snapshot();

    assert_eq!(game.discard(held).unwrap_err(), DiscardError::MustDraw);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn discard_of_card_not_in_hand_is_rejected() {
    let game = started(18);
    game.draw_from_deck().unwrap();
    let foreign = game.top_discard().unwrap();
    let before = game.snapshot();

    assert_eq!(game.discard(foreign).unwrap_err(), DiscardError::CardNotInHand);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn draw_then_discard_first_card_completes_turn() {
    let game = started(19);
    game.draw_from_deck().unwrap();
    let first = game.player_hand()[0];

    game.discard(first).unwrap();
    assert_eq!(game.turn_phase(), TurnPhase::Draw);
    assert_eq!(game.player_hand().len(), HAND_SIZE);
    assert!(!game.player_hand().contains(&first));
    assert_eq!(game.top_discard(), Some(first));
    assert_eq!(game.verify_cards(), Ok(()));
}

#[test]
fn discarding_last_card_wins() {
    let game = Game::new(GameOptions::default(), 20);
    let last = card(Rank::King, Suit::Hearts);
    set_table(&game, &[], &[], &[last], TurnPhase::Discard);

    game.discard(last).unwrap();
    assert!(game.is_winner());
    assert!(game.player_hand().is_empty());
    assert_eq!(game.discard_pile(), vec![last]);
}

#[test]
fn winner_is_set_exactly_when_hand_empties_and_stays_set() {
    let game = Game::new(GameOptions::default(), 21);
    let hand = [
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
    ];
    set_table(&game, &[], &[], &hand, TurnPhase::Discard);

    for (index, held) in hand.iter().enumerate() {
        *game.phase.lock() = TurnPhase::Discard;
        game.discard(*held).unwrap();
        assert_eq!(game.is_winner(), index == hand.len() - 1);
    }

    // Playing on keeps the win.
    let picked = game.draw_from_discard().unwrap();
    assert!(game.is_winner());
    game.discard(picked).unwrap();
    assert!(game.is_winner());

    game.start_game();
    assert!(!game.is_winner());
}

#[test]
fn affordances_follow_turn_phase() {
    let game = started(22);
    let held = game.player_hand()[0];

    assert!(game.can_draw_from_deck());
    assert!(game.can_draw_from_discard());
    assert!(!game.can_discard(held));

    game.draw_from_deck().unwrap();
    assert!(!game.can_draw_from_deck());
    assert!(!game.can_draw_from_discard());
    assert!(game.can_discard(held));
    assert!(!game.can_discard(game.top_discard().unwrap()));
}

#[test]
fn snapshot_reflects_table() {
    let game = started(23);
    let snapshot = game.snapshot();

    assert_eq!(snapshot.deck_len, game.cards_remaining());
    assert_eq!(snapshot.player_hand, game.player_hand());
    assert_eq!(snapshot.top_discard, game.top_discard());
    assert_eq!(
        snapshot.prompt(),
        Some("Draw a card from the deck or discard pile.")
    );
    assert!(!snapshot.hand_is_discardable());

    game.draw_from_discard().unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.top_discard, None);
    assert_eq!(snapshot.prompt(), Some("Discard a card from your hand."));
    assert!(snapshot.hand_is_discardable());
}

#[test]
fn verify_cards_reports_duplicates() {
    let game = started(24);
    let copy = game.player_hand()[0];
    game.discard_pile.lock().push(copy);

    assert_eq!(game.verify_cards(), Err(IntegrityError::Duplicate(copy)));
}

#[test]
fn verify_cards_reports_missing_cards() {
    let game = started(25);
    game.deck.lock().truncate(3);

    assert_eq!(
        game.verify_cards(),
        Err(IntegrityError::Missing(DECK_SIZE - HAND_SIZE - 1 - 3))
    );
}

#[test]
fn reseed_replays_deal_of_fresh_game() {
    let game = started(26);
    game.draw_from_deck().unwrap();

    game.reseed(99);
    assert_eq!(game.seed(), 99);
    // The game in progress is untouched.
    assert_eq!(game.turn_phase(), TurnPhase::Discard);
    assert_eq!(game.player_hand().len(), HAND_SIZE + 1);

    game.start_game();
    let fresh = started(99);
    assert_eq!(game.deck(), fresh.deck());
    assert_eq!(game.player_hand(), fresh.player_hand());
    assert_eq!(game.discard_pile(), fresh.discard_pile());
}
