use blackjack::{Card, Deck, GameRound, Outcome, Phase, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Stack a deck so cards come off in the listed order.
fn stacked(order: &[(Suit, Rank)]) -> Deck {
    let cards: Vec<Card> = order.iter().rev().map(|&(s, r)| Card::new(s, r)).collect();
    Deck::from(cards)
}

#[test]
fn full_round_player_stands_dealer_draws_to_twenty_one() {
    // Deal alternates player, dealer, player, dealer:
    //   player 10 + 7 = 17, dealer 6 + 10 = 16, then the dealer draws a 5.
    let deck = stacked(&[
        (Suit::Hearts, Rank::Ten),
        (Suit::Clubs, Rank::Six),
        (Suit::Spades, Rank::Seven),
        (Suit::Diamonds, Rank::Ten),
        (Suit::Hearts, Rank::Five),
    ]);
    let mut round = GameRound::new(deck, "Player");

    round.deal().unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player().total(), 17);
    assert_eq!(round.dealer_revealed(), 1);

    round.player_stand().unwrap();
    assert_eq!(round.run_dealer_turn().unwrap(), 21);

    assert_eq!(round.phase(), Phase::Resolved);
    assert_eq!(round.outcome().unwrap(), Outcome::DealerWin);
}

#[test]
fn full_round_player_hits_then_wins() {
    // player 9 + 5 = 14, hits a 7 for 21 which ends the turn by itself;
    // dealer 10 + 7 = 17 stands. 21 vs 17 is a player win.
    let deck = stacked(&[
        (Suit::Hearts, Rank::Nine),
        (Suit::Clubs, Rank::Ten),
        (Suit::Spades, Rank::Five),
        (Suit::Diamonds, Rank::Seven),
        (Suit::Hearts, Rank::Seven),
    ]);
    let mut round = GameRound::new(deck, "Player");

    round.deal().unwrap();
    assert_eq!(round.player_hit().unwrap(), 21);
    assert_eq!(round.phase(), Phase::DealerTurn);

    assert_eq!(round.run_dealer_turn().unwrap(), 17);
    assert_eq!(round.outcome().unwrap(), Outcome::PlayerWin);
}

#[test]
fn full_round_player_busts() {
    // player 10 + 6 hits a king: 26, bust. The dealer still plays out its
    // hand (16 draws the next card), but the bust decides the outcome.
    let deck = stacked(&[
        (Suit::Hearts, Rank::Ten),
        (Suit::Clubs, Rank::Nine),
        (Suit::Spades, Rank::Six),
        (Suit::Diamonds, Rank::Seven),
        (Suit::Hearts, Rank::King),
        (Suit::Clubs, Rank::Two),
    ]);
    let mut round = GameRound::new(deck, "Player");

    round.deal().unwrap();
    assert_eq!(round.player_hit().unwrap(), 26);
    assert_eq!(round.phase(), Phase::DealerTurn);

    round.run_dealer_turn().unwrap();
    assert_eq!(round.dealer().total(), 18);
    assert_eq!(round.outcome().unwrap(), Outcome::PlayerBust);
}

#[test]
fn seeded_shuffle_plays_identically() {
    let play = |seed: u64| {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut round = GameRound::new(deck, "Player");
        round.deal().unwrap();
        if round.phase() == Phase::PlayerTurn {
            round.player_stand().unwrap();
        }
        round.run_dealer_turn().unwrap();
        (
            round.player().total(),
            round.dealer().total(),
            round.outcome().unwrap(),
        )
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn round_never_exhausts_a_real_deck() {
    // Worst case for a stand-on-17 dealer with one player who always hits:
    // still nowhere near 52 cards.
    for seed in 0..20 {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut round = GameRound::new(deck, "Player");
        round.deal().unwrap();
        while round.phase() == Phase::PlayerTurn {
            round.player_hit().unwrap();
        }
        round.run_dealer_turn().unwrap();
        assert!(round.outcome().is_ok());
        assert!(!round.deck().is_empty());
    }
}
