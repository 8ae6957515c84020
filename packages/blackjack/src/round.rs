use crate::deck::Deck;
use crate::participant::Participant;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dealer draws strictly below this total, hard or soft.
pub const DEALER_STANDS_ON: u8 = 17;

/// Where the round currently stands. Transitions run one way:
/// NotStarted -> PlayerTurn -> DealerTurn -> Resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// Result of a resolved round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBust,
    PlayerWin,
    Push,
    DealerWin,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("cards have already been dealt")]
    AlreadyDealt,
    #[error("action not allowed during {phase:?}")]
    OutOfTurn { phase: Phase },
    #[error("round has not been resolved yet")]
    NotResolved,
}

/// One round of blackjack: a deck and two hands, dealt, played and resolved
/// exactly once. The round owns its deck and both participants; play again
/// by building a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRound {
    deck: Deck,
    player: Participant,
    dealer: Participant,
    phase: Phase,
}

impl GameRound {
    /// The deck should already be shuffled; the round never reorders it.
    pub fn new(deck: Deck, player_name: impl Into<String>) -> Self {
        Self {
            deck,
            player: Participant::new(player_name),
            dealer: Participant::new("Dealer"),
            phase: Phase::NotStarted,
        }
    }

    /// Deal two cards each, alternating player and dealer, then open the
    /// player's turn. A dealt 21 leaves the player nothing to decide and
    /// moves straight to the dealer.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::NotStarted {
            return Err(RoundError::AlreadyDealt);
        }
        for _ in 0..2 {
            self.player.draw(&mut self.deck);
            self.dealer.draw(&mut self.deck);
        }
        self.phase = if self.player.total() >= 21 {
            Phase::DealerTurn
        } else {
            Phase::PlayerTurn
        };
        Ok(())
    }

    /// Player takes one card and gets the new total back. Reaching 21 or
    /// busting ends the turn; the phase moves on by itself.
    pub fn player_hit(&mut self) -> Result<u8, RoundError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.player.draw(&mut self.deck);
        let total = self.player.total();
        if total >= 21 {
            self.phase = Phase::DealerTurn;
        }
        Ok(total)
    }

    pub fn player_stand(&mut self) -> Result<(), RoundError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// House policy: draw while under 17, stand at 17 or better, hard or
    /// soft alike. Runs regardless of how the player's turn ended, and
    /// resolves the round. Returns the dealer's final total.
    pub fn run_dealer_turn(&mut self) -> Result<u8, RoundError> {
        self.expect_phase(Phase::DealerTurn)?;
        while self.dealer.total() < DEALER_STANDS_ON {
            if self.dealer.draw(&mut self.deck).is_none() {
                break;
            }
        }
        self.phase = Phase::Resolved;
        Ok(self.dealer.total())
    }

    /// Outcome precedence: a player bust loses outright, before the dealer's
    /// hand is even looked at; then dealer bust, higher total, tie.
    pub fn outcome(&self) -> Result<Outcome, RoundError> {
        if self.phase != Phase::Resolved {
            return Err(RoundError::NotResolved);
        }
        let player = self.player.total();
        let dealer = self.dealer.total();
        let outcome = if player > 21 {
            Outcome::PlayerBust
        } else if dealer > 21 || player > dealer {
            Outcome::PlayerWin
        } else if player == dealer {
            Outcome::Push
        } else {
            Outcome::DealerWin
        };
        Ok(outcome)
    }

    /// How many dealer cards are face up: only the upcard while the player
    /// is deciding, the whole hand from the dealer's turn on. Presentation
    /// of the concealed cards is the renderer's business.
    pub fn dealer_revealed(&self) -> usize {
        match self.phase {
            Phase::NotStarted => 0,
            Phase::PlayerTurn => 1,
            Phase::DealerTurn | Phase::Resolved => self.dealer.hand().len(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::OutOfTurn { phase: self.phase })
        }
    }
}
