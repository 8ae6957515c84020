use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use serde::{Deserialize, Serialize};

/// A name plus the hand it holds for the current round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    hand: Hand,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Draw one card from the deck into this hand, returning a copy of it.
    /// An exhausted deck is a no-op; a round never gets near all 52 cards.
    pub fn draw(&mut self, deck: &mut Deck) -> Option<Card> {
        let card = deck.draw()?;
        self.hand.add_card(card);
        Some(card)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn total(&self) -> u8 {
        self.hand.total()
    }
}
