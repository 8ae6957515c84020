use crate::card::Card;
use serde::{Deserialize, Serialize};

/// Cards held by one participant, with a running blackjack total.
///
/// `soft_aces` counts the aces still worth 11. The stored total is never
/// left above 21 while one of them could drop to 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    soft_aces: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card and update the running total, demoting aces from 11 to
    /// 1 one step at a time. Re-applied on every add, so several aces can
    /// demote across successive cards.
    pub fn add_card(&mut self, card: Card) {
        self.total += card.value();
        if card.is_ace() {
            self.soft_aces += 1;
        }
        self.cards.push(card);
        while self.total > 21 && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// A hand is soft while some ace still counts as 11.
    pub fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    pub fn is_busted(&self) -> bool {
        self.total > 21
    }
}
