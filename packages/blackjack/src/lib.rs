mod card;
mod deck;
mod hand;
mod participant;
mod round;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::Hand;
pub use participant::Participant;
pub use round::{GameRound, Outcome, Phase, RoundError, DEALER_STANDS_ON};
