use blackjack::{Card, Outcome, Participant};
use colored::Colorize;

const CARD_HEIGHT: usize = 7;

/// Seven-line box for one face-up card, rank in opposite corners, suit
/// symbol centered. Hearts and diamonds come out red.
fn card_lines(card: &Card) -> Vec<String> {
    let rank = card.rank.to_string();
    let symbol = card.suit.symbol().to_string();
    let symbol = if card.suit.is_red() {
        symbol.red().to_string()
    } else {
        symbol.normal().to_string()
    };
    vec![
        "┌─────────┐".to_string(),
        format!("│ {:<2}      │", rank),
        "│         │".to_string(),
        format!("│    {}    │", symbol),
        "│         │".to_string(),
        format!("│      {:>2} │", rank),
        "└─────────┘".to_string(),
    ]
}

/// Card back shown for the dealer's concealed cards.
fn hidden_lines() -> Vec<String> {
    vec![
        "┌─────────┐".to_string(),
        "│░░░░░░░░░│".to_string(),
        "│░░░░░░░░░│".to_string(),
        "│░░░░░░░░░│".to_string(),
        "│░░░░░░░░░│".to_string(),
        "│░░░░░░░░░│".to_string(),
        "└─────────┘".to_string(),
    ]
}

/// One participant's cards laid out side by side, the first `revealed` of
/// them face up. The hand value only prints once everything is face up.
pub fn hand_block(participant: &Participant, revealed: usize) -> String {
    let hand = participant.hand();
    let blocks: Vec<Vec<String>> = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            if i < revealed {
                card_lines(card)
            } else {
                hidden_lines()
            }
        })
        .collect();

    let mut out = format!("{} has:\n", participant.name());
    for row in 0..CARD_HEIGHT {
        let line: Vec<&str> = blocks.iter().map(|b| b[row].as_str()).collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    if revealed >= hand.len() {
        let soft = if hand.is_soft() { ", soft" } else { "" };
        out.push_str(&format!("(Value: {}{})\n", hand.total(), soft));
    }
    out
}

pub fn outcome_line(outcome: Outcome) -> String {
    match outcome {
        Outcome::PlayerBust => "You bust. You lose!".red().to_string(),
        Outcome::PlayerWin => "You win!".green().to_string(),
        Outcome::Push => "Push (tie).".yellow().to_string(),
        Outcome::DealerWin => "Dealer wins.".red().to_string(),
    }
}
