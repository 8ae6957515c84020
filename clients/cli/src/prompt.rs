use dialoguer::{Confirm, Select};

/// The only choices the core ever receives. Anything else typed at the
/// terminal stays inside dialoguer, which re-prompts without consuming a
/// turn or a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

const CHOICES: [&str; 2] = ["Hit", "Stand"];

fn decision_from_index(index: usize) -> Decision {
    match index {
        0 => Decision::Hit,
        _ => Decision::Stand,
    }
}

/// Ask for hit or stand. A broken terminal reads as a stand so the round
/// still resolves.
pub fn decision() -> Decision {
    let selection = Select::new()
        .with_prompt("Hit or stand?")
        .items(&CHOICES)
        .default(0)
        .interact()
        .unwrap_or(1);
    decision_from_index(selection)
}

pub fn play_again() -> bool {
    Confirm::new()
        .with_prompt("Play again?")
        .default(true)
        .interact()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_maps_to_decision() {
        assert_eq!(decision_from_index(0), Decision::Hit);
        assert_eq!(decision_from_index(1), Decision::Stand);
    }

    #[test]
    fn test_choices_match_decisions() {
        assert_eq!(CHOICES.len(), 2);
        assert_eq!(CHOICES[0], "Hit");
        assert_eq!(CHOICES[1], "Stand");
    }
}
