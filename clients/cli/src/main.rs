use blackjack::{Deck, GameRound, Phase};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod prompt;
mod render;

use prompt::Decision;

#[derive(Parser)]
#[command(name = "blackjack-cli", about = "Play blackjack in the terminal")]
struct Args {
    /// Player display name
    #[arg(long, default_value = "Player")]
    name: String,

    /// Seed the shuffle for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    loop {
        play_round(&args.name, &mut rng);
        if !prompt::play_again() {
            println!("Thanks for playing!");
            break;
        }
    }
}

/// One full round: fresh shuffled deck, deal, player decisions, dealer
/// policy, outcome. Nothing survives into the next round.
fn play_round(name: &str, rng: &mut ChaCha8Rng) {
    let mut deck = Deck::new();
    deck.shuffle(rng);

    let mut round = GameRound::new(deck, name);
    round.deal().expect("fresh round is undealt");
    show_table(&round);

    while round.phase() == Phase::PlayerTurn {
        match prompt::decision() {
            Decision::Hit => {
                let total = round.player_hit().expect("player turn is open");
                log::debug!("player hits to {total}");
                show_table(&round);
            }
            Decision::Stand => {
                round.player_stand().expect("player turn is open");
                log::debug!("player stands at {}", round.player().total());
            }
        }
    }

    let dealer_total = round.run_dealer_turn().expect("dealer turn follows");
    log::debug!("dealer finishes at {dealer_total}");
    show_table(&round);

    let outcome = round.outcome().expect("round is resolved");
    println!("{}", render::outcome_line(outcome));
    println!();
}

/// Player hand face up, dealer hand with only the revealed cards showing.
fn show_table(round: &GameRound) {
    println!();
    println!(
        "{}",
        render::hand_block(round.player(), round.player().hand().len())
    );
    println!(
        "{}",
        render::hand_block(round.dealer(), round.dealer_revealed())
    );
}
