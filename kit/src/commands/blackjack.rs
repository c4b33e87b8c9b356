//! `kit blackjack`

use super::prompt;
use crate::error::CliResult;
use colored::Colorize;
use kit_core::{kit_println, kit_success};
use kit_games::{CardSource, Outcome, RandomCards, Round, Tally};
use kit_messages::{msg, MESSAGES};
use tracing::debug;

pub fn handle_blackjack() -> CliResult<()> {
    let mut cards = RandomCards::new(rand::rng());
    let mut tally = Tally::default();

    while prompt::confirm(MESSAGES.games.blackjack_play_prompt, true)? {
        let outcome = play_round(&mut cards)?;
        debug!(?outcome, "round finished");
        tally.record(outcome);
        let line = outcome.to_string();
        if outcome.player_won() {
            kit_println!("{}", line.green().bold());
        } else if outcome.is_draw() {
            kit_println!("{}", line.yellow().bold());
        } else {
            kit_println!("{}", line.red().bold());
        }
    }

    if tally.rounds() > 0 {
        kit_success!(
            "{}",
            msg!(
                MESSAGES.games.blackjack_tally,
                wins = tally.wins.to_string(),
                losses = tally.losses.to_string(),
                draws = tally.draws.to_string()
            )
        );
    }
    kit_println!("{}", MESSAGES.common.goodbye);
    Ok(())
}

fn play_round(cards: &mut impl CardSource) -> CliResult<Outcome> {
    let mut round = Round::deal(cards);
    show_player(&round);
    kit_println!(
        "{}",
        msg!(
            MESSAGES.games.blackjack_dealer_first,
            card = round.dealer_up_card().to_string()
        )
    );

    if let Some(outcome) = round.opening_outcome() {
        show_final(&round);
        return Ok(outcome);
    }

    while prompt::confirm(MESSAGES.games.blackjack_hit_prompt, true)? {
        round.hit(cards);
        show_player(&round);
        if round.player_busted() {
            show_final(&round);
            return Ok(Outcome::PlayerBust);
        }
    }

    round.dealer_play(cards);
    show_final(&round);
    Ok(round.settle())
}

fn hand(cards: &[u8]) -> String {
    let faces: Vec<String> = cards.iter().map(u8::to_string).collect();
    format!("[{}]", faces.join(", "))
}

fn show_player(round: &Round) {
    kit_println!(
        "{}",
        msg!(
            MESSAGES.games.blackjack_player_hand,
            cards = hand(round.player()),
            score = round.player_score().to_string()
        )
    );
}

fn show_final(round: &Round) {
    kit_println!(
        "{}",
        msg!(
            MESSAGES.games.blackjack_final_player,
            cards = hand(round.player()),
            score = round.player_score().to_string()
        )
    );
    kit_println!(
        "{}",
        msg!(
            MESSAGES.games.blackjack_final_dealer,
            cards = hand(round.dealer()),
            score = round.dealer_score().to_string()
        )
    );
}
