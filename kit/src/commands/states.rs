//! `kit states`

use super::prompt;
use crate::error::CliResult;
use colored::Colorize;
use kit_config::StatesSettings;
use kit_core::{kit_info, kit_println, kit_success, kit_warning, KitError};
use kit_games::states::{format_clock, load_states_csv};
use kit_games::{Guess, StatesGame};
use kit_messages::{msg, MESSAGES};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

pub fn handle_states(
    settings: &StatesSettings,
    time_limit: Option<u64>,
    missed: Option<PathBuf>,
    states_csv: Option<&Path>,
) -> CliResult<()> {
    let limit_secs = time_limit.unwrap_or(settings.time_limit_secs);
    if limit_secs == 0 {
        return Err(KitError::validation(MESSAGES.games.states_limit_invalid).into());
    }
    let limit = Duration::from_secs(limit_secs);
    let missed_path = missed.unwrap_or_else(|| settings.missed_file.clone());

    let mut game = match states_csv {
        Some(path) => StatesGame::new(load_states_csv(path)?, limit),
        None => StatesGame::with_us_states(limit),
    };
    kit_info!(
        "{}",
        msg!(
            MESSAGES.games.states_intro,
            total = game.total().to_string(),
            clock = format_clock(limit)
        )
    );

    let finished_in_time = loop {
        if game.is_complete() {
            break true;
        }
        let now = Instant::now();
        if game.is_out_of_time(now) {
            break false;
        }
        let question = msg!(
            MESSAGES.games.states_prompt,
            guessed = game.guessed_count().to_string(),
            total = game.total().to_string(),
            clock = format_clock(game.remaining(now))
        );
        let answer = prompt::ask_line(&question)?;
        if answer.is_empty() {
            continue;
        }
        // Answers typed after the deadline do not count
        if game.is_out_of_time(Instant::now()) {
            break false;
        }
        match game.guess(&answer) {
            Guess::Correct(state) => kit_println!("{}", format!("✓ {state}").green()),
            Guess::AlreadyGuessed(state) => {
                kit_warning!("{}", msg!(MESSAGES.games.states_already, state = state))
            }
            Guess::Unknown(state) => {
                kit_println!("{}", msg!(MESSAGES.games.states_unknown, state = state).red())
            }
            Guess::Exit => {
                kit_info!("{}", MESSAGES.games.states_gave_up);
                break false;
            }
        }
    };

    info!(
        guessed = game.guessed_count(),
        total = game.total(),
        finished_in_time,
        "states game over"
    );
    if finished_in_time {
        kit_success!(
            "{}",
            msg!(MESSAGES.games.states_all_named, total = game.total().to_string())
        );
        return Ok(());
    }

    if game.is_out_of_time(Instant::now()) {
        kit_warning!("{}", MESSAGES.games.states_time_up);
    }
    let written = game.write_missing(&missed_path)?;
    kit_println!(
        "{}",
        msg!(
            MESSAGES.games.states_score,
            guessed = game.guessed_count().to_string(),
            total = game.total().to_string()
        )
    );
    kit_info!(
        "{}",
        msg!(
            MESSAGES.games.states_missed_saved,
            count = written.to_string(),
            path = missed_path.display().to_string()
        )
    );
    Ok(())
}
