//! `kit flashcards`

use super::prompt;
use crate::cli::{FlashcardSubcommand, StudyMode};
use crate::error::CliResult;
use colored::Colorize;
use kit_config::FlashcardSettings;
use kit_core::{kit_info, kit_println, kit_success, kit_warning, KitError};
use kit_games::{LanguagePairs, Mode, Session, SessionSettings};
use kit_messages::{msg, MESSAGES};
use std::path::Path;
use tracing::debug;

const ANSWER_KNOWN: usize = 0;
const ANSWER_UNKNOWN: usize = 1;
const ANSWER_SWITCH: usize = 2;

pub fn handle_flashcards(settings: &FlashcardSettings, command: FlashcardSubcommand) -> CliResult<()> {
    let dir = settings.data_path()?;
    let mut pairs = LanguagePairs::load(&dir)?;

    match command {
        FlashcardSubcommand::Pairs => {
            if pairs.is_empty() {
                kit_info!("{}", MESSAGES.games.flashcards_no_pairs);
                return Ok(());
            }
            for name in pairs.names() {
                kit_println!("{}", name);
            }
            Ok(())
        }
        FlashcardSubcommand::Add { front, back, csv } => {
            let csv = csv.canonicalize().unwrap_or(csv);
            let (name, replaced) = pairs.add_pair(&front, &back, &csv)?;
            if replaced {
                kit_success!("{}", msg!(MESSAGES.games.flashcards_pair_replaced, pair = name));
            } else {
                kit_success!("{}", msg!(MESSAGES.games.flashcards_pair_added, pair = name));
            }
            Ok(())
        }
        FlashcardSubcommand::Study {
            pair,
            mode,
            reverse,
        } => {
            let name = match pair {
                Some(name) => name,
                None => pick_pair(&pairs)?,
            };
            let deck = pairs.deck(&name)?;
            let session_settings = SessionSettings {
                recent_window: settings.recent_window,
                sequential_limit: settings.sequential_limit,
                milestone_every: settings.milestone_every,
            };
            let session = Session::open(&dir, &name, deck, session_settings);
            study(session, to_mode(mode), reverse, pairs.dir())
        }
    }
}

fn pick_pair(pairs: &LanguagePairs) -> CliResult<String> {
    let names = pairs.names();
    if names.is_empty() {
        return Err(KitError::NotFound(MESSAGES.games.flashcards_no_pairs.to_string()).into());
    }
    let choice = prompt::choose(MESSAGES.games.flashcards_pick_pair, &names)?;
    Ok(names[choice].to_string())
}

fn to_mode(mode: StudyMode) -> Mode {
    match mode {
        StudyMode::New => Mode::New,
        StudyMode::Unfamiliar => Mode::Unfamiliar,
        StudyMode::Familiar => Mode::Familiar,
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::New => MESSAGES.games.flashcards_mode_new,
        Mode::Unfamiliar => MESSAGES.games.flashcards_mode_unfamiliar,
        Mode::Familiar => MESSAGES.games.flashcards_mode_familiar,
    }
}

fn switch_mode(session: &mut Session, wanted: Mode) {
    let actual = session.set_mode(wanted);
    if actual != wanted {
        kit_warning!(
            "{}",
            msg!(MESSAGES.games.flashcards_mode_empty, mode = mode_label(wanted))
        );
    }
    kit_info!("{}", msg!(MESSAGES.games.flashcards_mode, mode = mode_label(actual)));
}

fn study(mut session: Session, mode: Mode, reverse: bool, dir: &Path) -> CliResult<()> {
    debug!(dir = %dir.display(), ?mode, reverse, "starting flashcard session");
    switch_mode(&mut session, mode);

    let (shown_name, hidden_name) = {
        let deck = session.deck();
        if reverse {
            (deck.back_name.clone(), deck.front_name.clone())
        } else {
            (deck.front_name.clone(), deck.back_name.clone())
        }
    };
    let answers = [
        MESSAGES.games.flashcards_answer_known,
        MESSAGES.games.flashcards_answer_unknown,
        MESSAGES.games.flashcards_answer_switch,
        MESSAGES.games.flashcards_answer_quit,
    ];

    let mut rng = rand::rng();
    while let Some(card) = session.next_card(&mut rng) {
        let (shown, hidden) = card.sides(reverse);
        kit_println!("{}: {}", shown_name.bold(), shown.cyan().bold());
        prompt::ask_line(MESSAGES.games.flashcards_flip_prompt)?;
        kit_println!("{}: {}", hidden_name.bold(), hidden.green().bold());

        match prompt::choose(MESSAGES.games.flashcards_answer_prompt, &answers)? {
            ANSWER_KNOWN => {
                if let Some(count) = session.mark_known(&card)? {
                    kit_success!(
                        "{}",
                        msg!(MESSAGES.games.flashcards_milestone, count = count.to_string())
                    );
                }
            }
            ANSWER_UNKNOWN => session.mark_unknown(&card)?,
            ANSWER_SWITCH => {
                let modes = [Mode::New, Mode::Unfamiliar, Mode::Familiar];
                let labels: Vec<&str> = modes.iter().map(|m| mode_label(*m)).collect();
                let choice = prompt::choose(MESSAGES.games.flashcards_pick_mode, &labels)?;
                switch_mode(&mut session, modes[choice]);
            }
            _ => break,
        }
    }

    let progress = session.progress();
    kit_println!(
        "{}",
        msg!(
            MESSAGES.games.flashcards_summary,
            learned = session.learned_this_session().to_string(),
            known = progress.learned.len().to_string(),
            to_learn = progress.to_learn.len().to_string(),
            total = session.deck().cards.len().to_string()
        )
    );
    Ok(())
}
