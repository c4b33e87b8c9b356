//! `kit chat`

use super::prompt;
use crate::error::CliResult;
use kit_config::ChatSettings;
use kit_core::{kit_println, kit_warning};
use kit_messages::{msg, MESSAGES};
use kit_text::chat::{default_responses, is_farewell, load_responses};
use kit_text::ChatBot;
use tracing::{debug, info};

fn build_bot(settings: &ChatSettings) -> CliResult<ChatBot> {
    let responses = match &settings.responses_file {
        Some(path) => load_responses(path)?,
        None => default_responses()?,
    };
    info!(phrases = responses.len(), "chat bot ready");
    Ok(ChatBot::new(
        settings.name.clone(),
        responses,
        settings.similarity_threshold,
    ))
}

pub fn handle_chat(settings: &ChatSettings, once: Option<String>) -> CliResult<()> {
    let bot = build_bot(settings)?;

    if let Some(text) = once {
        let reply = bot.best_reply(&text)?;
        kit_println!("{}", bot.render(&reply));
        return Ok(());
    }

    kit_println!("{}", msg!(MESSAGES.text.chat_greeting, name = bot.name()));
    loop {
        let input = prompt::ask_line(MESSAGES.text.chat_prompt)?;
        if input.is_empty() {
            kit_warning!("{}", MESSAGES.text.chat_empty_input);
            continue;
        }
        if is_farewell(&input) {
            kit_println!("{}", msg!(MESSAGES.text.chat_farewell, name = bot.name()));
            return Ok(());
        }
        let reply = bot.best_reply(&input)?;
        debug!(similarity = reply.similarity, "replying");
        kit_println!(
            "{}",
            msg!(
                MESSAGES.text.chat_reply,
                name = bot.name(),
                reply = bot.render(&reply)
            )
        );
    }
}
