//! `kit morse`

use super::prompt;
use crate::cli::MorseAction;
use crate::error::CliResult;
use kit_core::{kit_error, kit_println};
use kit_messages::{msg, MESSAGES};
use kit_text::morse;

pub fn handle_morse(action: Option<MorseAction>) -> CliResult<()> {
    match action {
        Some(MorseAction::Encode { text }) => {
            kit_println!("{}", morse::encode(&text.join(" "))?);
            Ok(())
        }
        Some(MorseAction::Decode { code }) => {
            kit_println!("{}", morse::decode(&code)?);
            Ok(())
        }
        None => run_menu(),
    }
}

fn run_menu() -> CliResult<()> {
    loop {
        kit_println!("{}", MESSAGES.text.morse_menu);
        let choice = prompt::ask_line(MESSAGES.text.morse_choice_prompt)?;
        match choice.as_str() {
            "1" => {
                let text = prompt::ask_line(MESSAGES.text.morse_text_prompt)?;
                match morse::encode(&text) {
                    Ok(code) => kit_println!("{}", msg!(MESSAGES.text.morse_encoded, code = code)),
                    Err(e) => kit_error!("{}", e),
                }
            }
            "2" => {
                let code = prompt::ask_line(MESSAGES.text.morse_code_prompt)?;
                match morse::decode(&code) {
                    Ok(text) => kit_println!("{}", msg!(MESSAGES.text.morse_decoded, text = text)),
                    Err(e) => kit_error!("{}", e),
                }
            }
            "3" => {
                kit_println!("{}", MESSAGES.common.goodbye);
                return Ok(());
            }
            _ => kit_error!("{}", MESSAGES.text.morse_invalid_choice),
        }
    }
}
