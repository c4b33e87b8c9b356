// Command handlers for the kit tools

use crate::cli::{Args, Command};
use crate::error::{CliError, CliResult};
use kit_config::LoadedConfig;
use kit_core::KitError;
use kit_messages::{msg, MESSAGES};
use std::path::Path;
use tracing::{debug, info_span};

// Individual command modules
pub mod analyze;
pub mod blackjack;
pub mod chat;
pub mod config;
pub mod currency;
pub mod distance;
pub mod finance;
pub mod flashcards;
pub mod morse;
pub mod passgen;
pub mod pomodoro;
pub mod prompt;
pub mod quiz;
pub mod split;
pub mod states;
pub mod status;
pub mod vault;
pub mod words;

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args) -> CliResult<()> {
    let span = info_span!("tool", tool = args.command.tool_name());
    let _enter = span.enter();

    // Commands that work without (or on a broken) configuration
    match &args.command {
        Command::Config { command } => {
            debug!("Handling config command");
            return config::handle_config(command, args.config.as_deref());
        }
        Command::Completion { shell } => {
            debug!("Generating shell completions for: {}", shell);
            return handle_completion(shell);
        }
        _ => {}
    }

    let LoadedConfig { config, .. } = load_config(args.config.as_deref())?;

    match args.command {
        Command::Chat { once } => {
            debug!("Handling chat command");
            chat::handle_chat(&config.chat, once)
        }
        Command::Morse { action } => {
            debug!("Handling morse command");
            morse::handle_morse(action)
        }
        Command::Words { text, file, limit } => {
            debug!("Handling words command");
            words::handle_words(text, file, limit)
        }
        Command::Analyze {
            file,
            detailed,
            save,
            preview,
            full,
        } => {
            debug!("Handling analyze command");
            analyze::handle_analyze(&file, detailed, save.as_deref(), preview, full)
        }
        Command::Currency {
            amount,
            from,
            to,
            offline,
            rates,
            list,
        } => {
            debug!("Handling currency command");
            currency::handle_currency(
                &config.currency,
                currency::CurrencyArgs {
                    amount,
                    from,
                    to,
                    offline,
                    rates,
                    list,
                },
            )
        }
        Command::Distance { value, to } => {
            debug!("Handling distance command");
            distance::handle_distance(value, to)
        }
        Command::Split {
            total,
            percents,
            even,
            currency,
        } => {
            debug!("Handling split command");
            split::handle_split(total, percents, even, &currency)
        }
        Command::Finance {
            income,
            tax,
            expenses,
            currency,
        } => {
            debug!("Handling finance command");
            finance::handle_finance(income, tax, expenses, &currency)
        }
        Command::Passgen {
            action,
            length,
            count,
            no_uppercase,
            no_symbols,
        } => {
            debug!("Handling passgen command");
            passgen::handle_passgen(
                &config.passgen,
                action,
                passgen::PassgenOverrides {
                    length,
                    count,
                    no_uppercase,
                    no_symbols,
                },
            )
        }
        Command::Vault { command, file } => {
            debug!("Handling vault command");
            vault::handle_vault(&config.vault, command, file)
        }
        Command::Blackjack => {
            debug!("Handling blackjack command");
            blackjack::handle_blackjack()
        }
        Command::Quiz { questions } => {
            debug!("Handling quiz command");
            quiz::handle_quiz(questions.as_deref())
        }
        Command::States {
            time_limit,
            missed,
            states_csv,
        } => {
            debug!("Handling states command");
            states::handle_states(&config.states, time_limit, missed, states_csv.as_deref())
        }
        Command::Flashcards { command } => {
            debug!("Handling flashcards command");
            flashcards::handle_flashcards(&config.flashcards, command)
        }
        Command::Status { urls, json } => {
            debug!("Handling status command");
            status::handle_status(&config.web, urls, json)
        }
        Command::Pomodoro { command } => {
            debug!("Handling pomodoro command");
            pomodoro::handle_pomodoro(&config.pomodoro, command)
        }
        Command::Config { .. } | Command::Completion { .. } => Ok(()),
    }
}

fn load_config(explicit: Option<&Path>) -> CliResult<LoadedConfig> {
    let loaded = kit_config::load(explicit)?;
    if loaded.from_file {
        debug!(path = %loaded.path.display(), "using config file");
    }
    Ok(loaded)
}

fn handle_completion(shell: &str) -> CliResult<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, shells};
    use std::io;

    let mut cmd = crate::cli::Args::command();

    match shell.to_lowercase().as_str() {
        "bash" => {
            generate(shells::Bash, &mut cmd, "kit", &mut io::stdout());
            Ok(())
        }
        "zsh" => {
            generate(shells::Zsh, &mut cmd, "kit", &mut io::stdout());
            Ok(())
        }
        "fish" => {
            generate(shells::Fish, &mut cmd, "kit", &mut io::stdout());
            Ok(())
        }
        "powershell" => {
            generate(shells::PowerShell, &mut cmd, "kit", &mut io::stdout());
            Ok(())
        }
        _ => Err(CliError::Kit(KitError::validation(msg!(
            MESSAGES.common.completion_unsupported,
            shell = shell
        )))),
    }
}
