//! `kit passgen`

use crate::cli::PassgenAction;
use crate::error::CliResult;
use colored::{ColoredString, Colorize};
use kit_config::PassgenSettings;
use kit_core::{kit_info, kit_println, KitError};
use kit_messages::{msg, MESSAGES};
use kit_vault::{check_strength, PasswordPolicy, Strength};

pub struct PassgenOverrides {
    pub length: Option<usize>,
    pub count: Option<usize>,
    pub no_uppercase: bool,
    pub no_symbols: bool,
}

pub fn handle_passgen(
    settings: &PassgenSettings,
    action: Option<PassgenAction>,
    overrides: PassgenOverrides,
) -> CliResult<()> {
    if let Some(PassgenAction::Check { password }) = action {
        let (strength, score) = check_strength(&password);
        kit_println!(
            "{}",
            msg!(
                MESSAGES.vault.strength_report,
                strength = colored_strength(strength).to_string(),
                score = score.to_string()
            )
        );
        return Ok(());
    }

    let length = overrides.length.unwrap_or(settings.length);
    let count = overrides.count.unwrap_or(settings.count);
    if count == 0 {
        return Err(KitError::validation(MESSAGES.vault.passgen_count_invalid).into());
    }
    let policy = PasswordPolicy::standalone(
        length,
        settings.uppercase && !overrides.no_uppercase,
        settings.symbols && !overrides.no_symbols,
    );

    kit_info!(
        "{}",
        msg!(
            MESSAGES.vault.passgen_header,
            count = count.to_string(),
            length = length.to_string()
        )
    );
    let mut rng = rand::rng();
    for _ in 0..count {
        kit_println!("{}", policy.generate(&mut rng)?);
    }
    Ok(())
}

/// Strength label coloured from red to green.
pub fn colored_strength(strength: Strength) -> ColoredString {
    let label = strength.to_string();
    match strength {
        Strength::VeryWeak | Strength::Weak => label.red(),
        Strength::Moderate => label.yellow(),
        Strength::Strong => label.green(),
        Strength::VeryStrong => label.green().bold(),
    }
}
