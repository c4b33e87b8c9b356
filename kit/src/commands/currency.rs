//! `kit currency`

use super::prompt;
use crate::error::CliResult;
use kit_config::CurrencySettings;
use kit_convert::currency::{convert, lookup, parse_amount, sorted_codes, RateOrigin, RateSource};
use kit_convert::RateTable;
use kit_core::{kit_info, kit_println, kit_warning};
use kit_messages::{msg, MESSAGES};
use std::path::PathBuf;
use std::time::Duration;

pub struct CurrencyArgs {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub offline: bool,
    pub rates: Option<PathBuf>,
    pub list: bool,
}

pub fn handle_currency(settings: &CurrencySettings, args: CurrencyArgs) -> CliResult<()> {
    let fallback = match args.rates {
        Some(path) => path,
        None => settings.rates_path()?,
    };
    let source = RateSource {
        api_url: if args.offline {
            None
        } else {
            settings.api_url.clone()
        },
        timeout: Duration::from_secs(settings.api_timeout_secs),
        fallback,
    };

    let resolved = source.resolve()?;
    if let Some(error) = &resolved.api_error {
        kit_warning!("{}", msg!(MESSAGES.convert.currency_api_failed, error = error));
    }
    match resolved.origin {
        RateOrigin::Api => kit_info!("{}", MESSAGES.convert.currency_using_api),
        RateOrigin::File => kit_info!(
            "{}",
            msg!(
                MESSAGES.convert.currency_using_file,
                path = source.fallback.display().to_string()
            )
        ),
    }
    let rates = resolved.rates;

    if args.list {
        let codes: Vec<String> = sorted_codes(&rates)
            .into_iter()
            .map(|c| c.to_uppercase())
            .collect();
        kit_println!(
            "{}",
            msg!(
                MESSAGES.convert.currency_list,
                count = codes.len().to_string(),
                codes = codes.join(", ")
            )
        );
        return Ok(());
    }

    let amount = match args.amount {
        Some(raw) => parse_amount(&raw)?,
        None => prompt::ask_parsed(MESSAGES.convert.currency_amount_prompt, parse_amount)?,
    };
    let from = resolve_code(&rates, args.from, MESSAGES.convert.currency_from_prompt)?;
    let to = resolve_code(&rates, args.to, MESSAGES.convert.currency_to_prompt)?;

    let result = convert(amount, &from, &to, &rates)?;
    kit_println!(
        "{}",
        msg!(
            MESSAGES.convert.currency_result,
            amount = format!("{amount:.2}"),
            from = from.to_uppercase(),
            result = format!("{result:.2}"),
            to = to.to_uppercase()
        )
    );
    Ok(())
}

/// A supported code from the command line, or asked for until one is given.
fn resolve_code(rates: &RateTable, given: Option<String>, question: &str) -> CliResult<String> {
    match given {
        Some(code) => {
            lookup(rates, &code)?;
            Ok(code.trim().to_string())
        }
        None => prompt::ask_parsed(question, |raw| {
            lookup(rates, raw).map(|_| raw.trim().to_string())
        }),
    }
}
