//! `kit split`

use super::prompt;
use crate::error::{CliError, CliResult};
use kit_convert::split::{check_percent, check_total};
use kit_convert::{even_split, format_money, split_expense, Split};
use kit_core::{kit_error, kit_println, KitError};
use kit_messages::{msg, MESSAGES};

pub fn handle_split(
    total: Option<f64>,
    percents: Vec<f64>,
    even: Option<usize>,
    currency: &str,
) -> CliResult<()> {
    let split = match (total, even) {
        (Some(total), Some(people)) => even_split(total, people)?,
        (Some(total), None) if !percents.is_empty() => split_expense(total, &percents)?,
        _ => ask_split(total)?,
    };
    print_split(&split, currency);
    Ok(())
}

/// Interactive flow. A bad percentage sum restarts the percentages.
fn ask_split(total: Option<f64>) -> CliResult<Split> {
    let total = match total {
        Some(t) => {
            check_total(t)?;
            t
        }
        None => prompt::ask_parsed(MESSAGES.convert.split_total_prompt, |raw| {
            let t = prompt::parse_number(raw)?;
            check_total(t).map(|_| t)
        })?,
    };
    let people = prompt::ask_parsed(MESSAGES.convert.split_people_prompt, |raw| {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 1 => Ok(n),
            _ => Err(KitError::validation("Number of people must be greater than 1.")),
        }
    })?;

    loop {
        let mut percents = Vec::with_capacity(people);
        for person in 1..=people {
            let question = msg!(
                MESSAGES.convert.split_percent_prompt,
                person = person.to_string()
            );
            let percent = prompt::ask_parsed(&question, |raw| {
                let p = prompt::parse_number(raw)?;
                check_percent(p).map(|_| p)
            })?;
            percents.push(percent);
        }
        match split_expense(total, &percents) {
            Ok(split) => return Ok(split),
            Err(e) if e.is_validation() => {
                kit_error!("{}", e);
                kit_println!("{}", MESSAGES.convert.split_try_again);
            }
            Err(e) => return Err(CliError::from(e)),
        }
    }
}

fn print_split(split: &Split, currency: &str) {
    kit_println!(
        "{}",
        msg!(
            MESSAGES.convert.split_header,
            total = format_money(currency, split.total),
            people = split.people().to_string()
        )
    );
    for share in &split.shares {
        kit_println!(
            "{}",
            msg!(
                MESSAGES.convert.split_share,
                person = share.person.to_string(),
                percent = format!("{:.2}", share.percent),
                amount = format_money(currency, share.amount)
            )
        );
    }
}
