//! `kit finance`

use super::prompt;
use crate::error::CliResult;
use kit_convert::{format_money, FinanceSummary};
use kit_core::kit_println;
use kit_messages::{msg, MESSAGES};

pub fn handle_finance(
    income: Option<f64>,
    tax: Option<f64>,
    expenses: Option<f64>,
    currency: &str,
) -> CliResult<()> {
    let income = value_or_ask(income, MESSAGES.convert.finance_income_prompt)?;
    let tax = value_or_ask(tax, MESSAGES.convert.finance_tax_prompt)?;
    let expenses = value_or_ask(expenses, MESSAGES.convert.finance_expenses_prompt)?;

    let summary = FinanceSummary::compute(income, tax, expenses)?;
    let money = |v: f64| format_money(currency, v);

    kit_println!("{}", MESSAGES.convert.finance_header);
    let rows = [
        (MESSAGES.convert.finance_monthly_income, money(summary.monthly_income)),
        (MESSAGES.convert.finance_tax_rate, format!("{:.2}%", summary.tax_rate)),
        (MESSAGES.convert.finance_monthly_tax, money(summary.monthly_tax)),
        (MESSAGES.convert.finance_monthly_net, money(summary.monthly_net)),
        (MESSAGES.convert.finance_yearly_salary, money(summary.yearly_salary)),
        (MESSAGES.convert.finance_yearly_tax, money(summary.yearly_tax)),
        (MESSAGES.convert.finance_yearly_net, money(summary.yearly_net)),
        (MESSAGES.convert.finance_expenses, money(summary.expenses)),
        (MESSAGES.convert.finance_after_expenses, money(summary.after_expenses)),
    ];
    for (label, value) in rows {
        kit_println!(
            "{}",
            msg!(MESSAGES.convert.finance_row, label = format!("{label:<24}"), value = value)
        );
    }
    Ok(())
}

fn value_or_ask(given: Option<f64>, question: &str) -> CliResult<f64> {
    match given {
        Some(v) => Ok(v),
        None => prompt::ask_parsed(question, prompt::parse_number),
    }
}
