//! Monthly and yearly income after tax and expenses.

use kit_core::error::{KitError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub monthly_income: f64,
    pub tax_rate: f64,
    pub expenses: f64,
    pub monthly_tax: f64,
    pub monthly_net: f64,
    pub yearly_salary: f64,
    pub yearly_tax: f64,
    pub yearly_net: f64,
    pub after_expenses: f64,
}

impl FinanceSummary {
    /// `tax_rate` is a percentage, e.g. `25.5`.
    pub fn compute(monthly_income: f64, tax_rate: f64, expenses: f64) -> Result<Self> {
        if !monthly_income.is_finite() || monthly_income < 0.0 {
            return Err(KitError::validation("Monthly income cannot be negative."));
        }
        if !(0.0..=100.0).contains(&tax_rate) {
            return Err(KitError::validation("Tax rate must be between 0 and 100."));
        }
        if !expenses.is_finite() || expenses < 0.0 {
            return Err(KitError::validation("Expenses cannot be negative."));
        }

        let monthly_tax = monthly_income * (tax_rate / 100.0);
        let monthly_net = monthly_income - monthly_tax;
        let yearly_salary = monthly_income * 12.0;
        let yearly_tax = monthly_tax * 12.0;

        Ok(Self {
            monthly_income,
            tax_rate,
            expenses,
            monthly_tax,
            monthly_net,
            yearly_salary,
            yearly_tax,
            yearly_net: yearly_salary - yearly_tax,
            after_expenses: monthly_net - expenses,
        })
    }
}
