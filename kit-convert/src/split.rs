//! Splitting a shared expense by percentage.

use kit_core::error::{KitError, Result};
use serde::Serialize;

/// Allowed distance between the percentage sum and 100.
pub const PERCENT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub person: usize,
    pub percent: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    pub total: f64,
    pub shares: Vec<Share>,
}

impl Split {
    pub fn people(&self) -> usize {
        self.shares.len()
    }
}

/// Validate a total entered by the user.
pub fn check_total(total: f64) -> Result<()> {
    if total.is_finite() && total > 0.0 {
        Ok(())
    } else {
        Err(KitError::validation("Total amount must be positive."))
    }
}

/// Validate a single percentage.
pub fn check_percent(percent: f64) -> Result<()> {
    if (0.0..=100.0).contains(&percent) {
        Ok(())
    } else {
        Err(KitError::validation("Percentage must be between 0 and 100."))
    }
}

/// Split `total` by `percentages`, one entry per person.
pub fn split_expense(total: f64, percentages: &[f64]) -> Result<Split> {
    check_total(total)?;
    if percentages.len() < 2 {
        return Err(KitError::validation(
            "Number of people must be greater than 1.",
        ));
    }
    for p in percentages {
        check_percent(*p)?;
    }
    let sum: f64 = percentages.iter().sum();
    if (sum - 100.0).abs() > PERCENT_TOLERANCE {
        return Err(KitError::Validation(format!(
            "Percentages sum to {sum:.2}%, must be 100%."
        )));
    }

    let shares = percentages
        .iter()
        .enumerate()
        .map(|(i, p)| Share {
            person: i + 1,
            percent: *p,
            amount: total * (p / 100.0),
        })
        .collect();
    Ok(Split { total, shares })
}

/// Equal shares for `people` people.
pub fn even_split(total: f64, people: usize) -> Result<Split> {
    if people < 2 {
        return Err(KitError::validation(
            "Number of people must be greater than 1.",
        ));
    }
    let percent = 100.0 / people as f64;
    split_expense(total, &vec![percent; people])
}

/// `symbol` followed by the amount with thousands separators and two decimals.
pub fn format_money(symbol: &str, amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{symbol}{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_sum_to_total() {
        let split = split_expense(1234.56, &[50.0, 30.0, 20.0]).expect("should split");
        let sum: f64 = split.shares.iter().map(|s| s.amount).sum();
        assert!((sum - 1234.56).abs() < 0.01);
        assert_eq!(split.people(), 3);
        assert_eq!(split.shares[2].person, 3);
    }

    #[test]
    fn sum_within_tolerance_is_accepted() {
        assert!(split_expense(90.0, &[33.33, 33.33, 33.34]).is_ok());
        assert!(split_expense(90.0, &[33.333, 33.333, 33.333]).is_ok());
    }

    #[test]
    fn sum_off_by_more_than_tolerance_is_rejected() {
        let err = split_expense(100.0, &[50.0, 40.0]).unwrap_err();
        assert_eq!(err.to_string(), "Percentages sum to 90.00%, must be 100%.");
    }

    #[test]
    fn bad_inputs_are_rejected() {
        assert!(split_expense(0.0, &[50.0, 50.0]).is_err());
        assert!(split_expense(100.0, &[100.0]).is_err());
        assert!(split_expense(100.0, &[120.0, -20.0]).is_err());
    }

    #[test]
    fn even_split_shares_equally() {
        let split = even_split(100.0, 4).expect("should split");
        assert!(split.shares.iter().all(|s| (s.amount - 25.0).abs() < 1e-9));
        let thirds = even_split(10.0, 3).expect("should split");
        let sum: f64 = thirds.shares.iter().map(|s| s.amount).sum();
        assert!((sum - 10.0).abs() < 1e-9);
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money("€", 1234.5), "€1,234.50");
        assert_eq!(format_money("$", 0.0), "$0.00");
        assert_eq!(format_money("€", 1_000_000.0), "€1,000,000.00");
        assert_eq!(format_money("€", 999.999), "€1,000.00");
        assert_eq!(format_money("€ ", -42.1), "€ -42.10");
    }
}
