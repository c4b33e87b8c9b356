//! # kit-convert
//!
//! Validate, transform, print. Every converter here is a pure function
//! over already-parsed numbers; prompting lives in the `kit` binary.

pub mod currency;
pub mod distance;
pub mod finance;
pub mod split;

pub use currency::{convert, RateSource, RateTable, ResolvedRates};
pub use distance::{km_to_miles, miles_to_km};
pub use finance::FinanceSummary;
pub use split::{even_split, format_money, split_expense, Split};
