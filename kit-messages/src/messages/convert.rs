//! Currency, distance, bill splitting and finance messages

pub struct ConvertMessages {
    // ============================================================================
    // Currency
    // ============================================================================
    pub currency_amount_prompt: &'static str,
    pub currency_api_failed: &'static str,
    pub currency_from_prompt: &'static str,
    pub currency_list: &'static str,
    pub currency_result: &'static str,
    pub currency_to_prompt: &'static str,
    pub currency_using_api: &'static str,
    pub currency_using_file: &'static str,

    // ============================================================================
    // Distance
    // ============================================================================
    pub distance_to_km: &'static str,
    pub distance_to_miles: &'static str,

    // ============================================================================
    // Split
    // ============================================================================
    pub split_header: &'static str,
    pub split_people_prompt: &'static str,
    pub split_percent_prompt: &'static str,
    pub split_share: &'static str,
    pub split_total_prompt: &'static str,
    pub split_try_again: &'static str,

    // ============================================================================
    // Finance
    // ============================================================================
    pub finance_after_expenses: &'static str,
    pub finance_expenses: &'static str,
    pub finance_expenses_prompt: &'static str,
    pub finance_header: &'static str,
    pub finance_income_prompt: &'static str,
    pub finance_monthly_income: &'static str,
    pub finance_monthly_net: &'static str,
    pub finance_monthly_tax: &'static str,
    pub finance_row: &'static str,
    pub finance_tax_prompt: &'static str,
    pub finance_tax_rate: &'static str,
    pub finance_yearly_net: &'static str,
    pub finance_yearly_salary: &'static str,
    pub finance_yearly_tax: &'static str,
}

pub const CONVERT_MESSAGES: ConvertMessages = ConvertMessages {
    currency_amount_prompt: "Amount to convert",
    currency_api_failed: "Live rates unavailable ({error}), falling back to the rates file",
    currency_from_prompt: "Convert from (currency code)",
    currency_list: "{count} currencies: {codes}",
    currency_result: "{amount} {from} = {result} {to}",
    currency_to_prompt: "Convert to (currency code)",
    currency_using_api: "Using live exchange rates",
    currency_using_file: "Using rates from {path}",

    distance_to_km: "{value} miles = {result} km",
    distance_to_miles: "{value} km = {result} miles",

    split_header: "Splitting {total} between {people} people:",
    split_people_prompt: "Number of people",
    split_percent_prompt: "Percentage for person {person}",
    split_share: "Person {person} ({percent}%): {amount}",
    split_total_prompt: "Total amount",
    split_try_again: "The percentages must add up to 100. Let's try again.",

    finance_after_expenses: "Left after expenses",
    finance_expenses: "Monthly expenses",
    finance_expenses_prompt: "Monthly expenses",
    finance_header: "Financial summary",
    finance_income_prompt: "Monthly income",
    finance_monthly_income: "Monthly income",
    finance_monthly_net: "Monthly net income",
    finance_monthly_tax: "Monthly tax",
    finance_row: "  {label} {value}",
    finance_tax_prompt: "Tax rate (%)",
    finance_tax_rate: "Tax rate",
    finance_yearly_net: "Yearly net income",
    finance_yearly_salary: "Yearly salary",
    finance_yearly_tax: "Yearly tax",
};
