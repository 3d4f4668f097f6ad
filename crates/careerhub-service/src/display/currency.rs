//! Currencies offered by the job form.

/// A currency choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub country: &'static str,
    /// ISO 4217 code.
    pub code: &'static str,
}

const fn currency(country: &'static str, code: &'static str) -> Currency {
    Currency { country, code }
}

/// Every currency the job form offers, in display order.
pub const CURRENCIES: [Currency; 30] = [
    currency("United States", "USD"),
    currency("India", "INR"),
    currency("United Kingdom", "GBP"),
    currency("European Union", "EUR"),
    currency("Japan", "JPY"),
    currency("Canada", "CAD"),
    currency("Australia", "AUD"),
    currency("Switzerland", "CHF"),
    currency("China", "CNY"),
    currency("Singapore", "SGD"),
    currency("Hong Kong", "HKD"),
    currency("New Zealand", "NZD"),
    currency("Sweden", "SEK"),
    currency("South Korea", "KRW"),
    currency("Norway", "NOK"),
    currency("Mexico", "MXN"),
    currency("Brazil", "BRL"),
    currency("South Africa", "ZAR"),
    currency("Russia", "RUB"),
    currency("UAE", "AED"),
    currency("Saudi Arabia", "SAR"),
    currency("Thailand", "THB"),
    currency("Malaysia", "MYR"),
    currency("Indonesia", "IDR"),
    currency("Philippines", "PHP"),
    currency("Vietnam", "VND"),
    currency("Poland", "PLN"),
    currency("Turkey", "TRY"),
    currency("Denmark", "DKK"),
    currency("Israel", "ILS"),
];

/// Currencies whose country or code contains `term`, ignoring case.
/// A blank term matches everything.
pub fn search_currencies(term: &str) -> Vec<&'static Currency> {
    let term = term.trim().to_lowercase();
    CURRENCIES
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.country.to_lowercase().contains(&term)
                || c.code.to_lowercase().contains(&term)
        })
        .collect()
}

/// Look up a currency by exact code, ignoring case.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}
