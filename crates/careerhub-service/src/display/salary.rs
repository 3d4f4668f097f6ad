//! Salary display strings.

use careerhub_entity::job::{Job, SalaryDisclosure};

/// Currency shown when neither the job nor the configuration names one.
pub const DEFAULT_CURRENCY: &str = "INR";

const SYMBOL: &str = "₹";

/// Human-readable salary for a job card, e.g. `₹800,000 - ₹1,200,000 INR`.
///
/// A job whose amounts do not match its disclosure mode is shown as
/// confidential.
pub fn format_salary(job: &Job, default_currency: &str) -> String {
    let currency = currency_code(job.currency.as_deref(), default_currency);
    match job.salary() {
        Ok(SalaryDisclosure::Range { min, max }) => format!(
            "{SYMBOL}{} - {SYMBOL}{} {currency}",
            format_amount(min),
            format_amount(max)
        ),
        Ok(SalaryDisclosure::Fixed { amount }) => {
            format!("{SYMBOL}{} {currency}", format_amount(amount))
        }
        Ok(SalaryDisclosure::Confidential) | Err(_) => "Confidential Salary".to_string(),
    }
}

pub(crate) fn currency_code<'a>(job_currency: Option<&'a str>, default_currency: &'a str) -> &'a str {
    [job_currency.unwrap_or_default(), default_currency]
        .into_iter()
        .map(str::trim)
        .find(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
}

/// Format an amount with `,` thousands separators and at most three
/// fraction digits, e.g. `1234567.5` → `1,234,567.5`.
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc() as u64;
    let frac = ((rounded - rounded.trunc()) * 1000.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if amount < 0.0 && rounded != 0.0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac > 0 {
        let frac = format!("{frac:03}");
        grouped.push('.');
        grouped.push_str(frac.trim_end_matches('0'));
    }
    grouped
}
