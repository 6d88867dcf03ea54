//! Naira amounts for display.

const NAIRA_SIGN: char = '₦';

/// Format an amount as `₦1,234.50`.
///
/// Always two decimals, thousands grouped with commas. Negative amounts keep
/// their sign in front of the currency symbol.
pub fn format_naira(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let kobo = (amount.abs() * 100.0).round() as u64;
    let naira = kobo / 100;
    let fraction = kobo % 100;

    let sign = if amount < 0.0 && kobo > 0 { "-" } else { "" };
    format!("{sign}{NAIRA_SIGN}{}.{fraction:02}", group_thousands(naira))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
