//! Presentation helpers shared by the calculation and payslip layers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to cents, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats a monetary amount as a string with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::formatting::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::ZERO), "0.00");
/// assert_eq!(format_money(Decimal::new(6716485, 3)), "6716.49");
/// ```
pub fn format_money(amount: Decimal) -> String {
    round_money(amount).to_string()
}

/// Capitalises the first letter of every word and lowercases the rest.
///
/// A word is any run of alphabetic characters, so `"o'neil-smith"` becomes
/// `"O'Neil-Smith"`.
///
/// # Examples
///
/// ```
/// use payroll_engine::formatting::title_case;
///
/// assert_eq!(title_case("jOHN doe"), "John Doe");
/// ```
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;

    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}
