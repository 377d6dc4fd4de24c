/// Formats a USD amount the way the listing shows prices: dollar sign,
/// thousands separators, always two decimals. "$1,234,567.89"
pub fn format_usd(price: f64) -> String {
    let formatted = format!("{:.2}", price.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_prices_keep_two_decimals() {
        assert_eq!(format_usd(5.0), "$5.00");
        assert_eq!(format_usd(0.1234), "$0.12");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn large_prices_get_thousands_separators() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(98000.0), "$98,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn negative_values_carry_the_sign_outside() {
        assert_eq!(format_usd(-42.5), "-$42.50");
    }
}
