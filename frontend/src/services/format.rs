/// Format a peso amount with thousands separators, e.g. "₱4,500" or
/// "₱1,234,567.50". Whole amounts drop the decimals; fractions are
/// rounded to centavos.
pub fn format_peso(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut formatted = group_digits(whole);
    if frac != 0 {
        formatted.push_str(&format!(".{:02}", frac));
    }
    if negative {
        format!("-₱{}", formatted)
    } else {
        format!("₱{}", formatted)
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_peso_groups_thousands() {
        assert_eq!(format_peso(0.0), "₱0");
        assert_eq!(format_peso(999.0), "₱999");
        assert_eq!(format_peso(4500.0), "₱4,500");
        assert_eq!(format_peso(1_234_567.0), "₱1,234,567");
    }

    #[test]
    fn test_format_peso_keeps_centavos() {
        assert_eq!(format_peso(750.5), "₱750.50");
        assert_eq!(format_peso(1_234_567.5), "₱1,234,567.50");
        assert_eq!(format_peso(0.25), "₱0.25");
    }

    #[test]
    fn test_format_peso_negative() {
        assert_eq!(format_peso(-4500.0), "-₱4,500");
    }
}
