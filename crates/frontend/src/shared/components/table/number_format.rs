//! Number formatting utilities for tables
//!
//! Indonesian convention: dot as the thousands separator, comma as the
//! decimal separator.

/// Format a number with thousands separators and the given decimal places
///
/// # Example
///
/// ```rust,ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a separator every 3 digits, walking from the end
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Format a Rupiah amount
///
/// Whole Rupiah only, as prices are stored without cents.
///
/// # Example
///
/// ```rust,ignore
/// let formatted = format_money(45000.0);
/// assert_eq!(formatted, "Rp 45.000");
/// ```
pub fn format_money(value: f64) -> String {
    format!("Rp {}", format_number_with_decimals(value, 0))
}

/// Format an integer quantity with thousands separators
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(45000.0), "Rp 45.000");
        assert_eq!(format_money(1234567.0), "Rp 1.234.567");
        assert_eq!(format_money(0.0), "Rp 0");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1.234,567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1.234");
    }
}
