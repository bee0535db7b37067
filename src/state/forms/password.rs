//! Password strength scoring for the strength meter

use std::collections::HashMap;

/// Heuristic strength score; 100 and above counts as a full meter.
///
/// Repeated characters are worth less each time they occur, and every class
/// of character beyond the first (digit, lowercase, uppercase, symbol) adds 10.
pub fn score(password: &str) -> u32 {
    if password.is_empty() {
        return 0;
    }

    let mut seen: HashMap<char, u32> = HashMap::new();
    let mut total = 0.0_f64;
    for c in password.chars() {
        let count = seen.entry(c).or_insert(0);
        *count += 1;
        total += 5.0 / f64::from(*count);
    }

    let variations = [
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_')),
    ]
    .iter()
    .filter(|present| **present)
    .count() as f64;
    total += (variations - 1.0) * 10.0;

    total.max(0.0) as u32
}

/// Meter fill in percent
pub fn meter_percent(password: &str) -> u16 {
    score(password).min(100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_single_class_has_no_variation_bonus() {
        // 6 distinct chars * 5
        assert_eq!(score("abcdef"), 30);
    }

    #[test]
    fn test_repeats_are_worth_less() {
        // 5 + 2.5 + 1.666
        assert_eq!(score("aaa"), 9);
    }

    #[test]
    fn test_variation_bonus() {
        // 6 distinct chars (30) + repeated 'e' (2.5) + two classes (10)
        assert_eq!(score("secret1"), 42);
        // 7 distinct chars (35) + repeated 'e' (2.5) + four classes (30)
        assert_eq!(score("Secret1!"), 67);
    }

    #[test]
    fn test_meter_is_capped() {
        assert_eq!(meter_percent("Aa1!Bb2@Cc3#Dd4$Ee5%"), 100);
        assert_eq!(meter_percent("abcdef"), 30);
    }

    #[test]
    fn test_symbols_only() {
        // no classes beyond symbols: (1 - 1) * 10
        assert_eq!(score("!@#"), 15);
    }
}
