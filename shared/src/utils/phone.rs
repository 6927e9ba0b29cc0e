//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{6,14}$").expect("E.164 pattern is valid")
});

// Country calling code: 1-3 digits, never starting with 0
static COUNTRY_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9]\d{0,2}$").expect("country code pattern is valid")
});

// Phone-number-like run of digits inside free text
static EMBEDDED_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{7,15}").expect("embedded number pattern is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Normalize a phone number and prepend `+<country_code>` when the input
/// has no leading `+`.
///
/// `country_code` may be given with or without its own `+`.
///
/// ```
/// use otp_shared::phone::with_default_country_code;
///
/// assert_eq!(with_default_country_code("5551234", "1"), "+15551234");
/// assert_eq!(with_default_country_code("+447700900123", "1"), "+447700900123");
/// ```
pub fn with_default_country_code(phone: &str, country_code: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.starts_with('+') {
        normalized
    } else {
        format!("+{}{}", country_code.trim_start_matches('+'), normalized)
    }
}

/// Check if a phone number is in E.164 format
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Check if a country calling code is well formed (an optional `+` is allowed)
pub fn is_valid_country_code(code: &str) -> bool {
    COUNTRY_CODE_REGEX.is_match(code.trim().trim_start_matches('+'))
}

/// Mask a phone number for logs and display, keeping the last four digits
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible_digits = 4;
    let last_digits: String = chars[chars.len() - visible_digits..].iter().collect();
    let masked_count = chars.len() - visible_digits;

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), last_digits)
    } else {
        format!("{}{}", "*".repeat(masked_count), last_digits)
    }
}

/// Mask every phone-number-like substring of `text`
///
/// For provider messages that may quote the number they were given.
pub fn mask_phone_numbers_in(text: &str) -> String {
    EMBEDDED_NUMBER_REGEX
        .replace_all(text, |caps: &regex::Captures<'_>| mask_phone_number(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("555-1234"), "5551234");
        assert_eq!(normalize_phone_number("+1 (415) 555.2671"), "+14155552671");
        assert_eq!(normalize_phone_number("  "), "");
    }

    #[test]
    fn test_default_country_code_is_prepended() {
        assert_eq!(with_default_country_code("5551234", "1"), "+15551234");
        assert_eq!(with_default_country_code("5551234", "+1"), "+15551234");
        assert_eq!(with_default_country_code("412 345 678", "61"), "+61412345678");
    }

    #[test]
    fn test_default_country_code_matches_raw_digits_for_any_input() {
        for raw in ["1", "0412345678", "13812345678", "999"] {
            assert_eq!(with_default_country_code(raw, "86"), format!("+86{}", raw));
        }
    }

    #[test]
    fn test_existing_plus_is_kept() {
        assert_eq!(with_default_country_code("+8613812345678", "1"), "+8613812345678");
    }

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+15551234"));
        assert!(is_valid_e164("+14155552671"));
        assert!(is_valid_e164("+8613812345678"));
        assert!(!is_valid_e164("14155552671")); // Missing +
        assert!(!is_valid_e164("+0123456789")); // Invalid country code
        assert!(!is_valid_e164("+123")); // Too short
        assert!(!is_valid_e164("+1234567890123456")); // Too long
        assert!(!is_valid_e164("+1555abc1234"));
    }

    #[test]
    fn test_is_valid_country_code() {
        assert!(is_valid_country_code("1"));
        assert!(is_valid_country_code("+44"));
        assert!(is_valid_country_code("852"));
        assert!(!is_valid_country_code("0"));
        assert!(!is_valid_country_code("1234"));
        assert!(!is_valid_country_code("your_country_code"));
        assert!(!is_valid_country_code(""));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+1234567890"), "+******7890");
        assert_eq!(mask_phone_number("+15551234"), "+****1234");
        assert_eq!(mask_phone_number("1234567890"), "******7890");
        assert_eq!(mask_phone_number("123"), "***");
        assert_eq!(mask_phone_number("1234"), "****");
    }

    #[test]
    fn test_mask_phone_numbers_in_text() {
        assert_eq!(
            mask_phone_numbers_in("Invalid parameter `To`: +15551234"),
            "Invalid parameter `To`: +****1234"
        );
        assert_eq!(
            mask_phone_numbers_in("Max send attempts reached"),
            "Max send attempts reached"
        );
        assert_eq!(mask_phone_numbers_in("error 60200 for 5551234567"), "error 60200 for ******4567");
    }
}
