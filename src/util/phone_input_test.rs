use super::*;

#[test]
fn build_returns_short_sequences_untouched() {
    assert_eq!(build(""), "");
    assert_eq!(build("5"), "5");
    assert_eq!(build("55"), "55");
    assert_eq!(build("555"), "555");
}

#[test]
fn build_wraps_area_code_from_four_digits() {
    assert_eq!(build("5551"), "(555) 1");
    assert_eq!(build("55512"), "(555) 12");
    assert_eq!(build("555123"), "(555) 123");
}

#[test]
fn build_adds_subscriber_dash_from_seven_digits() {
    assert_eq!(build("5551234"), "(555) 123-4");
    assert_eq!(build("555123456"), "(555) 123-456");
    assert_eq!(build("5551234567"), "(555) 123-4567");
}

#[test]
fn build_uses_only_first_ten_digits() {
    assert_eq!(build("55512345678999"), "(555) 123-4567");
}

#[test]
fn formatting_is_idempotent_over_digit_content() {
    for raw in ["5551234567", "555123", "55", "55512345678999"] {
        let masked = format_masked(raw);
        assert_eq!(format_masked(&masked), masked);
        let truncated: String = digits(raw).chars().take(10).collect();
        assert_eq!(digits(&masked), truncated);
    }
}

#[test]
fn format_masked_ignores_existing_punctuation() {
    assert_eq!(format_masked("(555) 123-4567"), "(555) 123-4567");
    assert_eq!(format_masked("555.123.4567"), "(555) 123-4567");
    assert_eq!(format_masked("+1 abc"), "1");
}

#[test]
fn to_e164_prefixes_ten_digit_numbers_with_us_code() {
    assert_eq!(to_e164("(555) 123-4567").as_deref(), Some("+15551234567"));
}

#[test]
fn to_e164_accepts_eleven_digits_with_leading_one() {
    assert_eq!(to_e164("15551234567").as_deref(), Some("+15551234567"));
}

#[test]
fn to_e164_rejects_short_numbers() {
    assert_eq!(to_e164("5551234"), None);
    assert_eq!(to_e164(""), None);
}

#[test]
fn to_e164_keeps_eleven_digits_without_leading_one_best_effort() {
    assert_eq!(to_e164("25551234567").as_deref(), Some("+25551234567"));
}

#[test]
fn to_e164_passes_long_numbers_through_best_effort() {
    assert_eq!(to_e164("025551234567").as_deref(), Some("+025551234567"));
}

#[test]
fn key_allowed_passes_navigation_and_digits() {
    for key in ["Backspace", "ArrowLeft", "ArrowRight", "Delete", "Tab", "Home", "End"] {
        assert!(key_allowed(key, false, false), "{key} should pass");
    }
    for key in ["0", "5", "9"] {
        assert!(key_allowed(key, false, false), "{key} should pass");
    }
}

#[test]
fn key_allowed_passes_shortcut_chords() {
    assert!(key_allowed("v", true, false));
    assert!(key_allowed("c", false, true));
}

#[test]
fn key_allowed_blocks_other_character_keys() {
    for key in ["a", "-", " ", "Enter", "!"] {
        assert!(!key_allowed(key, false, false), "{key} should be blocked");
    }
}
