//! Predicados puros de validación compartidos por todos los formularios.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// Dígito inicial distinto de cero y a lo sumo 16 dígitos en total.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern"));

/// Forma `local@dominio.tld` sin espacios en ninguna parte.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// `+` opcional seguido de 1 a 16 dígitos, ignorando espacios internos. El
/// primer dígito no puede ser `0`: un número local como `021 555 0100` se
/// rechaza y hay que escribirlo en formato internacional (`+27 21 555 0100`).
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("ja ne@x.com"));
        assert!(!is_valid_email(" jane@x.com"));
        assert!(!is_valid_email("jane@@x.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+27 21 555 0100"));
        assert!(is_valid_phone("0215550100".trim_start_matches('0')));
        assert!(is_valid_phone("1"));
        assert!(is_valid_phone("+1234567890123456"));
        assert!(!is_valid_phone("+12345678901234567"));
        assert!(!is_valid_phone("021 555 0100"));
        assert!(!is_valid_phone("555-0100"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+"));
    }

    #[test]
    fn non_empty_trims() {
        assert!(is_non_empty(" x "));
        assert!(!is_non_empty("   "));
        assert!(!is_non_empty(""));
    }
}
