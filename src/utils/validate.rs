use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").unwrap());

// Matches only the fully-masked output of `mask::mask_phone`.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").unwrap());

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Select,
}

/// Checks one form field. Every field on the contact form is required, so an
/// empty value is always invalid. Returns the user-facing message, or `None`
/// when the value passes.
pub fn check(kind: FieldKind, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(match kind {
            FieldKind::Select => "Please choose an option",
            _ => "This field is required",
        });
    }
    match kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Some("Please enter a valid email address"),
        FieldKind::Phone if !PHONE_RE.is_match(value) => {
            Some("Please enter a phone number as (11) 98765-4321")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{check, FieldKind};

    #[test]
    fn empty_required_fields_are_invalid() {
        assert!(check(FieldKind::Text, "").is_some());
        assert!(check(FieldKind::Text, "   ").is_some());
        assert!(check(FieldKind::Email, "").is_some());
        assert!(check(FieldKind::Select, "").is_some());
    }

    #[test]
    fn email_scenarios() {
        assert!(check(FieldKind::Email, "not-an-email").is_some());
        assert!(check(FieldKind::Email, "a@b.co").is_none());
        assert!(check(FieldKind::Email, "a b@c.co").is_some());
        assert!(check(FieldKind::Email, "a@b.c").is_some());
        assert!(check(FieldKind::Email, "maria.silva@vetra.studio").is_none());
    }

    #[test]
    fn phone_accepts_only_the_fully_masked_shape() {
        assert!(check(FieldKind::Phone, "(11) 98765-4321").is_none());
        assert!(check(FieldKind::Phone, "(11) 98765").is_some());
        assert!(check(FieldKind::Phone, "11987654321").is_some());
        assert!(check(FieldKind::Phone, "(11) 98765-43210").is_some());
    }

    #[test]
    fn masked_input_always_validates_once_complete() {
        let masked = crate::utils::mask::mask_phone("11987654321");
        assert!(check(FieldKind::Phone, &masked).is_none());
    }

    #[test]
    fn selection_needs_a_chosen_value() {
        assert!(check(FieldKind::Select, "").is_some());
        assert!(check(FieldKind::Select, "branding").is_none());
    }

    #[test]
    fn first_invalid_field_wins_focus() {
        // Mirrors the submit handler: errors are checked in document order
        // and focus goes to the first one.
        let entries = [
            (FieldKind::Text, "Maria"),
            (FieldKind::Email, "not-an-email"),
            (FieldKind::Phone, ""),
            (FieldKind::Select, "branding"),
            (FieldKind::Text, "Hello"),
        ];
        let first = entries
            .iter()
            .position(|(kind, value)| check(*kind, value).is_some());
        assert_eq!(first, Some(1));
    }
}
