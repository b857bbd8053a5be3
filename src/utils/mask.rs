/// Formats raw phone input as `(DD) DDDDD-DDDD`, progressively while the
/// user types. Strips every non-digit and truncates to 11 digits. The
/// validation pattern in [`crate::utils::validate`] depends on this exact
/// shape, so the formatting stages must not change.
pub fn mask_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(11).collect();
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_phone;

    #[test]
    fn full_number_gets_the_complete_shape() {
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn partial_input_is_a_strict_prefix_of_the_full_shape() {
        let full = "(11) 98765-4321";
        let raw = "11987654321";
        for n in 1..raw.len() {
            let masked = mask_phone(&raw[..n]);
            assert!(
                full.starts_with(&masked) && masked.len() < full.len(),
                "{masked:?} is not a strict prefix of {full:?}"
            );
        }
    }

    #[test]
    fn formatting_stages() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1"), "(1");
        assert_eq!(mask_phone("11"), "(11");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("1198765"), "(11) 98765");
        assert_eq!(mask_phone("11987654"), "(11) 98765-4");
    }

    #[test]
    fn non_digits_are_stripped() {
        assert_eq!(mask_phone("(11) 98765-4321"), "(11) 98765-4321");
        assert_eq!(mask_phone("+55 11 98765 4321x"), "(55) 11987-6543");
        assert_eq!(mask_phone("abc"), "");
    }

    #[test]
    fn extra_digits_are_truncated() {
        assert_eq!(mask_phone("119876543219999"), "(11) 98765-4321");
    }
}
