use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());
static INTERNATIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{3})([0-9]{3})([0-9]{2})([0-9]{2})([0-9]{2})").unwrap());
static LOCAL_MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{3})([0-9]{2})([0-9]{2})([0-9]{2})").unwrap());

/// Reformats a Georgian mobile number while it is being typed. Only ASCII digits count.
///
/// `995…` becomes `+995 5XX XX XX XX`, `5…` becomes `5XX XX XX XX`. Until enough
/// digits are present the digits alone are returned, and anything else is left
/// as typed.
pub fn format_phone_number(input: &str) -> String {
    let digits = NON_DIGITS.replace_all(input, "");

    if digits.starts_with("995") {
        INTERNATIONAL
            .replacen(&digits, 1, "+${1} ${2} ${3} ${4} ${5}")
            .into_owned()
    } else if digits.starts_with('5') {
        LOCAL_MOBILE
            .replacen(&digits, 1, "${1} ${2} ${3} ${4}")
            .into_owned()
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_international_numbers() {
        assert_eq!(format_phone_number("995591902479"), "+995 591 90 24 79");
        assert_eq!(format_phone_number("+995 (591) 90-24-79"), "+995 591 90 24 79");
    }

    #[test]
    fn groups_local_mobile_numbers() {
        assert_eq!(format_phone_number("591902479"), "591 90 24 79");
        assert_eq!(format_phone_number("591-90-24-79"), "591 90 24 79");
    }

    #[test]
    fn formatting_is_stable_across_input_events() {
        let once = format_phone_number("995591902479");
        assert_eq!(format_phone_number(&once), once);
        let local = format_phone_number("591902479");
        assert_eq!(format_phone_number(&local), local);
    }

    #[test]
    fn partial_numbers_collapse_to_digits() {
        assert_eq!(format_phone_number("+995 59"), "99559");
        assert_eq!(format_phone_number("59 1"), "591");
    }

    #[test]
    fn extra_digits_trail_the_groups() {
        assert_eq!(format_phone_number("5919024791"), "591 90 24 791");
    }

    #[test]
    fn other_input_is_untouched() {
        assert_eq!(format_phone_number("+1 (555) 010"), "+1 (555) 010");
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("abc"), "abc");
    }

    #[test]
    fn non_ascii_digits_are_not_grouped() {
        assert_eq!(format_phone_number("5٩١٩٠٢٤٧٩"), "5");
        assert_eq!(format_phone_number("٥٩١٩٠٢٤٧٩"), "٥٩١٩٠٢٤٧٩");
        assert_eq!(format_phone_number("995５９１９０２４７９"), "995");
    }
}
