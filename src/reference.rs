// Registry entries longer than 31 characters (LC, RU) are left out on purpose.
pub const IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24),
    ("AE", 23),
    ("AL", 28),
    ("AT", 20),
    ("AZ", 28),
    ("BA", 20),
    ("BE", 16),
    ("BG", 22),
    ("BH", 22),
    ("BI", 27),
    ("BR", 29),
    ("BY", 28),
    ("CH", 21),
    ("CR", 22),
    ("CY", 28),
    ("CZ", 24),
    ("DE", 22),
    ("DJ", 27),
    ("DK", 18),
    ("DO", 28),
    ("EE", 20),
    ("EG", 29),
    ("ES", 24),
    ("FI", 18),
    ("FK", 18),
    ("FO", 18),
    ("FR", 27),
    ("GB", 22),
    ("GE", 22),
    ("GI", 23),
    ("GL", 18),
    ("GR", 27),
    ("GT", 28),
    ("HR", 21),
    ("HU", 28),
    ("IE", 22),
    ("IL", 23),
    ("IQ", 23),
    ("IS", 26),
    ("IT", 27),
    ("JO", 30),
    ("KW", 30),
    ("KZ", 20),
    ("LB", 28),
    ("LI", 21),
    ("LT", 20),
    ("LU", 20),
    ("LV", 21),
    ("LY", 25),
    ("MC", 27),
    ("MD", 24),
    ("ME", 22),
    ("MK", 19),
    ("MN", 20),
    ("MR", 27),
    ("MT", 31),
    ("MU", 30),
    ("NL", 18),
    ("NO", 15),
    ("PK", 24),
    ("PL", 28),
    ("PS", 29),
    ("PT", 25),
    ("QA", 29),
    ("RO", 24),
    ("RS", 22),
    ("SA", 24),
    ("SC", 31),
    ("SD", 18),
    ("SE", 24),
    ("SI", 19),
    ("SK", 24),
    ("SM", 27),
    ("SO", 23),
    ("ST", 25),
    ("SV", 28),
    ("TL", 23),
    ("TN", 24),
    ("TR", 26),
    ("UA", 29),
    ("VA", 22),
    ("VG", 24),
    ("XK", 20),
];

pub const MAX_IBAN_LENGTH: usize = 31;

pub fn iban_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, len)| *len)
}

pub fn is_known_country(code: &str) -> bool {
    iban_length(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lengths_for_common_countries() {
        assert_eq!(iban_length("GB"), Some(22));
        assert_eq!(iban_length("DE"), Some(22));
        assert_eq!(iban_length("FR"), Some(27));
        assert_eq!(iban_length("NO"), Some(15));
        assert_eq!(iban_length("MT"), Some(31));
        assert_eq!(iban_length("SO"), Some(23));
    }

    #[test]
    fn unknown_and_lowercase_codes_are_absent() {
        assert_eq!(iban_length("US"), None);
        assert_eq!(iban_length("LC"), None);
        assert_eq!(iban_length("RU"), None);
        assert_eq!(iban_length("gb"), None);
        assert_eq!(iban_length(""), None);
        assert!(!is_known_country("XX"));
        assert!(is_known_country("CH"));
    }

    #[test]
    fn table_is_well_formed() {
        let mut seen = HashSet::new();
        for (code, len) in IBAN_LENGTHS {
            assert_eq!(code.len(), 2, "bad code {code}");
            assert!(code.chars().all(|ch| ch.is_ascii_uppercase()), "bad code {code}");
            assert!(seen.insert(*code), "duplicate entry for {code}");
            assert!((15..=MAX_IBAN_LENGTH).contains(len), "bad length for {code}");
        }
        let longest = IBAN_LENGTHS.iter().map(|(_, len)| *len).max();
        assert_eq!(longest, Some(MAX_IBAN_LENGTH));
    }
}
