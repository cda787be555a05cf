use crate::checksum::is_valid_checksum;
use crate::reference::iban_length;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    TooShort {
        length: usize,
    },
    InvalidCountryCode,
    InvalidCheckDigits,
    /// `position` is a character index into the normalized candidate.
    InvalidCharacter {
        ch: char,
        position: usize,
    },
    UnknownCountry {
        country: String,
    },
    LengthMismatch {
        country: String,
        expected: usize,
        actual: usize,
    },
    ChecksumMismatch,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "IBAN is empty"),
            Rejection::TooShort { length } => {
                write!(f, "IBAN is too short ({length} characters)")
            }
            Rejection::InvalidCountryCode => {
                write!(f, "IBAN must start with a two letter country code")
            }
            Rejection::InvalidCheckDigits => {
                write!(f, "IBAN check digits must be two decimal digits")
            }
            Rejection::InvalidCharacter { ch, position } => {
                write!(f, "IBAN contains invalid character {ch:?} at position {position}")
            }
            Rejection::UnknownCountry { country } => {
                write!(f, "IBAN length not known for country {country}")
            }
            Rejection::LengthMismatch {
                country,
                expected,
                actual,
            } => write!(
                f,
                "IBAN length {actual} does not match {expected} required for {country}"
            ),
            Rejection::ChecksumMismatch => write!(f, "IBAN check digits are invalid"),
        }
    }
}

impl std::error::Error for Rejection {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[0..2]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    pub fn bban(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iban {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_iban(s)
    }
}

pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '\u{feff}')
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

pub fn check_structure(normalized: &str) -> Result<(), Rejection> {
    let length = normalized.chars().count();
    if length == 0 {
        return Err(Rejection::Empty);
    }
    if length < 5 {
        return Err(Rejection::TooShort { length });
    }

    for (position, ch) in normalized.chars().enumerate() {
        match position {
            0 | 1 if !ch.is_ascii_uppercase() => return Err(Rejection::InvalidCountryCode),
            2 | 3 if !ch.is_ascii_digit() => return Err(Rejection::InvalidCheckDigits),
            _ if !(ch.is_ascii_uppercase() || ch.is_ascii_digit()) => {
                return Err(Rejection::InvalidCharacter { ch, position })
            }
            _ => {}
        }
    }
    Ok(())
}

pub fn check_iban(input: &str) -> Result<Iban, Rejection> {
    let normalized = normalize(input);
    let result = check_normalized(normalized);
    if let Err(rejection) = &result {
        log::debug!("rejected IBAN candidate: {rejection}");
    }
    result
}

pub fn validate_iban(input: &str) -> bool {
    check_iban(input).is_ok()
}

fn check_normalized(normalized: String) -> Result<Iban, Rejection> {
    check_structure(&normalized)?;

    // Structure guarantees ASCII from here on.
    let country = &normalized[0..2];
    let expected = iban_length(country).ok_or_else(|| Rejection::UnknownCountry {
        country: country.to_string(),
    })?;
    if normalized.len() != expected {
        return Err(Rejection::LengthMismatch {
            country: country.to_string(),
            expected,
            actual: normalized.len(),
        });
    }

    if !is_valid_checksum(&normalized) {
        return Err(Rejection::ChecksumMismatch);
    }
    log::trace!("accepted IBAN for country {country}");
    Ok(Iban(normalized))
}
