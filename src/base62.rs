use std::{error::Error, fmt};

/// Digits first, then lowercase, then uppercase letters
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

#[derive(Debug, PartialEq)]
pub enum EncodeError {
    Negative(i64),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Negative(n) => write!(f, "cannot encode negative number {n}"),
        }
    }
}

impl Error for EncodeError {}

#[derive(Debug, PartialEq)]
pub enum DecodeError {
    Empty,
    InvalidDigit { digit: char, position: usize },
    Overflow,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "expected at least one digit"),
            DecodeError::InvalidDigit { digit, position } => {
                write!(f, "invalid base62 digit {digit:?} at position {position}")
            }
            DecodeError::Overflow => write!(f, "number does not fit into u64"),
        }
    }
}

impl Error for DecodeError {}

/// Encodes number most significant digit first. Zero is `"0"`
#[must_use]
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    // u64::MAX takes 11 digits
    let mut digits = Vec::with_capacity(11);
    while n > 0 {
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }

    digits.iter().rev().map(|&d| d as char).collect()
}

/// Same as [`encode`] for signed input. Negative numbers are rejected
pub fn int_to_base62(n: i64) -> Result<String, EncodeError> {
    u64::try_from(n)
        .map(encode)
        .map_err(|_| EncodeError::Negative(n))
}

fn digit_value(c: char) -> Option<u64> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='z' => c as u32 - 'a' as u32 + 10,
        'A'..='Z' => c as u32 - 'A' as u32 + 36,
        _ => return None,
    };

    Some(u64::from(value))
}

/// Parses output of [`encode`] back into number. Leading zeros are allowed
pub fn decode(s: &str) -> Result<u64, DecodeError> {
    if s.is_empty() {
        return Err(DecodeError::Empty);
    }

    s.chars().enumerate().try_fold(0u64, |acc, (position, digit)| {
        let value = digit_value(digit).ok_or(DecodeError::InvalidDigit { digit, position })?;

        acc.checked_mul(BASE)
            .and_then(|acc| acc.checked_add(value))
            .ok_or(DecodeError::Overflow)
    })
}
