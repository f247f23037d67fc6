use crate::error::InvalidCharacter;

/// End-of-word marker. Sorts after every letter in child order.
pub const EOW: char = '$';
pub const WILDCARD: char = '*';

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz$".as_bytes();

pub fn get_idx(a: char) -> usize {
    if a == EOW {
        return 26
    }
    (a.to_ascii_lowercase() as u8 - b'a') as usize
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Case-folds a dictionary term, rejecting anything but `[A-Za-z]`.
pub fn normalize(s: &str) -> Result<String, InvalidCharacter> {
    fold(s, is_letter)
}

/// Case-folds an index key. Keys may carry the end-of-word marker.
pub fn normalize_key(s: &str) -> Result<String, InvalidCharacter> {
    fold(s, |c| is_letter(c) || c == EOW)
}

/// Case-folds a wildcard pattern: letters and `*` only.
pub fn normalize_pattern(s: &str) -> Result<String, InvalidCharacter> {
    fold(s, |c| is_letter(c) || c == WILDCARD)
}

fn fold<F>(s: &str, accept: F) -> Result<String, InvalidCharacter>
    where F: Fn(char) -> bool {
    match s.chars().enumerate().find(|(_, c)| !accept(*c)) {
        Some((position, ch)) => Err(InvalidCharacter::new(s.to_string(), ch, position)),
        None => Ok(s.to_ascii_lowercase()),
    }
}
