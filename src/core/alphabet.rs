//! Alphabet table and on-screen keyboard layout

/// Letters a guess may contain
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// QWERTY rows of the virtual keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Normalize a typed character to an uppercase game letter
///
/// Returns `None` for anything outside the alphabet.
#[must_use]
pub fn normalize_letter(ch: char) -> Option<char> {
    let upper = ch.to_ascii_uppercase();
    upper.is_ascii_uppercase().then_some(upper)
}
