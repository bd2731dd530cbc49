use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Sorts before every other character so `a.png` precedes `a-b.png`.
const DOT: char = '\u{1}';
/// Opens a numeric run. Sorts after `.` but before any printable character.
const NUMBER: char = '\u{2}';
/// Separates the folded part of the key from the raw name tie-breaker.
const TIE_BREAK: char = '\0';

/// Byte-comparable sort key for a file's display name.
///
/// Comparing two keys with plain `str` ordering gives the order a file
/// browser shows: case- and accent-insensitive, digit runs by numeric value,
/// dots first. Letters are decomposed (NFD) and their combining marks dropped,
/// so `Ärger` files under `a` and `éclair` under `e`.
/// The raw name is appended so different names never share a key.
pub fn collation_key(display_name: &str) -> String {
    let mut key = String::with_capacity(display_name.len() * 2 + 1);
    let mut chars = display_name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut digits = String::from(c);
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            push_number(&mut key, &digits);
        } else if c == '.' {
            key.push(DOT);
        } else {
            key.extend(c.to_lowercase());
        }
    }

    key.push(TIE_BREAK);
    key.push_str(display_name);
    key
}

/// Numeric runs are written as marker, digit count, digits; a longer run
/// (after dropping leading zeros) is always the larger number.
fn push_number(key: &mut String, digits: &str) {
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    key.push(NUMBER);
    key.push_str(&format!("{:05}", significant.len()));
    key.push_str(significant);
}

#[cfg(test)]
#[path = "collate_tests.rs"]
mod tests;
