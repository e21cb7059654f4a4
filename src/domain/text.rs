//! String checks

/// Whether `text` reads the same both ways, ignoring case and every
/// character that is not an ASCII letter or digit.
///
/// The empty string is a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let cleaned: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    let mut left = 0;
    let mut right = cleaned.len().saturating_sub(1);
    while left < right {
        if cleaned[left] != cleaned[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Number of `a e i o u` characters in `text`, case-insensitive.
pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}
