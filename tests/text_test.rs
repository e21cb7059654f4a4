//! Integration tests for the string checks

use rstest::rstest;

use primer::domain::{count_vowels, is_palindrome};

#[rstest]
#[case("racecar", true)]
#[case("hello", false)]
#[case("A man, a plan, a canal: Panama", true)]
#[case("Was it a car or a cat I saw?", true)]
#[case("", true)]
fn given_text_when_checking_palindrome_then_expected(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(is_palindrome(text), expected);
}

#[test]
fn given_demo_sentence_when_counting_vowels_then_six() {
    assert_eq!(count_vowels("Hello World Programming"), 6);
}

#[test]
fn given_empty_text_when_counting_vowels_then_zero() {
    assert_eq!(count_vowels(""), 0);
}

#[test]
fn given_mixed_case_when_counting_vowels_then_case_insensitive() {
    assert_eq!(count_vowels("AbEcIdOfU"), count_vowels("abecidofu"));
}
