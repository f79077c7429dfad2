use regex::Regex;
use std::sync::LazyLock;

use crate::config::ParseConfig;
use crate::constants::{CLOSE_BRACE, OPEN_BRACE, SEPARATOR};
use crate::error::{IntSetError, Result};

static ELEMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// Strip the surrounding braces, returning the interior.
/// Whitespace around the braces is ignored.
fn unwrap_braces(text: &str) -> Result<&str> {
    text.trim()
        .strip_prefix(OPEN_BRACE)
        .and_then(|rest| rest.strip_suffix(CLOSE_BRACE))
        .ok_or(IntSetError::MissingBrackets)
}

/// Validate one trimmed, non-empty element and convert it.
fn parse_element(token: &str, config: &ParseConfig) -> Result<i32> {
    if !ELEMENT.is_match(token) {
        let bad = token
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (c == '-' && i == 0)));
        return Err(match bad {
            Some((_, ch)) => IntSetError::InvalidCharacter {
                token: token.to_string(),
                ch,
            },
            None => IntSetError::MissingDigits {
                token: token.to_string(),
            },
        });
    }
    if token.len() >= config.max_digits {
        return Err(IntSetError::TooManyDigits {
            token: token.to_string(),
            max_digits: config.max_digits,
        });
    }
    token.parse::<i32>().map_err(|_| IntSetError::OutOfRange {
        token: token.to_string(),
    })
}

/// Tokenize set text into validated integers, in input order.
///
/// Elements are neither sorted nor deduplicated here. Empty elements
/// (`{1,,2}`, `{1,}`, `{ , }`) are skipped.
pub fn tokenize(text: &str, config: &ParseConfig) -> Result<Vec<i32>> {
    let interior = unwrap_braces(text)?;
    interior
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| parse_element(t, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Result<Vec<i32>> {
        tokenize(text, &ParseConfig::default())
    }

    #[test]
    fn test_basic_tokens_keep_input_order() {
        assert_eq!(tok("{3,1,2,1}").unwrap(), vec![3, 1, 2, 1]);
    }

    #[test]
    fn test_empty_set() {
        assert!(tok("{}").unwrap().is_empty());
        assert!(tok("  { }  ").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(tok(" { 5 , -3,10 } ").unwrap(), vec![5, -3, 10]);
        assert_eq!(tok("{\t7\n}").unwrap(), vec![7]);
    }

    #[test]
    fn test_stray_separators_skipped() {
        assert_eq!(tok("{1,,2,}").unwrap(), vec![1, 2]);
        assert_eq!(tok("{,}").unwrap(), Vec::<i32>::new());
        assert_eq!(tok("{ , 4 ,  ,}").unwrap(), vec![4]);
    }

    #[test]
    fn test_missing_brackets() {
        for bad in ["1,2,3", "{1,2,3", "1,2,3}", "", "   ", "{", "}", "[1,2]", "}1{"] {
            assert_eq!(tok(bad), Err(IntSetError::MissingBrackets), "input {bad:?}");
        }
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            tok("{1,a,2}"),
            Err(IntSetError::InvalidCharacter {
                token: "a".into(),
                ch: 'a'
            })
        );
        assert_eq!(
            tok("{12-3}"),
            Err(IntSetError::InvalidCharacter {
                token: "12-3".into(),
                ch: '-'
            })
        );
        assert_eq!(
            tok("{+4}"),
            Err(IntSetError::InvalidCharacter {
                token: "+4".into(),
                ch: '+'
            })
        );
        // internal whitespace is not trimmed away
        assert!(tok("{1 2}").unwrap_err().is_syntax());
        assert!(tok("{--1}").unwrap_err().is_syntax());
        assert!(tok("{1.5}").unwrap_err().is_syntax());
    }

    #[test]
    fn test_bare_sign() {
        assert_eq!(
            tok("{-}"),
            Err(IntSetError::MissingDigits { token: "-".into() })
        );
    }

    #[test]
    fn test_too_many_digits() {
        let err = tok("{123456789012345678901}").unwrap_err();
        assert!(err.is_overflow());
        assert!(matches!(err, IntSetError::TooManyDigits { max_digits: 19, .. }));
    }

    #[test]
    fn test_length_limit_counts_sign() {
        let config = ParseConfig::new(4).unwrap();
        assert_eq!(tokenize("{999}", &config).unwrap(), vec![999]);
        assert_eq!(tokenize("{-99}", &config).unwrap(), vec![-99]);
        assert!(tokenize("{1000}", &config).unwrap_err().is_overflow());
        assert!(tokenize("{-999}", &config).unwrap_err().is_overflow());
    }

    #[test]
    fn test_character_checked_before_length() {
        let err = tok("{1234567890123456789012x}").unwrap_err();
        assert!(err.is_syntax(), "got {err:?}");
    }

    #[test]
    fn test_i32_bounds() {
        assert_eq!(tok("{2147483647}").unwrap(), vec![i32::MAX]);
        assert_eq!(tok("{-2147483648}").unwrap(), vec![i32::MIN]);
        assert_eq!(
            tok("{2147483648}"),
            Err(IntSetError::OutOfRange {
                token: "2147483648".into()
            })
        );
        assert!(tok("{-2147483649}").unwrap_err().is_overflow());
    }

    #[test]
    fn test_leading_zeros_and_negative_zero() {
        assert_eq!(tok("{007,-0}").unwrap(), vec![7, 0]);
    }

    #[test]
    fn test_first_error_aborts() {
        // the overflow comes first, so the later syntax error is never reached
        let err = tok("{99999999999999999999,x}").unwrap_err();
        assert!(err.is_overflow());
    }
}
