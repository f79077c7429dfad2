use std::fmt;

/// Broad failure category, as reported to a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed text: brackets, stray characters, bare signs.
    Syntax,
    /// Element too long or outside the 32-bit signed range.
    Overflow,
    /// Rejected tunables; never produced by parsing itself.
    Config,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntSetError {
    MissingBrackets,
    InvalidCharacter { token: String, ch: char },
    MissingDigits { token: String },
    TooManyDigits { token: String, max_digits: usize },
    OutOfRange { token: String },
    InvalidConfig(String),
}

impl IntSetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IntSetError::MissingBrackets
            | IntSetError::InvalidCharacter { .. }
            | IntSetError::MissingDigits { .. } => ErrorKind::Syntax,
            IntSetError::TooManyDigits { .. } | IntSetError::OutOfRange { .. } => {
                ErrorKind::Overflow
            }
            IntSetError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    pub fn is_overflow(&self) -> bool {
        self.kind() == ErrorKind::Overflow
    }
}

impl fmt::Display for IntSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntSetError::MissingBrackets => {
                write!(f, "syntax error: set must start with '{{' and end with '}}'")
            }
            IntSetError::InvalidCharacter { token, ch } => {
                write!(f, "syntax error: invalid character '{ch}' in element '{token}'")
            }
            IntSetError::MissingDigits { token } => {
                write!(f, "syntax error: element '{token}' has no digits")
            }
            IntSetError::TooManyDigits { token, max_digits } => write!(
                f,
                "overflow: element '{token}' must be shorter than {max_digits} characters"
            ),
            IntSetError::OutOfRange { token } => {
                write!(f, "overflow: element '{token}' does not fit a 32-bit integer")
            }
            IntSetError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for IntSetError {}

pub type Result<T> = std::result::Result<T, IntSetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(IntSetError::MissingBrackets.kind(), ErrorKind::Syntax);
        assert!(
            IntSetError::InvalidCharacter {
                token: "a".into(),
                ch: 'a'
            }
            .is_syntax()
        );
        assert!(
            IntSetError::TooManyDigits {
                token: "1".repeat(20),
                max_digits: 19
            }
            .is_overflow()
        );
        assert!(IntSetError::OutOfRange { token: "4294967296".into() }.is_overflow());
    }

    #[test]
    fn test_display_names_offender() {
        let err = IntSetError::InvalidCharacter {
            token: "1x".into(),
            ch: 'x',
        };
        let msg = err.to_string();
        assert!(msg.contains("'x'"), "got: {msg}");
        assert!(msg.contains("'1x'"), "got: {msg}");
        assert!(msg.starts_with("syntax error"));
    }
}
