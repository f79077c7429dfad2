/// Default maximum token length (sign included). A token must be strictly
/// shorter than this to be accepted.
pub const MAX_DIGITS: usize = 19;

/// Smallest usable `max_digits`: room for a single digit.
pub const MIN_MAX_DIGITS: usize = 2;

pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';
pub const SEPARATOR: char = ',';

/// Canonical encoding of the empty set.
pub const EMPTY_SET: &str = "{}";
