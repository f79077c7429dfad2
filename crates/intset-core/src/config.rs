use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DIGITS, MIN_MAX_DIGITS};
use crate::error::{IntSetError, Result};

/// Tunables for the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Tokens whose length (sign included) reaches this value are rejected.
    pub max_digits: usize,
}

impl ParseConfig {
    pub fn new(max_digits: usize) -> Result<Self> {
        let config = Self { max_digits };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_digits < MIN_MAX_DIGITS {
            return Err(IntSetError::InvalidConfig(format!(
                "max_digits must be at least {MIN_MAX_DIGITS}, got {}",
                self.max_digits
            )));
        }
        Ok(())
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_digits: MAX_DIGITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_19() {
        assert_eq!(ParseConfig::default().max_digits, 19);
    }

    #[test]
    fn test_rejects_tiny_limit() {
        assert!(ParseConfig::new(1).is_err());
        assert!(ParseConfig::new(0).is_err());
        assert!(ParseConfig::new(2).is_ok());
    }
}
