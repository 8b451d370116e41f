use crate::utils::error::ParityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an integer is divisible by two.
///
/// Serialized as the bare labels `"Even"` and `"Odd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn is_even(self) -> bool {
        self == Parity::Even
    }

    pub fn is_odd(self) -> bool {
        self == Parity::Odd
    }

    /// Parity of `n + 1` given the parity of `n`.
    pub fn opposite(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parity::Even => "Even",
            Parity::Odd => "Odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Parity {
    type Err = ParityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("even") {
            Ok(Parity::Even)
        } else if trimmed.eq_ignore_ascii_case("odd") {
            Ok(Parity::Odd)
        } else {
            Err(ParityError::ParseParityError {
                value: s.to_string(),
            })
        }
    }
}

/// One row of a classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub number: i64,
    pub parity: Parity,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.number, self.parity)
    }
}
