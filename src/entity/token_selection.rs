use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of the swap form: the chosen currency and the amount as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSelection {
    pub currency: String,
    pub amount: String,
}

impl TokenSelection {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount: String::new(),
        }
    }

    pub fn with_amount(currency: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => write!(f, "from"),
            Side::To => write!(f, "to"),
        }
    }
}
