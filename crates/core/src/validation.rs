use serde::{Deserialize, Serialize};
use thiserror::Error;

// Bounds are exclusive on both ends: a 65-year-old is out, a 5000-dollar
// investment is out.
pub const MIN_AGE_EXCLUSIVE: i64 = 0;
pub const MAX_AGE_EXCLUSIVE: i64 = 65;
pub const MIN_INVESTMENT_EXCLUSIVE: i64 = 5000;

pub const AGE_RANGE_MESSAGE: &str = "You should be less than 65 years in age to use this service, \
     please provide a different age.";
pub const AGE_NOT_NUMERIC_MESSAGE: &str =
    "The age provided could not be read as a number, please provide your age in years.";
pub const AMOUNT_RANGE_MESSAGE: &str = "The amount to invest should be greater than $5000, \
     please re-enter the amount in dollars to invest.";
pub const AMOUNT_NOT_NUMERIC_MESSAGE: &str = "The investment amount provided could not be read \
     as a number, please re-enter the amount in dollars to invest.";

/// Slots subject to numeric bound checks, named by their wire key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidatedSlot {
    Age,
    InvestmentAmount,
}

impl ValidatedSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::InvestmentAmount => "investmentAmount",
        }
    }
}

/// An invalid outcome always carries both the violated slot and the user
/// message; a valid outcome carries neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid { slot: ValidatedSlot, message: String },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    fn invalid(slot: ValidatedSlot, message: &str) -> Self {
        Self::Invalid { slot, message: message.to_owned() }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SlotParseError {
    #[error("slot value `{raw}` is not a whole number")]
    NotANumber { raw: String },
}

/// How a present-but-unparseable numeric slot is treated.
///
/// `Legacy` reproduces the upstream service this replaces, where a failed
/// coercion produced a sentinel whose bound comparisons were all false, so
/// garbage input sailed past validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionPolicy {
    #[default]
    Strict,
    Legacy,
}

/// Parses the raw text of a numeric slot. Slot values arrive as strings from
/// the host platform, so the cast is explicit and fallible.
pub fn parse_slot_int(raw: &str) -> Result<i64, SlotParseError> {
    raw.trim().parse::<i64>().map_err(|_| SlotParseError::NotANumber { raw: raw.to_owned() })
}

/// Checks the user-supplied `age` and `investmentAmount` slot values.
///
/// Age is checked first and the first failing check short-circuits. An absent
/// slot imposes no constraint: the host platform has not collected it yet.
pub fn validate(
    age: Option<&str>,
    investment_amount: Option<&str>,
    policy: CoercionPolicy,
) -> ValidationOutcome {
    if let Some(raw) = age {
        match parse_slot_int(raw) {
            Ok(age) if age <= MIN_AGE_EXCLUSIVE || age >= MAX_AGE_EXCLUSIVE => {
                return ValidationOutcome::invalid(ValidatedSlot::Age, AGE_RANGE_MESSAGE);
            }
            Ok(_) => {}
            Err(_) if policy == CoercionPolicy::Strict => {
                return ValidationOutcome::invalid(ValidatedSlot::Age, AGE_NOT_NUMERIC_MESSAGE);
            }
            Err(_) => {}
        }
    }

    if let Some(raw) = investment_amount {
        match parse_slot_int(raw) {
            Ok(amount) if amount <= MIN_INVESTMENT_EXCLUSIVE => {
                return ValidationOutcome::invalid(
                    ValidatedSlot::InvestmentAmount,
                    AMOUNT_RANGE_MESSAGE,
                );
            }
            Ok(_) => {}
            Err(_) if policy == CoercionPolicy::Strict => {
                return ValidationOutcome::invalid(
                    ValidatedSlot::InvestmentAmount,
                    AMOUNT_NOT_NUMERIC_MESSAGE,
                );
            }
            Err(_) => {}
        }
    }

    ValidationOutcome::Valid
}
