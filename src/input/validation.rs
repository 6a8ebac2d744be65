use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use rust_decimal::Decimal;

lazy_static! {
    // Optional sign, digits with an optional fraction, optional exponent.
    // No digit separators, no hex, no NaN/Infinity.
    static ref NUMBER: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid number pattern");
}

/// Input validation error
///
/// The display text is what the user sees before being asked again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input! Please enter a numeric value.")]
    NotANumber,

    #[error("Account ID must be a positive integer.")]
    NonPositiveAccountId,

    #[error("Customer name cannot be empty. Please enter a valid name.")]
    EmptyName,

    #[error("Initial deposit cannot be negative. Please enter a valid amount.")]
    NegativeInitialDeposit,

    #[error("Deposit amount must be greater than zero.")]
    NonPositiveDeposit,

    #[error("Withdrawal amount must be greater than zero.")]
    NonPositiveWithdrawal,
}

/// Constraint applied to a parsed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRule {
    /// Zero allowed, used when opening an account
    InitialDeposit,
    Deposit,
    Withdrawal,
}

impl AmountRule {
    fn check(&self, amount: Decimal) -> Result<Decimal, InputError> {
        match self {
            AmountRule::InitialDeposit if amount < Decimal::ZERO => {
                Err(InputError::NegativeInitialDeposit)
            }
            AmountRule::Deposit if amount <= Decimal::ZERO => Err(InputError::NonPositiveDeposit),
            AmountRule::Withdrawal if amount <= Decimal::ZERO => {
                Err(InputError::NonPositiveWithdrawal)
            }
            _ => Ok(amount),
        }
    }
}

/// Parse a whole number, surrounding whitespace ignored
pub fn parse_integer(input: &str) -> Result<i32, InputError> {
    input.trim().parse::<i32>().map_err(|_| {
        debug!("Rejected integer input {:?}", input);
        InputError::NotANumber
    })
}

/// Parse an account id: an integer greater than zero
pub fn parse_account_id(input: &str) -> Result<u32, InputError> {
    let value = parse_integer(input)?;
    if value <= 0 {
        return Err(InputError::NonPositiveAccountId);
    }
    Ok(value as u32)
}

/// Parse a decimal in plain or scientific notation
///
/// Values that would have to be rounded to fit a `Decimal` (more than 28
/// fractional digits) count as non-numeric rather than being truncated.
pub fn parse_decimal(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    let parsed = if !NUMBER.is_match(trimmed) {
        None
    } else if trimmed.contains(|c: char| c == 'e' || c == 'E') {
        Decimal::from_scientific(trimmed).ok()
    } else {
        Decimal::from_str_exact(trimmed).ok()
    };

    parsed.ok_or_else(|| {
        debug!("Rejected decimal input {:?}", input);
        InputError::NotANumber
    })
}

/// Parse a decimal and apply the rule for the operation it feeds
pub fn parse_amount(input: &str, rule: AmountRule) -> Result<Decimal, InputError> {
    rule.check(parse_decimal(input)?)
}

/// Accept any name that is not blank; the name is kept as typed
pub fn validate_name(input: &str) -> Result<String, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(input.to_string())
}
