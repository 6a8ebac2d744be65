use log::{debug, info, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::store::models::{Account, Customer, Transaction, TransactionType};

/// Fractional digits shown for every amount
pub const DISPLAY_PRECISION: u32 = 2;

/// Transaction processing errors
#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    /// Zero or negative deposit
    #[error("Deposit amount must be positive.")]
    InvalidDepositAmount,

    /// Zero or negative withdrawal
    #[error("Withdrawal amount must be positive.")]
    InvalidWithdrawalAmount,

    /// Withdrawal larger than the balance
    #[error("Insufficient balance. Withdrawal failed.")]
    InsufficientFunds,

    /// Balance would leave the representable range
    #[error("Amount is too large. Transaction failed.")]
    Overflow,
}

/// Apply a deposit or withdrawal to an account
///
/// On error the account, balance and journal included, is left untouched.
pub fn process_transaction(
    account: &mut Account,
    transaction_type: TransactionType,
    amount: Decimal,
) -> Result<&Transaction, TransactionError> {
    debug!(
        "Processing {} of {} on account {}",
        transaction_type.as_str(),
        amount,
        account.id
    );

    let new_balance = match transaction_type {
        TransactionType::Deposit | TransactionType::OpeningDeposit => {
            if amount <= Decimal::ZERO {
                return Err(reject(account, TransactionError::InvalidDepositAmount));
            }
            account
                .balance
                .checked_add(amount)
                .ok_or_else(|| reject(account, TransactionError::Overflow))?
        }
        TransactionType::Withdrawal => {
            if amount <= Decimal::ZERO {
                return Err(reject(account, TransactionError::InvalidWithdrawalAmount));
            }
            if amount > account.balance {
                return Err(reject(account, TransactionError::InsufficientFunds));
            }
            account.balance - amount
        }
    };

    account.balance = new_balance;
    account
        .transactions
        .push(Transaction::new(account.id, transaction_type, amount, new_balance));

    info!(
        "{} of {} applied to account {}, balance now {}",
        transaction_type.as_str(),
        amount,
        account.id,
        new_balance
    );

    let index = account.transactions.len() - 1;
    Ok(&account.transactions[index])
}

/// Add `amount` to the balance
pub fn deposit(account: &mut Account, amount: Decimal) -> Result<Decimal, TransactionError> {
    process_transaction(account, TransactionType::Deposit, amount)?;
    Ok(account.balance)
}

/// Take `amount` from the balance if it is covered
pub fn withdraw(account: &mut Account, amount: Decimal) -> Result<Decimal, TransactionError> {
    process_transaction(account, TransactionType::Withdrawal, amount)?;
    Ok(account.balance)
}

pub fn get_balance(account: &Account) -> Decimal {
    account.balance
}

/// Render an amount with exactly two fractional digits, halves rounded away from zero
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", DISPLAY_PRECISION as usize, rounded)
}

/// One-line account summary used after every change
pub fn describe_account(account: &Account, owner: &Customer, currency_symbol: &str) -> String {
    format!(
        "Account ID: {}, Customer: [{}], Balance: {}{}",
        account.id,
        owner,
        currency_symbol,
        format_amount(account.balance)
    )
}

fn reject(account: &Account, error: TransactionError) -> TransactionError {
    warn!("Transaction on account {} rejected: {}", account.id, error);
    error
}
