use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Customer identifier, dense and 1-based
pub type CustomerId = u32;

/// Account identifier, dense and 1-based, independent of customer ids
pub type AccountId = u32;

/// Customer model
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: String) -> Self {
        Self { id, name }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer ID: {}, Name: {}", self.id, self.name)
    }
}

/// Transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    OpeningDeposit,
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::OpeningDeposit => "opening_deposit",
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }
}

/// Journal entry for an applied balance change
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: String,
    pub account_id: AccountId,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        account_id: AccountId,
        transaction_type: TransactionType,
        amount: Decimal,
        balance_after: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            account_id,
            transaction_type,
            amount,
            balance_after,
            timestamp: Utc::now(),
        }
    }
}

/// Account model
///
/// The owner is held by id; the customer itself lives in the record store.
/// `balance` is only changed through [`crate::account`] operations, which keep
/// it non-negative and append to the journal.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub customer_id: CustomerId,
    pub(crate) balance: Decimal,
    pub(crate) transactions: Vec<Transaction>,
}

impl Account {
    pub(crate) fn open(id: AccountId, customer_id: CustomerId, initial_deposit: Decimal) -> Self {
        Self {
            id,
            customer_id,
            balance: initial_deposit,
            transactions: vec![Transaction::new(
                id,
                TransactionType::OpeningDeposit,
                initial_deposit,
                initial_deposit,
            )],
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Applied operations, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
