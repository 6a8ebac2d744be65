// Record store
// Holds every customer and account for the lifetime of the process. Nothing
// here is global: the session owns the store and passes it to each operation.

use log::{debug, info};
use rust_decimal::Decimal;
use thiserror::Error;

pub mod models;

#[cfg(test)]
mod tests;

use models::{Account, AccountId, Customer, CustomerId};

/// Record store errors
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Initial deposit cannot be negative")]
    NegativeInitialDeposit,
}

/// In-memory customers and accounts, kept in creation order
#[derive(Debug, Default)]
pub struct RecordStore {
    customers: Vec<Customer>,
    accounts: Vec<Account>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a customer; its id is the current customer count + 1
    pub fn create_customer(&mut self, name: &str) -> &Customer {
        let id = self.next_customer_id();
        self.customers.push(Customer::new(id, name.to_string()));
        info!("Customer {} created", id);
        &self.customers[self.customers.len() - 1]
    }

    /// Open an account for an existing customer; its id is the current account count + 1
    pub fn create_account(
        &mut self,
        owner: CustomerId,
        initial_deposit: Decimal,
    ) -> Result<&Account, StoreError> {
        if self.find_customer_by_id(owner).is_none() {
            return Err(StoreError::CustomerNotFound(owner));
        }
        if initial_deposit < Decimal::ZERO {
            return Err(StoreError::NegativeInitialDeposit);
        }

        let id = self.next_account_id();
        self.accounts.push(Account::open(id, owner, initial_deposit));
        info!(
            "Account {} opened for customer {} with ${}",
            id, owner, initial_deposit
        );
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Linear scan, first match wins
    pub fn find_account_by_id(&self, id: AccountId) -> Option<&Account> {
        let found = self.accounts.iter().find(|account| account.id == id);
        if found.is_none() {
            debug!("Account {} not found", id);
        }
        found
    }

    pub fn find_account_by_id_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn find_customer_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// Account together with the customer that owns it
    pub fn account_with_owner(&self, id: AccountId) -> Option<(&Account, &Customer)> {
        let account = self.find_account_by_id(id)?;
        let customer = self.find_customer_by_id(account.customer_id)?;
        Some((account, customer))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    fn next_customer_id(&self) -> CustomerId {
        self.customers.len() as CustomerId + 1
    }

    fn next_account_id(&self) -> AccountId {
        self.accounts.len() as AccountId + 1
    }
}
