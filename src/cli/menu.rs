use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};
use thiserror::Error;

use crate::account::{self, describe_account, format_amount, TransactionError};
use crate::input::{validation, AmountRule, Console};
use crate::store::models::{Account, AccountId};
use crate::store::RecordStore;
use rust_decimal::Decimal;

pub const WELCOME: &str = "=== Welcome to the Simple Banking Application ===";
pub const GOODBYE: &str = "Thank you for using the Simple Banking Application. Goodbye!";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

const MENU_LINES: [&str; 6] = [
    "Please choose an option:",
    "1. Create a New Account",
    "2. Deposit Money",
    "3. Withdraw Money",
    "4. Check Balance",
    "5. Exit",
];

const NO_ACCOUNTS: &str = "No accounts found. Please create an account first.";
const ACCOUNT_NOT_FOUND: &str = "Account not found. Please check the Account ID.";

/// Menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

/// Rejected menu input
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("Invalid input! Please enter a number between 1 and 5.")]
    NotANumber,

    #[error("Invalid choice! Please select a valid option (1-5).")]
    UnknownChoice(i32),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, MenuError> {
        let choice = validation::parse_integer(input).map_err(|_| MenuError::NotANumber)?;
        match choice {
            1 => Ok(MenuChoice::CreateAccount),
            2 => Ok(MenuChoice::Deposit),
            3 => Ok(MenuChoice::Withdraw),
            4 => Ok(MenuChoice::CheckBalance),
            5 => Ok(MenuChoice::Exit),
            other => Err(MenuError::UnknownChoice(other)),
        }
    }
}

/// Menu loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
}

type BalanceChange = fn(&mut Account, Decimal) -> Result<Decimal, TransactionError>;

/// Outcome of asking for an account id
enum Selection {
    Account(AccountId),
    Abort,
    Closed,
}

/// Interactive banking session
///
/// Owns the record store and the console for as long as the menu runs.
/// Leaving the menu, or reaching the end of input, ends the session.
pub struct Session<R, W> {
    store: RecordStore,
    console: Console<R, W>,
    currency_symbol: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, currency_symbol: &str) -> Self {
        Self {
            store: RecordStore::new(),
            console: Console::new(input, output),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.console.println(WELCOME)?;

        let mut state = SessionState::Running;
        while state == SessionState::Running {
            state = self.step()?;
        }

        info!(
            "Session ended with {} customers and {} accounts",
            self.store.customers().len(),
            self.store.accounts().len()
        );
        Ok(())
    }

    /// Show the menu once and handle one choice
    pub fn step(&mut self) -> Result<SessionState> {
        self.display_menu()?;

        let Some(line) = self.console.read_line(CHOICE_PROMPT)? else {
            debug!("Input closed at the main menu");
            return Ok(SessionState::Exited);
        };

        match MenuChoice::parse(&line) {
            Ok(choice) => self.dispatch(choice),
            Err(err) => {
                debug!("Menu input rejected: {:?}", err);
                self.console.println(&err.to_string())?;
                Ok(SessionState::Running)
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<SessionState> {
        debug!("Menu choice {:?}", choice);
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::CheckBalance => self.check_balance(),
            MenuChoice::Exit => {
                self.console.println(GOODBYE)?;
                Ok(SessionState::Exited)
            }
        }
    }

    /// Give back the record store and the console streams
    pub fn into_inner(self) -> (RecordStore, R, W) {
        let (input, output) = self.console.into_inner();
        (self.store, input, output)
    }

    fn display_menu(&mut self) -> Result<()> {
        self.console.println("")?;
        for line in MENU_LINES {
            self.console.println(line)?;
        }
        Ok(())
    }

    fn create_account(&mut self) -> Result<SessionState> {
        self.console.println("\n--- Create a New Account ---")?;

        let Some(name) = self.console.read_name("Enter Customer Name: ")? else {
            return Ok(SessionState::Exited);
        };
        let customer = self.store.create_customer(&name).clone();
        self.console
            .println(&format!("Customer created successfully! {}", customer))?;

        let prompt = format!("Enter Initial Deposit Amount: {}", self.currency_symbol);
        let Some(initial_deposit) = self
            .console
            .read_amount(&prompt, AmountRule::InitialDeposit)?
        else {
            return Ok(SessionState::Exited);
        };

        let message = match self.store.create_account(customer.id, initial_deposit) {
            Ok(account) => format!(
                "Bank account created successfully! {}",
                describe_account(account, &customer, &self.currency_symbol)
            ),
            Err(err) => err.to_string(),
        };
        self.console.println(&message)?;
        Ok(SessionState::Running)
    }

    fn deposit(&mut self) -> Result<SessionState> {
        self.console.println("\n--- Deposit Money ---")?;
        self.transact(
            "Enter Deposit Amount: ",
            AmountRule::Deposit,
            account::deposit,
            "Deposited",
        )
    }

    fn withdraw(&mut self) -> Result<SessionState> {
        self.console.println("\n--- Withdraw Money ---")?;
        self.transact(
            "Enter Withdrawal Amount: ",
            AmountRule::Withdrawal,
            account::withdraw,
            "Withdrew",
        )
    }

    fn check_balance(&mut self) -> Result<SessionState> {
        self.console.println("\n--- Check Balance ---")?;

        let id = match self.select_account()? {
            Selection::Account(id) => id,
            Selection::Abort => return Ok(SessionState::Running),
            Selection::Closed => return Ok(SessionState::Exited),
        };

        if let Some(account) = self.store.find_account_by_id(id) {
            let message = format!(
                "Current Balance: {}{}",
                self.currency_symbol,
                format_amount(account::get_balance(account))
            );
            self.console.println(&message)?;
        }
        Ok(SessionState::Running)
    }

    /// Shared deposit/withdraw flow: pick an account, read an amount, apply it
    /// and show the account afterwards whether or not the change went through.
    fn transact(
        &mut self,
        prompt: &str,
        rule: AmountRule,
        apply: BalanceChange,
        verb: &str,
    ) -> Result<SessionState> {
        let id = match self.select_account()? {
            Selection::Account(id) => id,
            Selection::Abort => return Ok(SessionState::Running),
            Selection::Closed => return Ok(SessionState::Exited),
        };

        let prompt = format!("{}{}", prompt, self.currency_symbol);
        let Some(amount) = self.console.read_amount(&prompt, rule)? else {
            return Ok(SessionState::Exited);
        };

        let outcome = match self.store.find_account_by_id_mut(id) {
            Some(account) => apply(account, amount),
            None => return Ok(SessionState::Running),
        };
        let message = match outcome {
            Ok(_) => format!(
                "{} {}{} successfully.",
                verb,
                self.currency_symbol,
                format_amount(amount)
            ),
            Err(err) => err.to_string(),
        };
        self.console.println(&message)?;

        if let Some((account, owner)) = self.store.account_with_owner(id) {
            let details = describe_account(account, owner, &self.currency_symbol);
            self.console
                .println(&format!("Updated Account Details: {}", details))?;
        }
        Ok(SessionState::Running)
    }

    fn select_account(&mut self) -> Result<Selection> {
        if !self.store.has_accounts() {
            self.console.println(NO_ACCOUNTS)?;
            return Ok(Selection::Abort);
        }

        let Some(id) = self.console.read_account_id("Enter Account ID: ")? else {
            return Ok(Selection::Closed);
        };

        if self.store.find_account_by_id(id).is_none() {
            self.console.println(ACCOUNT_NOT_FOUND)?;
            return Ok(Selection::Abort);
        }
        Ok(Selection::Account(id))
    }
}
