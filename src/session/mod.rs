//! Interactive session loop
//!
//! Presents the numbered menu, collects validated input, calls into the
//! [`Ledger`] and reports the outcome. Ledger errors are shown to the
//! operator and the loop continues; only the Exit choice or a console
//! failure ends the session.
//!
//! # Components
//!
//! - `console` - Operator input and output
//! - `validation` - Input validators used by the prompts
//! - `menu` - Menu choices
//! - `display` - Account rendering

pub mod console;
pub mod display;
pub mod menu;
pub mod validation;

pub use self::console::{Console, LineConsole, TerminalConsole};
pub use self::menu::MenuChoice;

use crate::core::{Ledger, RecordStore};
use crate::types::{AccountDetails, AccountNo, LedgerError};
use self::validation::ValidationError;
use std::io;
use thiserror::Error;

const WELCOME_BANNER: &str = " ---- Welcome to Banking System ---- ";

/// Failure of a single menu action
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operator console failed; the session cannot continue
    #[error("Console error: {0}")]
    Console(#[from] io::Error),

    /// The ledger refused the action; reported and the session continues
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Menu-driven session over a ledger
pub struct Session<S: RecordStore, C: Console> {
    ledger: Ledger<S>,
    console: C,
}

impl<S: RecordStore, C: Console> Session<S, C> {
    pub fn new(ledger: Ledger<S>, console: C) -> Self {
        Session { ledger, console }
    }

    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the menu loop until the operator chooses Exit
    ///
    /// # Errors
    ///
    /// Returns an error only when the console fails, e.g. input is closed.
    pub fn run(&mut self) -> io::Result<()> {
        self.console.show(WELCOME_BANNER)?;
        log::info!("Banking System has started");

        loop {
            self.console.show(&format!("\n{}\n", "*--*".repeat(30)))?;
            self.console.show(&MenuChoice::render_menu())?;
            let input = self.console.read_line("Enter your Choice")?;

            let choice = match MenuChoice::parse(&input) {
                Some(MenuChoice::Exit) => {
                    self.console.show("Exiting Banking System")?;
                    log::info!("User chose to exit Banking System");
                    return Ok(());
                }
                Some(choice) => choice,
                None => {
                    log::debug!("Invalid menu choice {input:?}");
                    self.console.alert("Invalid Choice.")?;
                    continue;
                }
            };

            log::info!("User entered '{}'", choice.label());
            match self.perform(choice) {
                Ok(()) => {}
                Err(SessionError::Ledger(error)) => self.report(&error)?,
                Err(SessionError::Console(error)) => return Err(error),
            }
        }
    }

    fn perform(&mut self, choice: MenuChoice) -> Result<(), SessionError> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::ViewAccount => self.view_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::DeleteAccount => self.delete_account(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create_account(&mut self) -> Result<(), SessionError> {
        let details = AccountDetails {
            name: self.ask("Enter your Full Name", validation::name)?,
            dob: self.ask(
                "Enter your date of Birth [DD/MM/YYYY]",
                validation::date_of_birth,
            )?,
            gender: self.ask("Enter your Gender [M/F]", validation::gender)?,
            email: self.ask("Enter your email address", validation::email)?,
            phone_no: self.ask("Enter your phone Number : +91", validation::phone)?,
        };

        let account = self.ledger.open_account(details)?;
        self.console.show(&format!(
            "Congratulations!! Account created successfully ID : {}",
            account.account_no
        ))?;
        self.console.show(&display::render_account(&account))?;
        Ok(())
    }

    fn view_account(&mut self) -> Result<(), SessionError> {
        let account_no = self.ask_account_id()?;
        let rendered = display::render_account(self.ledger.account(account_no)?);
        self.console.show(&rendered)?;
        Ok(())
    }

    fn deposit(&mut self) -> Result<(), SessionError> {
        let account_no = self.ask_account_id()?;
        // Unknown accounts are reported before asking for an amount
        self.ledger.account(account_no)?;
        let amount = self.ask("Enter the amount of money : ₹", validation::amount)?;

        let account = self.ledger.deposit(account_no, amount)?;
        self.console.show("Money added successfully!!")?;
        self.console.show(&display::render_account(&account))?;
        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), SessionError> {
        let account_no = self.ask_account_id()?;
        self.ledger.account(account_no)?;
        let amount = self.ask("Enter the amount of money : ₹", validation::amount)?;

        let account = self.ledger.withdraw(account_no, amount)?;
        self.console.show("Money withdrawn successfully!!")?;
        self.console.show(&display::render_account(&account))?;
        Ok(())
    }

    fn delete_account(&mut self) -> Result<(), SessionError> {
        let account_no = self.ask_account_id()?;
        self.ledger.close_account(account_no)?;
        self.console.show("Account deleted successfully")?;
        Ok(())
    }

    fn ask_account_id(&mut self) -> io::Result<AccountNo> {
        self.ask("Enter your account ID", validation::account_id)
    }

    /// Prompt until `validate` accepts the input
    fn ask<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> io::Result<T> {
        loop {
            let input = self.console.read_line(prompt)?;
            match validate(&input) {
                Ok(value) => return Ok(value),
                Err(error) => self.console.alert(&error.to_string())?,
            }
        }
    }

    fn report(&mut self, error: &LedgerError) -> io::Result<()> {
        match error {
            LedgerError::InsufficientFunds { .. } => self.console.alert("Insufficient Balance"),
            LedgerError::AccountNotFound { .. } => self.console.alert(&error.to_string()),
            _ => self.console.alert(&format!("An error occurred: {error}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryStore;
    use std::io::Cursor;

    type TestSession = Session<MemoryStore, LineConsole<Cursor<String>, Vec<u8>>>;

    fn session(input: &str) -> TestSession {
        let ledger = Ledger::open(MemoryStore::new()).unwrap();
        Session::new(ledger, LineConsole::new(Cursor::new(input.to_string()), Vec::new()))
    }

    fn output(session: TestSession) -> String {
        String::from_utf8(session.into_console().into_output()).unwrap()
    }

    const CREATE: &str = "1\nAsha Rao\n12/04/1990\nF\nasha@example.com\n9876543210\n";

    #[test]
    fn test_exit_immediately() {
        let mut session = session("6\n");

        session.run().unwrap();

        let output = output(session);
        assert!(output.contains("Welcome to Banking System"));
        assert!(output.contains("1. Create a Bank Account"));
        assert!(output.ends_with("Exiting Banking System\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let mut session = session("9\nhello\n6\n");

        session.run().unwrap();

        let output = output(session);
        assert_eq!(output.matches("Invalid Choice.").count(), 2);
        assert_eq!(output.matches("6. Exit App").count(), 3);
    }

    #[test]
    fn test_create_account() {
        let mut session = session(&format!("{CREATE}6\n"));

        session.run().unwrap();

        let accounts = session.ledger().accounts().to_vec();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_no, 1001);
        assert_eq!(accounts[0].email, "asha@example.com");
        let output = output(session);
        assert!(output.contains("Congratulations!! Account created successfully ID : 1001"));
        assert!(output.contains("Date of Birth : 12/04/1990"));
    }

    #[test]
    fn test_create_account_reprompts_invalid_fields() {
        let input = "1\n \nAsha Rao\n1990-04-12\n12/04/1990\nX\nF\nasha\nasha@example.com\n0123\n9876543210\n6\n";
        let mut session = session(input);

        session.run().unwrap();

        assert_eq!(session.ledger().accounts().len(), 1);
        let output = output(session);
        assert!(output.contains("Name cannot be empty"));
        assert!(output.contains("Invalid date format. Please use [DD/MM/YYYY]"));
        assert!(output.contains("Enter proper gender [M/F]"));
        assert!(output.contains("Enter valid email address."));
        assert!(output.contains("Incorrect phone number format. Try again."));
    }

    #[test]
    fn test_deposit_and_insufficient_withdrawal() {
        let input = format!("{CREATE}3\n1001\n500\n4\n1001\n600\n6\n");
        let mut session = session(&input);

        session.run().unwrap();

        assert_eq!(session.ledger().account(1001).unwrap().balance, 500);
        let output = output(session);
        assert!(output.contains("Money added successfully!!"));
        assert!(output.contains("Insufficient Balance"));
        assert!(!output.contains("Money withdrawn successfully!!"));
    }

    #[test]
    fn test_deposit_reprompts_invalid_amount() {
        let input = format!("{CREATE}3\n1001\nabc\n0\n-3\n250\n6\n");
        let mut session = session(&input);

        session.run().unwrap();

        assert_eq!(session.ledger().account(1001).unwrap().balance, 250);
        let output = output(session);
        assert!(output.contains("Invalid input. Please enter digits only"));
        assert_eq!(
            output
                .matches("Entered money value must be greater than zero")
                .count(),
            2
        );
    }

    #[test]
    fn test_unknown_account_reported_before_amount() {
        // No amount line: the session must not ask for one
        let mut session = session("3\n4242\n2\n4242\n5\n4242\n6\n");

        session.run().unwrap();

        let output = output(session);
        assert_eq!(output.matches("Account ID : 4242 not found").count(), 3);
        assert!(!output.contains("Enter the amount of money"));
    }

    #[test]
    fn test_invalid_account_id_reprompts() {
        let mut session = session("2\nabc\n-1\n0\n1001\n6\n");

        session.run().unwrap();

        let output = output(session);
        assert!(output.contains("Account ID : abc must be an integer"));
        assert!(output.contains("ID cannot be negative"));
        assert!(output.contains("ID must be greater than zero"));
        assert!(output.contains("Account ID : 1001 not found"));
    }

    #[test]
    fn test_delete_account() {
        let input = format!("{CREATE}5\n1001\n2\n1001\n6\n");
        let mut session = session(&input);

        session.run().unwrap();

        assert!(session.ledger().accounts().is_empty());
        let output = output(session);
        assert!(output.contains("Account deleted successfully"));
        assert!(output.contains("Account ID : 1001 not found"));
    }

    #[test]
    fn test_closed_input_ends_session_with_error() {
        let mut session = session("1\nAsha Rao\n");

        let error = session.run().unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
        assert!(session.ledger().accounts().is_empty());
    }
}
