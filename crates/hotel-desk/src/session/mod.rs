//! # Console Session
//!
//! The interactive front end: sign up or log in, then loop over the manager menu
//! until the operator exits or the input ends.
//!
//! [`Session`] is generic over its input and output streams. `main` wires it to the
//! process's stdin/stdout/stderr; tests drive it with a byte slice and collect the
//! output in `Vec<u8>`s.
//!
//! Store faults during a menu operation are reported as `Error: <message>` on the
//! error stream and the menu carries on. Only I/O faults on the session's own
//! streams end a session with a [`SessionError`].

pub mod input;
pub mod menu;

use crate::clients::{CredentialClient, InventoryClient, RosterClient};
use crate::lifecycle::HotelSystem;
use input::TokenReader;
use menu::{MenuChoice, StartChoice, MANAGER_MENU, START_PROMPT};
use std::fmt::Display;
use std::io;
use std::ops::ControlFlow;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The operator chose Exit.
    Exited,
    /// Sign-up or login did not succeed.
    LoginFailed,
    /// The input ended at the manager menu.
    EndOfInput,
}

impl SessionOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            SessionOutcome::Exited | SessionOutcome::EndOfInput => 0,
            SessionOutcome::LoginFailed => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
}

type Step = ControlFlow<SessionOutcome>;

pub struct Session<R, W, E> {
    input: TokenReader<R>,
    out: W,
    err: E,
    credentials: CredentialClient,
    roster: RosterClient,
    inventory: InventoryClient,
    room_count: u32,
}

impl<R, W, E> Session<R, W, E>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    /// Creates a session holding clones of the system's clients.
    pub fn new(system: &HotelSystem, room_count: u32, input: R, out: W, err: E) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            err,
            credentials: system.credential_client.clone(),
            roster: system.roster_client.clone(),
            inventory: system.inventory_client.clone(),
            room_count,
        }
    }

    /// Consumes the session, releasing its clients, and returns the output streams.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    pub async fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        if !self.authenticate().await? {
            return Ok(SessionOutcome::LoginFailed);
        }

        loop {
            self.say(MANAGER_MENU).await?;
            let Some(token) = self.input.next_token().await? else {
                return Ok(SessionOutcome::EndOfInput);
            };

            let step = match MenuChoice::parse(&token) {
                MenuChoice::AddEmployee => self.add_employee().await?,
                MenuChoice::DeleteEmployee => self.delete_employee().await?,
                MenuChoice::FoodStock => self.show_food_stock().await?,
                MenuChoice::RoomCount => {
                    let line = format!("Number of rooms: {}\n", self.room_count);
                    self.say(&line).await?;
                    Step::Continue(())
                }
                MenuChoice::ListEmployees => self.list_employees().await?,
                MenuChoice::Exit => {
                    self.say("Exiting program...\n").await?;
                    Step::Break(SessionOutcome::Exited)
                }
                MenuChoice::Invalid => {
                    self.say("Invalid choice. Please enter a valid option.\n")
                        .await?;
                    Step::Continue(())
                }
            };

            if let Step::Break(outcome) = step {
                info!(?outcome, "Session ended");
                return Ok(outcome);
            }
        }
    }

    /// Runs the optional sign-up and the login; `true` once a manager is signed in.
    async fn authenticate(&mut self) -> Result<bool, SessionError> {
        self.say(START_PROMPT).await?;
        let Some(choice) = self.input.next_token().await? else {
            return Ok(false);
        };

        if StartChoice::parse(&choice) == StartChoice::SignUp && !self.sign_up().await? {
            return Ok(false);
        }
        self.log_in().await
    }

    async fn sign_up(&mut self) -> Result<bool, SessionError> {
        let Some(username) = self.prompt("Enter new username: ").await? else {
            return Ok(false);
        };
        let Some(password) = self.prompt("Enter new password: ").await? else {
            return Ok(false);
        };

        match self.credentials.register(&username, &password).await {
            Ok(()) => {
                self.say("Sign-up successful! Please log in.\n").await?;
                Ok(true)
            }
            Err(e) => {
                self.report(e).await?;
                Ok(false)
            }
        }
    }

    #[instrument(skip(self))]
    async fn log_in(&mut self) -> Result<bool, SessionError> {
        let Some(username) = self.prompt("Enter username: ").await? else {
            return Ok(false);
        };
        let Some(password) = self.prompt("Enter password: ").await? else {
            return Ok(false);
        };

        match self.credentials.verify(&username, &password).await {
            Ok(true) => {
                info!(%username, "Manager signed in");
                self.say("Login successful!\n").await?;
                Ok(true)
            }
            Ok(false) => {
                warn!(%username, "Login rejected");
                self.complain("Login failed. Invalid credentials.\n").await?;
                Ok(false)
            }
            Err(e) => {
                self.report(e).await?;
                Ok(false)
            }
        }
    }

    async fn add_employee(&mut self) -> Result<Step, SessionError> {
        let Some(name) = self.prompt("Enter Employee Name: ").await? else {
            return Ok(Step::Break(SessionOutcome::EndOfInput));
        };
        let Some(id) = self.prompt("Enter Employee ID: ").await? else {
            return Ok(Step::Break(SessionOutcome::EndOfInput));
        };
        let Ok(id) = id.parse::<i64>() else {
            self.say("Invalid employee ID.\n").await?;
            return Ok(Step::Continue(()));
        };
        let Some(role) = self
            .prompt("Enter Employee Role (Chef/Receptionist/Housekeeping): ")
            .await?
        else {
            return Ok(Step::Break(SessionOutcome::EndOfInput));
        };

        match self.roster.add_employee(&name, id, &role).await {
            Ok(()) => self.say("Employee added successfully.\n").await?,
            Err(e) => self.report(e).await?,
        }
        Ok(Step::Continue(()))
    }

    async fn delete_employee(&mut self) -> Result<Step, SessionError> {
        let Some(fragment) = self.prompt("Enter Employee Name to Delete: ").await? else {
            return Ok(Step::Break(SessionOutcome::EndOfInput));
        };

        // Confirmed whether or not a line matched.
        match self.roster.remove_employee(&fragment).await {
            Ok(removed) => {
                info!(%fragment, removed, "Delete employee");
                self.say("Employee deleted successfully.\n").await?;
            }
            Err(e) => self.report(e).await?,
        }
        Ok(Step::Continue(()))
    }

    async fn show_food_stock(&mut self) -> Result<Step, SessionError> {
        match self.inventory.display_stock().await {
            Ok(stock) => {
                self.say("\nFood Stock:\n").await?;
                self.say(&stock).await?;
            }
            Err(e) => self.report(e).await?,
        }
        Ok(Step::Continue(()))
    }

    async fn list_employees(&mut self) -> Result<Step, SessionError> {
        match self.roster.list_employees().await {
            Ok(employees) => {
                let mut listing = String::from("\nAll Employees:\n");
                for employee in &employees {
                    listing.push_str(&employee.to_string());
                    listing.push('\n');
                }
                self.say(&listing).await?;
            }
            Err(e) => self.report(e).await?,
        }
        Ok(Step::Continue(()))
    }

    /// Prints `text` and reads the answer.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        self.say(text).await?;
        Ok(self.input.next_token().await?)
    }

    async fn say(&mut self, text: &str) -> Result<(), SessionError> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn complain(&mut self, text: &str) -> Result<(), SessionError> {
        self.err.write_all(text.as_bytes()).await?;
        self.err.flush().await?;
        Ok(())
    }

    async fn report(&mut self, error: impl Display) -> Result<(), SessionError> {
        warn!(error = %error, "Store operation failed");
        self.complain(&format!("Error: {error}\n")).await
    }
}
