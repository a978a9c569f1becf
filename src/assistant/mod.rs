//! The interactive assistant around the address book.
//!
//! `Assistant::handle_line` turns one line of user input into one reply.
//! Failed commands become `Error: ...` replies and never end the session.
//! `run_repl` binds an assistant to an input/output pair.

pub mod command;
pub mod repl;

pub use command::{Command, CommandKind};
pub use repl::run_repl;

use crate::book::{AddressBook, Clock, SystemClock};
use crate::config::Config;
use crate::error::CommandResult;
use crate::matching::NameMatcher;
use crate::models::Record;
use std::sync::Arc;
use tracing::{debug, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

const CONTACT_NOT_FOUND: &str = "Contact not found.";

const HELP: &str = "Commands:
  hello
  add <name> <phone>
  change <name> <old phone> <new phone>
  phone <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays
  delete <name>
  close | exit";

/// What the session should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text (if any) and wait for the next command.
    Continue(String),

    /// Print the text and end the session.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Owns the address book for one session and answers commands.
pub struct Assistant {
    book: AddressBook,
    config: Config,
    clock: Arc<dyn Clock>,
    matcher: NameMatcher,
}

impl Assistant {
    /// Create an assistant with an empty book and the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            clock,
            matcher: NameMatcher::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(command) = Command::parse(line) else {
            return Reply::Continue(String::new());
        };

        debug!(command = %command.kind, args = command.args.len(), "dispatching command");

        let result = match command.kind {
            CommandKind::Exit => return Reply::Exit(FAREWELL.to_string()),
            CommandKind::Hello => Ok("How can I help you?".to_string()),
            CommandKind::Help => Ok(HELP.to_string()),
            CommandKind::Add => self.add_contact(&command),
            CommandKind::Change => self.change_phone(&command),
            CommandKind::Phone => self.show_phones(&command),
            CommandKind::All => Ok(self.show_all()),
            CommandKind::AddBirthday => self.add_birthday(&command),
            CommandKind::ShowBirthday => self.show_birthday(&command),
            CommandKind::Birthdays => Ok(self.birthdays()),
            CommandKind::Delete => self.delete_contact(&command),
            CommandKind::Unknown => Ok("Invalid command.".to_string()),
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(e) => {
                warn!(command = %command.kind, error = %e, "command rejected");
                Reply::Continue(format!("Error: {}", e))
            }
        }
    }

    fn add_contact(&mut self, command: &Command<'_>) -> CommandResult<String> {
        let [name, phone] = command.require::<2>()?;

        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::new(name);
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn change_phone(&mut self, command: &Command<'_>) -> CommandResult<String> {
        let [name, old, new] = command.require::<3>()?;

        let Some(record) = self.book.find_mut(name) else {
            return Ok(self.not_found(name));
        };

        if record.edit_phone(old, new)? {
            Ok("Phone updated.".to_string())
        } else {
            Ok("Phone not found.".to_string())
        }
    }

    fn show_phones(&self, command: &Command<'_>) -> CommandResult<String> {
        let [name] = command.require::<1>()?;

        Ok(match self.book.find(name) {
            Some(record) => record.phones_display(),
            None => self.not_found(name),
        })
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts saved.".to_string();
        }

        self.book
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, command: &Command<'_>) -> CommandResult<String> {
        let [name, birthday] = command.require::<2>()?;

        let Some(record) = self.book.find_mut(name) else {
            return Ok(self.not_found(name));
        };

        record.add_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, command: &Command<'_>) -> CommandResult<String> {
        let [name] = command.require::<1>()?;

        Ok(match self.book.find(name) {
            Some(record) => match record.birthday() {
                Some(birthday) => birthday.to_string(),
                None => "Birthday not set.".to_string(),
            },
            None => self.not_found(name),
        })
    }

    fn birthdays(&self) -> String {
        let upcoming = self
            .book
            .upcoming_birthdays(self.clock.today(), &self.config.birthday_policy);

        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, command: &Command<'_>) -> CommandResult<String> {
        let [name] = command.require::<1>()?;

        Ok(match self.book.delete(name) {
            Some(_) => "Contact deleted.".to_string(),
            None => self.not_found(name),
        })
    }

    /// "Contact not found." plus similar stored names, when there are any.
    fn not_found(&self, name: &str) -> String {
        let suggestions = self.matcher.suggest(
            name,
            self.book.names(),
            self.config.max_name_suggestions,
        );

        if suggestions.is_empty() {
            return CONTACT_NOT_FOUND.to_string();
        }

        let names: Vec<&str> = suggestions.iter().map(|n| n.as_str()).collect();
        format!("{} Did you mean: {}?", CONTACT_NOT_FOUND, names.join(", "))
    }
}
