//! Parsing raw input lines into commands.

use crate::error::{CommandError, CommandResult};
use std::fmt;

/// A command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Exit,
    Unknown,
}

impl CommandKind {
    fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "delete" => Self::Delete,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }

    /// Arguments the command needs, as shown in error messages.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Add => "name and phone",
            Self::Change => "name, old phone and new phone",
            Self::Phone | Self::ShowBirthday | Self::Delete => "name",
            Self::AddBirthday => "name and birthday (DD.MM.YYYY)",
            _ => "",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Delete => "delete",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Unknown => "unknown",
        };
        f.write_str(word)
    }
}

/// A parsed input line: the command and its whitespace-separated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub kind: CommandKind,
    pub args: Vec<&'a str>,
}

impl<'a> Command<'a> {
    /// Split `line` on whitespace. The first word is matched case-insensitively;
    /// arguments keep their case. Returns `None` for a blank line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let word = parts.next()?.to_lowercase();
        Some(Self {
            kind: CommandKind::from_word(&word),
            args: parts.collect(),
        })
    }

    /// The first `N` arguments. Extra arguments are ignored.
    pub fn require<const N: usize>(&self) -> CommandResult<[&'a str; N]> {
        if self.args.len() < N {
            return Err(CommandError::MissingArguments {
                usage: self.kind.usage(),
            });
        }
        let mut out = [""; N];
        out.copy_from_slice(&self.args[..N]);
        Ok(out)
    }
}
