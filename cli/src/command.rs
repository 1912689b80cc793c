use clap::{Parser, Subcommand};
use todo_core::{SyncError, SyncLayer, Transport};

/// One user action against the list.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show every to-do
    List,
    /// Add a to-do
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Flip a to-do between open and completed
    Toggle { id: u64 },
    /// Replace the text of an open to-do
    Edit {
        id: u64,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a to-do
    #[command(alias = "rm")]
    Delete { id: u64 },
}

impl Action {
    /// Apply the action through the sync layer. The view is only touched when
    /// the server accepted the change.
    pub fn apply<T: Transport>(&self, sync: &mut SyncLayer<T>) -> Result<(), SyncError> {
        match self {
            Action::List => Ok(()),
            Action::Add { text } => sync.add(&text.join(" ")).map(drop),
            Action::Toggle { id } => sync.toggle(*id).map(drop),
            Action::Edit { id, text } => sync.edit(*id, &text.join(" ")).map(drop),
            Action::Delete { id } => sync.remove(*id).map(drop),
        }
    }
}

/// A line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    #[command(flatten)]
    Action(Action),
    /// Drop the cached list and fetch it again
    Reload,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
    ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}
