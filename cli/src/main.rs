//! Terminal front-end for the to-do server.
//!
//! Every invocation loads the full list, applies one action, and prints the
//! resulting view. `todo shell` keeps a single view across many
//! actions. Failures go to the log on stderr; the view simply stays as it was.

mod command;
mod render;
mod shell;
#[cfg(test)]
mod testing;

use clap::{Parser, Subcommand};
use todo_core::{SyncLayer, TodoClient, UreqTransport};

use crate::command::Action;

#[derive(Parser, Debug)]
#[command(name = "todo", about = "Manage the to-do list on a todo-server")]
struct Cli {
    /// Base URL of the server
    #[arg(long, env = "TODO_SERVER", default_value = "http://localhost:5000")]
    server: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Action(Action),
    /// Interactive session
    Shell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let client = TodoClient::new(&cli.server);
    let mut sync = SyncLayer::new(client, UreqTransport::new());
    tracing::debug!(server = sync.client().base_url(), "connecting");

    match cli.command.unwrap_or(Command::Action(Action::List)) {
        Command::Shell => {
            let stdin = std::io::stdin();
            shell::run(&mut sync, stdin.lock(), std::io::stdout())?;
        }
        Command::Action(action) => print!("{}", shell::run_once(&mut sync, &action)),
    }
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("todo=debug,todo_core=trace")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
