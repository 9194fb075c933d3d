use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    errors::{ConfigError, LedgerError},
    ledger::Ledger,
};

use super::{handlers, output};

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single shell command; the shell reports it and keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("exit requested")]
    ExitRequested,
}

/// Failure that ends the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CommandResult = Result<(), CommandError>;

pub(crate) type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub(crate) struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: CommandHandler,
}

pub(crate) const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "income",
        usage: "income <amount>",
        summary: "Set the monthly income",
        handler: handlers::cmd_income,
    },
    CommandSpec {
        name: "expense",
        usage: "expense <category> [<YYYY-MM-DD>] <amount>",
        summary: "Record an expense (date defaults to today)",
        handler: handlers::cmd_expense,
    },
    CommandSpec {
        name: "limit",
        usage: "limit <category> <amount|none>",
        summary: "Set or clear a category limit",
        handler: handlers::cmd_limit,
    },
    CommandSpec {
        name: "summary",
        usage: "summary",
        summary: "Show income, expenses and per-category limits",
        handler: handlers::cmd_summary,
    },
    CommandSpec {
        name: "expenses",
        usage: "expenses",
        summary: "List every expense, newest first",
        handler: handlers::cmd_expenses,
    },
    CommandSpec {
        name: "left",
        usage: "left",
        summary: "Show what is left to budget",
        handler: handlers::cmd_left,
    },
    CommandSpec {
        name: "month",
        usage: "month <YYYY-MM>",
        summary: "Per-category totals for one month",
        handler: handlers::cmd_month,
    },
    CommandSpec {
        name: "categories",
        usage: "categories",
        summary: "List known categories",
        handler: handlers::cmd_categories,
    },
    CommandSpec {
        name: "demo",
        usage: "demo",
        summary: "Replace the ledger with sample November data",
        handler: handlers::cmd_demo,
    },
    CommandSpec {
        name: "reset",
        usage: "reset",
        summary: "Clear income, expenses and limits",
        handler: handlers::cmd_reset,
    },
    CommandSpec {
        name: "version",
        usage: "version",
        summary: "Show build information",
        handler: handlers::cmd_version,
    },
    CommandSpec {
        name: "help",
        usage: "help [command]",
        summary: "Show available commands",
        handler: handlers::cmd_help,
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
        handler: handlers::cmd_exit,
    },
];

pub(crate) fn command_spec(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// State of one shell session: the in-memory ledger being edited.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) ledger: Ledger,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self {
            mode,
            ledger: Ledger::new(),
            running: true,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|spec| spec.name).collect()
    }

    pub(crate) fn prompt(&self) -> String {
        "budget> ".to_string()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(spec) = command_spec(command) else {
            return Err(CommandError::UnknownCommand(command.to_string()));
        };
        tracing::debug!(command, ?args, "dispatching command");
        match (spec.handler)(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::UnknownCommand(input) => {
                output::error(format!("Unknown command `{input}`."));
                self.suggest_command(&input);
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(err) => output::error(err),
        }
    }

    fn suggest_command(&self, input: &str) {
        let best = COMMANDS
            .iter()
            .map(|spec| (levenshtein(spec.name, input), spec.name))
            .min_by_key(|(distance, _)| *distance);

        match best {
            Some((distance, name)) if distance <= MAX_SUGGESTION_DISTANCE => {
                output::hint(format!("Did you mean `{name}`?"));
            }
            _ => output::hint("Type `help` to list commands."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_is_registered_once() {
        let mut names = ShellContext::command_names();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut context = ShellContext::new(CliMode::Script);
        let err = context.dispatch("incme", &["5"]).unwrap_err();
        assert!(matches!(err, CommandError::UnknownCommand(name) if name == "incme"));
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut context = ShellContext::new(CliMode::Script);
        assert_eq!(context.dispatch("exit", &[]).unwrap(), LoopControl::Exit);
    }
}
