use std::{
    fs,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Config as EditorConfig, Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::{config::Config, utils::paths};

use super::{
    context::{CliError, CliMode, LoopControl, ShellContext},
    output,
};

const SCRIPT_ENV: &str = "BUDGET_TRACKER_CLI_SCRIPT";

/// Runs the shell: script mode reads commands from stdin when
/// `BUDGET_TRACKER_CLI_SCRIPT` is set, otherwise an interactive prompt.
pub fn run_cli(config: &Config) -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    output::set_color_enabled(config.color_output && mode == CliMode::Interactive);

    let mut context = ShellContext::new(mode);
    tracing::info!(?mode, "shell started");

    match context.mode {
        CliMode::Interactive => run_interactive(&mut context, config),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext, config: &Config) -> Result<(), CliError> {
    let editor_config = EditorConfig::builder()
        .max_history_size(config.history_limit)?
        .auto_add_history(false)
        .build();
    let mut editor = Editor::<CommandHelper, DefaultHistory>::with_config(editor_config)?;
    editor.set_helper(Some(CommandHelper::new(ShellContext::command_names())));

    let history = paths::history_file();
    if editor.load_history(&history).is_err() {
        tracing::debug!(path = %history.display(), "no shell history yet");
    }

    output::info("Budget Tracker shell. Type `help` for commands, `demo` for sample data.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                handle_line(context, trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                output::info("Use `exit` or Ctrl-D to leave.");
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(parent) = history.parent() {
        fs::create_dir_all(parent)?;
    }
    if let Err(err) = editor.save_history(&history) {
        tracing::warn!(error = %err, "could not save shell history");
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        handle_line(context, &line);
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Could not parse input: {err}"));
            return;
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return;
    };
    if raw.starts_with('#') {
        return;
    }

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    match context.dispatch(&command, &args) {
        Ok(LoopControl::Continue) => {}
        Ok(LoopControl::Exit) => context.running = false,
        Err(err) => context.report_error(err),
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the first word is a command name.
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
