use std::process;

use budget_tracker::{cli::run_cli, config::ConfigManager, init};

fn main() {
    let manager = ConfigManager::new();
    let config = match manager.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: could not read {}: {err}", manager.path().display());
            process::exit(1);
        }
    };

    init(config.log_filter.as_deref());

    if let Err(err) = run_cli(&config) {
        tracing::error!(error = %err, "shell terminated");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
