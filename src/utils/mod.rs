pub mod build_info;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budget_tracker=info";

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` is honoured first; `extra` directives (from config) are layered on top.
pub fn init_tracing(extra: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let directives = extra
            .into_iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|directive| !directive.is_empty());
        for directive in directives {
            match directive.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(err) => eprintln!("ignoring log directive `{directive}`: {err}"),
            }
        }

        // A subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
