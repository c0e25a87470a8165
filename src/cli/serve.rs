//! Serve command implementation

use colored::Colorize;

use skyquote::error::Result;
use skyquote::server::{self, AppState};

use crate::cli::ServeArgs;
use crate::cli::args::GlobalOptions;

/// Load configuration, build the upstream clients and run the proxy
pub async fn run(opts: &GlobalOptions, args: &ServeArgs) -> Result<()> {
    let mut config = opts.load_config()?;
    config.apply_overrides(&args.overrides());

    let state = AppState::from_config(&config)?;
    let port = config.server.port;

    println!(
        "{} Proxy listening on {}",
        "✓".green(),
        format!("http://localhost:{}", port).cyan()
    );
    println!("  Travel API: {}", config.amadeus_host().dimmed());

    server::serve(state, port).await
}
