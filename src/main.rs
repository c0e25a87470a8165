//! SkyQuote CLI - run the flight search proxy and build quotes against it

use clap::Parser;

mod cli;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ProfileCommands};
use skyquote::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `--debug` → debug, `serve` → info, else warn
fn init_logging(cli: &Cli) {
    let default_level = if cli.debug {
        "debug"
    } else if matches!(cli.command, Commands::Serve(_)) {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    log::debug!("Debug logging enabled");
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Serve(args) => cli::serve::run(&opts, &args).await,
        Commands::Search(args) => cli::search::run(&opts, &args).await,
        Commands::Places { keyword, proxy } => cli::places::run(&opts, &keyword, &proxy.url).await,
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::Set { name, phone, logo } => {
                cli::profile::set(&opts, name, phone, logo.as_deref()).await
            }
            ProfileCommands::Show => cli::profile::show(&opts),
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("skyquote version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
