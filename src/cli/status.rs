//! Status command implementation

use colored::Colorize;

use skyquote::config::Config;
use skyquote::error::Result;
use skyquote::frontend::CompanyProfile;

use crate::cli::args::GlobalOptions;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "SkyQuote Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let exists = config_path.exists();
    println!(
        "Config file: {} {}",
        config_path.display().to_string().cyan(),
        if exists { "".normal() } else { "(not found, using defaults)".dimmed() }
    );

    match opts.load_config() {
        Ok(config) => print_config(&config),
        Err(e) => {
            println!("{} Configuration could not be read: {}", "✗".red(), e);
        }
    }

    println!();
    let data_dir = opts.data_dir()?;
    println!("Local storage: {}", data_dir.display().to_string().cyan());
    match opts.open_store().and_then(|store| CompanyProfile::load(&store)) {
        Ok(Some(profile)) => println!("{} Company profile: {}", "✓".green(), profile.name),
        Ok(None) => {
            println!("{} No company profile saved", "○".dimmed());
            println!("  → Run 'skyquote profile set' to add one");
        }
        Err(e) => println!("{} Company profile unreadable: {}", "⚠".yellow(), e),
    }

    println!();
    Ok(())
}

fn print_config(config: &Config) {
    if config.client_credentials().is_ok() {
        println!("{} Travel API credentials configured", "✓".green());
    } else {
        println!("{} Travel API credentials not configured", "✗".red());
        println!("  → Set AMADEUS_CLIENT_ID and AMADEUS_CLIENT_SECRET");
    }

    if config.logo.api_key.is_some() {
        println!("{} Logo API key configured", "✓".green());
    } else {
        println!(
            "{} Logo API key not configured (airline logos disabled)",
            "○".dimmed()
        );
    }

    println!("{} Travel API host: {}", "○".dimmed(), config.amadeus_host().cyan());
    println!("{} Proxy port: {}", "○".dimmed(), config.server.port);
}
