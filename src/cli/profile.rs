//! Company profile commands

use std::path::Path;

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use serde::Serialize;
use tabled::Tabled;

use skyquote::error::Result;
use skyquote::frontend::{CompanyProfile, LogoUpload, ProfileEditor};
use skyquote::output::{json, table};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

const NO_PROFILE: &str = "No company profile saved.";

/// Display format for profile fields in table view
#[derive(Tabled, Serialize)]
struct FieldDisplay {
    #[tabled(rename = "FIELD")]
    field: &'static str,

    #[tabled(rename = "VALUE")]
    value: String,
}

/// Short description of a stored `data:` logo
fn describe_logo(logo: Option<&str>) -> String {
    match logo {
        None => "not set".to_string(),
        Some(url) => {
            let media_type = url
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("unknown");
            format!("{} ({} chars)", media_type, url.len())
        }
    }
}

fn prompt(label: &str, current: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(label);
    if let Some(current) = current {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

/// Run `profile set`, prompting for any missing name or phone
pub async fn set(
    opts: &GlobalOptions,
    name: Option<String>,
    phone: Option<String>,
    logo: Option<&Path>,
) -> Result<()> {
    let mut editor = ProfileEditor::new(opts.open_store()?);
    let existing = editor.load()?;

    let name = match name {
        Some(name) => name,
        None => prompt("Company name", existing.as_ref().map(|p| p.name.as_str()))?,
    };
    let phone = match phone {
        Some(phone) => phone,
        None => prompt("Phone", existing.as_ref().map(|p| p.phone.as_str()))?,
    };
    let upload = match logo {
        Some(path) => Some(LogoUpload::read(path).await?),
        None => None,
    };

    let saved = editor.save(&name, &phone, upload)?;

    println!("{} Profile saved successfully!", "✓".green());
    print_profile(opts.format, &saved)
}

/// Run `profile show`
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let editor = ProfileEditor::new(opts.open_store()?);

    match editor.load()? {
        Some(profile) => print_profile(opts.format, &profile),
        None => {
            if opts.format == OutputFormat::Json {
                println!("{}", json::format_json(&Option::<CompanyProfile>::None)?);
            } else {
                println!("{}", NO_PROFILE);
                println!("  → Run '{}' to create one", "skyquote profile set".cyan());
            }
            Ok(())
        }
    }
}

fn print_profile(format: OutputFormat, profile: &CompanyProfile) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            println!("{}", profile.name.bold());
            println!("{}", profile.phone);
            println!("Logo: {}", describe_logo(profile.logo.as_deref()).dimmed());
        }
        OutputFormat::Table => {
            let rows = [
                FieldDisplay {
                    field: "Name",
                    value: profile.name.clone(),
                },
                FieldDisplay {
                    field: "Phone",
                    value: profile.phone.clone(),
                },
                FieldDisplay {
                    field: "Logo",
                    value: describe_logo(profile.logo.as_deref()),
                },
            ];
            println!("{}", table::format_table(&rows, NO_PROFILE));
        }
        OutputFormat::Json => println!("{}", json::format_json(profile)?),
    }
    Ok(())
}
