use anyhow::{Context, Result};
use clap::Subcommand;

use crate::cli::output::get_formatter;
use crate::models::{Config, OutputFormat, Rva};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Initialize configuration file with defaults")]
    Init {
        #[arg(long, short = 'f', help = "Force overwrite existing config")]
        force: bool,
    },
    #[command(about = "Show current configuration")]
    Show,
    #[command(about = "Show configuration file path")]
    Path,
    #[command(about = "Add a hook RVA (hex or decimal)")]
    AddRva {
        #[arg(value_name = "RVA")]
        rva: String,
    },
    #[command(about = "Remove a hook RVA")]
    RemoveRva {
        #[arg(value_name = "RVA")]
        rva: String,
    },
    #[command(about = "Switch between capture and dump mode")]
    Mode {
        #[arg(value_name = "MODE", help = "Either 'capture' or 'dump'")]
        mode: String,
    },
}

pub async fn handle_config(cmd: ConfigCommand, format: OutputFormat, _verbose: bool) -> Result<()> {
    let formatter = get_formatter(format);

    match cmd {
        ConfigCommand::Init { force } => handle_init(force, formatter.as_ref()),
        ConfigCommand::Show => handle_show(format),
        ConfigCommand::Path => handle_path(),
        ConfigCommand::AddRva { rva } => handle_add_rva(&rva, formatter.as_ref()),
        ConfigCommand::RemoveRva { rva } => handle_remove_rva(&rva, formatter.as_ref()),
        ConfigCommand::Mode { mode } => handle_mode(&mode, formatter.as_ref()),
    }
}

fn handle_init(force: bool, formatter: &dyn crate::cli::output::Formatter) -> Result<()> {
    let config_path = Config::config_path()
        .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default()
        .save()
        .context("failed to create config")?;
    println!(
        "{}",
        formatter.format_message(&format!("Created config at: {}", config_path.display()))
    );

    Ok(())
}

fn handle_show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Some(path) = Config::config_path()
        && path.exists()
    {
        println!("# Config: {}", path.display());
        println!();
    }

    print!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}

fn handle_path() -> Result<()> {
    let path = Config::config_path()
        .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

    if path.exists() {
        println!("Config (active): {}", path.display());
    } else {
        println!("Config (would be): {}", path.display());
    }

    Ok(())
}

fn handle_add_rva(value: &str, formatter: &dyn crate::cli::output::Formatter) -> Result<()> {
    let rva: Rva = value.parse()?;
    let mut config = Config::load()?;

    if config.hook.rvas.contains(&rva) {
        println!(
            "{}",
            formatter.format_message(&format!("RVA {} is already configured", rva))
        );
        return Ok(());
    }

    config.hook.rvas.push(rva);
    config.save().context("failed to save config")?;

    println!(
        "{}",
        formatter.format_message(&format!(
            "Added {} ({} RVAs saved)",
            rva,
            config.hook.rvas.len()
        ))
    );

    Ok(())
}

fn handle_remove_rva(value: &str, formatter: &dyn crate::cli::output::Formatter) -> Result<()> {
    let rva: Rva = value.parse()?;
    let mut config = Config::load()?;

    let before = config.hook.rvas.len();
    config.hook.rvas.retain(|r| *r != rva);

    if config.hook.rvas.len() == before {
        anyhow::bail!("RVA {} is not configured", rva);
    }

    // Save validation rejects removing the last RVA.
    config.save().context("failed to save config")?;

    println!(
        "{}",
        formatter.format_message(&format!(
            "Removed {} ({} RVAs saved)",
            rva,
            config.hook.rvas.len()
        ))
    );

    Ok(())
}

fn handle_mode(mode: &str, formatter: &dyn crate::cli::output::Formatter) -> Result<()> {
    let dump_mode = match mode.to_lowercase().as_str() {
        "dump" => true,
        "capture" => false,
        other => anyhow::bail!("unknown mode: {} (expected 'capture' or 'dump')", other),
    };

    let mut config = Config::load()?;
    config.hook.dump_mode = dump_mode;
    config.save().context("failed to save config")?;

    let message = if dump_mode {
        "Switched to dump mode (metadata only, no text capture)"
    } else {
        "Switched to capture mode (text interception)"
    };
    println!("{}", formatter.format_message(message));

    Ok(())
}
