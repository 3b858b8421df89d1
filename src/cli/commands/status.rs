use anyhow::Result;

use crate::cli::output::{StatusInfo, get_formatter};
use crate::models::{Config, OutputFormat};

pub async fn handle_status(format: OutputFormat, _verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let formatter = get_formatter(format);

    let config_path = Config::config_path();
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());

    let status = StatusInfo {
        config_path: config_path.map(|p| p.display().to_string()),
        config_exists,
        rvas: config.hook.rvas.iter().map(ToString::to_string).collect(),
        dump_mode: config.hook.dump_mode,
        dedup: config.ingest.dedup,
        default_format: config.output.default_format.to_string(),
    };

    print!("{}", formatter.format_status(&status));

    if !config_exists {
        eprintln!();
        eprintln!("Hint: no config saved yet; defaults shown. Save one with: textsift config init");
    }

    Ok(())
}
