//! Subcommand handlers for the report and config actions.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{default_path, Settings, DEFAULT_CONFIG};
use crate::report::{Report, ReportError, Sections};

/// Build the report and write the requested sections to stdout.
pub fn run_report(settings: &Settings, sections: Sections) -> Result<(), ReportError> {
    let report = Report::build(settings)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write(&mut out, sections)?;
    out.flush()?;
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let stdout = std::io::stdout();
            write_settings(&mut stdout.lock(), settings, &config_path)?;
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

/// Print resolved settings and whether the config file exists.
fn write_settings<W: Write>(
    out: &mut W,
    settings: &Settings,
    config_path: &Path,
) -> std::io::Result<()> {
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Image size: {}x{}", settings.image_width, settings.image_height)?;
    writeln!(out, "  ASCII size: {}x{}", settings.ascii_width, settings.ascii_height)?;
    writeln!(out, "  Charset: {}", settings.charset.name())?;
    writeln!(out, "  Threshold: {}", settings.threshold)?;
    writeln!(out, "  Gamma: {}", settings.gamma)?;
    writeln!(out, "  Histogram bins: {}", settings.bins)?;
    writeln!(out, "  Bar width: {}", settings.bar_width)?;
    writeln!(out, "  Only: {}", settings.only.as_deref().unwrap_or("all"))?;
    writeln!(out)?;

    let state = if config_path.exists() { "exists" } else { "not found" };
    writeln!(out, "Config file: {} ({})", config_path.display(), state)
}

/// Write the default config file, refusing to overwrite an existing one.
pub fn init_config(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if config_path.exists() {
        return Err(format!(
            "Config file already exists: {}\nUse 'intensity-lab config show' to view current settings.",
            config_path.display()
        )
        .into());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}
