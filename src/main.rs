use clap::Parser;

use intensity_lab::cli::{handle_config_action, run_report, Args, Command};
use intensity_lab::config::{Config, Settings};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` takes precedence; `--verbose` lowers the default to debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;
    let mut settings = Settings::default();
    settings.apply_config(&config)?;
    args.apply(&mut settings);
    log::debug!("Resolved settings: {:?}", settings);

    match args.sections() {
        Some(sections) => run_report(&settings, sections)?,
        None => {
            if let Some(Command::Config { action }) = args.command {
                handle_config_action(action, args.config.as_deref(), &settings)?;
            }
        }
    }
    Ok(())
}
