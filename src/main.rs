// bemkit - BEM design system component gallery
//
// Without a subcommand this opens the interactive terminal gallery. With one,
// it runs headless (resolve a class string, render a component, manage the
// config file) and prints to stdout.

use anyhow::Result;
use bemkit::cli::{Cli, Commands};
use bemkit::config::Config;
use bemkit::logging::{self, LogBuffer, LogOutput};
use bemkit::markup::html;
use bemkit::{cli, showcase, tui};
use clap::Parser;
use tracing::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = match Config::from_env() {
        Ok(config) => config,
        // A broken file must not block the command that repairs it
        Err(e) if matches!(args.command, Some(Commands::Config { reset: true, .. })) => {
            eprintln!("Warning: {e:#}");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // The gallery owns the terminal, so its logs go to the in-memory buffer
    let interactive = args.command.is_none() && config.enable_tui;
    let log_buffer = LogBuffer::new();
    let output = if interactive {
        LogOutput::Buffer
    } else {
        LogOutput::Stderr
    };
    let _file_guard = logging::init(&config.logging, output, &log_buffer)?;

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    match args.command {
        Some(command) => cli::run(command, &config),
        None if !config.enable_tui => {
            println!("{}", html::to_html(&showcase::page(&config.gallery)));
            Ok(())
        }
        None => {
            info!(
                stylesheet = config.stylesheet.name(),
                "starting component gallery"
            );
            let result = tui::run(&config, log_buffer);
            info!("component gallery closed");
            result
        }
    }
}
