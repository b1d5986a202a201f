//! rex-view
//!
//! Composite a REXPaint `.xp` file onto a console grid and print it.

mod app;
mod config;
mod renderer;

use std::error::Error;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use config::{CliArgs, Config};
use console_core::View;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=debug for more verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    // Load configuration with precedence: CLI > env > file > defaults
    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    log::debug!(
        "Console: {}x{}, output {:?}",
        config.console.columns,
        config.console.rows,
        config.output
    );

    let view = View::load(&args.file)?;
    let screen = app::compose(&config, &view, &args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    renderer::render(&screen, config.output, &config.glyph_sheet(), &mut out)?;
    out.flush()?;

    Ok(())
}
