use std::error::Error;
use std::process::exit;

use log::info;

use mandelbrot_explorer::cli;
use mandelbrot_explorer::{PixelsPresenterFactory, RunGuiCommand};

/// Opens the interactive explorer. W/A/S/D pan, Q/E zoom, Escape quits.
fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("caused by: {}", cause);
            source = cause.source();
        }
        exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = cli::command("gui").get_matches();
    cli::init_logging(&matches);

    let (width, height) = cli::frame_size(&matches);
    let config = cli::render_config(&matches);
    config.validate()?;

    info!(
        "'{}' version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());
    command.execute(&config, width, height)?;

    Ok(())
}
