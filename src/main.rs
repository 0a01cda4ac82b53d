use std::path::PathBuf;
use std::error::Error;
use std::process::exit;

use clap::{Arg, ArgMatches};
use log::info;

use mandelbrot_explorer::cli;
use mandelbrot_explorer::{PpmFilePresenter, RenderConfig, StillRenderController};

const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

/// Renders one still frame to a PPM file. Prints the error chain and exits
/// non-zero on failure.
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
    let matches = get_matches();
    cli::init_logging(&matches);

    info!(
        "'{}' version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let (width, height) = cli::frame_size(&matches);
    let config = still_config(&matches);
    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = StillRenderController::new(PpmFilePresenter::new());
    let duration = controller.render(&config, width, height)?;
    info!("rendered in {:?}", duration);
    controller.write(&output)?;

    Ok(())
}

/// A still frame is a single pass, rendered at `--sample-size` when given.
fn still_config(matches: &ArgMatches) -> RenderConfig {
    let config = cli::render_config(matches);

    match matches.get_one::<u32>("sample-size") {
        Some(&size) => RenderConfig {
            min_sample_size: size,
            max_sample_size: config.max_sample_size.max(size),
            ..config
        },
        None => config,
    }
}

fn get_matches() -> ArgMatches {
    cli::command(env!("CARGO_PKG_NAME"))
        .arg(
            Arg::new("sample-size")
                .long("sample-size")
                .value_parser(clap::value_parser!(u32))
                .value_name("PIXELS")
                .help("Block edge length of the still frame (default: 1)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("FILE")
                .help("Where to write the PPM image (default: output/mandelbrot.ppm)"),
        )
        .get_matches()
}
