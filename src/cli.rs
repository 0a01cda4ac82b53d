//! Command line options shared by the still renderer and the window.

use clap::{Arg, ArgMatches, Command};
use simplog::SimpleLogger;

use crate::core::config::render_config::RenderConfig;
use crate::core::data::complex::Complex;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Builds the argument parser for a binary called `name`.
pub fn command(name: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("width")
                .long("width")
                .value_parser(clap::value_parser!(u32).range(1..))
                .value_name("PIXELS")
                .help("Width of the frame in pixels"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(clap::value_parser!(u32).range(1..))
                .value_name("PIXELS")
                .help("Height of the frame in pixels"),
        )
        .arg(
            Arg::new("center-x")
                .long("center-x")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .value_name("REAL")
                .help("Real part of the view center (default: 0)"),
        )
        .arg(
            Arg::new("center-y")
                .long("center-y")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .value_name("IMAG")
                .help("Imaginary part of the view center (default: 0)"),
        )
        .arg(
            Arg::new("scale")
                .long("scale")
                .value_parser(clap::value_parser!(f64))
                .value_name("UNITS")
                .help("World units spanned by the frame width (default: 1)"),
        )
        .arg(
            Arg::new("min-sample-size")
                .long("min-sample-size")
                .value_parser(clap::value_parser!(u32))
                .value_name("PIXELS")
                .help("Block edge length of the refined pass (default: 1)"),
        )
        .arg(
            Arg::new("max-sample-size")
                .long("max-sample-size")
                .value_parser(clap::value_parser!(u32))
                .value_name("PIXELS")
                .help("Block edge length while the view is moving (default: 20)"),
        )
        .arg(
            Arg::new("max-iterations")
                .long("max-iterations")
                .value_parser(clap::value_parser!(u32))
                .value_name("COUNT")
                .help("Iteration cap of the escape-time evaluator (default: 400)"),
        )
        .arg(
            Arg::new("escape-radius")
                .long("escape-radius")
                .value_parser(clap::value_parser!(f64))
                .value_name("RADIUS")
                .help("Escape radius of the evaluator (default: 2)"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(1)
                .value_name("VERBOSITY_LEVEL")
                .help("Set verbosity level for output (trace, debug, info, warn, error (default))"),
        )
}

pub fn init_logging(matches: &ArgMatches) {
    SimpleLogger::init_prefix_timestamp(
        matches.get_one::<String>("verbosity").map(|s| s.as_str()),
        true,
        false,
    );
}

#[must_use]
pub fn frame_size(matches: &ArgMatches) -> (u32, u32) {
    (
        matches.get_one::<u32>("width").copied().unwrap_or(DEFAULT_WIDTH),
        matches.get_one::<u32>("height").copied().unwrap_or(DEFAULT_HEIGHT),
    )
}

/// Defaults overridden by whatever was given on the command line. The
/// result is not validated.
#[must_use]
pub fn render_config(matches: &ArgMatches) -> RenderConfig {
    let defaults = RenderConfig::default();

    RenderConfig {
        min_sample_size: value_or(matches, "min-sample-size", defaults.min_sample_size),
        max_sample_size: value_or(matches, "max-sample-size", defaults.max_sample_size),
        max_iterations: value_or(matches, "max-iterations", defaults.max_iterations),
        escape_radius: value_or(matches, "escape-radius", defaults.escape_radius),
        initial_center: Complex::new(
            value_or(matches, "center-x", defaults.initial_center.real),
            value_or(matches, "center-y", defaults.initial_center.imag),
        ),
        initial_scale: value_or(matches, "scale", defaults.initial_scale),
        ..defaults
    }
}

fn value_or<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str, default: T) -> T {
    matches.get_one::<T>(id).cloned().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        command("test")
            .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let matches = parse(&[]);

        assert_eq!(render_config(&matches), RenderConfig::default());
        assert_eq!(frame_size(&matches), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn view_arguments_override_defaults() {
        let matches = parse(&[
            "--width", "320", "--height", "200", "--center-x", "-0.75", "--center-y", "0.1",
            "--scale", "2.5",
        ]);

        let config = render_config(&matches);

        assert_eq!(frame_size(&matches), (320, 200));
        assert_eq!(config.initial_center, Complex::new(-0.75, 0.1));
        assert_eq!(config.initial_scale, 2.5);
    }

    #[test]
    fn evaluator_arguments_override_defaults() {
        let matches = parse(&[
            "--max-iterations", "1000", "--escape-radius", "4", "--min-sample-size", "2",
            "--max-sample-size", "16",
        ]);

        let config = render_config(&matches);

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.escape_radius, 4.0);
        assert_eq!(config.min_sample_size, 2);
        assert_eq!(config.max_sample_size, 16);
    }

    #[test]
    fn zero_width_is_rejected_by_the_parser() {
        let result = command("test").try_get_matches_from(["test", "--width", "0"]);

        assert!(result.is_err());
    }
}
