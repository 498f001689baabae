//! Assembles a Skylark through the director and prints it.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use car_builder::{
    render_product, BuildResult, Director, OutputFormat, RenderOptions, SkylarkBuilder,
};

/// Build a car with the Builder pattern and print it
#[derive(Parser, Debug)]
#[command(name = "car-builder")]
#[command(version, about, long_about = None)]
struct Args {
    /// Fail if any part of the car is unset instead of printing `None`
    #[arg(long)]
    strict: bool,

    /// Output representation
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Run the construction this many times on the same director
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    builds: u32,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Args {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            strict: self.strict,
            format: self.format,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "car_builder=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => colored::control::unset_override(),
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}

fn run(args: &Args) -> BuildResult<()> {
    let options = args.render_options();
    let mut builder = SkylarkBuilder::new();
    let mut director = Director::new(&mut builder);

    for build in 1..=args.builds {
        tracing::debug!(build, "starting construction");
        director.construct_product()?;
        println!("{}", render_product(director.get_product(), &options)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    apply_color(args.color);
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
