//! hexc - hex color code toolkit
//!
//! Inspects, converts, edits and searches `#RGB` / `#RRGGBB` / `#AARRGGBB` codes.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hexc")]
#[command(author, version, about = "Hex color code toolkit")]
#[command(long_about = "
Inspect, convert, edit and search hex color codes.
Colors can be given as codes (#F0D, ff00dd, #80FF00DD) or CSS names (tomato).

Examples:
  hexc info '#F0D'                      # Channels, forms, linear values
  hexc convert ff00dd --to short        # -> #F0D
  hexc set '#112233' --alpha 0x80       # -> #80112233
  hexc find 'background: #1A2B3C;'      # First code in text
  hexc find --file style.css --all      # Every code in a file
  hexc add red blue                     # Linear-space sum
  hexc div white 2                      # Linear-space division
  hexc --json named tomato
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show channels, forms and linear values of a color
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Rewrite a color in another form
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Replace alpha or color channels
    Set(SetArgs),

    /// Search text for color codes
    #[command(visible_alias = "f")]
    Find(FindArgs),

    /// Add two colors in linear space
    Add(PairArgs),

    /// Subtract one color from another in linear space
    Sub(PairArgs),

    /// Multiply a color by a factor in linear space
    Scale(FactorArgs),

    /// Divide a color by a factor in linear space
    Div(FactorArgs),

    /// Look up a named color, or list them all
    #[command(visible_alias = "n")]
    Named(NamedArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Color code or name
    color: String,
}

/// Target form for `convert`.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Form {
    /// 6 or 8 digits
    Long,
    /// 3 digits when every channel collapses
    Short,
    /// Always #AARRGGBB
    Argb,
    /// Fill only (alpha removed)
    Rgb,
    /// Packed 0xAARRGGBB integer
    Packed,
}

#[derive(Args)]
struct ConvertArgs {
    /// Color code or name
    color: String,

    /// Target form
    #[arg(short, long, value_enum, default_value = "long")]
    to: Form,
}

#[derive(Args)]
struct SetArgs {
    /// Color code or name
    color: String,

    /// Alpha byte (decimal or 0x-prefixed hex)
    #[arg(short, long, value_parser = commands::parse_byte)]
    alpha: Option<u8>,

    /// Red byte
    #[arg(short, long, value_parser = commands::parse_byte)]
    red: Option<u8>,

    /// Green byte
    #[arg(short, long, value_parser = commands::parse_byte)]
    green: Option<u8>,

    /// Blue byte
    #[arg(short, long, value_parser = commands::parse_byte)]
    blue: Option<u8>,
}

#[derive(Args)]
struct FindArgs {
    /// Text to search
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Report every code instead of the first
    #[arg(short, long)]
    all: bool,
}

#[derive(Args)]
struct PairArgs {
    /// Left operand (code or name)
    left: String,

    /// Right operand (code or name)
    right: String,
}

#[derive(Args)]
struct FactorArgs {
    /// Color code or name
    color: String,

    /// Coefficient
    #[arg(allow_negative_numbers = true)]
    factor: f32,
}

#[derive(Args)]
struct NamedArgs {
    /// Color name; omit to list the table
    name: Option<String>,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.json),
        Commands::Convert(args) => commands::convert::run(args, cli.json),
        Commands::Set(args) => commands::set::run(args, cli.json),
        Commands::Find(args) => commands::find::run(args, cli.json),
        Commands::Add(args) => commands::math::run_add(args, cli.json),
        Commands::Sub(args) => commands::math::run_sub(args, cli.json),
        Commands::Scale(args) => commands::math::run_scale(args, cli.json),
        Commands::Div(args) => commands::math::run_div(args, cli.json),
        Commands::Named(args) => commands::named::run(args, cli.json),
    }
}
