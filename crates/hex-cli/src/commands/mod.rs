//! CLI command implementations

pub mod convert;
pub mod find;
pub mod info;
pub mod math;
pub mod named;
pub mod set;

use anyhow::{Context, Result, bail};
use hex_color::{HexColor, named as names};
use serde::Serialize;
use tracing::debug;

/// Resolves a command-line color: a hex code first, then a color name.
pub fn parse_color(input: &str) -> Result<HexColor> {
    match HexColor::parse(input) {
        Ok(color) => Ok(color),
        Err(err) => {
            debug!(input, %err, "not a hex code, trying color names");
            names::lookup(input).with_context(|| format!("'{input}' is neither a hex code nor a color name: {err}"))
        }
    }
}

/// Parses a byte given in decimal or with a `0x` prefix.
pub fn parse_byte(s: &str) -> Result<u8> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    match parsed {
        Ok(v) => Ok(v),
        Err(_) => bail!("'{s}' is not a byte (0-255 or 0x00-0xFF)"),
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{text}");
    Ok(())
}

/// Prints a single resulting color.
pub fn print_color(color: &HexColor, json: bool) -> Result<()> {
    if json {
        print_json(color)
    } else {
        println!("{color}");
        Ok(())
    }
}
