//! Code search command

use crate::FindArgs;
use anyhow::{Context, Result, bail};
use hex_color::HexColor;
use tracing::info;

pub fn run(args: FindArgs, json: bool) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?,
        (None, None) => bail!("Pass the text to search or --file PATH"),
    };

    let found = search(&text, args.all)?;
    info!(count = found.len(), all = args.all, "find");

    if json {
        return super::print_json(&found);
    }
    if found.is_empty() {
        bail!("No color code found");
    }
    for color in &found {
        println!("{color}");
    }
    Ok(())
}

/// Codes in `text`: all of them, or only the first.
///
/// Goes through `find_all` so a transparent black code is reported instead
/// of being mistaken for the "not found" value of `HexColor::find`.
fn search(text: &str, all: bool) -> Result<Vec<HexColor>> {
    let found = HexColor::find_all(text)?;
    Ok(if all { found } else { found.into_iter().take(1).collect() })
}
