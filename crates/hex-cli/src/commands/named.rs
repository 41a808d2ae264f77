//! Named color command

use crate::NamedArgs;
use anyhow::{Context, Result};
use hex_color::{HexColor, named};
use serde::Serialize;

#[derive(Serialize)]
struct Entry {
    name: &'static str,
    color: HexColor,
}

pub fn run(args: NamedArgs, json: bool) -> Result<()> {
    if let Some(name) = args.name {
        let color = named::lookup(&name).with_context(|| format!("Unknown color name: {name}"))?;
        return super::print_color(&color, json);
    }

    let entries: Vec<Entry> = named::NAMED_COLORS
        .iter()
        .map(|&(name, argb)| Entry {
            name,
            color: HexColor::from_packed_argb(argb),
        })
        .collect();

    if json {
        return super::print_json(&entries);
    }
    for e in &entries {
        println!("{:<22} {}", e.name, e.color);
    }
    Ok(())
}
