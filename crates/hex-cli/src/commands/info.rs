//! Color info command

use crate::InfoArgs;
use anyhow::Result;
use hex_color::{CodeStyle, HexColor, named};
use serde::Serialize;

/// Everything `info` reports about a color.
#[derive(Serialize)]
struct ColorReport {
    code: String,
    long: String,
    short: String,
    argb: String,
    packed: String,
    a: u8,
    r: u8,
    g: u8,
    b: u8,
    linear: [f32; 4],
    name: Option<&'static str>,
}

impl ColorReport {
    fn new(color: &HexColor) -> Self {
        let c = color.argb();
        Self {
            code: color.to_string(),
            long: color.to_long_code().to_string(),
            short: color.to_code_string(CodeStyle::ShortHex),
            argb: color.to_code_string(CodeStyle::Argb),
            packed: format!("0x{:08X}", c.to_packed()),
            a: c.a,
            r: c.r,
            g: c.g,
            b: c.b,
            linear: color.channel_values(),
            name: named::name_of(color),
        }
    }
}

pub fn run(args: InfoArgs, json: bool) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    let report = ColorReport::new(&color);

    if json {
        return super::print_json(&report);
    }

    println!("Code:    {}", report.code);
    println!("Long:    {}", report.long);
    println!("Short:   {}", report.short);
    println!("ARGB:    {}", report.argb);
    println!("Packed:  {}", report.packed);
    println!("Bytes:   A={} R={} G={} B={}", report.a, report.r, report.g, report.b);
    let [la, lr, lg, lb] = report.linear;
    println!("Linear:  A={la:.4} R={lr:.4} G={lg:.4} B={lb:.4}");
    if let Some(name) = report.name {
        println!("Name:    {name}");
    }

    Ok(())
}
