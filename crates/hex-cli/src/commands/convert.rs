//! Form conversion command

use crate::{ConvertArgs, Form};
use anyhow::Result;
use hex_color::{CodeStyle, HexColor};
#[allow(unused_imports)]
use tracing::{debug, trace};

pub fn run(args: ConvertArgs, json: bool) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    let out = convert(&color, args.to);
    debug!(input = %color, form = ?args.to, output = %out, "convert");

    if json {
        super::print_json(&out)
    } else {
        println!("{out}");
        Ok(())
    }
}

fn convert(color: &HexColor, to: Form) -> String {
    match to {
        Form::Long => color.to_long_code().to_string(),
        Form::Short => color.to_short_code().to_string(),
        Form::Argb => color.to_code_string(CodeStyle::Argb),
        Form::Rgb => color.to_code_string(CodeStyle::Rgb),
        Form::Packed => format!("0x{:08X}", color.to_packed_argb()),
    }
}
