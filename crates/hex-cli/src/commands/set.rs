//! Channel editing command

use crate::SetArgs;
use anyhow::{Result, bail};
use hex_color::{Channel, HexColor};
use tracing::debug;

pub fn run(args: SetArgs, json: bool) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    let edits = [
        (Channel::R, args.red),
        (Channel::G, args.green),
        (Channel::B, args.blue),
    ];

    if args.alpha.is_none() && edits.iter().all(|(_, v)| v.is_none()) {
        bail!("Nothing to set: pass at least one of --alpha, --red, --green, --blue");
    }

    let out = apply(color, args.alpha, &edits);
    debug!(input = %color, output = %out, "set");
    super::print_color(&out, json)
}

fn apply(color: HexColor, alpha: Option<u8>, edits: &[(Channel, Option<u8>)]) -> HexColor {
    let mut out = edits
        .iter()
        .filter_map(|&(which, value)| value.map(|v| (which, v)))
        .fold(color, |c, (which, v)| c.with_channel(which, v));

    if let Some(a) = alpha {
        out.set_alpha(a);
    }
    out
}
