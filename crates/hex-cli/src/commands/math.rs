//! Linear-space arithmetic commands

use crate::{FactorArgs, PairArgs};
use anyhow::{Context, Result};
use tracing::debug;

pub fn run_add(args: PairArgs, json: bool) -> Result<()> {
    let left = super::parse_color(&args.left)?;
    let right = super::parse_color(&args.right)?;
    let out = left + right;
    debug!(%left, %right, %out, "add");
    super::print_color(&out, json)
}

pub fn run_sub(args: PairArgs, json: bool) -> Result<()> {
    let left = super::parse_color(&args.left)?;
    let right = super::parse_color(&args.right)?;
    let out = left - right;
    debug!(%left, %right, %out, "sub");
    super::print_color(&out, json)
}

pub fn run_scale(args: FactorArgs, json: bool) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    let out = color.scale(args.factor);
    debug!(%color, factor = args.factor, %out, "scale");
    super::print_color(&out, json)
}

pub fn run_div(args: FactorArgs, json: bool) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    let out = color
        .divide(args.factor)
        .with_context(|| format!("Cannot divide {color} by {}", args.factor))?;
    debug!(%color, factor = args.factor, %out, "div");
    super::print_color(&out, json)
}
