//! Conformance probe for the Ember runtime
//!
//! Replays a scripted sequence of output-bridge calls against the real
//! process stdout, so the integration suite can assert the exact bytes the
//! exported functions emit.

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser;
use ember_runtime::{print_byte, print_float, print_int};

#[derive(Parser)]
#[command(name = "ember-probe")]
#[command(about = "Drives the Ember runtime output bridge")]
struct Args {
    /// Block on stdin after the ops, so flushed bytes can be observed in a
    /// redirected file while the process is still alive
    #[arg(long)]
    wait: bool,

    /// Operation script: OP VALUE pairs, where OP is int, float or byte
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    ops: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.ops.len() % 2 != 0 {
        bail!(
            "ops must come as OP VALUE pairs, got {} arguments",
            args.ops.len()
        );
    }

    for pair in args.ops.chunks(2) {
        let (op, value) = (pair[0].as_str(), pair[1].as_str());
        match op {
            "int" => {
                let x: i32 = value
                    .parse()
                    .with_context(|| format!("invalid int value '{}'", value))?;
                print_int(x);
            }
            "float" => {
                let x: f64 = value
                    .parse()
                    .with_context(|| format!("invalid float value '{}'", value))?;
                print_float(x);
            }
            "byte" => {
                print_byte(parse_byte(value)? as libc::c_char);
            }
            other => bail!("unknown op '{}', expected int, float or byte", other),
        }
    }

    if args.wait {
        // Anything visible in a redirected stdout while we sit here was
        // flushed by the bridge itself, not by process exit.
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to wait on stdin")?;
    }

    Ok(())
}

/// A single character stands for itself; anything longer is a decimal byte value.
fn parse_byte(value: &str) -> Result<u8> {
    let mut bytes = value.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(b), None) => Ok(b),
        _ => value
            .parse()
            .with_context(|| format!("invalid byte value '{}'", value)),
    }
}
