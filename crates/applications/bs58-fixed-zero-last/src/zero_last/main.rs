/*!
*   Clears the last byte of base58-encoded 32-byte public keys and prints the result.
*/

use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use bs58_fixed_zero_last::{Result, zero_last_json, zero_last_opt, zero_last_str};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base58 public keys (read whitespace-separated from STDIN if none are given)
    keys: Vec<String>,

    /// Read one JSON value or `{"arg": ...}` record from STDIN and print the transformed JSON
    #[arg(short, long, conflicts_with_all = ["keys", "none"])]
    json: bool,

    /// Print the result for an absent key
    #[arg(short, long, conflicts_with = "keys")]
    none: bool,
}

fn main() -> ExitCode {
    // Logs go to STDERR so that STDOUT only carries results
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    let args = Args::parse();

    match run(args, io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Stops at the first key that fails to decode, after writing the results before it
fn run(args: Args, mut input: impl Read, out: &mut impl Write) -> Result<()> {
    if args.none {
        writeln!(out, "{}", zero_last_opt(None))?;
        return Ok(());
    }

    if args.json {
        writeln!(out, "{}", zero_last_json(&read_all(&mut input)?)?)?;
        return Ok(());
    }

    let keys = if args.keys.is_empty() {
        read_all(&mut input)?
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    } else {
        args.keys
    };
    debug!(count = keys.len(), "transforming keys");

    for key in &keys {
        writeln!(out, "{}", zero_last_str(key)?)?;
    }
    Ok(())
}

fn read_all(input: &mut impl Read) -> Result<String> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf)
}
