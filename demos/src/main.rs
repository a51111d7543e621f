// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;
use jsontree::{parse_with_config, ParserConfig, DEFAULT_MAX_DEPTH};

/// Parses a JSON file and prints the resulting value tree.
#[derive(ClapParser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file to parse
    path: PathBuf,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject anything but whitespace after the top-level value
    #[arg(long)]
    strict: bool,

    /// Only report success or failure, don't print the tree
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut data = Vec::new();
    let mut f = match File::open(&args.path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Error: Unable to open file '{}': {}",
                args.path.display(),
                e
            );
            process::exit(1);
        }
    };
    if let Err(e) = f.read_to_end(&mut data) {
        eprintln!(
            "Error: Unable to read file '{}': {}",
            args.path.display(),
            e
        );
        process::exit(1);
    }
    log::info!("Read {} bytes from {}", data.len(), args.path.display());

    let mut config = ParserConfig::new().with_max_depth(args.max_depth);
    if args.strict {
        config = config.with_reject_trailing_content(true);
    }

    match parse_with_config(&data, config) {
        Ok(value) => {
            if !args.quiet {
                println!("{:#?}", value);
            }
        }
        Err(e) => {
            eprintln!("Error: JSON parsing failed: {}", e);
            process::exit(1);
        }
    }
}
