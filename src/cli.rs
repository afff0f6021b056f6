use clap::{Parser, Subcommand};
use log::debug;

use crate::demo;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Divide two integers, failing on division by zero
    Divide {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },
    /// Look up a file descriptor
    Descriptor {
        /// Pretend the descriptor does not exist
        #[arg(long)]
        missing: bool,
    },
    /// Run every operation of `Optional` and print the results
    Tour,
}

/// Run the demo CLI
///
/// This CLI provides the following subcommands:
///  - `divide`: safe division with an explicit failure message
///  - `descriptor`: branch on a lookup that may come up empty
///  - `tour`: walk through all operations
pub fn cli() {
    match cli_inner() {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn cli_inner() -> Result<(), String> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Divide { a, b } => {
            debug!("dividing {a} by {b}");
            let q = demo::divide(*a, *b).map_err(|e| e.to_string())?;
            println!("{q}");
        }
        Command::Descriptor { missing } => {
            println!("{}", demo::describe_descriptor(!missing));
        }
        Command::Tour => {
            for line in demo::tour() {
                println!("{line}");
            }
        }
    }
    Ok(())
}
