use clap::Parser;
use std::process;
use waka_tally::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the standings have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print the error chain to stderr and exit
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Waka Tally - Regatta Club Standings");
    println!("===================================");
    println!();
    println!("Tally club ranking points from the .lif race records of a nationals");
    println!("season and produce a ranked standings table.");
    println!();
    println!("USAGE:");
    println!("    waka-tally <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    score       Score a season's race records into ranked standings");
    println!("    scan        Report which race files a season folder would contribute");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Score the 2019 nationals from the archive folder:");
    println!("    waka-tally score --input /data/nationals --year 2019");
    println!();
    println!("    # Score and export the standings as CSV:");
    println!("    waka-tally score --year 2019 --output standings.csv");
    println!();
    println!("    # See which files would count without scoring:");
    println!("    waka-tally scan --year 2019");
    println!();
    println!("For detailed help on any command, use:");
    println!("    waka-tally <COMMAND> --help");
}
