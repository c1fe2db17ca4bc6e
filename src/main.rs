use clap::Parser;
use kof_codec::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("kof - KOF survey point file tool");
    println!("================================");
    println!();
    println!("USAGE:");
    println!("    kof <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Parse a KOF file and list its locations");
    println!("    convert     Parse a KOF file and write it out again");
    println!("    codes       List coordinate system and tema codes");
    println!();
    println!("EXAMPLES:");
    println!("    # List locations, returning coordinates in EUREF89 UTM33:");
    println!("    kof inspect boreholes.kof --srid 25833 --file-srid 25833");
    println!();
    println!("    # Rewrite a northing-first file as easting-first:");
    println!("    kof convert field.kof --srid 25832 -o normalised.kof");
    println!();
    println!("For detailed help on any command, use:");
    println!("    kof <COMMAND> --help");
}
