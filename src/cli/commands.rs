//! Command implementations for the KOF CLI
//!
//! Each command builds its collaborators (registry, tema table, reader or
//! writer) from the arguments, runs, and reports to stdout. Logging goes to
//! stderr so command output can be piped.

use crate::app::models::Location;
use crate::app::services::kof_reader::{KofReader, ParseResult, Source};
use crate::app::services::kof_writer::KofWriter;
use crate::app::services::method_codes::MethodCodeTable;
use crate::app::services::srid_registry::SridRegistry;
use crate::app::services::transform::IdentityTransformer;
use crate::cli::args::{
    Args, CodeTable, CodesArgs, Commands, ConvertArgs, InspectArgs, OutputFormat, ReadArgs,
};
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Main command runner for the KOF CLI
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    match args.command {
        Some(Commands::Inspect(inspect)) => run_inspect(&inspect),
        Some(Commands::Convert(convert)) => run_convert(&convert),
        Some(Commands::Codes(codes)) => run_codes(&codes),
        None => Ok(()),
    }
}

/// Install a stderr tracing subscriber honouring `RUST_LOG`
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kof_codec={}", log_level)));

    // try_init: a subscriber may already be installed when run from tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

fn load_registry(koordsys: Option<&Path>) -> Result<Arc<SridRegistry>> {
    let registry = match koordsys {
        Some(path) => SridRegistry::from_path(path)
            .with_context(|| format!("Failed to load coordinate system table {}", path.display()))?,
        None => SridRegistry::builtin().context("Failed to load builtin coordinate system table")?,
    };
    Ok(Arc::new(registry))
}

/// Parse the input file described by `read`
fn read_locations(read: &ReadArgs, registry: Arc<SridRegistry>) -> Result<ParseResult> {
    read.validate()?;

    let reader = KofReader::new(
        registry,
        Arc::new(MethodCodeTable::standard()),
        Arc::new(IdentityTransformer),
    )
    .with_encoding_config(read.encoding_config())?;

    let result = reader
        .parse_with_stats(Source::Path(&read.input), &read.parse_options())
        .with_context(|| format!("Failed to read {}", read.input.display()))?;

    info!(
        "Read {} locations from {}",
        result.locations.len(),
        read.input.display()
    );
    Ok(result)
}

fn run_inspect(args: &InspectArgs) -> Result<()> {
    let registry = load_registry(args.read.koordsys.as_deref())?;
    let result = read_locations(&args.read, registry)?;

    match args.output_format {
        OutputFormat::Human => print_locations(&result, args.read.srid),
        OutputFormat::Csv => write_locations_csv(&result.locations)?,
    }
    Ok(())
}

fn print_locations(result: &ParseResult, srid: i32) {
    println!(
        "{} {} locations (SRID {})",
        "KOF".bright_green().bold(),
        result.locations.len().to_string().bright_white().bold(),
        srid
    );

    for location in &result.locations {
        let methods: Vec<&str> = location.methods.iter().map(|m| m.as_str()).collect();
        println!(
            "  {}  [{}]",
            location.to_string().bright_white(),
            methods.join(", ").cyan()
        );
    }

    let stats = &result.stats;
    println!(
        "\n{} lines, {} administrative blocks, {} coordinate blocks, {} skipped",
        stats.lines_read, stats.admin_blocks, stats.coordinate_blocks, stats.skipped_lines
    );
    if stats.unknown_tema_codes > 0 {
        println!(
            "{} coordinate blocks with unknown tema codes",
            stats.unknown_tema_codes.to_string().bright_yellow().bold()
        );
    }
}

fn write_locations_csv(locations: &[Location]) -> Result<()> {
    fn cell(value: Option<f64>) -> String {
        value.map(|v| format!("{:.3}", v)).unwrap_or_default()
    }

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["name", "methods", "easting", "northing", "z", "srid"])?;

    for location in locations {
        let methods: Vec<&str> = location.methods.iter().map(|m| m.as_str()).collect();
        writer.write_record([
            location.name.clone(),
            methods.join("|"),
            cell(location.point_easting),
            cell(location.point_northing),
            cell(location.point_z),
            location.srid.map(|s| s.to_string()).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn run_convert(args: &ConvertArgs) -> Result<()> {
    args.validate()?;

    let registry = load_registry(args.read.koordsys.as_deref())?;
    let result = read_locations(&args.read, Arc::clone(&registry))?;

    let writer = KofWriter::new(
        registry,
        Arc::new(MethodCodeTable::standard()),
        Arc::new(IdentityTransformer),
    );
    let kof = writer
        .write_kof(
            &args.project_id,
            &args.project_name(),
            &result.locations,
            args.read.srid,
            args.swap_output,
        )
        .context("Failed to write KOF output")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, kof.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} locations to {}",
                "Wrote".bright_green().bold(),
                result.locations.len(),
                path.display()
            );
        }
        None => print!("{}", kof),
    }
    Ok(())
}

fn run_codes(args: &CodesArgs) -> Result<()> {
    if matches!(args.table, CodeTable::All | CodeTable::Srid) {
        let registry = load_registry(args.koordsys.as_deref())?;
        println!("{}", "Coordinate systems (KOORDSYS -> SRID)".bright_green().bold());
        for system in registry.systems() {
            println!(
                "  {:>5}  {:>6}  {:<16} {}",
                system.code.to_string().bright_yellow(),
                system.srid,
                system.name,
                system.description
            );
        }
    }

    if matches!(args.table, CodeTable::All | CodeTable::Tema) {
        let methods = MethodCodeTable::standard();
        println!("{}", "Tema codes".bright_green().bold());
        for (code, method) in methods.entries() {
            let canonical = methods.method_to_tema_code(method) == Some(code);
            println!(
                "  {:<6} {:<5}{}",
                code.bright_yellow(),
                method,
                if canonical { "" } else { " (read only)" }
            );
        }
    }
    Ok(())
}
