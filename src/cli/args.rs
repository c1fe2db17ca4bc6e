//! Command-line argument definitions for the KOF tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{EncodingConfig, ParseOptions};
use crate::constants::{DEFAULT_FALLBACK_ENCODING, DEFAULT_MIN_CONFIDENCE};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the KOF reader/writer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kof",
    version,
    about = "Inspect and convert KOF survey and geotechnical point files",
    long_about = "Reads KOF fixed-column files into survey locations, resolving the file's \
                  coordinate system and axis order, and writes them back out as KOF. \
                  Reprojection between different SRIDs is not available from the command line."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress output except errors"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a KOF file and list its locations
    Inspect(InspectArgs),
    /// Parse a KOF file and write it out again
    Convert(ConvertArgs),
    /// List coordinate system and tema codes
    Codes(CodesArgs),
}

/// Options shared by every command that reads a KOF file
#[derive(Debug, Clone, ClapArgs)]
pub struct ReadArgs {
    /// KOF file to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// SRID the locations are returned in
    #[arg(
        short = 's',
        long = "srid",
        value_name = "SRID",
        default_value_t = 25832,
        help = "SRID the locations are expressed in"
    )]
    pub srid: i32,

    /// SRID of the file contents, overriding the file's KOORDSYS code
    #[arg(
        long = "file-srid",
        value_name = "SRID",
        help = "Declare the SRID of the file, ignoring its coordinate system code"
    )]
    pub file_srid: Option<i32>,

    /// Swap easting and northing columns on read
    #[arg(long = "swap-input", help = "Swap easting and northing when reading")]
    pub swap_input: bool,

    /// Coordinate system table replacing the builtin one
    #[arg(
        long = "koordsys",
        value_name = "FILE",
        help = "Semicolon-separated coordinate system table (name;description;code;srid)"
    )]
    pub koordsys: Option<PathBuf>,

    /// Encoding used when the character set cannot be detected
    #[arg(
        long = "fallback-encoding",
        value_name = "LABEL",
        default_value = DEFAULT_FALLBACK_ENCODING,
        help = "Encoding used when detection is inconclusive"
    )]
    pub fallback_encoding: String,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub read: ReadArgs,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the location listing"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub read: ReadArgs,

    /// Output file; stdout when omitted
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output KOF file (defaults to stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Write northing in the first coordinate column
    #[arg(long = "swap-output", help = "Write northing first")]
    pub swap_output: bool,

    /// Project identifier for the header
    #[arg(long = "project-id", value_name = "ID", default_value = "")]
    pub project_id: String,

    /// Project name for the header and administrative block
    ///
    /// Defaults to the input file stem.
    #[arg(long = "project-name", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Overwrite an existing output file
    #[arg(long = "force", help = "Overwrite an existing output file")]
    pub force_overwrite: bool,
}

/// Arguments for the codes command
#[derive(Debug, Clone, Parser)]
pub struct CodesArgs {
    /// Which table to list
    #[arg(value_enum, default_value = "all")]
    pub table: CodeTable,

    /// Coordinate system table replacing the builtin one
    #[arg(long = "koordsys", value_name = "FILE")]
    pub koordsys: Option<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// CSV for data analysis
    Csv,
}

/// Code tables the codes command can list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodeTable {
    All,
    /// SOSI coordinate system codes
    Srid,
    /// Tema codes
    Tema,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ReadArgs {
    /// Validate the read arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if let Some(koordsys) = &self.koordsys
            && !koordsys.is_file()
        {
            return Err(Error::configuration(format!(
                "Coordinate system table does not exist: {}",
                koordsys.display()
            )));
        }

        self.encoding_config().validate()
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new(self.srid)
            .with_file_srid(self.file_srid)
            .with_swap_easting_northing(self.swap_input)
    }

    pub fn encoding_config(&self) -> EncodingConfig {
        EncodingConfig {
            fallback_encoding: self.fallback_encoding.clone(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl ConvertArgs {
    /// Validate the convert arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.read.validate()?;

        if let Some(output) = &self.output {
            if output == &self.read.input {
                return Err(Error::configuration(
                    "Output file must differ from the input file",
                ));
            }
            if output.exists() && !self.force_overwrite {
                return Err(Error::configuration(format!(
                    "Output file already exists: {} (use --force to overwrite)",
                    output.display()
                )));
            }
        }

        Ok(())
    }

    /// Project name for the export, falling back to the input file stem
    pub fn project_name(&self) -> String {
        self.project_name.clone().unwrap_or_else(|| {
            file_stem(&self.read.input)
        })
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
