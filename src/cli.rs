//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::sorter::SORT_TOKENS;

#[derive(Debug, Parser)]
#[command(
    name = "verifica-json",
    version,
    about = "Verifica e lista record da file JSON ordinati per data o descrizione"
)]
pub struct Cli {
    /// File JSON da analizzare.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Criterio di ordinamento: data o descrizione (default: data).
    #[arg(
        long = "ordina",
        short = 'o',
        default_value = "data",
        value_parser = SORT_TOKENS
    )]
    pub ordina: String,

    /// Diagnostic log verbosity on stderr (-v for info, -vv for debug, -q to silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Diagnostic log format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
