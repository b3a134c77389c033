use std::io::{self, IsTerminal};

use clap::error::ErrorKind;
use clap::Parser;

use verifica_json::cli::{Cli, LogFormatArg};
use verifica_json::logging::{init_logging, LogConfig, LogFormat};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(res) => res,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                print!("{}", err);
                std::process::exit(1);
            }
        },
    };

    if let Err(err) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {}", err);
    }

    let result = {
        let mut out = io::stdout().lock();
        verifica_json::run(&cli.file, &cli.ordina, &mut out)
    };

    if let Err(err) = result {
        println!("{}", err);
        std::process::exit(err.exit_code());
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
    }
}
