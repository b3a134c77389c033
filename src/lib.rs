//! List the records of a JSON file, ordered by an inferred date or description.
//!
//! The pipeline is load, infer fields, sort, print:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let mut out = std::io::stdout().lock();
//! verifica_json::run(Path::new("eventi.json"), "data", &mut out)?;
//! # Ok::<(), verifica_json::VerificaError>(())
//! ```

pub mod cli;
pub mod date;
pub mod errors;
pub mod fields;
pub mod loader;
pub mod logging;
pub mod printer;
pub mod record;
pub mod sorter;

use std::io::Write;
use std::path::Path;

pub use errors::VerificaError;
pub use record::Record;
pub use sorter::SortKey;

/// Load `file`, sort it by the criterion named `sort_by` and write the report to `out`.
///
/// Returns the number of records printed.
pub fn run<W: Write>(file: &Path, sort_by: &str, out: &mut W) -> Result<usize, VerificaError> {
    let records = loader::load_records(file)?;
    let sorted = sorter::sort_records(records, sort_by)?;
    printer::display_records(out, &sorted, sort_by)?;

    tracing::info!(records = sorted.len(), sort_by, "report written");
    Ok(sorted.len())
}
