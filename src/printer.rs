use std::io::Write;

use crate::errors::VerificaError;
use crate::record::Record;

/// Write the report for `records`, sorted by the criterion named `sort_label`.
pub fn display_records<W: Write>(
    out: &mut W,
    records: &[Record],
    sort_label: &str,
) -> Result<(), VerificaError> {
    write_report(out, records, sort_label).map_err(VerificaError::Output)
}

fn write_report<W: Write>(out: &mut W, records: &[Record], sort_label: &str) -> std::io::Result<()> {
    if records.is_empty() {
        writeln!(out, "Nessun record trovato nel file JSON")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "=== RECORD ORDINATI PER {} ===", sort_label.to_uppercase())?;
    writeln!(out, "Totale record: {}", records.len())?;
    writeln!(out)?;

    for (i, record) in records.iter().enumerate() {
        writeln!(out, "--- Record {} ---", i + 1)?;
        write!(out, "{}", record)?;
        writeln!(out)?;
    }

    out.flush()
}
