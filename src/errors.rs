use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure that ends a run. All of them are fatal.
#[derive(Debug, Error)]
pub enum VerificaError {
    #[error("Errore: File '{}' non trovato", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Errore nel parsing JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Errore nella lettura del file: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Errore nella lettura del file: JSON deve contenere un array di record o un oggetto")]
    UnsupportedJsonRoot,

    #[error("Criterio di ordinamento non valido: {0}\nUsa 'data', 'date', 'descrizione' o 'description'")]
    InvalidSortKey(String),

    #[error("Errore nella scrittura dell'output: {0}")]
    Output(#[source] io::Error),
}

impl VerificaError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
