use std::path::PathBuf;

/// Failure to read the listings dataset. Fatal for the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum DataAccessError {
    #[error("could not open dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset '{}' has no header row", .path.display())]
    MissingHeader { path: PathBuf },
}
