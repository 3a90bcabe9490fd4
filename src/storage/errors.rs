use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Could not open seed file '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error
    },
    #[error("Could not read seed file '{path}': {source}")]
    Read {
        path: String,
        source: csv::Error
    }
}
