use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("No OSPF Router ID found in {0}")]
    MissingRouterId(String),

    #[error("No networks found in {0}")]
    NoNetworks(String),

    #[error("Invalid {key} value {value:?} on line {line}")]
    InvalidValue {
        key: String,
        value: String,
        line: usize,
    },

    #[error("File {path} not found")]
    FileNotFound { path: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
