use std::path::PathBuf;

/// Errors raised at the fallible edges of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex color '{0}', expected #RRGGBB")]
    InvalidHex(String),

    #[error("channel value {0} is outside the raw draw range 0..255")]
    ChannelOutOfRange(u8),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to start preview server: {0}")]
    Bind(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid response header")]
    Header,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
