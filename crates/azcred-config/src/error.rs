use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading credentials file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing credentials file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
