use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error(
        "no Azure credentials found; if you are running tests locally, set the following env vars: {}",
        env_list(.vars)
    )]
    MissingCredentials { vars: Vec<&'static str> },

    #[error("running in CI but ${var} does not name a credentials file")]
    MissingBundlePath { var: &'static str },

    #[error("credentials file {path} is missing {}", .missing.join(", "))]
    IncompleteBundle {
        path: String,
        missing: Vec<&'static str>,
    },

    #[error("refusing to render credential file with empty fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error(transparent)]
    Config(#[from] azcred_config::ConfigError),

    #[error("error rendering credential file: {0}")]
    Render(#[from] serde_json::Error),

    #[error("error writing {path}: {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error removing {path}: {source}")]
    FileDelete {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn env_list(vars: &[&str]) -> String {
    vars.iter().map(|v| format!("${v}")).collect::<Vec<_>>().join(", ")
}
