/// Configuration errors raised at startup, never during request handling.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown feature profile: {name}")]
    UnknownProfile { name: String },

    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },
}
