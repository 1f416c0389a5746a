use thiserror::Error;

/// Unified error type for make-utils operations
#[derive(Error, Debug)]
pub enum MakeUtilsError {
    #[error("Command `{command}` failed with exit code {code}")]
    ProcessFailed {
        command: String,
        code: i32,
        /// Captured stdout+stderr, present only for output-capturing calls
        output: Option<String>,
    },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to get Blender git branch")]
    BranchLookup,

    #[error("Version header is missing {0}")]
    MissingVersionKey(String),

    #[error("Version header value for {key} is not an integer: '{value}'")]
    InvalidVersionValue { key: String, value: String },

    #[error("Refusing to remove symbolic link {}", .0.display())]
    SymlinkRoot(std::path::PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid semantic version: {0}")]
    Semver(#[from] semver::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in make-utils
pub type Result<T> = std::result::Result<T, MakeUtilsError>;

impl MakeUtilsError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MakeUtilsError::Config(msg.into())
    }

    /// Exit code the driver terminates with when this error reaches it.
    ///
    /// A failed child process propagates its own exit code, everything else
    /// exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            MakeUtilsError::ProcessFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
