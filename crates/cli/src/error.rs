//! Error taxonomy and exit codes for the alert binary.
//!
//! Responsibilities:
//! - Wrap client and configuration errors with the operation that failed.
//! - Classify every failure into an [`ErrorKind`] and map fatal kinds to exit codes.
//!
//! Does NOT handle:
//! - Emitting log lines (path boundaries in `orchestrator` and `main` do that).
//!
//! Invariants:
//! - Display output of each variant is exactly the message logged for it.
//! - Only `Invocation`, `Configuration` and `Unexpected` kinds terminate the process.

use std::time::Duration;

use splunk_client::ClientError;
use splunk_config::ConfigError;
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Both paths were attempted; per-path failures were logged.
    Success = 0,

    /// Bad invocation or missing mandatory configuration.
    InvalidInvocation = 1,

    /// Malformed payload, invalid URL, session login failure, anything else.
    UnexpectedFailure = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failure categories shared by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Invocation,
    Configuration,
    Transport,
    NotFound,
    Unexpected,
}

impl ErrorKind {
    /// Whether the failure ends the process rather than a single path.
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorKind::Invocation | ErrorKind::Configuration | ErrorKind::Unexpected
        )
    }

    pub const fn exit_code(self) -> ExitCode {
        match self {
            ErrorKind::Invocation | ErrorKind::Configuration => ExitCode::InvalidInvocation,
            ErrorKind::Unexpected => ExitCode::UnexpectedFailure,
            ErrorKind::Transport | ErrorKind::NotFound => ExitCode::Success,
        }
    }
}

/// The remote operation a transport failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateJob,
    FetchResults,
    DispatchSaved,
}

impl Operation {
    /// Phrase used in `Failed to <...>: <status>, <body>`.
    pub const fn failed_label(self) -> &'static str {
        match self {
            Operation::CreateJob => "create AdHoc Search job",
            Operation::FetchResults => "fetch AdHoc Search results",
            Operation::DispatchSaved => "execute Saved Search",
        }
    }

    /// Phrase used in `Unexpected error during <...>: <err>`.
    pub const fn unexpected_label(self) -> &'static str {
        match self {
            Operation::CreateJob => "AdHoc Search execution",
            Operation::FetchResults => "AdHoc Search results fetching",
            Operation::DispatchSaved => "Saved Search execution",
        }
    }
}

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Unsupported execution mode (expected --execute flag)")]
    Invocation,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Splunk answered with an unexpected status; `body` is the raw response text.
    #[error("Failed to {}: {status}, {body}", .operation.failed_label())]
    Api {
        operation: Operation,
        status: u16,
        body: String,
    },

    #[error("Unexpected error during {}: {source}", .operation.unexpected_label())]
    Transport {
        operation: Operation,
        #[source]
        source: ClientError,
    },

    #[error("AdHoc Search results for SID {sid} not ready after {}s", .waited.as_secs())]
    PollTimeout { sid: String, waited: Duration },

    #[error("Saved Search '{report}' not found.")]
    NotFound { report: String },

    /// Session login was rejected or could not be completed.
    #[error("{0}")]
    Session(#[source] ClientError),

    #[error("{0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl AlertError {
    /// Attach `operation` to a client error.
    ///
    /// Status failures of the ad-hoc calls keep the `<status>, <body>` form;
    /// everything on the saved-search path is reported as an unexpected error.
    pub fn from_client(operation: Operation, err: ClientError) -> Self {
        match (operation, err) {
            (
                Operation::CreateJob | Operation::FetchResults,
                ClientError::ApiError {
                    status, message, ..
                },
            ) => AlertError::Api {
                operation,
                status,
                body: message,
            },
            (operation, source) => AlertError::Transport { operation, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AlertError::Invocation => ErrorKind::Invocation,
            AlertError::Config(e) if e.is_missing_required() => ErrorKind::Configuration,
            AlertError::Config(_) => ErrorKind::Unexpected,
            AlertError::Api { .. } | AlertError::Transport { .. } | AlertError::PollTimeout { .. } => {
                ErrorKind::Transport
            }
            AlertError::NotFound { .. } => ErrorKind::NotFound,
            AlertError::Session(_) | AlertError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}
